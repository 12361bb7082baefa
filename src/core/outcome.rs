use crate::handlers::handler_kind::HandlerKind;

/// Terminal state of a single traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A handler matched the label and stopped the traversal
    Handled(HandlerKind),
    /// The request reached the end of the chain without a match
    Unhandled,
}

impl Outcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, Outcome::Handled(_))
    }

    pub fn is_unhandled(&self) -> bool {
        matches!(self, Outcome::Unhandled)
    }

    /// The handler that processed the request, if any
    pub fn handled_by(&self) -> Option<HandlerKind> {
        match self {
            Outcome::Handled(kind) => Some(*kind),
            Outcome::Unhandled => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handled_reports_its_handler() {
        let outcome = Outcome::Handled(HandlerKind::B);
        assert!(outcome.is_handled());
        assert!(!outcome.is_unhandled());
        assert_eq!(outcome.handled_by(), Some(HandlerKind::B));
    }

    #[test]
    fn unhandled_has_no_handler() {
        assert!(!Outcome::Unhandled.is_handled());
        assert!(Outcome::Unhandled.is_unhandled());
        assert_eq!(Outcome::Unhandled.handled_by(), None);
    }
}
