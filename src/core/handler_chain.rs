use std::io::Write;

use tracing::debug;

use crate::core::chain_error::ChainError;
use crate::core::outcome::Outcome;
use crate::core::request::Request;
use crate::core::unmatched_policy::UnmatchedPolicy;
use crate::handlers::handler::Handler;
use crate::handlers::handler_kind::HandlerKind;

/// Main HandlerChain orchestrator
///
/// Owns a linked sequence of handlers and dispatches requests to its head.
/// The topology is fixed once [`ChainBuilder::build`] returns; every request
/// traverses from the head independently of the ones before it.
///
/// # Handler Order
///
/// Handlers are linked in the order they are added (FIFO): the first handler
/// added is the head and sees every request first.
///
/// # Unmatched Requests
///
/// * **Silent**: the request is dropped with no error (default)
/// * **Strict**: dispatch returns [`ChainError::Unhandled`]
///
/// # Example
///
/// ```ignore
/// use handler_chain::{HandlerChain, HandlerKind};
///
/// let chain = HandlerChain::builder()
///     .handler(HandlerKind::A)    // Head
///     .handler(HandlerKind::B)
///     .handler(HandlerKind::C)    // Tail
///     .build();
///
/// let mut stdout = std::io::stdout().lock();
/// chain.dispatch(&"B".into(), &mut stdout)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct HandlerChain {
    head: Option<Handler>,
    unmatched: UnmatchedPolicy,
}

impl HandlerChain {
    /// Start building a chain
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    /// The fixed demonstration chain: A → B → C
    pub fn demo() -> Self {
        HandlerKind::ALL
            .iter()
            .fold(Self::builder(), |builder, kind| builder.handler(*kind))
            .build()
    }

    /// Set how requests that reach the end of the chain are reported
    pub fn with_unmatched_policy(mut self, policy: UnmatchedPolicy) -> Self {
        self.unmatched = policy;
        self
    }

    pub fn unmatched_policy(&self) -> UnmatchedPolicy {
        self.unmatched
    }

    pub fn head(&self) -> Option<&Handler> {
        self.head.as_ref()
    }

    /// Handler kinds from head to tail
    pub fn kinds(&self) -> Vec<HandlerKind> {
        self.head
            .as_ref()
            .map(|head| head.kinds().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.head.as_ref().map_or(0, |head| head.kinds().count())
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Dispatch one request through the chain, starting at the head
    ///
    /// Handler output is written to `out` as the traversal proceeds, so a
    /// strict-mode error still leaves the markers of every visited handler.
    ///
    /// # Errors
    ///
    /// * [`ChainError::Output`] if `out` rejects a write
    /// * [`ChainError::Unhandled`] if nothing matched under [`UnmatchedPolicy::Strict`]
    pub fn dispatch<W: Write + ?Sized>(
        &self,
        request: &Request,
        out: &mut W,
    ) -> Result<Outcome, ChainError> {
        let outcome = match &self.head {
            Some(head) => head.handle(request, out)?,
            None => Outcome::Unhandled,
        };

        if outcome.is_unhandled() {
            debug!(request = %request, policy = ?self.unmatched, "request reached end of chain");
            if self.unmatched == UnmatchedPolicy::Strict {
                return Err(ChainError::Unhandled {
                    request: request.label().to_string(),
                });
            }
        }

        Ok(outcome)
    }

    /// Dispatch each request in order, collecting the outcomes
    ///
    /// Stops at the first error.
    pub fn dispatch_all<I, R, W>(&self, requests: I, out: &mut W) -> Result<Vec<Outcome>, ChainError>
    where
        I: IntoIterator<Item = R>,
        R: Into<Request>,
        W: Write + ?Sized,
    {
        requests
            .into_iter()
            .map(|request| self.dispatch(&request.into(), out))
            .collect()
    }
}

/// Fluent builder that links handlers into a [`HandlerChain`]
///
/// Linking is the only time successors are set; the built chain is never
/// relinked.
#[derive(Debug, Clone, Default)]
pub struct ChainBuilder {
    kinds: Vec<HandlerKind>,
    unmatched: UnmatchedPolicy,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler after the ones already added
    pub fn handler(mut self, kind: HandlerKind) -> Self {
        self.kinds.push(kind);
        self
    }

    /// `&mut` builder form of [`handler`](Self::handler), for building in a loop
    pub fn add_handler(&mut self, kind: HandlerKind) -> &mut Self {
        self.kinds.push(kind);
        self
    }

    pub fn with_unmatched_policy(mut self, policy: UnmatchedPolicy) -> Self {
        self.unmatched = policy;
        self
    }

    /// Link the handlers, tail first, and return the finished chain
    pub fn build(self) -> HandlerChain {
        let head = self.kinds.iter().rev().fold(None, |next, kind| {
            let mut handler = Handler::new(*kind);
            handler.set_next(next);
            Some(handler)
        });

        debug!(handlers = ?self.kinds, policy = ?self.unmatched, "handler chain built");

        HandlerChain {
            head,
            unmatched: self.unmatched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_links_in_insertion_order() {
        let chain = HandlerChain::builder()
            .handler(HandlerKind::C)
            .handler(HandlerKind::A)
            .build();
        assert_eq!(chain.kinds(), vec![HandlerKind::C, HandlerKind::A]);
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.head().map(Handler::kind), Some(HandlerKind::C));
    }

    #[test]
    fn demo_chain_is_a_b_c() {
        let chain = HandlerChain::demo();
        assert_eq!(chain.kinds(), HandlerKind::ALL.to_vec());
        assert_eq!(chain.unmatched_policy(), UnmatchedPolicy::Silent);
    }

    #[test]
    fn add_handler_matches_fluent_form() {
        let mut builder = ChainBuilder::new();
        builder.add_handler(HandlerKind::B).add_handler(HandlerKind::C);
        assert_eq!(
            builder.build().kinds(),
            vec![HandlerKind::B, HandlerKind::C]
        );
    }

    #[test]
    fn empty_chain_leaves_requests_unhandled() {
        let chain = HandlerChain::default();
        let mut out = Vec::new();
        assert!(chain.is_empty());
        assert_eq!(
            chain.dispatch(&Request::from("A"), &mut out).unwrap(),
            Outcome::Unhandled
        );
        assert!(out.is_empty());
    }

    #[test]
    fn strict_empty_chain_reports_unhandled() {
        let chain = HandlerChain::default().with_unmatched_policy(UnmatchedPolicy::Strict);
        let err = chain.dispatch(&Request::from("A"), &mut Vec::new()).unwrap_err();
        assert!(err.is_unhandled());
    }

    #[test]
    fn builder_policy_carries_into_chain() {
        let chain = HandlerChain::builder()
            .handler(HandlerKind::A)
            .with_unmatched_policy(UnmatchedPolicy::Strict)
            .build();
        assert_eq!(chain.unmatched_policy(), UnmatchedPolicy::Strict);
    }
}
