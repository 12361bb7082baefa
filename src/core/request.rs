use std::fmt;

/// An immutable request label passed into the head of a chain
///
/// Handlers compare the label for exact equality; a label that no handler
/// claims simply runs off the end of the chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Request {
    label: String,
}

impl Request {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl From<&str> for Request {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Request {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
