use std::fmt;

/// The concrete handler variants a chain can be built from
///
/// Each variant is fixed at design time to the label it matches, the name it
/// reports when it processes a request, and the marker it writes before it
/// inspects a request.
///
/// | Kind | Label | Marker     |
/// |------|-------|------------|
/// | `A`  | `"A"` | `-----`    |
/// | `B`  | `"B"` | `======`   |
/// | `C`  | `"C"` | *(none)*   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandlerKind {
    A,
    B,
    C,
}

impl HandlerKind {
    /// Every kind, in demo chain order
    pub const ALL: [HandlerKind; 3] = [HandlerKind::A, HandlerKind::B, HandlerKind::C];

    /// The request label this handler processes
    pub fn label(&self) -> &'static str {
        match self {
            HandlerKind::A => "A",
            HandlerKind::B => "B",
            HandlerKind::C => "C",
        }
    }

    /// Human-readable handler name used in the processed message
    pub fn name(&self) -> &'static str {
        match self {
            HandlerKind::A => "Handler A",
            HandlerKind::B => "Handler B",
            HandlerKind::C => "Handler C",
        }
    }

    /// Line written on entry, before the label is checked
    ///
    /// `C` writes nothing on entry.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            HandlerKind::A => Some("-----"),
            HandlerKind::B => Some("======"),
            HandlerKind::C => None,
        }
    }

    pub fn matches(&self, label: &str) -> bool {
        self.label() == label
    }
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
