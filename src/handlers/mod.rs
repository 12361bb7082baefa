/// Chain links and the shared match-or-forward logic
pub mod handler;

/// Concrete handler variants A, B and C
pub mod handler_kind;
