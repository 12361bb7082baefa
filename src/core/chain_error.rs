use thiserror::Error;

/// Errors surfaced by chain dispatch
#[derive(Debug, Error)]
pub enum ChainError {
    /// The output sink rejected a write; the traversal stopped there
    #[error("failed to write handler output: {0}")]
    Output(#[from] std::io::Error),

    /// No handler matched and the chain runs with [`UnmatchedPolicy::Strict`]
    ///
    /// [`UnmatchedPolicy::Strict`]: crate::core::unmatched_policy::UnmatchedPolicy::Strict
    #[error("no handler processed request `{request}`")]
    Unhandled { request: String },
}

impl ChainError {
    pub fn is_unhandled(&self) -> bool {
        matches!(self, ChainError::Unhandled { .. })
    }
}
