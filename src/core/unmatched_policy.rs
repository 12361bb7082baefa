/// How a chain reports a request that no handler processed
///
/// * **Silent**: the request is dropped without output or error (default)
/// * **Strict**: the dispatch returns [`ChainError::Unhandled`]
///
/// Both policies write the same handler output; only the returned value differs.
///
/// [`ChainError::Unhandled`]: crate::core::chain_error::ChainError::Unhandled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmatchedPolicy {
    #[default]
    Silent,
    Strict,
}
