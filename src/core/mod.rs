/// Chain orchestration and its builder
pub mod handler_chain;

/// Request labels dispatched through a chain
pub mod request;

/// Terminal state of a traversal
pub mod outcome;

/// Errors returned by dispatch
pub mod chain_error;

/// Reporting of requests no handler matched
pub mod unmatched_policy;
