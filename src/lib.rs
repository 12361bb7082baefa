//! Handler Chain - a chain-of-responsibility request pipeline
//!
//! A chain links handlers head to tail. Each request enters at the head; a
//! handler either processes a request whose label it owns or forwards it,
//! unchanged, to its successor. A request no handler claims is dropped.
//!
//! # Quick Start
//!
//! ```ignore
//! use handler_chain::{HandlerChain, HandlerKind, UnmatchedPolicy};
//!
//! let chain = HandlerChain::builder()
//!     .handler(HandlerKind::A)
//!     .handler(HandlerKind::B)
//!     .handler(HandlerKind::C)
//!     .with_unmatched_policy(UnmatchedPolicy::Silent)
//!     .build();
//!
//! let mut stdout = std::io::stdout().lock();
//! let outcomes = chain.dispatch_all(["A", "B", "C"], &mut stdout)?;
//! ```

pub mod core;
pub mod handlers;
#[cfg(feature = "metrics")]
pub mod instrumentation;

// Convenience re-exports
pub use core::chain_error::ChainError;
pub use core::handler_chain::{ChainBuilder, HandlerChain};
pub use core::outcome::Outcome;
pub use core::request::Request;
pub use core::unmatched_policy::UnmatchedPolicy;
pub use handlers::handler::Handler;
pub use handlers::handler_kind::HandlerKind;
#[cfg(feature = "metrics")]
pub use instrumentation::metrics::DispatchMetrics;
