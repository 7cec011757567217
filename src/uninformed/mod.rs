//! Uninformed search: depth-first and uniform-cost.
//!
//! Both searches share the frontier, visited set, and path-per-entry
//! pattern. They differ only in frontier discipline: DFS uses a LIFO stack,
//! UCS a priority queue keyed by accumulated cost.
//!
//! Neither search validates its endpoints. Use
//! [`SearchConfig::validate`] (or the [`engine`](crate::engine) entry
//! points, which call it) before running.

mod config;
mod dfs;
mod types;
mod ucs;

pub use config::SearchConfig;
pub use dfs::DfsRunner;
pub use types::SearchResult;
pub use ucs::UcsRunner;
