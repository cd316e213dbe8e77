//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming message path
//!     → path.rs (normalize to canonical form)
//!     → registry.rs (exact-key table lookup)
//!     → Return: RouteMatch::Found(route) or RouteMatch::NotFound(path)
//!
//! Registration (at startup):
//!     add() / register_routes()
//!     → Normalize each path
//!     → Insert into the route table (last write wins)
//! ```
//!
//! # Design Decisions
//! - Flat dictionary keyed by canonical path string (no prefixes,
//!   wildcards, or parameter extraction)
//! - Normalization applied at every write and every read, so lookups are
//!   insensitive to whatever the normalizer cancels out
//! - Match never fails; NOT_FOUND is a tagged result, not an error
//! - Escalating a miss into an error is the caller's job (error.rs)
//! - Registry is an owned value, not a process-wide singleton; the
//!   shared.rs wrapper covers multi-worker deployments

pub mod error;
pub mod path;
pub mod registry;
pub mod shared;
