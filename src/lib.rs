//! Path-based route registry for a message-oriented server.
//!
//! Associates an incoming connection/message path with a registered
//! handler and its options. Matching is exact-key lookup over normalized
//! paths; resolving a path yields a tagged [`RouteMatch`] result that
//! callers branch on before invoking the handler.

pub mod routing;

pub use routing::error::RouteError;
pub use routing::registry::{Route, RouteMatch, RouteOptions, RouteRegistry, RouteTable};
pub use routing::shared::SharedRegistry;
