//! Route table storage and lookup.
//!
//! # Responsibilities
//! - Store routes keyed by normalized path
//! - Register single routes and bulk handler mappings
//! - Resolve an incoming path to a route, or report no match
//!
//! # Design Decisions
//! - Handler type is generic and opaque; the registry never inspects it
//! - Options are stored verbatim, never validated
//! - Re-registering a path overwrites silently (last write wins)
//! - `match_path` always returns a tagged result, never an error

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::routing::error::RouteError;
use crate::routing::path;

/// Options attached to a route: string keys, values opaque to the registry.
pub type RouteOptions = HashMap<String, serde_json::Value>;

/// Mapping from normalized path to its registered route.
pub type RouteTable<H> = HashMap<String, Route<H>>;

/// A registered path entry.
///
/// `H` is whatever the handler-invocation layer dispatches on, typically a
/// cheap handle such as `Arc<dyn MessageHandler>`. The registry only
/// stores it. Routes serialize when `H` does, for table dumps alongside
/// [`routes`](RouteRegistry::routes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route<H> {
    /// Opaque reference to the logic that processes matched messages.
    pub handler: H,
    /// Per-route configuration, stored but never interpreted.
    pub option: RouteOptions,
}

impl<H> Route<H> {
    /// Create a route with empty options.
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            option: RouteOptions::new(),
        }
    }

    /// Create a route carrying options.
    pub fn with_options(handler: H, option: RouteOptions) -> Self {
        Self { handler, option }
    }
}

/// Outcome of resolving a path against the registry.
///
/// Callers must branch on the tag: `Found` carries the route, `NotFound`
/// carries the normalized path that missed.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteMatch<H> {
    /// A route is registered for the normalized path.
    Found(Route<H>),
    /// No route for this normalized path.
    NotFound(String),
}

impl<H> RouteMatch<H> {
    /// Whether the lookup hit a registered route.
    pub fn is_found(&self) -> bool {
        matches!(self, RouteMatch::Found(_))
    }

    /// Escalate a miss into [`RouteError::NotFound`].
    ///
    /// The registry itself never errors; this is the bridge for callers
    /// that treat an unroutable path as a failure.
    pub fn into_result(self) -> Result<Route<H>, RouteError> {
        match self {
            RouteMatch::Found(route) => Ok(route),
            RouteMatch::NotFound(path) => Err(RouteError::NotFound { path }),
        }
    }
}

/// Path-keyed route registry.
///
/// Construct one, register routes during setup, then resolve incoming
/// paths with [`match_path`](Self::match_path). The registry exclusively
/// owns its table; share it across workers via
/// [`SharedRegistry`](crate::routing::shared::SharedRegistry) instead of
/// a global.
#[derive(Debug, Clone)]
pub struct RouteRegistry<H> {
    routes: RouteTable<H>,
}

impl<H> Default for RouteRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouteRegistry<H> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            routes: RouteTable::new(),
        }
    }

    /// Register one route under the normalized form of `path`.
    ///
    /// Overwrites any existing route for the same normalized key. Neither
    /// the handler nor the options are validated.
    pub fn add(&mut self, path: &str, handler: H, options: RouteOptions) {
        let key = path::normalize(path);
        tracing::debug!(path = %key, "route registered");
        self.routes.insert(key, Route::with_options(handler, options));
    }

    /// Bulk-register a handler mapping.
    ///
    /// Each entry's path is normalized and registered with that entry's
    /// handler and empty options; per-route options in the mapping are not
    /// carried over. Entries whose paths normalize to the same key follow
    /// the last-write-wins rule.
    pub fn register_routes<I>(&mut self, mapping: I)
    where
        I: IntoIterator<Item = (String, Route<H>)>,
    {
        for (path, route) in mapping {
            self.add(&path, route.handler, RouteOptions::new());
        }
    }

    /// Whether a route is registered for the normalized form of `path`.
    pub fn has_route(&self, path: &str) -> bool {
        self.routes.contains_key(&path::normalize(path))
    }

    /// Resolve `path` to its registered route.
    ///
    /// Exact-key lookup after normalization. Never fails: a miss returns
    /// [`RouteMatch::NotFound`] carrying the normalized path.
    pub fn match_path(&self, path: &str) -> RouteMatch<H>
    where
        H: Clone,
    {
        let key = path::normalize(path);
        match self.routes.get(&key) {
            Some(route) => RouteMatch::Found(route.clone()),
            None => {
                tracing::trace!(path = %key, "no route for path");
                RouteMatch::NotFound(key)
            }
        }
    }

    /// The full route table, for bulk inspection.
    pub fn routes(&self) -> &RouteTable<H> {
        &self.routes
    }

    /// Replace the whole table.
    ///
    /// No normalization or validation is applied: keys must already be in
    /// normalized form, or later lookups against them will silently miss.
    pub fn set_routes(&mut self, routes: RouteTable<H>) {
        tracing::debug!(count = routes.len(), "route table replaced");
        self.routes = routes;
    }
}
