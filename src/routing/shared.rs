//! Concurrent registry wrapper.
//!
//! # Responsibilities
//! - Share one route table across workers without locks on the read path
//! - Serialize mutation via read-copy-update
//!
//! # Design Decisions
//! - `RouteRegistry` itself is single-threaded by contract (register at
//!   startup, read thereafter); this wrapper is the hardening for
//!   multi-worker deployments
//! - Immutable-snapshot-swap over `ArcSwap`: reads load a snapshot,
//!   `set_routes` is one atomic swap
//! - Handlers must be `Clone`; cheap handles (`Arc<_>`) are expected

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::routing::path;
use crate::routing::registry::{Route, RouteMatch, RouteOptions, RouteTable};

/// Thread-safe route registry with lock-free reads.
///
/// Same operation surface as [`RouteRegistry`](crate::routing::registry::RouteRegistry),
/// with shared references throughout. Mutations copy the current table,
/// so they are meant for the setup phase or occasional reloads, not hot
/// paths.
pub struct SharedRegistry<H> {
    table: ArcSwap<RouteTable<H>>,
}

impl<H> Default for SharedRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> SharedRegistry<H> {
    /// Create an empty shared registry.
    pub fn new() -> Self {
        Self {
            table: ArcSwap::from_pointee(RouteTable::new()),
        }
    }

    /// Wrap an existing table. Keys must already be normalized.
    pub fn from_table(table: RouteTable<H>) -> Self {
        Self {
            table: ArcSwap::from_pointee(table),
        }
    }

    /// Whether a route is registered for the normalized form of `path`.
    pub fn has_route(&self, path: &str) -> bool {
        self.table.load().contains_key(&path::normalize(path))
    }

    /// Snapshot of the full route table.
    pub fn routes(&self) -> Arc<RouteTable<H>> {
        self.table.load_full()
    }

    /// Atomically replace the whole table.
    ///
    /// Like the owned registry's `set_routes`, no normalization or
    /// validation is applied to the supplied keys.
    pub fn set_routes(&self, routes: RouteTable<H>) {
        tracing::debug!(count = routes.len(), "route table replaced");
        self.table.store(Arc::new(routes));
    }
}

impl<H: Clone> SharedRegistry<H> {
    /// Register one route under the normalized form of `path`.
    pub fn add(&self, path: &str, handler: H, options: RouteOptions) {
        let key = path::normalize(path);
        let route = Route::with_options(handler, options);
        tracing::debug!(path = %key, "route registered");
        // The closure may rerun under contention, so it clones fresh each
        // attempt.
        self.table.rcu(|table| {
            let mut next = RouteTable::clone(table);
            next.insert(key.clone(), route.clone());
            next
        });
    }

    /// Bulk-register a handler mapping with empty per-route options.
    pub fn register_routes<I>(&self, mapping: I)
    where
        I: IntoIterator<Item = (String, Route<H>)>,
    {
        for (path, route) in mapping {
            self.add(&path, route.handler, RouteOptions::new());
        }
    }

    /// Resolve `path` against the current snapshot.
    pub fn match_path(&self, path: &str) -> RouteMatch<H> {
        let key = path::normalize(path);
        match self.table.load().get(&key) {
            Some(route) => RouteMatch::Found(route.clone()),
            None => {
                tracing::trace!(path = %key, "no route for path");
                RouteMatch::NotFound(key)
            }
        }
    }
}
