//! Routing error definitions.

use thiserror::Error;

/// Errors a caller can raise when resolving a path.
///
/// The registry itself never returns these: `match_path` reports a miss as
/// a tagged result. This type exists for the layer that turns an
/// unroutable path into a failure, via
/// [`RouteMatch::into_result`](crate::routing::registry::RouteMatch::into_result).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No route is registered for the normalized path.
    #[error("no route registered for path '{path}'")]
    NotFound { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RouteError::NotFound {
            path: "/chat".to_string(),
        };
        assert_eq!(err.to_string(), "no route registered for path '/chat'");
    }
}
