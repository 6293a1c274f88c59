//! Cross-origin policy applied to every route.

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Which browser origins may call the API.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CorsPolicy {
    /// Any origin, any method, any header.
    #[default]
    AllowAny,
    /// Only the listed origins (e.g. `http://localhost:4200`).
    AllowList(Vec<String>),
}

impl CorsPolicy {
    /// Build a policy from configured origins. A `*` entry anywhere in the
    /// list allows every origin.
    #[must_use]
    pub fn from_origins<I, T>(origins: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let origins: Vec<String> = origins.into_iter().map(Into::into).collect();
        if origins.iter().any(|origin| origin.trim() == "*") {
            Self::AllowAny
        } else {
            Self::AllowList(origins)
        }
    }

    /// Turn the policy into a tower layer.
    ///
    /// Origins that are not valid header values are skipped with a warning.
    #[must_use]
    pub fn layer(&self) -> CorsLayer {
        match self {
            Self::AllowAny => CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
            Self::AllowList(origins) => {
                let values: Vec<HeaderValue> = origins
                    .iter()
                    .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
                        Ok(value) => Some(value),
                        Err(err) => {
                            tracing::warn!(%origin, error = %err, "ignoring invalid CORS origin");
                            None
                        }
                    })
                    .collect();
                CorsLayer::new()
                    .allow_origin(AllowOrigin::list(values))
                    .allow_methods(Any)
                    .allow_headers(Any)
            }
        }
    }
}
