use crate::routing::{LocaleResolver, Resolution};
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;
use tracing::debug;

/// Redirect requests without a locale prefix to the default locale.
///
/// Runs before any page is served. Holds no per-request state, so one
/// resolver is shared across all connections.
pub async fn redirect_to_default_locale(
    State(resolver): State<Arc<LocaleResolver>>,
    request: Request,
    next: Next,
) -> Response {
    let resolution = resolver.resolve_uri(request.uri().path(), request.uri().query());
    match resolution {
        Resolution::PassThrough => next.run(request).await,
        Resolution::Redirect { location } => {
            debug!("Redirecting {} to {}", request.uri(), location);
            Redirect::temporary(&location).into_response()
        }
    }
}
