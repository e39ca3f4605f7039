//! Preview server for the built site.
//!
//! Pages come from the build output, static media from the public
//! directory, and `/api/contact` is handled in-process. Every request first
//! passes the locale redirect.

use crate::contact::{submit_contact, ContactError, Delivery};
use crate::routing::{redirect_to_default_locale, LocaleResolver};
use anyhow::{Context, Result};
use axum::http::{header, Method};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{middleware, Router};
use std::any::Any;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Everything the router needs.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<LocaleResolver>,
    pub delivery: Arc<dyn Delivery>,
    pub output_dir: PathBuf,
    pub public_dir: PathBuf,
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let api = Router::new()
        .route("/api/contact", post(submit_contact))
        .layer(CatchPanicLayer::custom(contact_panic_response))
        .layer(cors)
        .with_state(state.delivery);

    let not_found = ServeFile::new(state.output_dir.join("404.html"));
    let public = ServeDir::new(&state.public_dir).not_found_service(not_found);
    let site = ServeDir::new(&state.output_dir).fallback(public);

    api.fallback_service(site)
        .layer(middleware::from_fn_with_state(
            state.resolver,
            redirect_to_default_locale,
        ))
        .layer(TraceLayer::new_for_http())
}

/// A panic inside the contact endpoint becomes a JSON 500 instead of a
/// dropped connection.
fn contact_panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!("Contact handler panicked: {}", detail);
    ContactError::Internal(detail).into_response()
}

/// Bind `0.0.0.0:port` and serve until Ctrl+C or SIGTERM.
pub async fn serve(router: Router, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Serving on http://{}", addr);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, stopping server");
}
