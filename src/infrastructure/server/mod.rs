//! Webhook HTTP server

use axum::{Router, body::Bytes, extract::State, http::StatusCode, routing::post};
use axum::extract::rejection::BytesRejection;
use std::sync::Arc;
use tracing::{Instrument, info, info_span, warn};

use crate::application::services::{Outcome, UpdateService};
use crate::infrastructure::config::ServerConfig;

/// Builds the webhook router. `POST /` receives Telegram updates.
pub fn router(service: Arc<UpdateService>) -> Router {
    Router::new()
        .route("/", post(handle_webhook))
        .with_state(service)
}

/// Starts the webhook HTTP server and blocks until shutdown.
pub async fn serve(config: &ServerConfig, service: Arc<UpdateService>) -> std::io::Result<()> {
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Webhook server listening");

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Webhook server stopped");
    Ok(())
}

/// Telegram retries any non-2xx delivery, so every path answers 200,
/// including bodies axum refuses to read (over the size limit).
async fn handle_webhook(
    State(service): State<Arc<UpdateService>>,
    body: Result<Bytes, BytesRejection>,
) -> StatusCode {
    let request_id = uuid::Uuid::new_v4();
    let span = info_span!("webhook.update", %request_id, outcome = tracing::field::Empty);

    async move {
        let outcome = match body {
            Ok(body) => service.handle(&body).await,
            Err(rejection) => {
                warn!(status = %rejection.status(), "Could not read webhook body: {}", rejection.body_text());
                Outcome::DecodeFailed
            }
        };
        tracing::Span::current().record("outcome", outcome.as_str());
        StatusCode::OK
    }
    .instrument(span)
    .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!(error = %error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
            return;
        }
        info!("Received SIGINT (Ctrl+C)");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                info!("Received SIGTERM");
            }
            Err(error) => {
                warn!(error = %error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
