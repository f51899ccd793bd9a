use crate::config::{Config, NegotiationConfig};
use crate::negotiation::negotiate_locale;
use crate::pages;
use anyhow::Result;
use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the application router with locale negotiation applied to every route.
pub fn router(config: Arc<NegotiationConfig>) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/api/locale", get(pages::locale_info))
        .route("/robots.txt", get(pages::robots))
        .route("/health", get(pages::health))
        .layer(middleware::from_fn_with_state(
            Arc::clone(&config),
            negotiate_locale,
        ))
        .with_state(config)
        // Method and path only; query strings may carry user input
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: Config) -> Result<()> {
    let negotiation = Arc::new(config.negotiation);
    let supported: Vec<String> = negotiation.locales.iter().map(ToString::to_string).collect();
    info!(
        "Negotiating locales [{}] (default '{}', query '{}', cookie '{}')",
        supported.join(", "),
        negotiation.locales.default_locale(),
        negotiation.query_param,
        negotiation.cookie.name
    );

    let app = router(negotiation);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("✓ Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
