use axum::Router;
use festguide::cache::{MemoryCacheService, ResponseCache};
use festguide::config::Config;
use festguide::constants::DEFAULT_MEMORY_CACHE_MAX_ENTRIES;
use festguide::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "festguide=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting festival guide API server");
    tracing::info!(
        weather = config.openweather_key.is_some(),
        naver_maps = config.naver_maps.is_some(),
        kakao = config.kakao_rest_key.is_some(),
        naver_search = config.naver_search.is_some(),
        youtube = config.youtube_key.is_some(),
        "Configuration loaded"
    );

    let cache: Option<Arc<dyn ResponseCache>> = if config.upstream_cache_ttl > 0 {
        tracing::info!(
            "Caching upstream responses in memory for {}s",
            config.upstream_cache_ttl
        );
        Some(Arc::new(MemoryCacheService::new(
            config.upstream_cache_ttl,
            DEFAULT_MEMORY_CACHE_MAX_ENTRIES,
        )))
    } else {
        tracing::info!("UPSTREAM_CACHE_TTL is 0. Upstream responses are not cached.");
        None
    };

    let state = Arc::new(AppState::from_config(&config, cache)?);

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api", festguide::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
