use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use sycx::application::ports::{FileLoader, ImageSearch};
use sycx::application::services::{
    IntakeValidator, SlidingWindowRateLimiter, SummarizationService,
};
use sycx::infrastructure::image_search::UnsplashClient;
use sycx::infrastructure::observability::init_tracing;
use sycx::infrastructure::publishing::PdfPublisher;
use sycx::infrastructure::rendering::PdfRenderer;
use sycx::infrastructure::storage::ArtifactStoreFactory;
use sycx::infrastructure::summarization::SummarizerFactory;
use sycx::infrastructure::text_processing::CompositeFileLoader;
use sycx::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(&settings.logging, environment);

    let file_loader: Arc<dyn FileLoader> =
        Arc::new(CompositeFileLoader::standard(settings.intake.pdf_max_pages));
    let summarizer = SummarizerFactory::create(&settings.summarizer, file_loader)
        .context("Failed to configure summarizer")?;
    let store =
        ArtifactStoreFactory::create(&settings.storage).context("Failed to configure storage")?;

    let mut publisher = PdfPublisher::new(
        Arc::new(PdfRenderer::new(&settings.rendering)),
        store,
        settings.storage.folder.clone(),
        Duration::from_secs(settings.storage.url_ttl_seconds),
    );
    match settings.image_search.unsplash_access_key.as_deref() {
        Some(key) if !key.trim().is_empty() => {
            let client = UnsplashClient::new(
                key.to_string(),
                Duration::from_secs(settings.image_search.timeout_seconds),
            )
            .context("Failed to configure image search")?;
            let image_search: Arc<dyn ImageSearch> = Arc::new(client);
            publisher = publisher.with_image_search(image_search);
            tracing::info!("Header images enabled");
        }
        _ => tracing::info!("No Unsplash access key configured; header images disabled"),
    }

    let summarization_service = Arc::new(SummarizationService::new(
        summarizer,
        Arc::new(publisher),
    ));

    let rate_limiter = Arc::new(SlidingWindowRateLimiter::new(
        settings.rate_limit.limit,
        Duration::from_secs(settings.rate_limit.window_seconds),
    ));
    tracing::info!(
        limit = rate_limiter.limit(),
        window_secs = rate_limiter.window().as_secs(),
        "Rate limiter configured"
    );
    spawn_eviction_sweep(
        Arc::clone(&rate_limiter),
        Duration::from_secs(settings.rate_limit.eviction_interval_seconds.max(1)),
    );

    let state = AppState {
        summarization_service,
        rate_limiter,
        intake_validator: Arc::new(IntakeValidator::new(&settings.intake.extra_extensions)),
        app: settings.app.clone(),
        environment,
        max_upload_bytes: settings.server.max_upload_mb * 1024 * 1024,
        trust_forwarded_for: settings.rate_limit.trust_forwarded_for,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = %environment,
        version = %settings.app.version,
        "Listening"
    );

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn spawn_eviction_sweep(limiter: Arc<SlidingWindowRateLimiter>, every: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.tick().await;
        loop {
            interval.tick().await;
            let evicted = limiter.evict_idle();
            if evicted > 0 {
                tracing::debug!(
                    evicted,
                    tracked = limiter.tracked_identities(),
                    "Evicted idle rate-limit entries"
                );
            }
        }
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
