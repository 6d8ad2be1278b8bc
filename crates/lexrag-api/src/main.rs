use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tracing_subscriber::EnvFilter;

use lexrag_core::config::Settings;
use lexrag_retrieval::{QueryEngine, RerankerFactory};
use lexrag_store::{ChatCompletionClient, IndexClient, InferenceClient};

mod routes;

use routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env();
    settings.validate()?;
    tracing::info!(
        index_host = %settings.store.index_host,
        generation = %settings.generation.base_url,
        "configuration loaded"
    );

    let embedder = InferenceClient::new(&settings.store)?;
    let store = IndexClient::new(&settings.store)?;
    let generator = ChatCompletionClient::new(&settings.generation)?;
    let reranker = reranker_factory(&settings);

    let engine = Arc::new(QueryEngine::new(
        Box::new(embedder),
        Box::new(store),
        Box::new(generator),
        reranker,
        settings.pipeline.clone(),
    ));

    let state = AppState {
        engine,
        bearer_token: (!settings.api.bearer_token.is_empty())
            .then(|| settings.api.bearer_token.clone()),
    };

    let app = Router::new()
        .route("/query", post(routes::query))
        .route("/healthz", get(routes::healthz))
        .with_state(state);

    let addr = settings.api.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Cross-encoder factory for the engine. Without the `reranker` feature the
/// hybrid pipeline reports the reranker as unavailable.
fn reranker_factory(settings: &Settings) -> RerankerFactory {
    #[cfg(feature = "reranker")]
    {
        use lexrag_core::traits::ICrossEncoder;
        use lexrag_retrieval::ranking::FastembedCrossEncoder;

        let model = settings.rerank.model.clone();
        Box::new(move || {
            Ok(Box::new(FastembedCrossEncoder::load(&model)?) as Box<dyn ICrossEncoder>)
        })
    }

    #[cfg(not(feature = "reranker"))]
    {
        let _ = settings;
        lexrag_retrieval::engine::no_reranker_factory()
    }
}
