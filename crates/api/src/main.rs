use anyhow::Context;

use foresight_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    foresight_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        model_dir = %config.model_dir.display(),
        parallel_inference = config.parallel_inference,
        allowed_hosts = ?config.allowed_hosts,
        "starting digital twin projection api"
    );

    let app = foresight_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
