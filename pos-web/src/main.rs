//! Servidor Axum para etiquetagem POS de textos em Marathi

use std::sync::Arc;

use pos_core::{ModelBundle, PosPipeline};
use pos_web::{router, AppState, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // Sem modelo não há o que servir: falha aqui mesmo
    let model = ModelBundle::load(&config.model_path)?;
    let pipeline = PosPipeline::new(model).with_default_mode(config.default_mode);
    let state = Arc::new(AppState { pipeline });

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(
        "Servidor POS iniciado em http://{} (decodificador: {:?})",
        config.bind_addr, config.default_mode
    );
    axum::serve(listener, app).await?;
    Ok(())
}
