use engine::{ChromeProvisioner, EngineConfig, PdfPipeline};
use env_logger::Env;
use log::info;
use std::sync::Arc;
use web::{AppData, MatchCardServer};

#[tokio::main]
async fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = EngineConfig::from_env();
    info!("deployment environment: {:?}", config.environment);

    let render_timeout = config.render_timeout;
    let provisioner = Arc::new(ChromeProvisioner::new(config));
    let pipeline = Arc::new(PdfPipeline::new(provisioner));

    let data = AppData {
        pipeline,
        render_timeout,
    };

    MatchCardServer::new(data).run().await;
}
