use tablematch::config::Config;
use tablematch::engine::Engine;
use tablematch::error::Error;
use tablematch::server::serve;
use tablematch::simulation::Simulation;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let engine = Engine::new();

    if config.simulation_rounds > 0 {
        Simulation::new(config.simulation_seed)
            .run(&engine, config.simulation_rounds)
            .await?;
    }

    serve(engine, config.addr).await
}
