use activity_watch::{
    bot::start::{init_bot, start_bot},
    config::Config,
    error::AppError,
    scheduler::cooldown_sweep,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    if let Err(e) = run().await {
        tracing::error!("Bot exited with error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    let sweep_interval = config.cooldown();

    let state = AppState::from_config(config).await?;

    tracing::info!("Starting bot");

    let client = init_bot(state.clone()).await?;

    // The sweep runs for the lifetime of the process
    let _scheduler =
        cooldown_sweep::start_scheduler(state.cooldown.clone(), sweep_interval).await?;

    start_bot(client).await
}
