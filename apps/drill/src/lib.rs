pub mod config;
pub mod corpus;
pub mod date_utils;
pub mod terminal;
pub mod ticker;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::Drill;

use crate::config::Config;
use crate::date_utils::get_adjusted_today;
use crate::terminal::Terminal;
use crate::ticker::RewardClock;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    let reset_hour = config.daily_reset_hour;
    let today = move || get_adjusted_today(reset_hour);

    let store = corpus::load_store(config.corpus_path.as_deref(), today())?;
    let mut drill = Drill::new(store, config.settings.clone());
    if let Some(seed) = config.seed {
        tracing::info!("Using fixed seed {}", seed);
        drill = drill.with_seed(seed);
    }

    let mut rewards = RewardClock::default();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    Terminal::new(&mut drill, &mut stdout, &mut rewards).run(stdin.lock(), config.initial_mode, today)?;

    tracing::info!("Study rewards earned: {}", rewards.rewards());
    Ok(())
}
