//! Run the smoke checks against a Scooter environment.
//!
//! ```not_rust
//! SCOOTER_API_URL=https://qa-scooter.praktikum-services.ru/api/v1/ scooter-smoke
//! ```
//!
//! Without a URL the checks run against an in-process fake, which is mostly
//! useful for checking the suite itself.

use clap::Parser;
use color_eyre::{
    Result,
    eyre::{Context, bail},
};
use e2e::{Config, TestEnv, smoke};
use itertools::Itertools;
use tracing::info;

use crate::log::WhenColor;

mod log;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,

    /// When to colorize log output.
    #[arg(long, value_enum, default_value_t = WhenColor::Auto)]
    color: WhenColor,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    e2e::config::load_dotenv()?;
    let cli = Cli::parse();
    color_eyre::install()?;

    let logger = log::make_logger(std::io::stderr, cli.color);
    tracing::subscriber::set_global_default(logger).context("install logger")?;

    let env = TestEnv::with_config(cli.config)
        .await
        .context("set up environment")?;
    info!(base = %env.client().base(), fake = env.is_fake(), "smoke.start");

    let failed = smoke::run_all(&env).await;
    if !failed.is_empty() {
        bail!("failed checks: {}", failed.iter().join(", "));
    }

    info!("smoke.done");
    Ok(())
}
