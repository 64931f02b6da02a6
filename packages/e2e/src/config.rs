//! Suite configuration.

use clap::{Args, Parser};
use color_eyre::{Result, eyre::Context};
use tracing::debug;
use url::Url;

/// Where the suite sends its requests.
///
/// Values come from the environment (and a `.env` file, if present) so that
/// tests and the smoke binary are configured the same way.
#[derive(Clone, Debug, Default, Args)]
pub struct Config {
    /// Base URL of the Scooter API, such as
    /// `https://qa-scooter.praktikum-services.ru/api/v1/`.
    ///
    /// When unset, an in-process fake of the service is used.
    #[arg(long, env = "SCOOTER_API_URL")]
    pub api_url: Option<Url>,
}

impl Config {
    /// The environment variable naming the API base URL.
    pub const API_URL_VAR: &str = "SCOOTER_API_URL";

    /// Read the configuration from the environment alone.
    pub fn from_env() -> Result<Self> {
        load_dotenv()?;
        Environment::try_parse_from([env!("CARGO_PKG_NAME")])
            .map(|env| env.config)
            .context("read configuration from environment")
    }
}

/// Parses a [`Config`] with no command line arguments.
#[derive(Debug, Parser)]
struct Environment {
    #[command(flatten)]
    config: Config,
}

/// Load variables from a `.env` file, if there is one.
///
/// Variables already set in the environment take precedence.
pub fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!(?path, "config.dotenv.loaded");
            Ok(())
        }
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(err).context("load .env file"),
    }
}
