use clients::scooter::v1::{Client, CourierClient, OrderClient};
use color_eyre::{
    Result,
    eyre::{Context, bail},
};
use tracing::{info, instrument};

use crate::{Config, FakeService, Scenario};

/// The environment a test runs against.
///
/// When [`Config::api_url`] is set, requests go to that service. Otherwise an
/// in-process [`FakeService`] is started for this environment alone and
/// stopped when the environment is dropped, so each test that creates its own
/// `TestEnv` is isolated from the others.
///
/// ## Live runs
///
/// With the `live` feature enabled a missing URL is an error rather than a
/// reason to fall back to the fake: a live run should never pass by
/// accident against the fake.
#[derive(Debug)]
pub struct TestEnv {
    client: Client,
    fake: Option<FakeService>,
}

impl TestEnv {
    /// Set up an environment from the process environment.
    #[instrument]
    pub async fn new() -> Result<Self> {
        let config = Config::from_env()?;
        Self::with_config(config).await
    }

    /// Set up an environment from the given configuration.
    #[instrument]
    pub async fn with_config(config: Config) -> Result<Self> {
        match config.api_url {
            Some(url) => {
                info!(%url, "env.live");
                let client = Client::new(url).context("create client")?;
                Ok(Self { client, fake: None })
            }
            None if cfg!(feature = "live") => {
                bail!("{} must be set for live runs", Config::API_URL_VAR)
            }
            None => {
                let fake = FakeService::builder()
                    .spawn()
                    .await
                    .context("start fake service")?;
                Self::with_fake(fake)
            }
        }
    }

    /// Set up an environment against an already running fake service.
    pub fn with_fake(fake: FakeService) -> Result<Self> {
        info!(url = %fake.url(), "env.fake");
        let client = Client::new(fake.url().clone()).context("create client")?;
        Ok(Self {
            client,
            fake: Some(fake),
        })
    }

    /// Whether requests go to an in-process fake rather than a live service.
    pub fn is_fake(&self) -> bool {
        self.fake.is_some()
    }

    /// The fake service requests go to, if any.
    pub fn fake(&self) -> Option<&FakeService> {
        self.fake.as_ref()
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn couriers(&self) -> CourierClient {
        self.client.couriers()
    }

    pub fn orders(&self) -> OrderClient {
        self.client.orders()
    }

    /// Run a scenario in this environment.
    ///
    /// See [`Scenario::run`].
    pub async fn scenario<T>(
        &self,
        name: impl Into<String>,
        body: impl AsyncFnOnce(&Scenario) -> Result<T>,
    ) -> Result<T> {
        Scenario::run(self, name, body).await
    }
}
