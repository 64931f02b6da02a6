//! Smoke checks: the quickest way to tell whether an environment works.
//!
//! These run the happy paths of the suite with `ensure!` instead of
//! assertions so that the smoke binary can report every failing check rather
//! than stopping at the first.

use clients::scooter::v1::{Outcome, message};
use color_eyre::{
    Result,
    eyre::{Context, ensure},
};
use derive_more::Display;
use tracing::{error, info, instrument};

use crate::{TestEnv, fixture};

/// A smoke check.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display)]
pub enum Check {
    /// Create a courier, log in as it, delete it.
    #[display("courier round trip")]
    CourierRoundTrip,

    /// Creating the same courier twice is refused.
    #[display("duplicate login")]
    DuplicateLogin,

    /// The order list is reachable and not empty.
    #[display("order list")]
    OrderList,
}

impl Check {
    pub const ALL: [Check; 3] = [Check::CourierRoundTrip, Check::DuplicateLogin, Check::OrderList];

    /// Run the check.
    #[instrument(skip(env), fields(check = %self))]
    pub async fn run(self, env: &TestEnv) -> Result<()> {
        match self {
            Check::CourierRoundTrip => courier_round_trip(env).await,
            Check::DuplicateLogin => duplicate_login(env).await,
            Check::OrderList => order_list(env).await,
        }
    }
}

/// Run every check, returning the ones that failed.
pub async fn run_all(env: &TestEnv) -> Vec<Check> {
    let mut failed = Vec::new();
    for check in Check::ALL {
        match check.run(env).await {
            Ok(()) => info!(%check, "smoke.pass"),
            Err(error) => {
                error!(%check, ?error, "smoke.fail");
                failed.push(check);
            }
        }
    }
    failed
}

async fn courier_round_trip(env: &TestEnv) -> Result<()> {
    let courier = fixture::courier();
    env.scenario(Check::CourierRoundTrip.to_string(), async |scenario| {
        let created = scenario.create_courier(&courier).await.context("create")?;
        ensure!(
            created.outcome() == Outcome::Created,
            "create: expected 201, got {}: {}",
            created.status,
            created.text
        );
        ensure!(created.ok() == Some(true), "create: expected ok=true: {}", created.text);

        let login = scenario.login(&courier.credentials()).await.context("login")?;
        ensure!(
            login.outcome() == Outcome::Ok,
            "login: expected 200, got {}: {}",
            login.status,
            login.text
        );
        ensure!(
            login.id().is_some_and(|id| id.is_positive()),
            "login: expected a positive id: {}",
            login.text
        );
        Ok(())
    })
    .await
}

async fn duplicate_login(env: &TestEnv) -> Result<()> {
    let courier = fixture::courier();
    env.scenario(Check::DuplicateLogin.to_string(), async |scenario| {
        let first = scenario.create_courier(&courier).await.context("create")?;
        ensure!(
            first.outcome() == Outcome::Created,
            "first create: expected 201, got {}: {}",
            first.status,
            first.text
        );

        let second = scenario.create_courier(&courier).await.context("create again")?;
        ensure!(
            second.outcome() == Outcome::Conflict,
            "second create: expected 409, got {}: {}",
            second.status,
            second.text
        );
        ensure!(
            second.message() == Some(message::LOGIN_ALREADY_IN_USE),
            "second create: unexpected message: {}",
            second.text
        );
        Ok(())
    })
    .await
}

async fn order_list(env: &TestEnv) -> Result<()> {
    let response = env.orders().list().await.context("list orders")?;
    ensure!(
        response.outcome() == Outcome::Ok,
        "list: expected 200, got {}: {}",
        response.status,
        response.text
    );
    let orders = response.orders().context("read orders")?;
    ensure!(!orders.is_empty(), "list: expected at least one order");
    Ok(())
}
