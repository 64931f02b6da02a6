//! Courier login.

use clients::scooter::v1::{Outcome, message};
use color_eyre::Result;
use e2e::{TestEnv, fixture};
use pretty_assertions::assert_eq as pretty_assert_eq;

#[test_log::test(tokio::test)]
async fn courier_can_log_in() -> Result<()> {
    let env = TestEnv::new().await?;
    let courier = fixture::courier();

    env.scenario("courier can log in", async |scenario| {
        scenario.create_courier(&courier).await?;

        let response = scenario.login(&courier.credentials()).await?;
        pretty_assert_eq!(response.outcome(), Outcome::Ok);
        let id = response.id().expect("login reports an id");
        assert!(id.is_positive(), "id: {id}");
        Ok(())
    })
    .await
}

#[test_log::test(tokio::test)]
async fn login_without_login_is_rejected() -> Result<()> {
    let env = TestEnv::new().await?;
    let courier = fixture::courier();

    env.scenario("login without login is rejected", async |scenario| {
        scenario.create_courier(&courier).await?;

        let credentials = courier.credentials().without_login();
        let response = scenario.login(&credentials).await?;
        pretty_assert_eq!(response.outcome(), Outcome::Validation);
        pretty_assert_eq!(response.message(), Some(message::LOGIN_INSUFFICIENT_DATA));
        Ok(())
    })
    .await
}

/// The service answers a `null` password with a gateway timeout rather than a
/// validation error. This pins down what it does today.
#[test_log::test(tokio::test)]
async fn login_without_password_times_out() -> Result<()> {
    let env = TestEnv::new().await?;
    let courier = fixture::courier();

    env.scenario("login without password times out", async |scenario| {
        scenario.create_courier(&courier).await?;

        let credentials = courier.credentials().without_password();
        let response = scenario.login(&credentials).await?;
        pretty_assert_eq!(response.outcome(), Outcome::UpstreamAnomaly);
        Ok(())
    })
    .await
}

#[test_log::test(tokio::test)]
async fn login_with_wrong_login_is_not_found() -> Result<()> {
    let env = TestEnv::new().await?;
    let courier = fixture::courier();

    env.scenario("login with wrong login is not found", async |scenario| {
        scenario.create_courier(&courier).await?;

        let credentials = courier.credentials().with_login(fixture::unique_login());
        let response = scenario.login(&credentials).await?;
        pretty_assert_eq!(response.outcome(), Outcome::NotFound);
        pretty_assert_eq!(response.message(), Some(message::ACCOUNT_NOT_FOUND));
        Ok(())
    })
    .await
}

#[test_log::test(tokio::test)]
async fn login_with_wrong_password_is_not_found() -> Result<()> {
    let env = TestEnv::new().await?;
    let courier = fixture::courier();

    env.scenario("login with wrong password is not found", async |scenario| {
        scenario.create_courier(&courier).await?;

        let credentials = courier.credentials().with_password("UNKNOWN_COURIER");
        let response = scenario.login(&credentials).await?;
        pretty_assert_eq!(response.outcome(), Outcome::NotFound);
        pretty_assert_eq!(response.message(), Some(message::ACCOUNT_NOT_FOUND));

        // A failed login must not stop the courier from being cleaned up.
        pretty_assert_eq!(scenario.pending_cleanup(), 1);
        Ok(())
    })
    .await
}

#[test_log::test(tokio::test)]
async fn login_of_unknown_courier_is_not_found() -> Result<()> {
    let env = TestEnv::new().await?;
    let never_created = fixture::courier();

    env.scenario("login of unknown courier is not found", async |scenario| {
        let response = scenario.login(&never_created.credentials()).await?;
        pretty_assert_eq!(response.outcome(), Outcome::NotFound);
        pretty_assert_eq!(response.message(), Some(message::ACCOUNT_NOT_FOUND));
        pretty_assert_eq!(scenario.pending_cleanup(), 0);
        Ok(())
    })
    .await
}
