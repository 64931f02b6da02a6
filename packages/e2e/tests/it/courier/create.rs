//! Courier creation.

use clients::scooter::v1::{Courier, Outcome, message};
use color_eyre::Result;
use e2e::{FakeService, TestEnv, fixture};
use pretty_assertions::assert_eq as pretty_assert_eq;
use simple_test_case::test_case;

#[test_log::test(tokio::test)]
async fn courier_can_be_created() -> Result<()> {
    let env = TestEnv::new().await?;
    let courier = fixture::courier();

    env.scenario("courier can be created", async |scenario| {
        let response = scenario.create_courier(&courier).await?;
        pretty_assert_eq!(response.outcome(), Outcome::Created);
        pretty_assert_eq!(response.ok(), Some(true));
        pretty_assert_eq!(scenario.pending_cleanup(), 1);
        Ok(())
    })
    .await
}

#[test_log::test(tokio::test)]
async fn created_courier_can_log_in() -> Result<()> {
    let env = FakeService::builder()
        .spawn()
        .await
        .and_then(TestEnv::with_fake)?;
    let courier = Courier::builder()
        .login("courier_123")
        .password("pass123")
        .build();

    env.scenario("created courier can log in", async |scenario| {
        let created = scenario.create_courier(&courier).await?;
        pretty_assert_eq!(created.outcome(), Outcome::Created);
        pretty_assert_eq!(created.ok(), Some(true));

        let login = scenario.login(&courier.credentials()).await?;
        pretty_assert_eq!(login.outcome(), Outcome::Ok);
        let id = login.id().expect("login reports an id");
        assert!(id.is_positive(), "id: {id}");
        Ok(())
    })
    .await
}

#[test_case(fixture::courier_without_login(); "without_login")]
#[test_case(fixture::courier_without_password(); "without_password")]
#[test_case(fixture::courier().with_login(""); "empty_login")]
#[test_log::test(tokio::test)]
async fn courier_with_missing_field_is_rejected(courier: Courier) -> Result<()> {
    let env = TestEnv::new().await?;

    env.scenario("courier with missing field is rejected", async |scenario| {
        let response = scenario.create_courier(&courier).await?;
        pretty_assert_eq!(response.outcome(), Outcome::Validation);
        pretty_assert_eq!(response.message(), Some(message::CREATE_INSUFFICIENT_DATA));
        pretty_assert_eq!(scenario.pending_cleanup(), 0);
        Ok(())
    })
    .await
}

#[test_log::test(tokio::test)]
async fn duplicate_courier_is_rejected() -> Result<()> {
    let env = TestEnv::new().await?;
    let courier = fixture::courier();

    env.scenario("duplicate courier is rejected", async |scenario| {
        let first = scenario.create_courier(&courier).await?;
        pretty_assert_eq!(first.outcome(), Outcome::Created);

        let second = scenario.create_courier(&courier).await?;
        pretty_assert_eq!(second.outcome(), Outcome::Conflict);
        pretty_assert_eq!(second.message(), Some(message::LOGIN_ALREADY_IN_USE));

        // Only the accepted creation is cleaned up.
        pretty_assert_eq!(scenario.pending_cleanup(), 1);
        Ok(())
    })
    .await
}

#[test_log::test(tokio::test)]
async fn duplicate_login_is_rejected_with_different_password() -> Result<()> {
    let env = TestEnv::new().await?;
    let courier = fixture::courier();
    let impostor = courier.with_password(fixture::password());

    env.scenario("duplicate login is rejected", async |scenario| {
        let first = scenario.create_courier(&courier).await?;
        pretty_assert_eq!(first.outcome(), Outcome::Created);

        let second = scenario.create_courier(&impostor).await?;
        pretty_assert_eq!(second.outcome(), Outcome::Conflict);
        pretty_assert_eq!(second.message(), Some(message::LOGIN_ALREADY_IN_USE));
        Ok(())
    })
    .await
}
