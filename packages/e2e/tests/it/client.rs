//! Client behavior independent of any particular endpoint.

use clients::scooter::v1::{Client, Outcome};
use color_eyre::Result;
use e2e::FakeService;
use pretty_assertions::assert_eq as pretty_assert_eq;
use url::Url;

#[test_log::test(tokio::test)]
async fn base_url_without_trailing_slash() -> Result<()> {
    let fake = FakeService::builder().spawn().await?;
    let base = fake.url().as_str().trim_end_matches('/');
    let client = Client::new(Url::parse(base)?)?;

    pretty_assert_eq!(client.base().as_str(), fake.url().as_str());
    let response = client.orders().list().await?;
    pretty_assert_eq!(response.outcome(), Outcome::Ok);
    pretty_assert_eq!(response.url.path(), "/api/v1/orders");

    Ok(())
}

#[test_log::test(tokio::test)]
async fn unreachable_service_is_an_error() -> Result<()> {
    // Nothing listens on the tcpmux port.
    let client = Client::new(Url::parse("http://127.0.0.1:1/api/v1/")?)?;
    let result = client.orders().list().await;
    assert!(result.is_err(), "{result:?}");
    Ok(())
}

#[test_log::test(tokio::test)]
async fn gateway_error_page_is_not_json() -> Result<()> {
    let fake = FakeService::builder().spawn().await?;
    let client = Client::new(fake.url().clone())?;
    let courier = e2e::fixture::courier();

    client.couriers().create(&courier).await?;
    let response = client
        .couriers()
        .login(&courier.credentials().without_password())
        .await?;
    pretty_assert_eq!(response.outcome(), Outcome::UpstreamAnomaly);
    pretty_assert_eq!(response.body, serde_json::Value::Null);
    assert!(response.text.contains("504"), "{}", response.text);

    Ok(())
}
