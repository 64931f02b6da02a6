//! Order listing.

use clients::scooter::v1::{OrderListQuery, Outcome};
use color_eyre::Result;
use e2e::{FakeService, TestEnv, fixture};
use pretty_assertions::assert_eq as pretty_assert_eq;

/// A non-empty list depends on the environment having orders in it; the
/// shared test environment and the fake both do.
#[test_log::test(tokio::test)]
async fn order_list_is_returned() -> Result<()> {
    let env = TestEnv::new().await?;

    let response = env.orders().list().await?;
    pretty_assert_eq!(response.outcome(), Outcome::Ok);
    let orders = response.orders()?;
    assert!(!orders.is_empty(), "expected orders in {}", response.url);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn order_list_respects_limit() -> Result<()> {
    let env = TestEnv::new().await?;

    let query = OrderListQuery::builder().limit(1).page(0).build();
    let response = env.orders().list_with(&query).await?;
    pretty_assert_eq!(response.outcome(), Outcome::Ok);

    let list = response.order_list()?;
    assert!(list.orders.len() <= 1, "orders: {:?}", list.orders);
    if let Some(page_info) = list.page_info {
        pretty_assert_eq!(page_info.limit, 1);
        pretty_assert_eq!(page_info.page, 0);
    }

    Ok(())
}

#[test_log::test(tokio::test)]
async fn order_list_for_deleted_courier_is_not_found() -> Result<()> {
    let env = TestEnv::new().await?;
    let courier = fixture::courier();

    let created = env.couriers().create(&courier).await?;
    pretty_assert_eq!(created.outcome(), Outcome::Created);
    let id = env
        .couriers()
        .login(&courier.credentials())
        .await?
        .id()
        .expect("login reports an id");
    let deleted = env.couriers().delete(id).await?;
    pretty_assert_eq!(deleted.outcome(), Outcome::Ok);

    let query = OrderListQuery::builder().courier_id(id).build();
    let response = env.orders().list_with(&query).await?;
    pretty_assert_eq!(response.outcome(), Outcome::NotFound);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn empty_environment_lists_no_orders() -> Result<()> {
    let env = FakeService::builder()
        .orders(0)
        .spawn()
        .await
        .and_then(TestEnv::with_fake)?;

    let response = env.orders().list().await?;
    pretty_assert_eq!(response.outcome(), Outcome::Ok);
    pretty_assert_eq!(response.orders()?.len(), 0);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn order_pages_do_not_overlap() -> Result<()> {
    let env = FakeService::builder()
        .orders(5)
        .spawn()
        .await
        .and_then(TestEnv::with_fake)?;

    let page = |page| OrderListQuery::builder().limit(2).page(page).build();
    let first = env.orders().list_with(&page(0)).await?.order_list()?;
    let last = env.orders().list_with(&page(2)).await?.order_list()?;

    pretty_assert_eq!(first.orders.len(), 2);
    pretty_assert_eq!(last.orders.len(), 1);
    assert_ne!(first.orders[0].id, last.orders[0].id);
    pretty_assert_eq!(first.page_info.map(|info| info.total), Some(5));

    Ok(())
}
