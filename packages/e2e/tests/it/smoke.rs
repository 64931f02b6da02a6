//! Smoke checks.

use color_eyre::Result;
use e2e::{TestEnv, smoke};
use pretty_assertions::assert_eq as pretty_assert_eq;

#[test_log::test(tokio::test)]
async fn smoke_checks_pass() -> Result<()> {
    let env = TestEnv::new().await?;
    let failed = smoke::run_all(&env).await;
    pretty_assert_eq!(failed, Vec::new());
    Ok(())
}
