//! Scenario orchestration: run a scenario, then release what it created.

use std::{
    panic::AssertUnwindSafe,
    sync::{Mutex, MutexGuard, PoisonError},
};

use clients::scooter::v1::{
    ApiResponse, Courier, CourierClient, CourierCredentials, CourierId, Outcome,
};
use color_eyre::Result;
use futures::FutureExt;
use tracing::{Instrument, debug, info, info_span, instrument, warn};

use crate::TestEnv;

/// A courier the scenario is responsible for deleting.
#[derive(Clone, Debug)]
struct Tracked {
    credentials: Option<CourierCredentials>,
    id: Option<CourierId>,
}

/// A single scenario against the service.
///
/// Couriers created through [`Scenario::create_courier`] are remembered and
/// deleted when the scenario ends, in reverse order of creation. Deletion
/// happens whether the scenario body returned `Ok`, returned `Err`, or
/// panicked on a failed assertion; its own failures are logged and never
/// change the scenario's result.
#[derive(Debug)]
pub struct Scenario {
    name: String,
    couriers: CourierClient,
    tracked: Mutex<Vec<Tracked>>,
}

impl Scenario {
    /// Run `body` as a scenario, then delete the couriers it created.
    ///
    /// If `body` panics the panic is resumed after cleanup.
    pub async fn run<T>(
        env: &TestEnv,
        name: impl Into<String>,
        body: impl AsyncFnOnce(&Scenario) -> Result<T>,
    ) -> Result<T> {
        let scenario = Self {
            name: name.into(),
            couriers: env.couriers(),
            tracked: Mutex::default(),
        };

        let span = info_span!("scenario", name = %scenario.name);
        let outcome = AssertUnwindSafe(body(&scenario))
            .catch_unwind()
            .instrument(span.clone())
            .await;
        scenario.teardown().instrument(span).await;

        match outcome {
            Ok(result) => {
                info!(name = %scenario.name, passed = result.is_ok(), "scenario.finished");
                result
            }
            Err(panic) => {
                info!(name = %scenario.name, "scenario.panicked");
                std::panic::resume_unwind(panic)
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The courier client the scenario uses.
    ///
    /// Couriers created directly through this client are not tracked.
    pub fn couriers(&self) -> &CourierClient {
        &self.couriers
    }

    /// Create a courier, tracking it for deletion if the service accepts it.
    pub async fn create_courier(&self, courier: &Courier) -> Result<ApiResponse> {
        let response = self.couriers.create(courier).await?;
        if response.outcome() == Outcome::Created {
            debug!(login = ?courier.login, "scenario.track.created");
            self.lock().push(Tracked {
                credentials: Some(courier.credentials()),
                id: None,
            });
        }
        Ok(response)
    }

    /// Log in as a courier.
    ///
    /// When the login succeeds for a tracked courier, the id is recorded so
    /// that teardown doesn't need to log in again.
    pub async fn login(&self, credentials: &CourierCredentials) -> Result<ApiResponse> {
        let response = self.couriers.login(credentials).await?;
        if let (Outcome::Ok, Some(id)) = (response.outcome(), response.id()) {
            let mut tracked = self.lock();
            let entry = tracked.iter_mut().find(|entry| {
                entry
                    .credentials
                    .as_ref()
                    .is_some_and(|tracked| tracked.login == credentials.login)
            });
            if let Some(entry) = entry {
                debug!(%id, "scenario.track.id");
                entry.id = Some(id);
            }
        }
        Ok(response)
    }

    /// Track a courier id for deletion.
    pub fn track(&self, id: CourierId) {
        debug!(%id, "scenario.track.explicit");
        self.lock().push(Tracked {
            credentials: None,
            id: Some(id),
        });
    }

    /// How many couriers are waiting to be deleted.
    pub fn pending_cleanup(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Tracked>> {
        self.tracked.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[instrument(skip(self), fields(scenario = %self.name))]
    async fn teardown(&self) {
        let tracked = std::mem::take(&mut *self.lock());
        for entry in tracked.into_iter().rev() {
            let Some(id) = self.resolve(&entry).await else {
                debug!("scenario.teardown.skip");
                continue;
            };
            match self.couriers.delete(id).await {
                Ok(response) if response.outcome() == Outcome::Ok => {
                    debug!(%id, "scenario.teardown.deleted");
                }
                Ok(response) => {
                    warn!(%id, status = %response.status, body = %response.text, "scenario.teardown.unexpected");
                }
                Err(error) => {
                    warn!(%id, ?error, "scenario.teardown.error");
                }
            }
        }
    }

    /// Find the id of a tracked courier, logging in to learn it if needed.
    async fn resolve(&self, entry: &Tracked) -> Option<CourierId> {
        if let Some(id) = entry.id {
            return Some(id);
        }
        let credentials = entry.credentials.as_ref()?;
        match self.couriers.login(credentials).await {
            Ok(response) => response.id().filter(CourierId::is_positive),
            Err(error) => {
                warn!(?error, "scenario.teardown.login_error");
                None
            }
        }
    }
}
