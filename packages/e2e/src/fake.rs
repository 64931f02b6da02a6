//! An in-process stand-in for the Scooter API.
//!
//! This answers the endpoints the suite exercises the way the live service
//! does, including its messages and its quirks (a `null` password at login is
//! answered with a 504), so that the suite can run without network access.
//! Each instance owns its own accounts and binds its own port, so tests using
//! separate instances are isolated from one another.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use bon::bon;
use clients::scooter::v1::{CourierId, message};
use color_eyre::{Result, eyre::Context};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};
use url::Url;

/// Orders per page when the request doesn't say.
const DEFAULT_PAGE_LIMIT: usize = 30;

/// A running fake service.
///
/// The server stops when this is dropped.
#[derive(Debug)]
pub struct FakeService {
    url: Url,
    accounts: SharedAccounts,
    task: JoinHandle<()>,
}

#[bon]
impl FakeService {
    /// Start a fake service on an ephemeral local port.
    #[builder(finish_fn = spawn)]
    pub async fn new(
        /// How many orders to seed the order list with.
        #[builder(default = 3)]
        orders: usize,
    ) -> Result<Self> {
        let state = Arc::new(Mutex::new(Accounts::default()));
        let orders = Arc::new((0..orders).map(seed_order).collect::<Vec<_>>());
        let router = router(state.clone(), orders);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("bind fake service")?;
        let local_addr = listener.local_addr().context("get local addr")?;
        let url = Url::parse(&format!("http://{local_addr}/api/v1/")).context("parse base URL")?;

        let task = tokio::task::spawn(async move {
            if let Err(error) = axum::serve(listener, router).await {
                error!(?error, "fake.serve.error");
            }
        });

        info!(%url, "fake.started");
        Ok(Self {
            url,
            accounts: state,
            task,
        })
    }
}

impl FakeService {
    /// The API base URL of the service.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Ids of the couriers deleted so far, oldest deletion first.
    pub fn deleted(&self) -> Vec<CourierId> {
        lock(&self.accounts)
            .deleted
            .iter()
            .copied()
            .map(CourierId::from)
            .collect()
    }
}

impl Drop for FakeService {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[derive(Debug)]
struct Account {
    id: i64,
    password: String,
}

#[derive(Debug, Default)]
struct Accounts {
    by_login: HashMap<String, Account>,
    last_id: i64,
    deleted: Vec<i64>,
}

type SharedAccounts = Arc<Mutex<Accounts>>;
type SharedOrders = Arc<Vec<Value>>;

fn lock(accounts: &SharedAccounts) -> MutexGuard<'_, Accounts> {
    accounts.lock().unwrap_or_else(PoisonError::into_inner)
}

fn router(accounts: SharedAccounts, orders: SharedOrders) -> Router {
    let couriers = Router::new()
        .route("/api/v1/courier", post(create_courier))
        .route("/api/v1/courier/login", post(login_courier))
        .route("/api/v1/courier/{id}", delete(delete_courier))
        .with_state(accounts.clone());
    let orders = Router::new()
        .route("/api/v1/orders", get(list_orders))
        .with_state((accounts, orders));
    couriers.merge(orders)
}

/// Fields the service treats as present: set and not empty.
fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateCourierRequest {
    login: Option<String>,
    password: Option<String>,
    #[allow(dead_code)]
    first_name: Option<String>,
}

#[derive(Debug)]
enum CreateCourierResponse {
    Created,
    InsufficientData,
    LoginInUse,
}

#[tracing::instrument(skip(accounts, request), fields(login = ?request.login))]
async fn create_courier(
    State(accounts): State<SharedAccounts>,
    Json(request): Json<CreateCourierRequest>,
) -> CreateCourierResponse {
    let (Some(login), Some(password)) = (present(request.login), present(request.password)) else {
        debug!("fake.courier.create.insufficient");
        return CreateCourierResponse::InsufficientData;
    };

    let mut accounts = lock(&accounts);
    if accounts.by_login.contains_key(&login) {
        debug!("fake.courier.create.conflict");
        return CreateCourierResponse::LoginInUse;
    }

    accounts.last_id += 1;
    let id = accounts.last_id;
    accounts.by_login.insert(login, Account { id, password });
    debug!(id, "fake.courier.create.success");
    CreateCourierResponse::Created
}

impl IntoResponse for CreateCourierResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Created => (StatusCode::CREATED, Json(json!({ "ok": true }))).into_response(),
            Self::InsufficientData => {
                failure(StatusCode::BAD_REQUEST, message::CREATE_INSUFFICIENT_DATA)
            }
            Self::LoginInUse => failure(StatusCode::CONFLICT, message::LOGIN_ALREADY_IN_USE),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    login: Option<String>,
    password: Option<String>,
}

#[derive(Debug)]
enum LoginResponse {
    Success(i64),
    InsufficientData,
    NotFound,
    GatewayTimeout,
}

#[tracing::instrument(skip(accounts, request), fields(login = ?request.login))]
async fn login_courier(
    State(accounts): State<SharedAccounts>,
    Json(request): Json<LoginRequest>,
) -> LoginResponse {
    let Some(login) = present(request.login) else {
        debug!("fake.courier.login.insufficient");
        return LoginResponse::InsufficientData;
    };

    // The live service times out instead of validating a null password.
    let Some(password) = request.password else {
        debug!("fake.courier.login.timeout");
        return LoginResponse::GatewayTimeout;
    };
    if password.is_empty() {
        debug!("fake.courier.login.insufficient");
        return LoginResponse::InsufficientData;
    }

    match lock(&accounts).by_login.get(&login) {
        Some(account) if account.password == password => {
            debug!(id = account.id, "fake.courier.login.success");
            LoginResponse::Success(account.id)
        }
        _ => {
            debug!("fake.courier.login.not_found");
            LoginResponse::NotFound
        }
    }
}

impl IntoResponse for LoginResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Success(id) => (StatusCode::OK, Json(json!({ "id": id }))).into_response(),
            Self::InsufficientData => {
                failure(StatusCode::BAD_REQUEST, message::LOGIN_INSUFFICIENT_DATA)
            }
            Self::NotFound => failure(StatusCode::NOT_FOUND, message::ACCOUNT_NOT_FOUND),
            Self::GatewayTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "<html><body><h1>504 Gateway Time-out</h1></body></html>",
            )
                .into_response(),
        }
    }
}

#[derive(Debug)]
enum DeleteCourierResponse {
    Deleted,
    NotFound,
}

#[tracing::instrument(skip(accounts))]
async fn delete_courier(
    State(accounts): State<SharedAccounts>,
    Path(id): Path<i64>,
) -> DeleteCourierResponse {
    let mut accounts = lock(&accounts);
    let before = accounts.by_login.len();
    accounts.by_login.retain(|_, account| account.id != id);
    if accounts.by_login.len() < before {
        accounts.deleted.push(id);
        debug!("fake.courier.delete.success");
        DeleteCourierResponse::Deleted
    } else {
        debug!("fake.courier.delete.not_found");
        DeleteCourierResponse::NotFound
    }
}

impl IntoResponse for DeleteCourierResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Deleted => (StatusCode::OK, Json(json!({ "ok": true }))).into_response(),
            Self::NotFound => failure(StatusCode::NOT_FOUND, message::COURIER_ID_NOT_FOUND),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListOrdersQuery {
    courier_id: Option<i64>,
    limit: Option<usize>,
    page: Option<usize>,
}

#[derive(Debug)]
enum ListOrdersResponse {
    Orders {
        orders: Vec<Value>,
        page: usize,
        limit: usize,
        total: usize,
    },
    UnknownCourier(i64),
}

#[tracing::instrument(skip(accounts, orders))]
async fn list_orders(
    State((accounts, orders)): State<(SharedAccounts, SharedOrders)>,
    Query(query): Query<ListOrdersQuery>,
) -> ListOrdersResponse {
    if let Some(courier_id) = query.courier_id {
        let known = lock(&accounts)
            .by_login
            .values()
            .any(|account| account.id == courier_id);
        if !known {
            debug!(courier_id, "fake.orders.list.unknown_courier");
            return ListOrdersResponse::UnknownCourier(courier_id);
        }
    }

    let matching = orders
        .iter()
        .filter(|order| match query.courier_id {
            Some(courier_id) => order.get("courierId").and_then(Value::as_i64) == Some(courier_id),
            None => true,
        })
        .collect::<Vec<_>>();

    let limit = query.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
    let page = query.page.unwrap_or_default();
    let total = matching.len();
    let orders = matching
        .into_iter()
        .skip(page.saturating_mul(limit))
        .take(limit)
        .cloned()
        .collect::<Vec<_>>();

    debug!(returned = orders.len(), total, "fake.orders.list.success");
    ListOrdersResponse::Orders {
        orders,
        page,
        limit,
        total,
    }
}

impl IntoResponse for ListOrdersResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Orders {
                orders,
                page,
                limit,
                total,
            } => (
                StatusCode::OK,
                Json(json!({
                    "orders": orders,
                    "pageInfo": { "page": page, "total": total, "limit": limit },
                    "availableStations": [],
                })),
            )
                .into_response(),
            Self::UnknownCourier(id) => failure(
                StatusCode::NOT_FOUND,
                &format!("Курьер с идентификатором {id} не найден"),
            ),
        }
    }
}

fn failure(status: StatusCode, message: &str) -> axum::response::Response {
    let body = json!({ "code": status.as_u16(), "message": message });
    (status, Json(body)).into_response()
}

fn seed_order(index: usize) -> Value {
    json!({
        "id": index + 1,
        "courierId": null,
        "firstName": "Naruto",
        "lastName": "Uchiha",
        "address": format!("Konoha, {} apt.", index + 142),
        "metroStation": "4",
        "phone": "+7 800 355 35 35",
        "rentTime": 5,
        "deliveryDate": "2020-06-06T00:00:00.000Z",
        "track": 100_000 + index,
        "color": ["BLACK"],
        "comment": "Saske, come back to Konoha",
        "status": 0,
    })
}
