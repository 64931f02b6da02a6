//! HTTP client for the Scooter v1 API.

use std::sync::Arc;

use color_eyre::{Result, eyre::Context};
use derive_more::{Debug, Display};
use reqwest::RequestBuilder;
use tap::Pipe;
use tracing::{debug, instrument};
use url::Url;

use super::{ApiResponse, Courier, CourierCredentials, CourierId, OrderListQuery};

/// Client for the Scooter API.
///
/// Every operation returns the status and body of the response whatever the
/// status is: a 4xx or 5xx is an answer to assert on, not an error. Only
/// transport failures are reported as errors. Nothing is retried and nothing
/// is cached between calls.
///
/// ## Cloning
///
/// This type is cheaply cloneable, and clones share the underlying HTTP
/// connection pool.
#[derive(Clone, Debug, Display)]
#[display("{base}")]
pub struct Client {
    #[debug("{:?}", base.as_str())]
    base: Arc<Url>,

    #[debug(skip)]
    http: reqwest::Client,
}

impl Client {
    /// Create a new client rooted at the given API base URL.
    ///
    /// Endpoint paths are joined beneath the base, so a base without a
    /// trailing slash is treated as if it had one.
    pub fn new(base: Url) -> Result<Self> {
        let http = reqwest::Client::builder()
            .gzip(true)
            .build()
            .context("build http client")?;

        Ok(Self {
            base: base.pipe(with_trailing_slash).pipe(Arc::new),
            http,
        })
    }

    /// The API base URL.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Operations on couriers.
    pub fn couriers(&self) -> CourierClient {
        CourierClient {
            client: self.clone(),
        }
    }

    /// Operations on orders.
    pub fn orders(&self) -> OrderClient {
        OrderClient {
            client: self.clone(),
        }
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .with_context(|| format!("join {path:?} onto {}", self.base))
    }

    async fn send(&self, request: RequestBuilder) -> Result<ApiResponse> {
        let response = request.send().await.context("send")?;
        let status = response.status();
        let url = response.url().clone();
        let text = response.text().await.context("read body")?;
        Ok(ApiResponse::new(status, url, text))
    }
}

/// Courier endpoints.
#[derive(Clone, Debug, Display)]
#[display("{client}")]
pub struct CourierClient {
    client: Client,
}

impl CourierClient {
    /// Create a courier account.
    ///
    /// Answers 201 with `ok: true`, 400 when login or password is missing, or
    /// 409 when the login is already in use.
    #[instrument(name = "CourierClient::create", skip(self, courier), fields(login = ?courier.login))]
    pub async fn create(&self, courier: &Courier) -> Result<ApiResponse> {
        let url = self.client.url("courier")?;
        let response = self
            .client
            .http
            .post(url)
            .json(courier)
            .pipe(|request| self.client.send(request))
            .await?;
        debug!(status = %response.status, "courier.create");
        Ok(response)
    }

    /// Log in as a courier.
    ///
    /// Answers 200 with the courier `id`, 400 when the login is missing, 404
    /// when the login or password is wrong, or 504 when the password is
    /// `null`.
    #[instrument(name = "CourierClient::login", skip(self, credentials), fields(login = ?credentials.login))]
    pub async fn login(&self, credentials: &CourierCredentials) -> Result<ApiResponse> {
        let url = self.client.url("courier/login")?;
        let response = self
            .client
            .http
            .post(url)
            .json(credentials)
            .pipe(|request| self.client.send(request))
            .await?;
        debug!(status = %response.status, id = ?response.id(), "courier.login");
        Ok(response)
    }

    /// Delete a courier account.
    #[instrument(name = "CourierClient::delete", skip(self))]
    pub async fn delete(&self, id: CourierId) -> Result<ApiResponse> {
        let url = self.client.url(&format!("courier/{id}"))?;
        let response = self
            .client
            .http
            .delete(url)
            .pipe(|request| self.client.send(request))
            .await?;
        debug!(status = %response.status, "courier.delete");
        Ok(response)
    }
}

/// Order endpoints.
#[derive(Clone, Debug, Display)]
#[display("{client}")]
pub struct OrderClient {
    client: Client,
}

impl OrderClient {
    /// List all orders.
    pub async fn list(&self) -> Result<ApiResponse> {
        self.list_with(&OrderListQuery::default()).await
    }

    /// List orders matching the query.
    #[instrument(name = "OrderClient::list_with", skip(self))]
    pub async fn list_with(&self, query: &OrderListQuery) -> Result<ApiResponse> {
        let url = self.client.url("orders")?;
        let request = self.client.http.get(url);
        let request = if query.is_empty() {
            request
        } else {
            request.query(query)
        };
        let response = self.client.send(request).await?;
        debug!(status = %response.status, "orders.list");
        Ok(response)
    }
}

fn with_trailing_slash(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}
