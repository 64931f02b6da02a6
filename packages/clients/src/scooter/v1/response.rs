//! The uniform result of every client operation.

use color_eyre::{
    Result, Section, SectionExt,
    eyre::{Context, eyre},
};
use derive_more::Display;
use http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use super::{CourierId, Order, OrderList};

/// How the service answered a request.
///
/// The client never acts on this: it's here so that scenarios can assert the
/// kind of answer they expect without matching on raw status codes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display)]
pub enum Outcome {
    /// 201: the entity was created.
    #[display("created")]
    Created,

    /// 200: the request succeeded.
    #[display("ok")]
    Ok,

    /// 400: a required field was missing.
    #[display("validation error")]
    Validation,

    /// 404: the login, password, or id is unknown.
    #[display("not found")]
    NotFound,

    /// 409: the login is already in use.
    #[display("conflict")]
    Conflict,

    /// 504: observed when logging in with a `null` password.
    ///
    /// This looks like an upstream timeout in the service rather than
    /// intended behavior, but it is what the service does.
    #[display("upstream anomaly")]
    UpstreamAnomaly,

    /// Any other status.
    #[display("unexpected status: {_0}")]
    Unexpected(StatusCode),
}

impl From<StatusCode> for Outcome {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::CREATED => Self::Created,
            StatusCode::OK => Self::Ok,
            StatusCode::BAD_REQUEST => Self::Validation,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::CONFLICT => Self::Conflict,
            StatusCode::GATEWAY_TIMEOUT => Self::UpstreamAnomaly,
            status => Self::Unexpected(status),
        }
    }
}

/// A response from the service: its status and body.
///
/// The body is kept as JSON and fields are read by path, so a response can be
/// inspected whatever its shape. Bodies that are not JSON (such as gateway
/// error pages) are available as [`ApiResponse::text`] and read as `null`.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct ApiResponse {
    pub status: StatusCode,
    pub url: Url,
    pub body: Value,
    pub text: String,
}

impl ApiResponse {
    /// Construct a response from its status and raw body text.
    pub fn new(status: StatusCode, url: Url, text: impl Into<String>) -> Self {
        let text = text.into();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self {
            status,
            url,
            body,
            text,
        }
    }

    /// Classify the status of the response.
    pub fn outcome(&self) -> Outcome {
        Outcome::from(self.status)
    }

    /// Look up a field in the body by path.
    ///
    /// Paths are dot separated field names; numeric segments index into
    /// arrays (`orders.0.id`). The empty path is the whole body.
    pub fn path(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return Some(&self.body);
        }
        let pointer = path
            .split('.')
            .map(|segment| segment.replace('~', "~0").replace('/', "~1"))
            .fold(String::new(), |pointer, segment| pointer + "/" + &segment);
        self.body.pointer(&pointer)
    }

    /// Extract a typed field from the body by path.
    pub fn extract<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let Some(value) = self.path(path) else {
            return Err(eyre!("missing field: {path:?}"))
                .with_section(|| self.status.to_string().header("Status:"))
                .with_section(|| self.url.to_string().header("Url:"))
                .with_section(|| self.text.clone().header("Body:"));
        };
        serde_json::from_value(value.clone())
            .with_context(|| format!("deserialize field: {path:?}"))
            .with_section(|| self.text.clone().header("Body:"))
    }

    /// Deserialize the whole body.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        self.extract("")
    }

    /// The `ok` flag reported on successful creation.
    pub fn ok(&self) -> Option<bool> {
        self.path("ok").and_then(Value::as_bool)
    }

    /// The courier id reported on successful login.
    pub fn id(&self) -> Option<CourierId> {
        self.path("id").and_then(Value::as_i64).map(CourierId::from)
    }

    /// The message reported on failure.
    pub fn message(&self) -> Option<&str> {
        self.path("message").and_then(Value::as_str)
    }

    /// The orders reported by the list endpoint.
    pub fn orders(&self) -> Result<Vec<Order>> {
        self.extract("orders")
    }

    /// The full body of the list endpoint.
    pub fn order_list(&self) -> Result<OrderList> {
        self.json()
    }
}
