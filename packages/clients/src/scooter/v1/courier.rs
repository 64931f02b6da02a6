//! Courier payloads and credentials.

use bon::Builder;
use derive_more::{Debug, Display, From};
use serde::{Deserialize, Serialize};

/// The identifier the service assigns to a courier.
///
/// Couriers don't have an id when they're created; the service reports it on
/// the first successful login.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
#[debug("{_0}")]
pub struct CourierId(i64);

impl CourierId {
    /// View the id as its raw integer value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Whether the service assigned a usable id.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

/// A courier account payload, as sent to the creation endpoint.
///
/// `login` and `password` are required by the service but are optional here
/// so that deliberately invalid payloads can be expressed. When absent they
/// serialize as an explicit `null`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct Courier {
    /// Unique among active couriers.
    #[builder(into)]
    pub login: Option<String>,

    #[builder(into)]
    #[debug(skip)]
    pub password: Option<String>,

    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}

impl Courier {
    /// A copy of this courier with `login` replaced.
    pub fn with_login(&self, login: impl Into<String>) -> Self {
        Self {
            login: Some(login.into()),
            ..self.clone()
        }
    }

    /// A copy of this courier with no `login`.
    pub fn without_login(&self) -> Self {
        Self {
            login: None,
            ..self.clone()
        }
    }

    /// A copy of this courier with `password` replaced.
    pub fn with_password(&self, password: impl Into<String>) -> Self {
        Self {
            password: Some(password.into()),
            ..self.clone()
        }
    }

    /// A copy of this courier with no `password`.
    pub fn without_password(&self) -> Self {
        Self {
            password: None,
            ..self.clone()
        }
    }

    /// A copy of this courier with `first_name` replaced.
    pub fn with_first_name(&self, first_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            ..self.clone()
        }
    }

    /// The credentials used to log in as this courier.
    pub fn credentials(&self) -> CourierCredentials {
        CourierCredentials::from(self)
    }
}

/// The login and password pair used to authenticate a courier.
///
/// This is a strict projection of [`Courier`]: it carries nothing else. Either
/// field may be `None` to probe the service's validation; missing fields
/// serialize as an explicit `null`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Builder)]
pub struct CourierCredentials {
    #[builder(into)]
    pub login: Option<String>,

    #[builder(into)]
    #[debug(skip)]
    pub password: Option<String>,
}

impl CourierCredentials {
    /// A copy of these credentials with `login` replaced.
    pub fn with_login(&self, login: impl Into<String>) -> Self {
        Self {
            login: Some(login.into()),
            ..self.clone()
        }
    }

    /// A copy of these credentials with no `login`.
    pub fn without_login(&self) -> Self {
        Self {
            login: None,
            ..self.clone()
        }
    }

    /// A copy of these credentials with `password` replaced.
    pub fn with_password(&self, password: impl Into<String>) -> Self {
        Self {
            password: Some(password.into()),
            ..self.clone()
        }
    }

    /// A copy of these credentials with no `password`.
    pub fn without_password(&self) -> Self {
        Self {
            password: None,
            ..self.clone()
        }
    }
}

impl From<&Courier> for CourierCredentials {
    fn from(courier: &Courier) -> Self {
        Self {
            login: courier.login.clone(),
            password: courier.password.clone(),
        }
    }
}

impl From<Courier> for CourierCredentials {
    fn from(courier: Courier) -> Self {
        Self {
            login: courier.login,
            password: courier.password,
        }
    }
}

impl From<&CourierCredentials> for CourierCredentials {
    fn from(credentials: &CourierCredentials) -> Self {
        credentials.clone()
    }
}
