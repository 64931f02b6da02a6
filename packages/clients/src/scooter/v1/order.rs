//! Order listing types.
//!
//! Orders are owned by the service; the suite only reads them, so an [`Order`]
//! keeps whatever fields the service reports without requiring any of them.

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::CourierId;

/// A single order as reported by the list endpoint.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<i64>,

    /// Every other field, as reported.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Order {
    /// Look up a field that isn't modelled explicitly.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// Pagination details reported alongside an order list.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PageInfo {
    pub page: u64,
    pub total: u64,
    pub limit: u64,
}

/// The body of the order list endpoint.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct OrderList {
    pub orders: Vec<Order>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_stations: Vec<Value>,
}

/// Filters for the order list endpoint.
///
/// Every filter is optional; an empty query lists all orders.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct OrderListQuery {
    /// Only orders assigned to this courier.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub courier_id: Option<CourierId>,

    /// Maximum orders per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    /// Zero-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
}

impl OrderListQuery {
    /// Whether the query applies no filters.
    pub fn is_empty(&self) -> bool {
        let Self {
            courier_id,
            limit,
            page,
        } = self;
        courier_id.is_none() && limit.is_none() && page.is_none()
    }
}
