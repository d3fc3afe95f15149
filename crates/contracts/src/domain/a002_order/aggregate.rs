use crate::enums::StatusTone;
use crate::shared::listing::{FieldValue, ListingConfig, ListingRecord, FILTER_ALL};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

/// Fulfilment status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Delivered,
    Processing,
    Pending,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Processing => "Processing",
            OrderStatus::Pending => "Pending",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            OrderStatus::Delivered => StatusTone::Success,
            OrderStatus::Processing => StatusTone::Info,
            OrderStatus::Pending => StatusTone::Warning,
            OrderStatus::Cancelled => StatusTone::Danger,
        }
    }
}

/// Shipping type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    Standard,
    Express,
    Overnight,
}

impl OrderType {
    pub fn label(&self) -> &'static str {
        match self {
            OrderType::Standard => "Standard",
            OrderType::Express => "Express",
            OrderType::Overnight => "Overnight",
        }
    }

    pub fn all() -> [OrderType; 3] {
        [OrderType::Standard, OrderType::Express, OrderType::Overnight]
    }
}

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub date: NaiveDate,
    #[serde(rename = "totalCents")]
    pub total_cents: i64,
    pub status: OrderStatus,
    #[serde(rename = "type")]
    pub order_type: OrderType,
}

impl ListingRecord for Order {
    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::Text(&self.id)),
            "customer" => Some(FieldValue::Text(&self.customer)),
            "date" => Some(FieldValue::Date(Some(self.date))),
            "total" => Some(FieldValue::Number(self.total_cents)),
            "status" => Some(FieldValue::Text(self.status.label())),
            "type" => Some(FieldValue::Text(self.order_type.label())),
            _ => None,
        }
    }
}

/// Orders page: filter by shipping type, search by order ID or customer.
pub const ORDER_LISTING: ListingConfig = ListingConfig {
    search_fields: &["id", "customer"],
    filter_field: "type",
    filter_options: &[FILTER_ALL, "Standard", "Express", "Overnight"],
    default_sort: None,
};

/// Recent orders shown by the orders page
pub fn sample_orders() -> Result<Vec<Order>> {
    serde_json::from_str(include_str!("sample.json")).context("failed to parse sample orders")
}
