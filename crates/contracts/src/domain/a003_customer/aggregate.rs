use crate::enums::StatusTone;
use crate::shared::listing::{FieldValue, ListingConfig, ListingRecord, SortDirection, FILTER_ALL};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

/// Customer lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerStatus {
    Active,
    New,
    Inactive,
}

impl CustomerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "Active",
            CustomerStatus::New => "New",
            CustomerStatus::Inactive => "Inactive",
        }
    }

    pub fn all() -> [CustomerStatus; 3] {
        [
            CustomerStatus::Active,
            CustomerStatus::New,
            CustomerStatus::Inactive,
        ]
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            CustomerStatus::Active => StatusTone::Success,
            CustomerStatus::New => StatusTone::Info,
            CustomerStatus::Inactive => StatusTone::Muted,
        }
    }
}

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub orders: i64,
    #[serde(rename = "totalSpentCents")]
    pub total_spent_cents: i64,
    pub status: CustomerStatus,
    /// `None` for customers that never ordered
    #[serde(rename = "lastOrder")]
    pub last_order: Option<NaiveDate>,
}

impl ListingRecord for Customer {
    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::Text(&self.id)),
            "name" => Some(FieldValue::Text(&self.name)),
            "email" => Some(FieldValue::Text(&self.email)),
            "phone" => Some(FieldValue::Text(&self.phone)),
            "orders" => Some(FieldValue::Number(self.orders)),
            "totalSpent" => Some(FieldValue::Number(self.total_spent_cents)),
            "status" => Some(FieldValue::Text(self.status.label())),
            "lastOrder" => Some(FieldValue::Date(self.last_order)),
            _ => None,
        }
    }
}

/// Customers page: filter by status, search by name, email or ID,
/// sorted by name on first render.
pub const CUSTOMER_LISTING: ListingConfig = ListingConfig {
    search_fields: &["name", "email", "id"],
    filter_field: "status",
    filter_options: &[FILTER_ALL, "Active", "New", "Inactive"],
    default_sort: Some(("name", SortDirection::Ascending)),
};

/// Customer base shown by the customers page
pub fn sample_customers() -> Result<Vec<Customer>> {
    serde_json::from_str(include_str!("sample.json")).context("failed to parse sample customers")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listing::{ListingQueryEngine, QueryParams};

    fn names(rows: &[Customer]) -> Vec<&str> {
        rows.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_sample_customers_load() {
        let customers = sample_customers().unwrap();
        assert_eq!(customers.len(), 8);
        assert_eq!(customers[2].total_spent_cents, 375690);
        assert_eq!(customers[4].last_order, None);
        assert_eq!(
            customers[0].last_order,
            NaiveDate::from_ymd_opt(2025, 3, 12)
        );
    }

    #[test]
    fn test_filter_options_match_statuses() {
        let labels: Vec<&str> = CustomerStatus::all().iter().map(|s| s.label()).collect();
        assert_eq!(&CUSTOMER_LISTING.filter_options[1..], labels.as_slice());
    }

    #[test]
    fn test_default_view_is_sorted_by_name() {
        let engine = ListingQueryEngine::new(CUSTOMER_LISTING);
        let customers = sample_customers().unwrap();
        let rows = engine.query(&customers, &engine.default_params());
        assert_eq!(
            names(&rows),
            vec![
                "Emily Davis",
                "Emma White",
                "James Miller",
                "Jennifer Brown",
                "John Doe",
                "Michael Johnson",
                "Robert Wilson",
                "Sarah Smith",
            ]
        );
    }

    #[test]
    fn test_search_by_email_within_status() {
        let engine = ListingQueryEngine::new(CUSTOMER_LISTING);
        let customers = sample_customers().unwrap();
        let params = QueryParams {
            search_text: "example.com".to_string(),
            filter_value: "Inactive".to_string(),
            ..engine.default_params()
        };
        assert_eq!(names(&engine.query(&customers, &params)), vec!["Emma White", "Robert Wilson"]);
    }

    #[test]
    fn test_total_spent_sorts_numerically() {
        let engine = ListingQueryEngine::new(CUSTOMER_LISTING);
        let customers = sample_customers().unwrap();
        let mut params = engine.default_params();
        params.request_sort("totalSpent");
        params.request_sort("totalSpent");

        let rows = engine.query(&customers, &params);
        assert_eq!(names(&rows)[..3], ["Michael Johnson", "John Doe", "Jennifer Brown"]);
        // zero spenders keep their input order at the tail
        assert_eq!(names(&rows)[6..], ["Robert Wilson", "Emma White"]);
    }

    #[test]
    fn test_active_customer_count() {
        let engine = ListingQueryEngine::new(CUSTOMER_LISTING);
        let customers = sample_customers().unwrap();
        assert_eq!(engine.count_matching(&customers, "Active"), 5);
    }
}
