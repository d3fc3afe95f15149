use crate::enums::StatusTone;
use crate::shared::listing::{FieldValue, ListingConfig, ListingRecord, FILTER_ALL};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCategory {
    Electronics,
    Clothing,
    Accessories,
    Home,
}

impl ProductCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "Electronics",
            ProductCategory::Clothing => "Clothing",
            ProductCategory::Accessories => "Accessories",
            ProductCategory::Home => "Home",
        }
    }

    pub fn all() -> [ProductCategory; 4] {
        [
            ProductCategory::Electronics,
            ProductCategory::Clothing,
            ProductCategory::Accessories,
            ProductCategory::Home,
        ]
    }
}

/// Stock status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl ProductStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::InStock => "In Stock",
            ProductStatus::LowStock => "Low Stock",
            ProductStatus::OutOfStock => "Out of Stock",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            ProductStatus::InStock => StatusTone::Success,
            ProductStatus::LowStock => StatusTone::Warning,
            ProductStatus::OutOfStock => StatusTone::Danger,
        }
    }
}

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: ProductCategory,
    #[serde(rename = "priceCents")]
    pub price_cents: i64,
    pub stock: i64,
    pub status: ProductStatus,
}

impl ListingRecord for Product {
    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::Text(&self.id)),
            "name" => Some(FieldValue::Text(&self.name)),
            "category" => Some(FieldValue::Text(self.category.label())),
            "price" => Some(FieldValue::Number(self.price_cents)),
            "stock" => Some(FieldValue::Number(self.stock)),
            "status" => Some(FieldValue::Text(self.status.label())),
            _ => None,
        }
    }
}

/// Products page: filter by category, search by name or ID, insertion order.
pub const PRODUCT_LISTING: ListingConfig = ListingConfig {
    search_fields: &["name", "id"],
    filter_field: "category",
    filter_options: &[FILTER_ALL, "Electronics", "Clothing", "Accessories", "Home"],
    default_sort: None,
};

/// Sample catalogue shown by the products page
pub fn sample_products() -> Result<Vec<Product>> {
    serde_json::from_str(include_str!("sample.json")).context("failed to parse sample products")
}
