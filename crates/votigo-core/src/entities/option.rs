use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A selectable choice within a category.
///
/// `sort_order` is the insertion index within the category; it drives the
/// default display order and breaks ties in tallies.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PollOption {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub sort_order: i64,
}
