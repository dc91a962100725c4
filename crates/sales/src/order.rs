//! Wire types for inbound and cleaned order lines.

use orderloom_core::Money;
use serde::{Deserialize, Serialize};

/// One inbound platform order line, as received from the marketplace feed.
///
/// `no` is the caller's own sequence number; output numbering is assigned
/// fresh by the pipeline and does not reuse it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputOrder {
    pub no: u32,
    pub platform_product_id: String,
    pub qty: i64,
    pub unit_price: Money,
    pub total_price: Money,
}

/// One itemized output line.
///
/// Material and model ids are present only on lines decoded from a platform
/// product id; consumable lines omit them from the serialized form entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanedOrder {
    pub no: u32,
    pub product_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    pub qty: i64,
    pub unit_price: Money,
    pub total_price: Money,
}
