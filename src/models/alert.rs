use serde::{Deserialize, Serialize};

/// Append-only SOS history record. Written whether or not delivery
/// succeeded; never mutated or deleted.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub user_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub time: i64, // epoch millis
}
