use serde::{Deserialize, Serialize};

/// Emergency contact owned by a user.
///
/// The contact set for a user is replaced wholesale on every save, so ids
/// are regenerated on each save and are not stable across saves.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub phone: String,
}
