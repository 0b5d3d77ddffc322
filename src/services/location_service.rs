use crate::database::Storage;
use crate::models::LastLocation;
use crate::utils::error::AppError;
use chrono::Utc;
use serde::{Deserialize, Serialize};

// ==================== REQUEST/RESPONSE MODELS ====================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRequest {
    pub user_id: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub ok: bool,
}

// ==================== SERVICE FUNCTIONS ====================

/// Overwrites the user's last known location with a fresh timestamp.
/// An unknown user or an incomplete update is a no-op, not an error -
/// the position stream keeps firing regardless of what the server knows.
pub async fn update_location(
    store: &impl Storage,
    request: &LocationRequest,
) -> Result<LocationResponse, AppError> {
    if let (Some(user_id), Some(latitude), Some(longitude)) = (
        request.user_id.as_deref().filter(|s| !s.is_empty()),
        request.latitude,
        request.longitude,
    ) {
        let updated = store
            .update_last_location(
                user_id,
                LastLocation {
                    latitude,
                    longitude,
                    time: Utc::now().timestamp_millis(),
                },
            )
            .await?;

        if !updated {
            log::debug!("📍 Location update for unknown user {}", user_id);
        }
    }

    Ok(LocationResponse { ok: true })
}
