use crate::api::metrics;
use crate::database::Storage;
use crate::models::Alert;
use crate::services::sms_service::SmsChannel;
use crate::utils::error::AppError;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==================== REQUEST/RESPONSE MODELS ====================

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SosRequest {
    pub user_id: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SosResponse {
    /// Whether the SMS fan-out succeeded. The alert is recorded either way.
    pub ok: bool,
    pub alert_id: String,
}

// ==================== SERVICE FUNCTIONS ====================

/// Distress message carried by the SMS channel.
pub fn compose_sos_message(name: &str, latitude: f64, longitude: f64) -> String {
    format!(
        "🚨 SOS ALERT!\n{} is in danger.\nLive Location: https://www.google.com/maps?q={},{}",
        name, latitude, longitude
    )
}

/// Raises an SOS: composes the distress message, attempts one bulk SMS
/// delivery to every saved contact, and appends the alert record.
///
/// Delivery failure is downgraded to `ok:false`; only missing request
/// fields or a storage failure abort the operation.
pub async fn raise_sos(
    store: &impl Storage,
    sms: &impl SmsChannel,
    request: &SosRequest,
) -> Result<SosResponse, AppError> {
    let (user_id, latitude, longitude) = match (
        request.user_id.as_deref().filter(|s| !s.is_empty()),
        request.latitude,
        request.longitude,
    ) {
        (Some(user_id), Some(lat), Some(lon)) => (user_id, lat, lon),
        _ => return Err(AppError::Validation("Missing fields".to_string())),
    };

    // Lookup failure is non-fatal: the alert still goes out.
    let name = store
        .find_user(user_id)
        .await?
        .map(|u| u.name)
        .unwrap_or_else(|| "User".to_string());

    let contacts = store.list_contacts(user_id).await?;
    let numbers: Vec<String> = contacts.iter().map(|c| c.phone.clone()).collect();

    let message = compose_sos_message(&name, latitude, longitude);

    let delivered = if numbers.is_empty() {
        log::warn!("⚠️ SOS for user {} with no saved contacts", user_id);
        metrics::increment_sms_failures();
        false
    } else {
        match sms.send_bulk(&numbers, &message).await {
            Ok(()) => true,
            Err(e) => {
                log::error!("❌ SMS error: {}", e);
                metrics::increment_sms_failures();
                false
            }
        }
    };

    // History is recorded regardless of delivery outcome.
    let alert = Alert {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        latitude,
        longitude,
        time: Utc::now().timestamp_millis(),
    };
    let alert_id = alert.id.clone();
    store.append_alert(alert).await?;

    metrics::increment_alerts_raised();
    log::info!(
        "🚨 SOS raised by {} at ({}, {}) - delivered: {}",
        user_id,
        latitude,
        longitude,
        delivered
    );

    Ok(SosResponse {
        ok: delivered,
        alert_id,
    })
}
