use crate::database::Storage;
use crate::models::Alert;
use crate::utils::error::AppError;
use serde::Serialize;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AlertsResponse {
    pub ok: bool,
    pub alerts: Vec<Alert>,
}

/// Alert history for a user, oldest first. Never fails; unknown users get
/// an empty list.
pub async fn list_alerts(store: &impl Storage, user_id: &str) -> Result<AlertsResponse, AppError> {
    let alerts = store.list_alerts(user_id).await?;

    Ok(AlertsResponse { ok: true, alerts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::JsonStore;
    use uuid::Uuid;

    #[tokio::test]
    async fn history_comes_back_in_append_order() {
        let path = std::env::temp_dir().join(format!("safety-db-{}.json", Uuid::new_v4()));
        let store = JsonStore::open(path).unwrap();

        for (i, (lat, lon)) in [(12.9, 77.6), (13.0, 77.7)].iter().enumerate() {
            store
                .append_alert(Alert {
                    id: Uuid::new_v4().to_string(),
                    user_id: "u1".to_string(),
                    latitude: *lat,
                    longitude: *lon,
                    time: i as i64,
                })
                .await
                .unwrap();
        }

        let response = list_alerts(&store, "u1").await.unwrap();
        assert!(response.ok);
        assert_eq!(response.alerts.len(), 2);
        assert!(response.alerts[0].time < response.alerts[1].time);

        assert!(list_alerts(&store, "u2").await.unwrap().alerts.is_empty());
    }
}
