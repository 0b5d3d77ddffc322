use crate::database::JsonStore;
use crate::services::alert_service::{self, AlertsResponse};
use actix_web::{web, HttpResponse};

#[utoipa::path(
    get,
    path = "/api/alerts/{user_id}",
    tag = "SOS",
    params(
        ("user_id" = String, Path, description = "Owner user id")
    ),
    responses(
        (status = 200, description = "Alert history for the user", body = AlertsResponse)
    )
)]
pub async fn list_alerts(store: web::Data<JsonStore>, user_id: web::Path<String>) -> HttpResponse {
    log::info!("🗂️  GET /api/alerts/{}", user_id);

    match alert_service::list_alerts(store.get_ref(), &user_id).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("❌ Listing alerts failed: {}", e);
            e.to_response()
        }
    }
}
