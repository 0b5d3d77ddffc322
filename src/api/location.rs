use crate::database::JsonStore;
use crate::services::location_service::{self, LocationRequest};
use actix_web::{web, HttpResponse};

pub async fn update_location(
    store: web::Data<JsonStore>,
    request: web::Json<LocationRequest>,
) -> HttpResponse {
    match location_service::update_location(store.get_ref(), &request).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("❌ Location update failed: {}", e);
            e.to_response()
        }
    }
}
