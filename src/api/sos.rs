use crate::database::JsonStore;
use crate::services::sms_service::Fast2Sms;
use crate::services::sos_service::{self, SosRequest, SosResponse};
use crate::services::whatsapp_service::{self, WhatsappRequest, WhatsappResponse};
use actix_web::{web, HttpResponse};

/// Country prefix used when normalizing contact numbers for WhatsApp.
#[derive(Clone)]
pub struct CountryCode(pub String);

#[utoipa::path(
    post,
    path = "/api/sos",
    tag = "SOS",
    request_body = SosRequest,
    responses(
        (status = 200, description = "Alert recorded; ok reflects SMS delivery", body = SosResponse),
        (status = 400, description = "Missing fields")
    )
)]
pub async fn raise_sos(
    store: web::Data<JsonStore>,
    sms: web::Data<Fast2Sms>,
    request: web::Json<SosRequest>,
) -> HttpResponse {
    let user_id = request.user_id.as_deref().unwrap_or("N/A");
    log::info!("🚨 POST /api/sos - user: {}", user_id);

    match sos_service::raise_sos(store.get_ref(), sms.get_ref(), &request).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::warn!("❌ SOS rejected for {}: {}", user_id, e);
            e.to_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/sos/whatsapp",
    tag = "SOS",
    request_body = WhatsappRequest,
    responses(
        (status = 200, description = "One deep link per contact", body = WhatsappResponse),
        (status = 400, description = "Missing fields")
    )
)]
pub async fn whatsapp_links(
    country_code: web::Data<CountryCode>,
    request: web::Json<WhatsappRequest>,
) -> HttpResponse {
    log::info!(
        "💬 POST /api/sos/whatsapp - {} contacts",
        request.contacts.as_ref().map(Vec::len).unwrap_or(0)
    );

    match whatsapp_service::whatsapp_links(&request, &country_code.0) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::warn!("❌ WhatsApp dispatch rejected: {}", e);
            e.to_response()
        }
    }
}
