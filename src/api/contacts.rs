use crate::database::JsonStore;
use crate::services::contact_service;
use crate::services::contact_service::{ContactsResponse, SaveContactsRequest, SaveContactsResponse};
use actix_web::{web, HttpResponse};

#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "Contacts",
    request_body = SaveContactsRequest,
    responses(
        (status = 200, description = "Contact set replaced", body = SaveContactsResponse),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn save_contacts(
    store: web::Data<JsonStore>,
    request: web::Json<SaveContactsRequest>,
) -> HttpResponse {
    let user_id = request.user_id.as_deref().unwrap_or("N/A");
    log::info!("📇 POST /api/contacts - user: {}", user_id);

    match contact_service::save_contacts(store.get_ref(), request.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::warn!("❌ Saving contacts failed: {}", e);
            e.to_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/contacts/{user_id}",
    tag = "Contacts",
    params(
        ("user_id" = String, Path, description = "Owner user id")
    ),
    responses(
        (status = 200, description = "Contacts owned by the user", body = ContactsResponse)
    )
)]
pub async fn list_contacts(
    store: web::Data<JsonStore>,
    user_id: web::Path<String>,
) -> HttpResponse {
    log::info!("📋 GET /api/contacts/{}", user_id);

    match contact_service::list_contacts(store.get_ref(), &user_id).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("❌ Listing contacts failed: {}", e);
            e.to_response()
        }
    }
}
