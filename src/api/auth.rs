use crate::database::JsonStore;
use crate::services::auth_service;
use crate::services::auth_service::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};
use actix_web::{web, HttpResponse};

#[utoipa::path(
    post,
    path = "/api/signup",
    tag = "Auth",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Signup successful", body = SignupResponse),
        (status = 400, description = "Missing fields or email already registered")
    )
)]
pub async fn signup(
    store: web::Data<JsonStore>,
    request: web::Json<SignupRequest>,
) -> HttpResponse {
    let email = request.email.as_deref().unwrap_or("N/A");
    log::info!("📝 POST /api/signup - email: {}", email);

    match auth_service::register(store.get_ref(), &request).await {
        Ok(response) => {
            log::info!("✅ Signup successful: {}", email);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("❌ Signup failed: {} - {}", email, e);
            e.to_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid credentials")
    )
)]
pub async fn login(store: web::Data<JsonStore>, request: web::Json<LoginRequest>) -> HttpResponse {
    let email = request.email.as_deref().unwrap_or("N/A");
    log::info!("🔐 POST /api/login - email: {}", email);

    match auth_service::login(store.get_ref(), &request).await {
        Ok(response) => {
            log::info!("✅ Login successful: {}", email);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("❌ Login failed: {} - {}", email, e);
            e.to_response()
        }
    }
}
