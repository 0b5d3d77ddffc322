use crate::database::Storage;
use crate::models::{SessionUser, User, UserInfo};
use crate::utils::error::AppError;
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==================== REQUEST/RESPONSE MODELS ====================

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SignupResponse {
    pub ok: bool,
    pub user: UserInfo,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    pub ok: bool,
    pub user: SessionUser,
}

// Empty strings from the form count as missing, same as the frontend.
fn required<'a>(field: &'a Option<String>) -> Option<&'a str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

// ==================== SERVICE FUNCTIONS ====================

/// Registers a new user and returns the public projection.
pub async fn register(
    store: &impl Storage,
    request: &SignupRequest,
) -> Result<SignupResponse, AppError> {
    let (name, email, password) = match (
        required(&request.name),
        required(&request.email),
        required(&request.password),
    ) {
        (Some(name), Some(email), Some(password)) => (name, email, password),
        _ => return Err(AppError::Validation("Missing fields".to_string())),
    };

    let hashed = hash(password, DEFAULT_COST)
        .map_err(|e| AppError::Unexpected(format!("Failed to hash password: {}", e)))?;

    let user = User {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        email: email.to_string(),
        password: hashed,
        phone: required(&request.phone).map(str::to_string),
        created_at: Utc::now().timestamp_millis(),
        last_location: None,
    };

    // Uniqueness check and insert happen atomically in the store.
    let info = UserInfo::from(user.clone());
    store.insert_user(user).await?;

    log::info!("✅ User registered: {}", info.email);

    Ok(SignupResponse { ok: true, user: info })
}

/// Verifies credentials and returns the session projection.
///
/// Unknown email and wrong password produce the same message, so the
/// response does not reveal which one was wrong.
pub async fn login(store: &impl Storage, request: &LoginRequest) -> Result<LoginResponse, AppError> {
    let (email, password) = match (required(&request.email), required(&request.password)) {
        (Some(email), Some(password)) => (email, password),
        _ => return Err(AppError::Auth("Invalid credentials".to_string())),
    };

    let user = store
        .find_user_by_email(email)
        .await?
        .ok_or_else(|| AppError::Auth("Invalid credentials".to_string()))?;

    let valid = verify(password, &user.password)
        .map_err(|e| AppError::Unexpected(format!("Password verification error: {}", e)))?;

    if !valid {
        return Err(AppError::Auth("Invalid credentials".to_string()));
    }

    Ok(LoginResponse {
        ok: true,
        user: SessionUser::from(user),
    })
}
