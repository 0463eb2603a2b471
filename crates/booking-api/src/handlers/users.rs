//! User account handlers
//!
//! Signup, login, profile reads/updates, password changes, and the
//! purchase-history view.

use axum::extract::State;
use booking_service::{
    AuthService, ChangePasswordRequest, CreditService, LoginRequest, LoginResponse,
    ProfileResponse, PurchaseHistoryItem, SignupRequest, SignupResponse, UpdateProfileRequest,
    UpdatedNameResponse,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiData, ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /api/users/signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<Created<SignupResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.signup(request).await?;
    Ok(Created(response))
}

/// Login with email and password
///
/// POST /api/users/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Created<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Created(response))
}

/// Get the acting user's profile
///
/// GET /api/users/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiData<ProfileResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.get_profile(auth.user_id()).await?;
    Ok(ApiData(response))
}

/// Update the acting user's display name
///
/// PUT /api/users/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Created<UpdatedNameResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.update_profile(auth.user_id(), request).await?;
    Ok(Created(response))
}

/// Change the acting user's password
///
/// PUT /api/users/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<Created<()>> {
    let service = AuthService::new(state.service_context());
    service.change_password(auth.user_id(), request).await?;
    Ok(Created(()))
}

/// Purchase history for the acting user
///
/// GET /api/users/credit-package
pub async fn purchased_packages(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiData<Vec<PurchaseHistoryItem>>> {
    let service = CreditService::new(state.service_context());
    let response = service.purchase_history(auth.user_id()).await?;
    Ok(ApiData(response))
}
