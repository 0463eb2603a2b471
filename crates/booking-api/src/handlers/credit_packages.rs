//! Credit package handlers
//!
//! Package administration plus the purchase route for authenticated users.

use axum::extract::{Path, State};
use booking_service::{
    CreateCreditPackageRequest, CreditPackageResponse, CreditPackageService,
};

use crate::extractors::{AuthUser, CreditPackageIdPath, ValidatedJson};
use crate::response::{ApiData, ApiResult};
use crate::state::AppState;

/// List all purchasable packages
///
/// GET /api/credit-package
pub async fn list_packages(
    State(state): State<AppState>,
) -> ApiResult<ApiData<Vec<CreditPackageResponse>>> {
    let service = CreditPackageService::new(state.service_context());
    let response = service.list_packages().await?;
    Ok(ApiData(response))
}

/// Add a new credit package
///
/// POST /api/credit-package
pub async fn add_package(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCreditPackageRequest>,
) -> ApiResult<ApiData<CreditPackageResponse>> {
    let service = CreditPackageService::new(state.service_context());
    let response = service.add_package(request).await?;
    Ok(ApiData(response))
}

/// Delete a credit package
///
/// DELETE /api/credit-package/:credit_package_id
pub async fn delete_package(
    State(state): State<AppState>,
    Path(path): Path<CreditPackageIdPath>,
) -> ApiResult<ApiData<()>> {
    let package_id = path.credit_package_id()?;
    let service = CreditPackageService::new(state.service_context());
    service.remove_package(package_id).await?;
    Ok(ApiData(()))
}

/// Purchase a package for the acting user
///
/// POST /api/credit-package/:credit_package_id
pub async fn purchase_package(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CreditPackageIdPath>,
) -> ApiResult<ApiData<()>> {
    let package_id = path.credit_package_id()?;
    let service = CreditPackageService::new(state.service_context());
    service.purchase_package(auth.user_id(), package_id).await?;
    Ok(ApiData(()))
}
