//! Credit package service - package administration and purchases

use tracing::{info, instrument};
use uuid::Uuid;

use booking_core::entities::{CreditPackage, CreditPurchase};

use crate::dto::{CreateCreditPackageRequest, CreditPackageResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Credit package service
pub struct CreditPackageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CreditPackageService<'a> {
    /// Create a new CreditPackageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all purchasable packages
    #[instrument(skip(self))]
    pub async fn list_packages(&self) -> ServiceResult<Vec<CreditPackageResponse>> {
        let packages = self.ctx.credit_package_repo().list().await?;
        Ok(packages.iter().map(CreditPackageResponse::from).collect())
    }

    /// Add a new package; the name must be unique
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn add_package(
        &self,
        request: CreateCreditPackageRequest,
    ) -> ServiceResult<CreditPackageResponse> {
        if self.ctx.credit_package_repo().name_exists(&request.name).await? {
            return Err(ServiceError::conflict("Credit package name already exists"));
        }

        let package = CreditPackage::new(
            Uuid::new_v4(),
            request.name,
            request.credit_amount,
            request.price,
        );
        self.ctx.credit_package_repo().create(&package).await?;

        info!(package_id = %package.id, "Credit package created");

        Ok(CreditPackageResponse::from(&package))
    }

    /// Delete a package by id
    #[instrument(skip(self))]
    pub async fn remove_package(&self, package_id: Uuid) -> ServiceResult<()> {
        self.ctx.credit_package_repo().delete(package_id).await?;
        info!(package_id = %package_id, "Credit package deleted");
        Ok(())
    }

    /// Purchase a package for the acting user
    ///
    /// The credit amount and price are copied onto the append-only purchase
    /// row, so later package edits never rewrite history.
    #[instrument(skip(self))]
    pub async fn purchase_package(&self, user_id: Uuid, package_id: Uuid) -> ServiceResult<()> {
        let package = self
            .ctx
            .credit_package_repo()
            .find_by_id(package_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("CreditPackage", package_id.to_string()))?;

        let purchase = CreditPurchase::new(
            Uuid::new_v4(),
            user_id,
            package.id,
            package.credit_amount,
            package.price,
        );
        self.ctx.credit_purchase_repo().create(&purchase).await?;

        info!(user_id = %user_id, package_id = %package_id, credits = package.credit_amount,
              "Credit package purchased");

        Ok(())
    }
}
