//! Credit package / purchase entity <-> model mappers

use booking_core::entities::{CreditPackage, CreditPurchase};
use booking_core::traits::PurchaseRecord;

use crate::models::{CreditPackageModel, CreditPurchaseModel, PurchaseRecordModel};

impl From<CreditPackageModel> for CreditPackage {
    fn from(model: CreditPackageModel) -> Self {
        CreditPackage {
            id: model.id,
            name: model.name,
            credit_amount: model.credit_amount,
            price: model.price,
            created_at: model.created_at,
        }
    }
}

impl From<CreditPurchaseModel> for CreditPurchase {
    fn from(model: CreditPurchaseModel) -> Self {
        CreditPurchase {
            id: model.id,
            user_id: model.user_id,
            credit_package_id: model.credit_package_id,
            purchased_credits: model.purchased_credits,
            price_paid: model.price_paid,
            purchase_at: model.purchase_at,
            created_at: model.created_at,
        }
    }
}

impl From<PurchaseRecordModel> for PurchaseRecord {
    fn from(model: PurchaseRecordModel) -> Self {
        PurchaseRecord {
            purchased_credits: model.purchased_credits,
            price_paid: model.price_paid,
            name: model.name,
            purchase_at: model.purchase_at,
        }
    }
}
