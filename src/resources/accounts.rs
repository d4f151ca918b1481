use crate::action::Action;
use crate::resources::{idempotency_key, BusinessCustomer, IndividualCustomer};
use crate::schema::ResourceDefinition;
use crate::types::AttrType;

/// Deposit account at `/accounts`.
pub struct DepositAccount;

impl DepositAccount {
    pub const NAME: &'static str = "DepositAccount";

    pub fn definition() -> ResourceDefinition {
        ResourceDefinition::builder(Self::NAME, "depositAccount", "/accounts")
            .attribute("deposit_product", AttrType::String)
            .defaulted("idempotency_key", AttrType::String, idempotency_key)
            .attribute("tags", AttrType::Hash)
            .readonly("created_at", AttrType::DateTime)
            .readonly("name", AttrType::String)
            .readonly("routing_number", AttrType::String)
            .readonly("account_number", AttrType::String)
            .readonly("currency", AttrType::String)
            // amounts in cents
            .readonly("balance", AttrType::Integer)
            .readonly("hold", AttrType::Integer)
            .readonly("available", AttrType::Integer)
            .readonly("status", AttrType::String)
            .readonly("freeze_reason", AttrType::String)
            .readonly("close_reason", AttrType::String)
            .belongs_to("customer", IndividualCustomer::NAME)
            .build()
    }

    pub fn close(reason: Option<&str>) -> Action {
        Action::new("close", "depositAccountClose").attribute("reason", reason)
    }

    pub fn freeze(reason: Option<&str>, reason_text: Option<&str>) -> Action {
        Action::new("freeze", "accountFreeze")
            .attribute("reason", reason)
            .attribute("reason_text", reason_text)
    }

    pub fn unfreeze() -> Action {
        Action::bare("unfreeze")
    }
}

/// Wallet account, also served from `/accounts`.
pub struct WalletAccount;

impl WalletAccount {
    pub const NAME: &'static str = "WalletAccount";

    pub fn definition() -> ResourceDefinition {
        ResourceDefinition::builder(Self::NAME, "walletAccount", "/accounts")
            .attribute("wallet_terms", AttrType::String)
            .defaulted("idempotency_key", AttrType::String, idempotency_key)
            .attribute("tags", AttrType::Hash)
            .readonly("created_at", AttrType::DateTime)
            .readonly("updated_at", AttrType::DateTime)
            .readonly("name", AttrType::String)
            .readonly("routing_number", AttrType::String)
            .readonly("account_number", AttrType::String)
            .readonly("deposit_product", AttrType::String)
            .readonly("currency", AttrType::String)
            .readonly("balance", AttrType::Integer)
            .readonly("hold", AttrType::Integer)
            .readonly("available", AttrType::Integer)
            .readonly("status", AttrType::String)
            .readonly("freeze_reason", AttrType::String)
            .readonly("close_reason", AttrType::String)
            .readonly("fraud_status", AttrType::String)
            .readonly("data_status", AttrType::String)
            .belongs_to("customer", BusinessCustomer::NAME)
            .build()
    }

    pub fn close(reason: Option<&str>) -> Action {
        Action::new("close", "walletAccountClose").attribute("reason", reason)
    }

    pub fn freeze(reason: Option<&str>, reason_text: Option<&str>) -> Action {
        Action::new("freeze", "walletAccountFreeze")
            .attribute("reason", reason)
            .attribute("reason_text", reason_text)
    }

    pub fn unfreeze() -> Action {
        Action::bare("unfreeze")
    }

    pub fn reopen() -> Action {
        Action::bare("reopen")
    }
}
