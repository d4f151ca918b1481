//! Business debit cards at `/cards`. Card actions are bodiless except `replace`.

use crate::action::Action;
use crate::resources::{idempotency_key, BusinessCustomer, WalletAccount};
use crate::schema::{DefinitionBuilder, ResourceDefinition};
use crate::types::{Address, AttrType, Serializable};

fn cardholder(builder: DefinitionBuilder) -> DefinitionBuilder {
    builder
        .attribute("full_name", AttrType::FullName)
        .attribute("date_of_birth", AttrType::Date)
        .attribute("address", AttrType::Address)
}

fn card_details(builder: DefinitionBuilder) -> DefinitionBuilder {
    builder
        .attribute("phone", AttrType::Phone)
        .attribute("email", AttrType::String)
}

fn identity_and_state(builder: DefinitionBuilder) -> DefinitionBuilder {
    builder
        .attribute("ssn", AttrType::String)
        .attribute("passport", AttrType::String)
        .attribute("nationality", AttrType::String)
        .readonly("created_at", AttrType::DateTime)
        .readonly("updated_at", AttrType::DateTime)
        .readonly("last4_digits", AttrType::String)
        .readonly("expiration_date", AttrType::String)
        .readonly("bin", AttrType::String)
        .readonly("status", AttrType::String)
        .belongs_to("account", WalletAccount::NAME)
        .belongs_to("customer", BusinessCustomer::NAME)
        // the card endpoints reject idempotencyKey on PATCH
        .exclude_from_update("idempotency_key")
}

/// Physical business debit card.
pub struct BusinessDebitCard;

impl BusinessDebitCard {
    pub const NAME: &'static str = "BusinessDebitCard";

    pub fn definition() -> ResourceDefinition {
        let builder = cardholder(ResourceDefinition::builder(Self::NAME, "businessDebitCard", "/cards"))
            .attribute("shipping_address", AttrType::Address);
        let builder = card_details(builder)
            .attribute("design", AttrType::String)
            .attribute("additional_embossed_text", AttrType::String)
            .defaulted("idempotency_key", AttrType::String, idempotency_key)
            .attribute("tags", AttrType::Hash)
            .attribute("limits", AttrType::Hash)
            .attribute("print_only_business_name", AttrType::Boolean);
        identity_and_state(builder).build()
    }

    pub fn report_stolen() -> Action {
        Action::bare("report-stolen")
    }

    pub fn report_lost() -> Action {
        Action::bare("report-lost")
    }

    pub fn close() -> Action {
        Action::bare("close")
    }

    pub fn freeze() -> Action {
        Action::bare("freeze")
    }

    pub fn unfreeze() -> Action {
        Action::bare("unfreeze")
    }

    /// Reissues the card, optionally shipping to a different address.
    pub fn replace(shipping_address: Option<&Address>) -> Action {
        Action::new("replace", "replaceCard").attribute("shipping_address", shipping_address.map(Address::to_wire))
    }
}

pub struct BusinessVirtualDebitCard;

impl BusinessVirtualDebitCard {
    pub const NAME: &'static str = "BusinessVirtualDebitCard";

    pub fn definition() -> ResourceDefinition {
        let builder = card_details(cardholder(ResourceDefinition::builder(
            Self::NAME,
            "businessVirtualDebitCard",
            "/cards",
        )))
        .defaulted("idempotency_key", AttrType::String, idempotency_key)
        .attribute("tags", AttrType::Hash)
        .attribute("limits", AttrType::Hash);
        identity_and_state(builder).build()
    }

    pub fn report_stolen() -> Action {
        Action::bare("report-stolen")
    }

    pub fn report_lost() -> Action {
        Action::bare("report-lost")
    }

    pub fn close() -> Action {
        Action::bare("close")
    }

    pub fn freeze() -> Action {
        Action::bare("freeze")
    }

    pub fn unfreeze() -> Action {
        Action::bare("unfreeze")
    }
}
