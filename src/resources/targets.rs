//! Read-only resources reached through relationships.

use crate::schema::ResourceDefinition;
use crate::types::AttrType;

pub struct IndividualCustomer;

impl IndividualCustomer {
    pub const NAME: &'static str = "IndividualCustomer";

    pub fn definition() -> ResourceDefinition {
        ResourceDefinition::builder(Self::NAME, "individualCustomer", "/customers")
            .readonly("created_at", AttrType::DateTime)
            .readonly("full_name", AttrType::FullName)
            .readonly("email", AttrType::String)
            .readonly("phone", AttrType::Phone)
            .readonly("address", AttrType::Address)
            .readonly("date_of_birth", AttrType::Date)
            .readonly("status", AttrType::String)
            .attribute("tags", AttrType::Hash)
            .build()
    }
}

pub struct BusinessCustomer;

impl BusinessCustomer {
    pub const NAME: &'static str = "BusinessCustomer";

    pub fn definition() -> ResourceDefinition {
        ResourceDefinition::builder(Self::NAME, "businessCustomer", "/customers")
            .readonly("created_at", AttrType::DateTime)
            .readonly("name", AttrType::String)
            .readonly("dba", AttrType::String)
            .readonly("address", AttrType::Address)
            .readonly("phone", AttrType::Phone)
            .readonly("state_of_incorporation", AttrType::String)
            .readonly("ein", AttrType::String)
            .readonly("entity_type", AttrType::String)
            .readonly("contact", AttrType::BusinessContact)
            .readonly("authorized_users", AttrType::list_of(AttrType::Hash))
            .readonly("status", AttrType::String)
            .attribute("tags", AttrType::Hash)
            .build()
    }
}

/// White-label application form at `/application-forms`.
pub struct ApplicationForm;

impl ApplicationForm {
    pub const NAME: &'static str = "ApplicationForm";

    pub fn definition() -> ResourceDefinition {
        ResourceDefinition::builder(Self::NAME, "applicationForm", "/application-forms")
            .readonly("url", AttrType::String)
            .readonly("stage", AttrType::String)
            .readonly("applicant_details", AttrType::Hash)
            .attribute("tags", AttrType::Hash)
            .build()
    }
}

pub struct Transaction;

impl Transaction {
    pub const NAME: &'static str = "Transaction";

    pub fn definition() -> ResourceDefinition {
        ResourceDefinition::builder(Self::NAME, "transaction", "/transactions")
            .readonly("created_at", AttrType::DateTime)
            .readonly("direction", AttrType::String)
            .readonly("amount", AttrType::Integer)
            .readonly("balance", AttrType::Integer)
            .readonly("summary", AttrType::String)
            .readonly("description", AttrType::String)
            .attribute("tags", AttrType::Hash)
            .build()
    }
}
