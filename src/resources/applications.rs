use crate::action::Action;
use crate::resources::{idempotency_key, ApplicationForm, BusinessCustomer};
use crate::schema::ResourceDefinition;
use crate::types::{AttrType, Industry};

/// Business onboarding application at `/applications`.
pub struct BusinessApplication;

impl BusinessApplication {
    pub const NAME: &'static str = "BusinessApplication";

    pub fn definition() -> ResourceDefinition {
        ResourceDefinition::builder(Self::NAME, "businessApplication", "/applications")
            .defaulted("idempotency_key", AttrType::String, idempotency_key)
            .attribute("tags", AttrType::Hash)
            .readonly("status", AttrType::String)
            .readonly("message", AttrType::String)
            .readonly("created_at", AttrType::DateTime)
            .readonly("updated_at", AttrType::DateTime)
            .readonly("archived", AttrType::Boolean)
            .attribute("name", AttrType::String)
            .attribute("dba", AttrType::String)
            .attribute("address", AttrType::Address)
            .attribute("phone", AttrType::Phone)
            .attribute("state_of_incorporation", AttrType::String)
            .attribute("ein", AttrType::String)
            .attribute("entity_type", AttrType::String)
            .attribute("website", AttrType::String)
            .attribute("contact", AttrType::BusinessContact)
            .attribute("officer", AttrType::Officer)
            .attribute("beneficial_owners", AttrType::list_of(AttrType::BeneficialOwner))
            .attribute("year_of_incorporation", AttrType::String)
            .attribute("stock_symbol", AttrType::String)
            .attribute("industry", AttrType::Enum(Industry::SPEC))
            .attribute("operating_address", AttrType::Address)
            // required when any officer or beneficial owner is not a US national
            .attribute("annual_revenue", AttrType::String)
            .attribute("number_of_employees", AttrType::String)
            .attribute("cash_flow", AttrType::String)
            .attribute("countries_of_operation", AttrType::list_of(AttrType::String))
            .attribute("ip", AttrType::String)
            .attribute("device_fingerprints", AttrType::list())
            .attribute("banks", AttrType::list())
            .belongs_to("customer", BusinessCustomer::NAME)
            .belongs_to("application_form", ApplicationForm::NAME)
            .build()
    }

    pub fn cancel(reason: Option<&str>) -> Action {
        Action::new("cancel", "applicationCancel").attribute("reason", reason)
    }
}
