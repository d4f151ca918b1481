//! Closed string enumerations.

use crate::error::CastError;
use serde_json::Value;

/// Allow-list backing an enumeration attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumSpec {
    pub label: &'static str,
    pub values: &'static [&'static str],
}

impl EnumSpec {
    /// Normalizes `raw` to its string form and checks membership.
    pub fn cast(&self, raw: &Value) -> Result<Option<String>, CastError> {
        let s = match raw {
            Value::Null => return Ok(None),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        if self.values.contains(&s.as_str()) {
            Ok(Some(s))
        } else {
            Err(CastError::InvalidEnumValue {
                label: self.label,
                value: s,
                allowed: self.values,
            })
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value)
    }
}

macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident, $label:literal { $($konst:ident = $val:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name;

        impl $name {
            $(pub const $konst: &'static str = $val;)+

            pub const VALUES: &'static [&'static str] = &[$($val),+];

            pub const SPEC: EnumSpec = EnumSpec {
                label: $label,
                values: Self::VALUES,
            };

            pub fn values() -> &'static [&'static str] {
                Self::VALUES
            }

            pub fn cast(raw: &Value) -> Result<Option<String>, CastError> {
                Self::SPEC.cast(raw)
            }
        }
    };
}

string_enum! {
    /// Business vertical of an applicant.
    BusinessVertical, "business vertical" {
        ADULT_ENTERTAINMENT_DATING_OR_ESCORT_SERVICES = "AdultEntertainmentDatingOrEscortServices",
        ADVERTISING_OR_MARKETING = "AdvertisingOrMarketing",
        AGRICULTURE_FORESTRY_FISHING_OR_HUNTING = "AgricultureForestryFishingOrHunting",
        ARTS_ENTERTAINMENT_AND_RECREATION = "ArtsEntertainmentAndRecreation",
        BUSINESS_SUPPORT_OR_BUILDING_SERVICES = "BusinessSupportOrBuildingServices",
        CANNABIS = "Cannabis",
        CONSTRUCTION = "Construction",
        DIRECT_MARKETING_OR_TELEMARKETING = "DirectMarketingOrTelemarketing",
        EDUCATIONAL_SERVICES = "EducationalServices",
        FINANCIAL_SERVICES_CRYPTOCURRENCY = "FinancialServicesCryptocurrency",
        FINANCIAL_SERVICES_DEBIT_COLLECTION_OR_CONSOLIDATION = "FinancialServicesDebitCollectionOrConsolidation",
        FINANCIAL_SERVICES_MONEY_SERVICES_BUSINESS_OR_CURRENCY_EXCHANGE = "FinancialServicesMoneyServicesBusinessOrCurrencyExchange",
        FINANCIAL_SERVICES_OTHER = "FinancialServicesOther",
        FINANCIAL_SERVICES_PAYDAY_LENDING = "FinancialServicesPaydayLending",
        GAMING_OR_GAMBLING = "GamingOrGambling",
        HEALTH_CARE_AND_SOCIAL_ASSISTANCE = "HealthCareAndSocialAssistance",
        HOSPITALITY_ACCOMMODATION_OR_FOOD_SERVICES = "HospitalityAccommodationOrFoodServices",
        LEGAL_ACCOUNTING_CONSULTING_OR_COMPUTER_PROGRAMMING = "LegalAccountingConsultingOrComputerProgramming",
        MANUFACTURING = "Manufacturing",
        MINING = "Mining",
        NUTRACEUTICALS = "Nutraceuticals",
        PERSONAL_CARE_SERVICES = "PersonalCareServices",
        PUBLIC_ADMINISTRATION = "PublicAdministration",
        REAL_ESTATE = "RealEstate",
        RELIGIOUS_CIVIC_AND_SOCIAL_ORGANIZATIONS = "ReligiousCivicAndSocialOrganizations",
        REPAIR_AND_MAINTENANCE = "RepairAndMaintenance",
        RETAIL_TRADE = "RetailTrade",
        TECHNOLOGY_MEDIA_OR_TELECOM = "TechnologyMediaOrTelecom",
        TRANSPORTATION_OR_WAREHOUSING = "TransportationOrWarehousing",
        UTILITIES = "Utilities",
        WHOLESALE_TRADE = "WholesaleTrade",
    }
}

string_enum! {
    Industry, "industry" {
        RETAIL = "Retail",
        WHOLESALE = "Wholesale",
        RESTAURANTS = "Restaurants",
        HOSPITALS = "Hospitals",
        CONSTRUCTION = "Construction",
        INSURANCE = "Insurance",
        UNIONS = "Unions",
        REAL_ESTATE = "RealEstate",
        FREELANCE_PROFESSIONAL = "FreelanceProfessional",
        OTHER_PROFESSIONAL_SERVICES = "OtherProfessionalServices",
        ONLINE_RETAILER = "OnlineRetailer",
        OTHER_EDUCATION_SERVICES = "OtherEducationServices",
    }
}

string_enum! {
    /// Officer title.
    Title, "title" {
        CEO = "CEO",
        COO = "COO",
        CFO = "CFO",
        PRESIDENT = "President",
        BENEFITS_ADMINISTRATION_OFFICER = "BenefitsAdministrationOfficer",
        CIO = "CIO",
        VP = "VP",
        AVP = "AVP",
        TREASURER = "Treasurer",
        SECRETARY = "Secretary",
        CONTROLLER = "Controller",
        MANAGER = "Manager",
        PARTNER = "Partner",
        MEMBER = "Member",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_allowed_value_casts_to_itself() {
        for spec in [BusinessVertical::SPEC, Industry::SPEC, Title::SPEC] {
            for value in spec.values {
                assert_eq!(spec.cast(&json!(value)).unwrap().as_deref(), Some(*value));
            }
        }
        assert_eq!(BusinessVertical::values().len(), 31);
        assert_eq!(Industry::values().len(), 12);
        assert_eq!(Title::values().len(), 14);
    }

    #[test]
    fn constants_match_wire_strings() {
        assert_eq!(BusinessVertical::CANNABIS, "Cannabis");
        assert_eq!(BusinessVertical::RETAIL_TRADE, "RetailTrade");
        assert_eq!(Industry::RETAIL, "Retail");
        assert_eq!(Title::BENEFITS_ADMINISTRATION_OFFICER, "BenefitsAdministrationOfficer");
    }

    #[test]
    fn invalid_value_reports_the_allow_list() {
        let err = BusinessVertical::cast(&json!("InvalidValue")).unwrap_err();
        match &err {
            CastError::InvalidEnumValue { value, allowed, .. } => {
                assert_eq!(value, "InvalidValue");
                assert_eq!(*allowed, BusinessVertical::VALUES);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let message = err.to_string();
        assert!(message.starts_with("invalid business vertical: \"InvalidValue\""));
        assert!(message.contains("Allowed values: AdultEntertainmentDatingOrEscortServices"));
        assert!(message.ends_with("WholesaleTrade"));
    }

    #[test]
    fn non_strings_are_stringified_before_validation() {
        assert!(matches!(
            Industry::cast(&json!(123)),
            Err(CastError::InvalidEnumValue { value, .. }) if value == "123"
        ));
        assert_eq!(Title::cast(&Value::Null).unwrap(), None);
    }
}
