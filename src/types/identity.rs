//! Identity-document composites: business officer and beneficial owner.
//!
//! Both enforce the same rule on every construction path, including hydration from a
//! server response: exactly one of SSN or passport, and a passport requires a nationality.
//! `status` is assigned by the server; it is read from the wire and never written back.

use crate::error::CastError;
use crate::types::{from_wire, Address, FullName, Phone, Tags, Title};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

fn check_identity(
    type_name: &'static str,
    ssn: Option<&str>,
    passport: Option<&str>,
    nationality: Option<&str>,
) -> Result<(), CastError> {
    let invalid = |reason| CastError::InvalidCompositeState { type_name, reason };
    match (ssn, passport) {
        (Some(_), Some(_)) => Err(invalid("requires either SSN or passport, but not both")),
        (None, None) => Err(invalid("requires either SSN or passport")),
        (None, Some(_)) if nationality.is_none() => {
            Err(invalid("requires nationality when passport is provided"))
        }
        _ => Ok(()),
    }
}

/// An SSN is sent alone; otherwise the passport goes out with its nationality.
fn keep_one_document(ssn: &Option<String>, passport: &mut Option<String>, nationality: &mut Option<String>) {
    if ssn.is_some() {
        *passport = None;
        *nationality = None;
    }
}

/// Constructor input for [`Officer`], and its wire shape.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OfficerParams {
    #[serde(alias = "full_name", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<FullName>,
    /// One of [`Title::VALUES`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(alias = "date_of_birth", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(alias = "evaluation_params", skip_serializing_if = "Option::is_none")]
    pub evaluation_params: Option<Tags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(alias = "annual_income", skip_serializing_if = "Option::is_none")]
    pub annual_income: Option<Value>,
    #[serde(alias = "source_of_income", skip_serializing_if = "Option::is_none")]
    pub source_of_income: Option<String>,
    #[serde(skip_serializing)]
    pub status: Option<String>,
}

/// Officer representing a business applicant.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "OfficerParams")]
pub struct Officer {
    full_name: Option<FullName>,
    title: Option<String>,
    ssn: Option<String>,
    passport: Option<String>,
    nationality: Option<String>,
    date_of_birth: Option<NaiveDate>,
    address: Option<Address>,
    phone: Option<Phone>,
    email: Option<String>,
    evaluation_params: Option<Tags>,
    occupation: Option<String>,
    annual_income: Option<Value>,
    source_of_income: Option<String>,
    status: Option<String>,
}

impl Officer {
    pub fn new(params: OfficerParams) -> Result<Self, CastError> {
        check_identity(
            "Officer",
            params.ssn.as_deref(),
            params.passport.as_deref(),
            params.nationality.as_deref(),
        )?;
        if let Some(title) = &params.title {
            Title::cast(&Value::String(title.clone()))?;
        }
        Ok(Self {
            full_name: params.full_name,
            title: params.title,
            ssn: params.ssn,
            passport: params.passport,
            nationality: params.nationality,
            date_of_birth: params.date_of_birth,
            address: params.address,
            phone: params.phone,
            email: params.email,
            evaluation_params: params.evaluation_params,
            occupation: params.occupation,
            annual_income: params.annual_income.filter(|v| !v.is_null()),
            source_of_income: params.source_of_income,
            status: params.status,
        })
    }

    pub fn cast(raw: &Value) -> Result<Option<Self>, CastError> {
        from_wire::<OfficerParams>(raw, "officer")?.map(Self::new).transpose()
    }

    pub fn full_name(&self) -> Option<&FullName> {
        self.full_name.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn ssn(&self) -> Option<&str> {
        self.ssn.as_deref()
    }

    pub fn passport(&self) -> Option<&str> {
        self.passport.as_deref()
    }

    pub fn nationality(&self) -> Option<&str> {
        self.nationality.as_deref()
    }

    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn evaluation_params(&self) -> Option<&Tags> {
        self.evaluation_params.as_ref()
    }

    pub fn occupation(&self) -> Option<&str> {
        self.occupation.as_deref()
    }

    pub fn annual_income(&self) -> Option<&Value> {
        self.annual_income.as_ref()
    }

    pub fn source_of_income(&self) -> Option<&str> {
        self.source_of_income.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl TryFrom<OfficerParams> for Officer {
    type Error = CastError;

    fn try_from(params: OfficerParams) -> Result<Self, CastError> {
        Self::new(params)
    }
}

impl From<Officer> for OfficerParams {
    fn from(o: Officer) -> Self {
        Self {
            full_name: o.full_name,
            title: o.title,
            ssn: o.ssn,
            passport: o.passport,
            nationality: o.nationality,
            date_of_birth: o.date_of_birth,
            address: o.address,
            phone: o.phone,
            email: o.email,
            evaluation_params: o.evaluation_params,
            occupation: o.occupation,
            annual_income: o.annual_income,
            source_of_income: o.source_of_income,
            status: o.status,
        }
    }
}

impl Serialize for Officer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut wire = OfficerParams::from(self.clone());
        keep_one_document(&wire.ssn, &mut wire.passport, &mut wire.nationality);
        wire.serialize(serializer)
    }
}

/// Constructor input for [`BeneficialOwner`], and its wire shape.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BeneficialOwnerParams {
    #[serde(alias = "full_name", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<FullName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(alias = "date_of_birth", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(alias = "id_theft_score", skip_serializing_if = "Option::is_none")]
    pub id_theft_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(alias = "annual_income", skip_serializing_if = "Option::is_none")]
    pub annual_income: Option<Value>,
    #[serde(alias = "source_of_income", skip_serializing_if = "Option::is_none")]
    pub source_of_income: Option<String>,
    #[serde(skip_serializing)]
    pub status: Option<String>,
}

/// Owner of a stake in a business applicant.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "BeneficialOwnerParams")]
pub struct BeneficialOwner {
    full_name: Option<FullName>,
    ssn: Option<String>,
    passport: Option<String>,
    nationality: Option<String>,
    date_of_birth: Option<NaiveDate>,
    address: Option<Address>,
    phone: Option<Phone>,
    email: Option<String>,
    percentage: Option<f64>,
    id_theft_score: Option<i64>,
    occupation: Option<String>,
    annual_income: Option<Value>,
    source_of_income: Option<String>,
    status: Option<String>,
}

impl BeneficialOwner {
    pub fn new(params: BeneficialOwnerParams) -> Result<Self, CastError> {
        check_identity(
            "BeneficialOwner",
            params.ssn.as_deref(),
            params.passport.as_deref(),
            params.nationality.as_deref(),
        )?;
        Ok(Self {
            full_name: params.full_name,
            ssn: params.ssn,
            passport: params.passport,
            nationality: params.nationality,
            date_of_birth: params.date_of_birth,
            address: params.address,
            phone: params.phone,
            email: params.email,
            percentage: params.percentage,
            id_theft_score: params.id_theft_score,
            occupation: params.occupation,
            annual_income: params.annual_income.filter(|v| !v.is_null()),
            source_of_income: params.source_of_income,
            status: params.status,
        })
    }

    pub fn cast(raw: &Value) -> Result<Option<Self>, CastError> {
        from_wire::<BeneficialOwnerParams>(raw, "beneficial owner")?
            .map(Self::new)
            .transpose()
    }

    pub fn full_name(&self) -> Option<&FullName> {
        self.full_name.as_ref()
    }

    pub fn ssn(&self) -> Option<&str> {
        self.ssn.as_deref()
    }

    pub fn passport(&self) -> Option<&str> {
        self.passport.as_deref()
    }

    pub fn nationality(&self) -> Option<&str> {
        self.nationality.as_deref()
    }

    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn percentage(&self) -> Option<f64> {
        self.percentage
    }

    pub fn id_theft_score(&self) -> Option<i64> {
        self.id_theft_score
    }

    pub fn occupation(&self) -> Option<&str> {
        self.occupation.as_deref()
    }

    pub fn annual_income(&self) -> Option<&Value> {
        self.annual_income.as_ref()
    }

    pub fn source_of_income(&self) -> Option<&str> {
        self.source_of_income.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl TryFrom<BeneficialOwnerParams> for BeneficialOwner {
    type Error = CastError;

    fn try_from(params: BeneficialOwnerParams) -> Result<Self, CastError> {
        Self::new(params)
    }
}

impl From<BeneficialOwner> for BeneficialOwnerParams {
    fn from(o: BeneficialOwner) -> Self {
        Self {
            full_name: o.full_name,
            ssn: o.ssn,
            passport: o.passport,
            nationality: o.nationality,
            date_of_birth: o.date_of_birth,
            address: o.address,
            phone: o.phone,
            email: o.email,
            percentage: o.percentage,
            id_theft_score: o.id_theft_score,
            occupation: o.occupation,
            annual_income: o.annual_income,
            source_of_income: o.source_of_income,
            status: o.status,
        }
    }
}

impl Serialize for BeneficialOwner {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut wire = BeneficialOwnerParams::from(self.clone());
        keep_one_document(&wire.ssn, &mut wire.passport, &mut wire.nationality);
        wire.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Serializable;
    use serde_json::json;

    fn officer_params() -> OfficerParams {
        OfficerParams {
            full_name: Some(FullName::new("John", "Doe")),
            title: Some(Title::CEO.into()),
            date_of_birth: NaiveDate::from_ymd_opt(1980, 1, 1),
            address: Some(Address {
                street: Some("123 Main St.".into()),
                city: Some("New York".into()),
                state: Some("NY".into()),
                postal_code: Some("10001".into()),
                country: Some("US".into()),
                ..Default::default()
            }),
            phone: Some(Phone::new("1", "5551234567")),
            email: Some("john.doe@example.com".into()),
            ..Default::default()
        }
    }

    fn composite_reason(err: CastError) -> (&'static str, &'static str) {
        match err {
            CastError::InvalidCompositeState { type_name, reason } => (type_name, reason),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn officer_rejects_both_documents() {
        let err = Officer::new(OfficerParams {
            ssn: Some("123456789".into()),
            passport: Some("AB123456".into()),
            nationality: Some("US".into()),
            ..officer_params()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Officer requires either SSN or passport, but not both");
    }

    #[test]
    fn officer_rejects_missing_documents() {
        let err = Officer::new(officer_params()).unwrap_err();
        assert_eq!(composite_reason(err), ("Officer", "requires either SSN or passport"));
    }

    #[test]
    fn officer_passport_requires_nationality() {
        let err = Officer::new(OfficerParams {
            passport: Some("AB123456".into()),
            ..officer_params()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Officer requires nationality when passport is provided");
    }

    #[test]
    fn officer_with_ssn_serializes_without_passport_fields() {
        let officer = Officer::new(OfficerParams {
            ssn: Some("123456789".into()),
            ..officer_params()
        })
        .unwrap();
        assert_eq!(
            officer.to_wire(),
            json!({
                "fullName": { "first": "John", "last": "Doe" },
                "title": "CEO",
                "ssn": "123456789",
                "dateOfBirth": "1980-01-01",
                "address": {
                    "street": "123 Main St.",
                    "city": "New York",
                    "state": "NY",
                    "postalCode": "10001",
                    "country": "US"
                },
                "phone": { "countryCode": "1", "number": "5551234567" },
                "email": "john.doe@example.com"
            })
        );
    }

    #[test]
    fn officer_with_passport_round_trips() {
        let officer = Officer::new(OfficerParams {
            passport: Some("EF345678".into()),
            nationality: Some("UK".into()),
            occupation: Some("Executive".into()),
            annual_income: Some(json!(150000)),
            evaluation_params: Tags::cast(&json!({ "riskLevel": "low" })).unwrap(),
            ..officer_params()
        })
        .unwrap();
        let wire = officer.to_wire();
        assert_eq!(wire["passport"], "EF345678");
        assert_eq!(wire["nationality"], "UK");
        assert!(wire.get("ssn").is_none());
        assert_eq!(Officer::cast(&wire).unwrap(), Some(officer));
    }

    #[test]
    fn officer_cast_validates_title() {
        let err = Officer::cast(&json!({ "ssn": "1", "title": "Janitor" })).unwrap_err();
        assert!(matches!(err, CastError::InvalidEnumValue { label: "title", .. }));
    }

    #[test]
    fn hydrated_officer_is_validated_too() {
        let err = Officer::cast(&json!({
            "fullName": { "first": "Jane", "last": "Smith" },
            "ssn": "987654321",
            "passport": "AB123456",
            "nationality": "US"
        }))
        .unwrap_err();
        assert_eq!(
            composite_reason(err),
            ("Officer", "requires either SSN or passport, but not both")
        );
    }

    #[test]
    fn beneficial_owner_rules_match_officer_rules() {
        let both = BeneficialOwner::new(BeneficialOwnerParams {
            ssn: Some("111222333".into()),
            passport: Some("CD789012".into()),
            nationality: Some("US".into()),
            ..Default::default()
        });
        assert_eq!(
            both.unwrap_err().to_string(),
            "BeneficialOwner requires either SSN or passport, but not both"
        );
        let neither = BeneficialOwner::new(BeneficialOwnerParams::default());
        assert_eq!(
            neither.unwrap_err().to_string(),
            "BeneficialOwner requires either SSN or passport"
        );
        let stateless = BeneficialOwner::new(BeneficialOwnerParams {
            passport: Some("CD789012".into()),
            ..Default::default()
        });
        assert_eq!(
            stateless.unwrap_err().to_string(),
            "BeneficialOwner requires nationality when passport is provided"
        );
    }

    #[test]
    fn beneficial_owner_reads_status_but_never_writes_it() {
        let owner = BeneficialOwner::cast(&json!({
            "status": "Approved",
            "fullName": { "first": "Bob", "last": "Johnson" },
            "ssn": "111222333",
            "percentage": 25.5,
            "idTheftScore": 750,
            "annualIncome": 200000
        }))
        .unwrap()
        .unwrap();
        assert_eq!(owner.status(), Some("Approved"));
        assert_eq!(owner.percentage(), Some(25.5));
        assert_eq!(owner.id_theft_score(), Some(750));
        assert_eq!(
            owner.to_wire(),
            json!({
                "fullName": { "first": "Bob", "last": "Johnson" },
                "ssn": "111222333",
                "percentage": 25.5,
                "idTheftScore": 750,
                "annualIncome": 200000
            })
        );
    }

    #[test]
    fn beneficial_owner_round_trip_preserves_settable_fields() {
        let owner = BeneficialOwner::new(BeneficialOwnerParams {
            full_name: Some(FullName::new("Bob", "Johnson")),
            passport: Some("CD789012".into()),
            nationality: Some("CA".into()),
            date_of_birth: NaiveDate::from_ymd_opt(1975, 5, 15),
            percentage: Some(25.0),
            occupation: Some("Business Owner".into()),
            source_of_income: Some("Business".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(BeneficialOwner::cast(&owner.to_wire()).unwrap(), Some(owner));
    }

    #[test]
    fn deserializing_enforces_the_identity_rule() {
        let both = serde_json::from_value::<Officer>(json!({ "ssn": "1", "passport": "AB123456" }));
        assert!(both.unwrap_err().to_string().contains("but not both"));
        let owner: BeneficialOwner =
            serde_json::from_value(json!({ "passport": "CD789012", "nationality": "CA" })).unwrap();
        assert_eq!(owner.nationality(), Some("CA"));
    }

    #[test]
    fn ssn_holder_is_sent_without_nationality() {
        let owner = BeneficialOwner::new(BeneficialOwnerParams {
            ssn: Some("111222333".into()),
            nationality: Some("US".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(owner.to_wire(), json!({ "ssn": "111222333" }));
        assert_eq!(owner.nationality(), Some("US"));
    }
}
