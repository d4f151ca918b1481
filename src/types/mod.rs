//! Type coercion registry: declared attribute types, typed values and their wire projections.
//!
//! Every declared type casts a [`RawValue`] into an optional [`AttrValue`]. Absence always
//! propagates (`null` casts to `None`). Structured values implement [`Serializable`], scalars
//! do not; the schema records which encoding an attribute uses when it is declared.

mod collection;
mod contact;
mod enums;
mod identity;
mod scalar;
mod tags;

pub use collection::Collection;
pub use contact::{Address, BusinessContact, FullName, Phone};
pub use enums::{BusinessVertical, EnumSpec, Industry, Title};
pub use identity::{BeneficialOwner, BeneficialOwnerParams, Officer, OfficerParams};
pub use tags::Tags;

use crate::error::CastError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Capability of structured values that know their own wire shape.
/// Implementations never emit a key whose value is absent.
pub trait Serializable {
    fn to_wire(&self) -> Value;
}

/// Declared type of an attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrType {
    String,
    Integer,
    Boolean,
    Date,
    DateTime,
    /// Opaque key/value map (tags, limits).
    Hash,
    /// Ordered collection; elements are cast through the element type when one is given.
    Array(Option<Box<AttrType>>),
    FullName,
    Address,
    Phone,
    BusinessContact,
    Officer,
    BeneficialOwner,
    Enum(EnumSpec),
}

/// How the codec projects a value of a declared type onto the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Scalar,
    Structured,
}

impl AttrType {
    pub fn list() -> Self {
        AttrType::Array(None)
    }

    pub fn list_of(element: AttrType) -> Self {
        AttrType::Array(Some(Box::new(element)))
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttrType::String => "string",
            AttrType::Integer => "integer",
            AttrType::Boolean => "boolean",
            AttrType::Date => "date",
            AttrType::DateTime => "datetime",
            AttrType::Hash => "hash",
            AttrType::Array(_) => "array",
            AttrType::FullName => "full name",
            AttrType::Address => "address",
            AttrType::Phone => "phone",
            AttrType::BusinessContact => "business contact",
            AttrType::Officer => "officer",
            AttrType::BeneficialOwner => "beneficial owner",
            AttrType::Enum(spec) => spec.label,
        }
    }

    pub fn encoding(&self) -> Encoding {
        match self {
            AttrType::String
            | AttrType::Integer
            | AttrType::Boolean
            | AttrType::Date
            | AttrType::DateTime
            | AttrType::Enum(_) => Encoding::Scalar,
            _ => Encoding::Structured,
        }
    }

    /// Coerces `raw` into this type. Deterministic and total over null, already-typed
    /// values and wire values; anything else fails with a [`CastError`].
    pub fn cast(&self, raw: impl Into<RawValue>) -> Result<Option<AttrValue>, CastError> {
        match raw.into() {
            RawValue::Wire(v) => self.cast_wire(&v),
            RawValue::Typed(v) => self.cast_typed(v),
        }
    }

    fn cast_typed(&self, value: AttrValue) -> Result<Option<AttrValue>, CastError> {
        if let (AttrType::Array(Some(element)), AttrValue::List(list)) = (self, &value) {
            let mut items = Vec::with_capacity(list.len());
            for item in list.clone().into_items() {
                items.extend(element.cast(item)?);
            }
            return Ok(Some(AttrValue::List(Collection::new(items))));
        }
        let passes = matches!(
            (self, &value),
            (AttrType::String, AttrValue::String(_))
                | (AttrType::Integer, AttrValue::Integer(_))
                | (AttrType::Boolean, AttrValue::Boolean(_))
                | (AttrType::Date, AttrValue::Date(_))
                | (AttrType::DateTime, AttrValue::DateTime(_))
                | (AttrType::Hash, AttrValue::Map(_))
                | (AttrType::Array(None), AttrValue::List(_))
                | (AttrType::FullName, AttrValue::FullName(_))
                | (AttrType::Address, AttrValue::Address(_))
                | (AttrType::Phone, AttrValue::Phone(_))
                | (AttrType::BusinessContact, AttrValue::BusinessContact(_))
                | (AttrType::Officer, AttrValue::Officer(_))
                | (AttrType::BeneficialOwner, AttrValue::BeneficialOwner(_))
        );
        if passes {
            return Ok(Some(value));
        }
        // enum members are stored as strings and must still be checked
        self.cast_wire(&value.to_wire())
    }

    fn cast_wire(&self, raw: &Value) -> Result<Option<AttrValue>, CastError> {
        if raw.is_null() {
            return Ok(None);
        }
        let value = match self {
            AttrType::String => scalar::cast_string(raw)?.map(AttrValue::String),
            AttrType::Integer => scalar::cast_integer(raw)?.map(AttrValue::Integer),
            AttrType::Boolean => scalar::cast_boolean(raw)?.map(AttrValue::Boolean),
            AttrType::Date => scalar::cast_date(raw)?.map(AttrValue::Date),
            AttrType::DateTime => scalar::cast_datetime(raw)?.map(AttrValue::DateTime),
            AttrType::Hash => Tags::cast(raw)?.map(AttrValue::Map),
            AttrType::Array(element) => Collection::cast(raw, element.as_deref())?.map(AttrValue::List),
            AttrType::FullName => FullName::cast(raw)?.map(AttrValue::FullName),
            AttrType::Address => Address::cast(raw)?.map(AttrValue::Address),
            AttrType::Phone => Phone::cast(raw)?.map(AttrValue::Phone),
            AttrType::BusinessContact => BusinessContact::cast(raw)?.map(AttrValue::BusinessContact),
            AttrType::Officer => Officer::cast(raw)?.map(|o| AttrValue::Officer(Box::new(o))),
            AttrType::BeneficialOwner => {
                BeneficialOwner::cast(raw)?.map(|o| AttrValue::BeneficialOwner(Box::new(o)))
            }
            AttrType::Enum(spec) => spec.cast(raw)?.map(AttrValue::String),
        };
        Ok(value)
    }
}

/// A typed attribute value, owned by a resource.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Map(Tags),
    List(Collection),
    FullName(FullName),
    Address(Address),
    Phone(Phone),
    BusinessContact(BusinessContact),
    Officer(Box<Officer>),
    BeneficialOwner(Box<BeneficialOwner>),
    /// Element of an untyped collection, passed through as received.
    Json(Value),
}

impl AttrValue {
    pub fn as_serializable(&self) -> Option<&dyn Serializable> {
        match self {
            AttrValue::Map(v) => Some(v),
            AttrValue::List(v) => Some(v),
            AttrValue::FullName(v) => Some(v),
            AttrValue::Address(v) => Some(v),
            AttrValue::Phone(v) => Some(v),
            AttrValue::BusinessContact(v) => Some(v),
            AttrValue::Officer(v) => Some(&**v),
            AttrValue::BeneficialOwner(v) => Some(&**v),
            _ => None,
        }
    }

    /// Wire projection of a scalar; structured values yield `None`.
    pub fn scalar_wire(&self) -> Option<Value> {
        Some(match self {
            AttrValue::String(s) => Value::String(s.clone()),
            AttrValue::Integer(n) => Value::from(*n),
            AttrValue::Boolean(b) => Value::Bool(*b),
            AttrValue::Date(d) => Value::String(scalar::format_date(d)),
            AttrValue::DateTime(d) => Value::String(scalar::format_datetime(d)),
            AttrValue::Json(v) => v.clone(),
            _ => return None,
        })
    }

    pub fn to_wire(&self) -> Value {
        match self.as_serializable() {
            Some(s) => s.to_wire(),
            None => self.scalar_wire().unwrap_or(Value::Null),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            AttrValue::Json(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttrValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            AttrValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            AttrValue::DateTime(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Tags> {
        match self {
            AttrValue::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Collection> {
        match self {
            AttrValue::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_address(&self) -> Option<&Address> {
        match self {
            AttrValue::Address(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_officer(&self) -> Option<&Officer> {
        match self {
            AttrValue::Officer(o) => Some(&**o),
            _ => None,
        }
    }

    pub fn as_beneficial_owner(&self) -> Option<&BeneficialOwner> {
        match self {
            AttrValue::BeneficialOwner(o) => Some(&**o),
            _ => None,
        }
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::String(s)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::String(s.to_string())
    }
}

impl From<BeneficialOwner> for AttrValue {
    fn from(o: BeneficialOwner) -> Self {
        AttrValue::BeneficialOwner(Box::new(o))
    }
}

/// Input to a cast: either a wire/JSON value or an already-typed value.
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    Wire(Value),
    Typed(AttrValue),
}

impl RawValue {
    pub fn null() -> Self {
        RawValue::Wire(Value::Null)
    }
}

impl From<Value> for RawValue {
    fn from(v: Value) -> Self {
        RawValue::Wire(v)
    }
}

impl From<AttrValue> for RawValue {
    fn from(v: AttrValue) -> Self {
        RawValue::Typed(v)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        RawValue::Wire(Value::from(v))
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        RawValue::Wire(Value::String(v))
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Wire(Value::from(v))
    }
}

impl From<bool> for RawValue {
    fn from(v: bool) -> Self {
        RawValue::Wire(Value::Bool(v))
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or_else(RawValue::null)
    }
}

macro_rules! typed_input {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(impl From<$ty> for RawValue {
            fn from(v: $ty) -> Self {
                RawValue::Typed(AttrValue::$variant(v.into()))
            }
        })+
    };
}

typed_input! {
    NaiveDate => Date,
    DateTime<Utc> => DateTime,
    Tags => Map,
    Collection => List,
    FullName => FullName,
    Address => Address,
    Phone => Phone,
    BusinessContact => BusinessContact,
    Officer => Officer,
    BeneficialOwner => BeneficialOwner,
}

macro_rules! serde_wire {
    ($($ty:ty),+ $(,)?) => {
        $(impl Serializable for $ty {
            fn to_wire(&self) -> Value {
                serde_json::to_value(self).unwrap_or(Value::Null)
            }
        })+
    };
}

serde_wire!(FullName, Address, Phone, BusinessContact, Officer, BeneficialOwner);

/// Deserializes a composite from its wire object. `null` is absent.
pub(crate) fn from_wire<T: DeserializeOwned>(raw: &Value, expected: &'static str) -> Result<Option<T>, CastError> {
    match raw {
        Value::Null => Ok(None),
        Value::Object(_) => T::deserialize(raw)
            .map(Some)
            .map_err(|e| CastError::Parse {
                expected,
                value: e.to_string(),
            }),
        other => Err(CastError::TypeMismatch {
            expected,
            found: json_kind(other),
        }),
    }
}

pub(crate) fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_casts_to_none_for_every_type() {
        let types = [
            AttrType::String,
            AttrType::Integer,
            AttrType::Boolean,
            AttrType::Date,
            AttrType::DateTime,
            AttrType::Hash,
            AttrType::list(),
            AttrType::FullName,
            AttrType::Address,
            AttrType::Phone,
            AttrType::BusinessContact,
            AttrType::Officer,
            AttrType::BeneficialOwner,
            AttrType::Enum(Industry::SPEC),
        ];
        for ty in types {
            assert_eq!(ty.cast(Value::Null).unwrap(), None, "{}", ty.name());
            assert_eq!(ty.cast(None::<String>).unwrap(), None, "{}", ty.name());
        }
    }

    #[test]
    fn typed_values_pass_through() {
        let address = Address {
            street: Some("123 Main St.".into()),
            city: Some("New York".into()),
            ..Default::default()
        };
        let cast = AttrType::Address.cast(address.clone()).unwrap();
        assert_eq!(cast, Some(AttrValue::Address(address)));
    }

    #[test]
    fn enum_attribute_validates_typed_strings() {
        let ty = AttrType::Enum(Industry::SPEC);
        assert!(ty.cast(AttrValue::String("Retail".into())).is_ok());
        assert!(matches!(
            ty.cast(AttrValue::String("Bakery".into())),
            Err(CastError::InvalidEnumValue { .. })
        ));
    }

    #[test]
    fn mismatched_typed_value_is_recast_from_its_wire_form() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
        let cast = AttrType::String.cast(date).unwrap();
        assert_eq!(cast, Some(AttrValue::String("2020-01-02".into())));
    }

    #[test]
    fn encoding_is_known_from_the_declared_type() {
        assert_eq!(AttrType::String.encoding(), Encoding::Scalar);
        assert_eq!(AttrType::Enum(Title::SPEC).encoding(), Encoding::Scalar);
        assert_eq!(AttrType::Hash.encoding(), Encoding::Structured);
        assert_eq!(AttrType::list_of(AttrType::Phone).encoding(), Encoding::Structured);
    }

    #[test]
    fn typed_collections_recast_foreign_elements() {
        let owners = AttrType::list_of(AttrType::BeneficialOwner);
        let strings = Collection::from_iter([AttrValue::from("not-an-owner")]);
        assert!(matches!(
            owners.cast(strings),
            Err(CastError::TypeMismatch { expected: "beneficial owner", found: "string" })
        ));
        let both_documents = Collection::new(vec![AttrValue::Json(json!({
            "ssn": "111222333",
            "passport": "CD789012",
            "nationality": "US"
        }))]);
        assert!(matches!(
            owners.cast(both_documents),
            Err(CastError::InvalidCompositeState { type_name: "BeneficialOwner", .. })
        ));
    }

    #[test]
    fn typed_collections_keep_matching_elements() {
        let owner = BeneficialOwner::cast(&json!({ "ssn": "111222333", "status": "Approved" }))
            .unwrap()
            .unwrap();
        let list = Collection::from_iter([owner.clone()]);
        let cast = AttrType::list_of(AttrType::BeneficialOwner).cast(list).unwrap().unwrap();
        let kept = cast.as_list().unwrap().items()[0].as_beneficial_owner().unwrap();
        assert_eq!(kept.status(), Some("Approved"));
        assert_eq!(kept, &owner);
    }
}
