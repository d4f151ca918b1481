//! Ordered collection attribute.

use crate::error::CastError;
use crate::types::{json_kind, AttrType, AttrValue, Serializable};
use serde_json::Value;

/// Ordered list of values. Elements of a typed collection are cast through the element
/// type; untyped elements are kept as received.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Collection {
    items: Vec<AttrValue>,
}

impl Collection {
    pub fn new(items: Vec<AttrValue>) -> Self {
        Self { items }
    }

    /// A `null` element inside a typed collection is dropped. Already-built collections go
    /// through [`AttrType::cast`], which keeps matching elements and recasts the rest.
    pub fn cast(raw: &Value, element: Option<&AttrType>) -> Result<Option<Self>, CastError> {
        let raw_items = match raw {
            Value::Null => return Ok(None),
            Value::Array(items) => items,
            other => {
                return Err(CastError::TypeMismatch {
                    expected: "array",
                    found: json_kind(other),
                })
            }
        };
        let mut items = Vec::with_capacity(raw_items.len());
        for raw_item in raw_items {
            match element {
                Some(ty) => items.extend(ty.cast(raw_item.clone())?),
                None => items.push(AttrValue::Json(raw_item.clone())),
            }
        }
        Ok(Some(Self { items }))
    }

    pub fn items(&self) -> &[AttrValue] {
        &self.items
    }

    pub fn into_items(self) -> Vec<AttrValue> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AttrValue> {
        self.items.iter()
    }
}

impl<T: Into<AttrValue>> FromIterator<T> for Collection {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl Serializable for Collection {
    fn to_wire(&self) -> Value {
        Value::Array(self.items.iter().map(AttrValue::to_wire).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BeneficialOwner, BeneficialOwnerParams, FullName};
    use serde_json::json;

    #[test]
    fn typed_elements_are_cast() {
        let list = Collection::cast(&json!(["US", "CA"]), Some(&AttrType::String))
            .unwrap()
            .unwrap();
        assert_eq!(list.items(), &[AttrValue::from("US"), AttrValue::from("CA")]);
        assert_eq!(list.to_wire(), json!(["US", "CA"]));
    }

    #[test]
    fn untyped_elements_pass_through() {
        let raw = json!(["bank1", { "name": "bank2" }, 3]);
        let list = Collection::cast(&raw, None).unwrap().unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.to_wire(), raw);
    }

    #[test]
    fn elements_delegate_their_wire_shape() {
        let owner = BeneficialOwner::new(BeneficialOwnerParams {
            full_name: Some(FullName::new("Bob", "Johnson")),
            ssn: Some("111222333".into()),
            ..Default::default()
        })
        .unwrap();
        let list: Collection = vec![owner].into_iter().collect();
        assert_eq!(
            list.to_wire(),
            json!([{ "fullName": { "first": "Bob", "last": "Johnson" }, "ssn": "111222333" }])
        );
    }

    #[test]
    fn casting_a_collection_is_idempotent() {
        let ty = AttrType::list_of(AttrType::String);
        let once = ty.cast(json!(["a", "b"])).unwrap().unwrap();
        let twice = ty.cast(once.clone()).unwrap().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn invalid_elements_fail_the_whole_cast() {
        let err = Collection::cast(&json!([{ "ssn": "1", "passport": "2", "nationality": "US" }]), Some(&AttrType::BeneficialOwner));
        assert!(matches!(err, Err(CastError::InvalidCompositeState { .. })));
        assert!(Collection::cast(&json!("US"), None).is_err());
    }
}
