//! State-transition actions posted to `{resource_path}/{name}`.

use crate::case::to_camel_case;
use crate::envelope::{Document, OutboundResource};
use serde_json::{Map, Value};

#[derive(Clone, Debug, PartialEq)]
pub struct Action {
    name: &'static str,
    body: Option<ActionBody>,
}

#[derive(Clone, Debug, PartialEq)]
struct ActionBody {
    wire_type: &'static str,
    attributes: Map<String, Value>,
}

impl Action {
    /// Action with a `{data: {type, attributes}}` body.
    pub fn new(name: &'static str, wire_type: &'static str) -> Self {
        Self {
            name,
            body: Some(ActionBody {
                wire_type,
                attributes: Map::new(),
            }),
        }
    }

    /// Action posted with no body.
    pub fn bare(name: &'static str) -> Self {
        Self { name, body: None }
    }

    /// Adds an argument under its camelCase key. Null arguments are compacted out.
    pub fn attribute(mut self, key: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        if let Some(body) = self.body.as_mut().filter(|_| !value.is_null()) {
            body.attributes.insert(to_camel_case(key), value);
        }
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn path(&self, resource_path: &str) -> String {
        format!("{}/{}", resource_path, self.name)
    }

    pub fn body(&self) -> Option<Value> {
        self.body.as_ref().map(|body| {
            Document::new(OutboundResource {
                kind: body.wire_type.to_string(),
                attributes: body.attributes.clone(),
                relationships: Map::new(),
            })
            .to_value()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_arguments_are_compacted() {
        let freeze = Action::new("freeze", "accountFreeze")
            .attribute("reason", "Fraud")
            .attribute("reason_text", None::<String>);
        assert_eq!(
            freeze.body(),
            Some(json!({ "data": { "type": "accountFreeze", "attributes": { "reason": "Fraud" } } }))
        );
        assert_eq!(freeze.path("/accounts/1"), "/accounts/1/freeze");
    }

    #[test]
    fn all_null_arguments_leave_an_empty_attributes_object() {
        let cancel = Action::new("cancel", "applicationCancel").attribute("reason", None::<&str>);
        assert_eq!(
            cancel.body(),
            Some(json!({ "data": { "type": "applicationCancel", "attributes": {} } }))
        );
    }

    #[test]
    fn bare_actions_have_no_body() {
        let unfreeze = Action::bare("unfreeze").attribute("ignored", "x");
        assert_eq!(unfreeze.body(), None);
        assert_eq!(unfreeze.name(), "unfreeze");
    }
}
