use crate::action::Action;
use crate::resources::{idempotency_key, DepositAccount, IndividualCustomer, Transaction};
use crate::schema::ResourceDefinition;
use crate::types::AttrType;

/// Transfer between two accounts of the same bank; create-only.
pub struct BookPayment;

impl BookPayment {
    pub const NAME: &'static str = "BookPayment";

    pub fn definition() -> ResourceDefinition {
        ResourceDefinition::builder(Self::NAME, "bookPayment", "/payments")
            // cents
            .attribute("amount", AttrType::Integer)
            .attribute("description", AttrType::String)
            .attribute("transaction_summary_override", AttrType::String)
            .attribute("tags", AttrType::Hash)
            .defaulted("idempotency_key", AttrType::String, idempotency_key)
            .belongs_to_typed("account", DepositAccount::NAME, "depositAccount")
            .belongs_to_typed("counterparty_account", DepositAccount::NAME, "depositAccount")
            .readonly("created_at", AttrType::DateTime)
            .readonly("status", AttrType::String)
            .readonly("direction", AttrType::String)
            .readonly("reason", AttrType::String)
            .build()
    }
}

/// Incoming ACH payment; read-only apart from `reprocess`.
pub struct ReceivedPayment;

impl ReceivedPayment {
    pub const NAME: &'static str = "ReceivedPayment";

    pub fn definition() -> ResourceDefinition {
        ResourceDefinition::builder(Self::NAME, "receivedPayment", "/received-payments")
            .readonly("created_at", AttrType::DateTime)
            .readonly("status", AttrType::String)
            .readonly("was_advanced", AttrType::Boolean)
            .readonly("amount", AttrType::Integer)
            .readonly("completion_date", AttrType::Date)
            .readonly("company_name", AttrType::String)
            .readonly("counterparty_routing_number", AttrType::String)
            .readonly("description", AttrType::String)
            .readonly("trace_number", AttrType::String)
            .readonly("sec_code", AttrType::String)
            .readonly("return_cutoff_time", AttrType::DateTime)
            .readonly("can_be_reprocessed", AttrType::Boolean)
            .readonly("tags", AttrType::Hash)
            .belongs_to("account", DepositAccount::NAME)
            .belongs_to("customer", IndividualCustomer::NAME)
            .belongs_to("receive_payment_transaction", Transaction::NAME)
            .belongs_to("payment_advance_transaction", Transaction::NAME)
            .belongs_to("repay_payment_advance_transaction", Transaction::NAME)
            .build()
    }

    pub fn reprocess() -> Action {
        Action::new("reprocess", "reprocessReceivedPayment")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Resource;
    use crate::types::RawValue;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn received_payment_has_nothing_to_send() {
        let payment = Resource::new(
            Arc::new(ReceivedPayment::definition()),
            [("amount", RawValue::from(1500i64)), ("status", "Pending".into())],
        )
        .unwrap();
        assert!(payment.to_wire_attributes().is_empty());
        assert_eq!(
            ReceivedPayment::reprocess().body(),
            Some(json!({ "data": { "type": "reprocessReceivedPayment", "attributes": {} } }))
        );
    }

    #[test]
    fn book_payment_accounts_use_deposit_account_type() {
        let def = BookPayment::definition();
        assert_eq!(def.relationship("counterparty_account").unwrap().wire_key, "counterpartyAccount");
        assert_eq!(def.relationship("counterparty_account").unwrap().wire_type, "depositAccount");
    }
}
