//! Built-in resource declarations and their actions.

mod accounts;
mod applications;
mod cards;
mod payments;
mod targets;
mod tokens;

pub use accounts::{DepositAccount, WalletAccount};
pub use applications::BusinessApplication;
pub use cards::{BusinessDebitCard, BusinessVirtualDebitCard};
pub use payments::{BookPayment, ReceivedPayment};
pub use targets::{ApplicationForm, BusinessCustomer, IndividualCustomer, Transaction};
pub use tokens::{CardholderToken, CardholderTokenVerification};

use crate::error::RegistryError;
use crate::schema::Registry;
use crate::types::AttrValue;

/// Default factory for `idempotency_key`: a fresh v4 UUID per construction.
pub(crate) fn idempotency_key() -> AttrValue {
    AttrValue::String(uuid::Uuid::new_v4().to_string())
}

/// Registry of every built-in definition, validated for dangling relationships.
pub fn standard_registry() -> Result<Registry, RegistryError> {
    Registry::builder()
        .register(DepositAccount::definition())
        .register(WalletAccount::definition())
        .register(BusinessApplication::definition())
        .register(BusinessDebitCard::definition())
        .register(BusinessVirtualDebitCard::definition())
        .register(BookPayment::definition())
        .register(ReceivedPayment::definition())
        .register(CardholderToken::definition())
        .register(CardholderTokenVerification::definition())
        .register(IndividualCustomer::definition())
        .register(BusinessCustomer::definition())
        .register(ApplicationForm::definition())
        .register(Transaction::definition())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_resolves_every_relationship() {
        let registry = standard_registry().unwrap();
        let mut names: Vec<_> = registry.names().collect();
        names.sort_unstable();
        assert_eq!(names.len(), 13);
        for name in names {
            let def = registry.definition(name).unwrap();
            for rel in &def.relationships {
                assert!(registry.get(&rel.related).is_some(), "{name}.{}", rel.name);
            }
        }
    }

    #[test]
    fn idempotency_keys_are_unique() {
        assert_ne!(idempotency_key(), idempotency_key());
        assert_eq!(idempotency_key().as_str().map(str::len), Some(36));
    }
}
