//! Cardholder tokens, created under a card: `/cards/{card_id}/cardholder/token[...]`.

use crate::schema::ResourceDefinition;
use crate::types::AttrType;

pub struct CardholderToken;

impl CardholderToken {
    pub const NAME: &'static str = "CardholderToken";

    pub fn definition() -> ResourceDefinition {
        ResourceDefinition::builder(Self::NAME, "cardholderToken", "/cards")
            .nested("cardholder/token")
            .attribute("scope", AttrType::String)
            .attribute("verification_token", AttrType::String)
            .attribute("verification_code", AttrType::String)
            .attribute("expires_in", AttrType::Integer)
            .readonly("token", AttrType::String)
            .build()
    }
}

/// Starts a verification (SMS or call) whose token is then exchanged for a [`CardholderToken`].
pub struct CardholderTokenVerification;

impl CardholderTokenVerification {
    pub const NAME: &'static str = "CardholderTokenVerification";

    pub fn definition() -> ResourceDefinition {
        ResourceDefinition::builder(Self::NAME, "cardholderTokenVerification", "/cards")
            .nested("cardholder/token/verification")
            .attribute("channel", AttrType::String)
            .readonly("verification_token", AttrType::String)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_collection_paths() {
        assert_eq!(
            CardholderToken::definition().resources_path(Some("42")),
            "/cards/42/cardholder/token"
        );
        assert_eq!(
            CardholderTokenVerification::definition().resources_path(Some("42")),
            "/cards/42/cardholder/token/verification"
        );
    }
}
