//! Key conversion between local attribute names (snake_case) and wire keys (camelCase).

/// Outbound: "postal_code" -> "postalCode", "last4_digits" -> "last4Digits"
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = false;
    for c in s.chars() {
        match c {
            '_' => upper_next = !out.is_empty(),
            c if upper_next => {
                out.extend(c.to_uppercase());
                upper_next = false;
            }
            c => out.push(c),
        }
    }
    out
}

/// Inbound: "idempotencyKey" -> "idempotency_key", "last4Digits" -> "last4_digits".
/// Wire keys are ASCII; "street2" and "ssn" come back unchanged.
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() && !out.is_empty() {
            out.push('_');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}
