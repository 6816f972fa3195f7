use serde::{self, Deserialize, Deserializer, Serializer};

/// Exact counts as base 10 strings.
///
/// Counts outgrow every JSON number type for big decks, so they are
/// written as strings and parsed back the same way.
pub mod decimal {
    use num::BigUint;

    use super::*;

    pub fn serialize<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BigUint::parse_bytes(s.trim().as_bytes(), 10)
            .ok_or_else(|| serde::de::Error::custom(format!("not a decimal count: {s}")))
    }
}
