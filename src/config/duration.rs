use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// Minimum pull request age.
///
/// Decodes from either a duration literal ("24h", "1h 30m", "90s") or an
/// integer number of nanoseconds. Serializes back as a literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinAge(pub Duration);

impl<'de> Deserialize<'de> for MinAge {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MinAgeVisitor)
    }
}

impl Serialize for MinAge {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&humantime::format_duration(self.0).to_string())
    }
}

struct MinAgeVisitor;

impl<'de> Visitor<'de> for MinAgeVisitor {
    type Value = MinAge;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a duration string like \"24h\" or a number of nanoseconds")
    }

    fn visit_u64<E: de::Error>(self, nanos: u64) -> Result<MinAge, E> {
        Ok(MinAge(Duration::from_nanos(nanos)))
    }

    fn visit_i64<E: de::Error>(self, nanos: i64) -> Result<MinAge, E> {
        u64::try_from(nanos)
            .map(|n| MinAge(Duration::from_nanos(n)))
            .map_err(|_| E::custom(format!("minAge must not be negative, got {}", nanos)))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<MinAge, E> {
        let s = s.trim();
        if s.is_empty() || s == "0" {
            return Ok(MinAge(Duration::ZERO));
        }
        humantime::parse_duration(s)
            .map(MinAge)
            .map_err(|e| E::custom(format!("invalid minAge '{}': {}", s, e)))
    }
}
