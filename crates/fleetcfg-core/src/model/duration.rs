// ── Duration (de)serialization ──
//
// Inventory documents write intervals either as human strings ("10s",
// "1m30s") or as a raw nanosecond count, the native Go duration encoding
// used by collectors that produced the first inventories.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDuration {
    Text(String),
    Nanos(u64),
}

fn parse<E: serde::de::Error>(raw: RawDuration) -> Result<Duration, E> {
    match raw {
        RawDuration::Nanos(n) => Ok(Duration::from_nanos(n)),
        RawDuration::Text(s) if s.trim().is_empty() => Ok(Duration::ZERO),
        RawDuration::Text(s) => humantime::parse_duration(s.trim())
            .map_err(|e| E::custom(format!("invalid duration '{s}': {e}"))),
    }
}

/// `#[serde(with = "duration::option")]` for `Option<Duration>` fields.
pub mod option {
    use super::{Deserialize, Deserializer, Duration, RawDuration, Serializer, parse};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(value: &Option<Duration>, ser: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => ser.serialize_str(&humantime::format_duration(*d).to_string()),
            None => ser.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Duration>, D::Error> {
        Option::<RawDuration>::deserialize(de)?
            .map(parse)
            .transpose()
    }
}
