//! Lenient deserializers for tool arguments
//!
//! Agents do not always send the JSON type a schema asks for. These helpers
//! accept the common near-misses (a numeric string for a number, a lone string
//! for a list) and reject everything else.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberLike {
    Integer(u64),
    Float(f64),
    Text(String),
}

/// Accept `42`, `42.0` or `"42"` as a non-negative integer
pub fn number_from_any<'de, D>(de: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberLike::deserialize(de)? {
        NumberLike::Integer(n) => Ok(n),
        NumberLike::Float(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
            Ok(f as u64)
        }
        NumberLike::Float(f) => Err(de::Error::custom(format!(
            "expected a whole non-negative number, got {}",
            f
        ))),
        NumberLike::Text(s) => s.trim().parse().map_err(|_| {
            de::Error::custom(format!("expected a number, got \"{}\"", s))
        }),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Accept a list of strings or a single string; `null` and absence are `None`
///
/// Use with `#[serde(default)]` so a missing field is allowed.
pub fn string_list<'de, D>(de: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<OneOrMany>::deserialize(de)?.map(|value| match value {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }),
    )
}
