//! `serde::Serialize` for [`Value`].
//!
//! The mapping follows what a JSON encoder of the dynamic model would do:
//! `Undefined`, `Null` and functions become unit, integral numbers become
//! integers, objects serialize their own entries only, and failures become a
//! `{ name, message }` map.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Value;

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Serialize for Value {
    #[allow(clippy::cast_possible_truncation)]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Undefined | Self::Null | Self::Function(_) => serializer.serialize_unit(),
            Self::Boolean(boolean) => serializer.serialize_bool(*boolean),
            Self::Number(number) if number.fract() == 0.0 && number.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*number as i64)
            }
            Self::Number(number) => serializer.serialize_f64(*number),
            Self::String(string) => serializer.serialize_str(string),
            Self::Array(array) => serializer.collect_seq(array.to_vec()),
            Self::Object(object) => {
                let entries = object.own_entries();
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in &entries {
                    map.serialize_entry(&**key, value)?;
                }
                map.end()
            }
            Self::Failure(failure) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("name", failure.name())?;
                map.serialize_entry("message", failure.message())?;
                map.end()
            }
        }
    }
}
