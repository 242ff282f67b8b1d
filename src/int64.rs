//! Serde adapter for 64-bit identifiers.
//!
//! JSON numbers lose precision above 2^53, so the engine carries `int64` values as
//! decimal strings. This module writes them as strings and reads either form.
//!
//! ```
//! #[derive(serde::Serialize, serde::Deserialize)]
//! struct Session {
//!     #[serde(with = "tdcall::int64")]
//!     id: i64,
//! }
//! ```
use std::fmt;

use serde::{
    Deserializer, Serializer,
    de::{self, Visitor},
};

pub fn serialize<S: Serializer>(value: &i64, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(value)
}

pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    d.deserialize_any(Int64Visitor)
}

struct Int64Visitor;

impl Visitor<'_> for Int64Visitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a 64-bit integer or a string containing one")
    }
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        // Only integral values inside the exactly representable range.
        if v.fract() == 0.0 && v.abs() <= 9007199254740991.0 {
            Ok(v as i64)
        } else {
            Err(E::invalid_value(de::Unexpected::Float(v), &self))
        }
    }
    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        v.trim()
            .parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

/// Same as the parent module, for `Vec<i64>`.
pub mod vec {
    use std::fmt;

    use serde::{
        Deserialize, Deserializer, Serializer,
        de::{SeqAccess, Visitor},
        ser::SerializeSeq,
    };

    struct Item(i64);

    impl<'de> Deserialize<'de> for Item {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            super::deserialize(d).map(Item)
        }
    }

    pub fn serialize<S: Serializer>(values: &[i64], s: S) -> Result<S::Ok, S::Error> {
        let mut seq = s.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&value.to_string())?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<i64>, D::Error> {
        d.deserialize_seq(Int64SeqVisitor)
    }

    struct Int64SeqVisitor;

    impl<'de> Visitor<'de> for Int64SeqVisitor {
        type Value = Vec<i64>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "an array of 64-bit integers")
        }
        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Vec<i64>, A::Error> {
            let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(Item(value)) = seq.next_element()? {
                values.push(value);
            }
            Ok(values)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Ids {
        #[serde(with = "super")]
        id: i64,
        #[serde(with = "super::vec")]
        ids: Vec<i64>,
    }

    #[test]
    fn serialize_as_string() -> anyhow::Result<()> {
        let v = serde_json::to_value(Ids {
            id: i64::MAX,
            ids: vec![1, -2],
        })?;
        assert_eq!(
            v,
            json!({"id": "9223372036854775807", "ids": ["1", "-2"]})
        );
        Ok(())
    }

    #[test]
    fn deserialize_from_string_or_number() -> anyhow::Result<()> {
        let a: Ids = serde_json::from_str(r#"{"id":"9223372036854775807","ids":["1",2]}"#)?;
        let b: Ids = serde_json::from_str(r#"{"id":9223372036854775807,"ids":[1,"2"]}"#)?;
        assert_eq!(a, b);
        assert_eq!(a.id, i64::MAX);
        assert_eq!(a.ids, vec![1, 2]);
        Ok(())
    }

    #[test]
    fn deserialize_from_value() -> anyhow::Result<()> {
        let a: Ids = serde_json::from_value(json!({"id": "-5", "ids": []}))?;
        assert_eq!(a.id, -5);
        Ok(())
    }

    #[test]
    fn deserialize_rejects_garbage() {
        for input in [
            r#"{"id":"abc","ids":[]}"#,
            r#"{"id":1.5,"ids":[]}"#,
            r#"{"id":9223372036854775808,"ids":[]}"#,
            r#"{"id":true,"ids":[]}"#,
        ] {
            assert!(serde_json::from_str::<Ids>(input).is_err(), "{input}");
        }
    }
}
