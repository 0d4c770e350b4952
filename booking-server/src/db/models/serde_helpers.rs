//! Serde helpers shared by the stored records
//!
//! Record ids deserialize from both shapes:
//! - `"table:key"` strings (API JSON, snapshot files)
//! - native SurrealDB record ids (query results)

use serde::{Deserialize, Deserializer, Serializer};
use surrealdb::RecordId;

/// Deserialize a string that may be stored as null
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Deserialize an optional reference, mapping `""` and null to `None`
pub fn optional_ref<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
        .map(|opt| opt.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

/// Deserialize a price kept as text, accepting numbers as well
///
/// Snapshots may carry prices as JSON numbers. Whole floats lose their
/// fraction marker (`5000.0` -> `"5000"`); anything that is not a string or a
/// number reads as `""`, which prices as zero.
pub fn price_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, IgnoredAny, Visitor};
    use std::fmt;

    struct PriceVisitor;

    impl<'de> Visitor<'de> for PriceVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a price as text or number")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
            if value.is_finite() && value.fract() == 0.0 {
                Ok(format!("{}", value as i64))
            } else {
                Ok(value.to_string())
            }
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_some<D2: Deserializer<'de>>(self, inner: D2) -> Result<String, D2::Error> {
            inner.deserialize_any(PriceVisitor)
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<String, A::Error> {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(String::new())
        }

        fn visit_map<M: de::MapAccess<'de>>(self, mut map: M) -> Result<String, M::Error> {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(PriceVisitor)
}

/// Deserialize a whole-unit amount from a number, numeric text or null
///
/// Unreadable values become 0; the order amount floor covers them later.
pub fn amount<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, IgnoredAny, Visitor};
    use std::fmt;

    fn from_float(value: f64) -> i64 {
        if value.is_finite() { value.round() as i64 } else { 0 }
    }

    struct AmountVisitor;

    impl<'de> Visitor<'de> for AmountVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an amount as number or text")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
            Ok(i64::try_from(value).unwrap_or(i64::MAX))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<i64, E> {
            Ok(from_float(value))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<i64, E> {
            let value = value.trim();
            Ok(value
                .parse::<i64>()
                .ok()
                .or_else(|| value.parse::<f64>().ok().map(from_float))
                .unwrap_or(0))
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<i64, E> {
            Ok(0)
        }

        fn visit_none<E: de::Error>(self) -> Result<i64, E> {
            Ok(0)
        }

        fn visit_unit<E: de::Error>(self) -> Result<i64, E> {
            Ok(0)
        }

        fn visit_some<D2: Deserializer<'de>>(self, inner: D2) -> Result<i64, D2::Error> {
            inner.deserialize_any(AmountVisitor)
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<i64, A::Error> {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(0)
        }

        fn visit_map<M: de::MapAccess<'de>>(self, mut map: M) -> Result<i64, M::Error> {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(0)
        }
    }

    deserializer.deserialize_any(AmountVisitor)
}

#[derive(Debug, Clone)]
struct FlexibleRecordId(RecordId);

impl<'de> Deserialize<'de> for FlexibleRecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        use std::fmt;

        struct FlexibleVisitor;

        impl<'de> Visitor<'de> for FlexibleVisitor {
            type Value = FlexibleRecordId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string 'table:key' or RecordId")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value
                    .parse::<RecordId>()
                    .map(FlexibleRecordId)
                    .map_err(|_| de::Error::custom(format!("invalid RecordId: {}", value)))
            }

            fn visit_map<M>(self, map: M) -> Result<Self::Value, M::Error>
            where
                M: de::MapAccess<'de>,
            {
                RecordId::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(FlexibleRecordId)
            }
        }

        deserializer.deserialize_any(FlexibleVisitor)
    }
}

/// `Option<RecordId>` as an optional `"table:key"` string
pub mod option_record_id {
    use super::*;

    pub fn serialize<S>(id: &Option<RecordId>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match id {
            Some(id) => s.serialize_some(&id.to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<RecordId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<FlexibleRecordId>::deserialize(d).map(|opt| opt.map(|f| f.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct Doc {
        #[serde(default, with = "option_record_id")]
        id: Option<RecordId>,
        #[serde(default, deserialize_with = "null_as_empty")]
        name: String,
        #[serde(default, deserialize_with = "optional_ref")]
        hotel_id: Option<String>,
    }

    #[test]
    fn test_string_ids_and_nulls() {
        let doc: Doc =
            serde_json::from_str(r#"{"id": "hotel:abc", "name": null, "hotel_id": ""}"#).unwrap();
        assert_eq!(doc.id, Some(RecordId::from_table_key("hotel", "abc")));
        assert!(doc.name.is_empty());
        assert!(doc.hotel_id.is_none());

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["id"], "hotel:abc");
    }

    #[derive(Debug, Deserialize)]
    struct Priced {
        #[serde(default, deserialize_with = "price_text")]
        price: String,
        #[serde(default, deserialize_with = "amount")]
        amount: i64,
    }

    fn priced(json: &str) -> Priced {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_price_accepts_numbers() {
        assert_eq!(priced(r#"{"price": "1500"}"#).price, "1500");
        assert_eq!(priced(r#"{"price": 5000}"#).price, "5000");
        assert_eq!(priced(r#"{"price": 5000.0}"#).price, "5000");
        assert_eq!(priced(r#"{"price": 12.5}"#).price, "12.5");
        assert_eq!(priced(r#"{"price": null}"#).price, "");
        assert_eq!(priced(r#"{"price": {"amount": 3}}"#).price, "");
        assert_eq!(priced(r#"{}"#).price, "");
    }

    #[test]
    fn test_amount_accepts_numeric_text() {
        assert_eq!(priced(r#"{"amount": "6500"}"#).amount, 6500);
        assert_eq!(priced(r#"{"amount": " 6500.4 "}"#).amount, 6500);
        assert_eq!(priced(r#"{"amount": 700}"#).amount, 700);
        assert_eq!(priced(r#"{"amount": "lots"}"#).amount, 0);
        assert_eq!(priced(r#"{"amount": null}"#).amount, 0);
    }

    #[test]
    fn test_rejects_bare_key_id() {
        assert!(serde_json::from_str::<Doc>(r#"{"id": "abc"}"#).is_err());
    }
}
