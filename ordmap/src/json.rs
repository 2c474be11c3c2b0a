use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{OrderedMapError, Result};
use crate::map::OrderedMap;

impl<K, V> OrderedMap<K, V>
where
    K: Serialize + Eq + Hash,
    V: Serialize,
{
    /// Encodes the map as a JSON object whose member order matches the
    /// insertion order. An empty map encodes to `{}`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedMapError::KeysMustBeStrings`] when a key does not
    /// serialize to a JSON string, so a non-empty map with e.g. integer keys
    /// cannot be encoded.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::with_capacity(self.order.len() * 16 + 2);
        {
            let mut ser = serde_json::Serializer::new(&mut buf);
            let mut object = (&mut ser).serialize_map(Some(self.order.len()))?;
            for key in &self.order {
                match serde_json::to_value(key)? {
                    Value::String(encoded) => object.serialize_entry(&encoded, &self.pairs[key])?,
                    _ => return Err(OrderedMapError::KeysMustBeStrings),
                }
            }
            object.end()?;
        }

        Ok(String::from_utf8(buf).expect("serde_json emits valid UTF-8"))
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: DeserializeOwned + Eq + Hash + Clone,
    V: DeserializeOwned,
{
    /// Decodes a JSON object into the map, keeping the member order in which
    /// keys were encountered.
    ///
    /// The input is decoded into a fresh map which then replaces `self`, so
    /// no partial state is observable when decoding fails.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedMapError::Json`] when the input is not well-formed
    /// JSON or its top-level value is not an object.
    pub fn from_json(&mut self, data: &str) -> Result<()> {
        let fresh: Self = serde_json::from_str(data)?;
        *self = fresh;
        Ok(())
    }
}

impl<K, V> Serialize for OrderedMap<K, V>
where
    K: Serialize + Eq + Hash,
    V: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut object = serializer.serialize_map(Some(self.order.len()))?;
        for key in &self.order {
            object.serialize_entry(key, &self.pairs[key])?;
        }
        object.end()
    }
}

impl<'de, K, V> Deserialize<'de> for OrderedMap<K, V>
where
    K: Deserialize<'de> + Eq + Hash + Clone,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct OrderedMapVisitor<K, V>(PhantomData<(K, V)>);

        impl<'de, K, V> Visitor<'de> for OrderedMapVisitor<K, V>
        where
            K: Deserialize<'de> + Eq + Hash + Clone,
            V: Deserialize<'de>,
        {
            type Value = OrderedMap<K, V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut map = OrderedMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_map_encodes_to_empty_object() {
        let map: OrderedMap<String, Value> = OrderedMap::new();
        assert_eq!(map.to_json().unwrap(), "{}");
    }

    #[test]
    fn members_are_encoded_in_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("key3".to_string(), json!("value"));
        map.insert("key1".to_string(), json!(1.1));
        map.insert("key2".to_string(), json!(2));

        assert_eq!(
            map.to_json().unwrap(),
            r#"{"key3":"value","key1":1.1,"key2":2}"#
        );
    }

    #[test]
    fn integer_keys_cannot_be_encoded() {
        let mut map = OrderedMap::new();
        map.insert(1, json!("value"));

        let err = map.to_json().unwrap_err();
        assert!(matches!(err, OrderedMapError::KeysMustBeStrings));
    }

    #[test]
    fn empty_map_with_integer_keys_still_encodes() {
        let map: OrderedMap<i64, Value> = OrderedMap::new();
        assert_eq!(map.to_json().unwrap(), "{}");
    }

    #[test]
    fn decoding_invalid_json_fails() {
        let mut map: OrderedMap<String, Value> = OrderedMap::new();
        let err = map.from_json(r#"{1:"value"}"#).unwrap_err();
        assert!(matches!(err, OrderedMapError::Json(_)));
    }

    #[test]
    fn decoding_a_non_object_fails() {
        let mut map: OrderedMap<String, Value> = OrderedMap::new();
        let err = map.from_json(r#"["value"]"#).unwrap_err();
        assert!(matches!(err, OrderedMapError::Json(_)));
    }

    #[test]
    fn failed_decode_leaves_the_map_untouched() {
        let mut map = OrderedMap::new();
        map.insert("kept".to_string(), json!(true));

        assert!(map.from_json("{ not json").is_err());

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("kept"), Some(&json!(true)));
    }

    #[test]
    fn decoding_replaces_previous_contents() {
        let mut map = OrderedMap::new();
        map.insert("old".to_string(), json!(1));

        map.from_json(r#"{"b":2,"a":1}"#).unwrap();

        assert!(!map.contains_key("old"));
        assert_eq!(map.keys().collect::<Vec<_>>(), [&"b", &"a"]);
    }

    #[test]
    fn round_trip_is_idempotent() {
        let mut want = OrderedMap::new();
        want.insert("key3".to_string(), json!("value"));
        want.insert("key1".to_string(), json!(1.1));
        want.insert("key2".to_string(), json!(2));

        let want_json = want.to_json().unwrap();
        for _ in 0..100 {
            let mut have: OrderedMap<String, Value> = OrderedMap::new();
            have.from_json(&want_json).unwrap();
            assert_eq!(have.to_json().unwrap(), want_json);
        }
    }
}
