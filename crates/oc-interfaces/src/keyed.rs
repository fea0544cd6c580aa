//! Keyed YANG list support.
//!
//! YANG lists are held in memory as `BTreeMap`s indexed by the list key, so
//! key uniqueness is structural and iteration follows key order. On the wire
//! (RFC 7951) a list is a JSON array; [`keyed_list`] converts between the two.

use std::collections::BTreeMap;
use std::fmt;

/// An entry of a keyed YANG list.
pub trait Keyed {
    /// The list key type.
    type Key: Ord + Clone + fmt::Display;

    /// Returns the list key of this entry.
    fn key(&self) -> Self::Key;
}

/// Collects keyed entries into a map, later entries replacing earlier ones.
pub(crate) fn collect_keyed<T, I>(entries: I) -> BTreeMap<T::Key, T>
where
    T: Keyed,
    I: IntoIterator<Item = T>,
{
    entries.into_iter().map(|entry| (entry.key(), entry)).collect()
}

/// Serde adapter rendering a `BTreeMap<K, T>` as a YANG list.
///
/// Use with `#[serde(with = "keyed_list")]`. Decoding rejects duplicate keys.
pub mod keyed_list {
    use super::Keyed;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S, T>(map: &BTreeMap<T::Key, T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Keyed + Serialize,
    {
        serializer.collect_seq(map.values())
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<BTreeMap<T::Key, T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Keyed + Deserialize<'de>,
    {
        let entries = Vec::<T>::deserialize(deserializer)?;
        let mut map = BTreeMap::new();

        for entry in entries {
            let key = entry.key();
            if map.contains_key(&key) {
                return Err(D::Error::custom(format!("duplicate list key '{}'", key)));
            }
            map.insert(key, entry);
        }

        Ok(map)
    }
}
