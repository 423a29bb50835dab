//! Serde helpers shared by request types.

use serde::{Deserialize, Deserializer};

/// Deserialize a present field (including `null`) as `Some(_)`.
///
/// Paired with `#[serde(default)]` so that an absent field stays `None`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
