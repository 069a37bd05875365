//! Tolerant decoding helpers for API records.
//!
//! The API sends `null` for reference fields it has not resolved and may
//! spell a record id more than once (`ticket_id` alongside `id`). Neither
//! should reject the whole response.

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Decode `null` (or a missing field, with `#[serde(default)]`) as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A record arrived without any of its id fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{record} has neither '{primary}' nor 'id'")]
pub struct MissingId {
    record: &'static str,
    primary: &'static str,
}

/// Pick the record id, preferring the API's own field name over `id`.
pub(crate) fn record_id(
    record: &'static str,
    primary_field: &'static str,
    primary: Option<u64>,
    fallback: Option<u64>,
) -> Result<u64, MissingId> {
    primary.or(fallback).ok_or(MissingId {
        record,
        primary: primary_field,
    })
}
