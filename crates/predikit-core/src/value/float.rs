use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};
use thiserror::Error as ThisError;

///
/// Float64
///
/// Finite f64 only; -0.0 canonically stored as 0.0
///

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Display, Serialize)]
pub struct Float64(f64);

impl Float64 {
    /// Fallible constructor that rejects non-finite values and normalizes -0.0.
    pub fn try_new(v: f64) -> Result<Self, FloatError> {
        if !v.is_finite() {
            return Err(FloatError::NonFinite);
        }

        // canonicalize -0.0 to 0.0 so Eq/Hash/Ord are consistent
        Ok(Self(if v == 0.0 { 0.0 } else { v }))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

///
/// FloatError
///

#[derive(Debug, ThisError)]
pub enum FloatError {
    #[error("non-finite float64 value")]
    NonFinite,
}

impl Eq for Float64 {}

impl PartialEq for Float64 {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Ord for Float64 {
    fn cmp(&self, other: &Self) -> Ordering {
        // finite-only invariant makes total_cmp agree with IEEE ordering
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Float64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Float64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl<'de> Deserialize<'de> for Float64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Self::try_new(raw).map_err(|_| de::Error::custom("non-finite float64 payload"))
    }
}

impl TryFrom<f64> for Float64 {
    type Error = FloatError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Self::try_new(v)
    }
}

impl From<Float64> for f64 {
    fn from(v: Float64) -> Self {
        v.get()
    }
}
