use serde::{de, Deserialize, Deserializer, Serialize};

/// Output volume multiplier; `1.0` leaves the engine volume untouched.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct VolumeBoost(f64);

impl VolumeBoost {
    /// Returns `None` unless `value` is finite and greater than zero.
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && value > 0.0 {
            Some(VolumeBoost(value))
        } else {
            None
        }
    }
    pub fn value(&self) -> f64 {
        self.0
    }
    pub fn is_identity(&self) -> bool {
        self.0 == 1.0
    }
}

impl Default for VolumeBoost {
    fn default() -> Self {
        VolumeBoost(1.0)
    }
}

impl<'de> Deserialize<'de> for VolumeBoost {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        VolumeBoost::new(value).ok_or_else(|| {
            de::Error::invalid_value(de::Unexpected::Float(value), &"a positive multiplier")
        })
    }
}
