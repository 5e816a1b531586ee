use derive_more::Display;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Caption font size as a percentage of the player's base size, `"100%"` on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[display(fmt = "{}%", _0)]
pub struct FontSize(pub u16);

impl Default for FontSize {
    fn default() -> Self {
        FontSize(100)
    }
}

impl FromStr for FontSize {
    type Err = String;
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .strip_suffix('%')
            .ok_or_else(|| format!("invalid font size {value}, must end with %"))?
            .parse::<u16>()
            .map(FontSize)
            .map_err(|error| format!("invalid font size {value}: {error}"))
    }
}

impl Serialize for FontSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FontSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}
