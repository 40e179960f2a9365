//! Frontend Models
//!
//! Data structures matching the list payload written by the bot.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::value::RawValue;
use std::fmt;

/// A field value as the bot wrote it
///
/// Strings are unquoted; anything else (numbers, `null`, ...) keeps its JSON
/// source text so it displays exactly as sent.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Json(String),
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        let text = raw.get();
        if text.starts_with('"') {
            serde_json::from_str(text).map(FieldValue::Text).map_err(de::Error::custom)
        } else {
            Ok(FieldValue::Json(text.to_string()))
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) | FieldValue::Json(text) => f.write_str(text),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<i32> for FieldValue {
    fn from(number: i32) -> Self {
        FieldValue::Json(number.to_string())
    }
}

/// One inventory record of the list
///
/// The bot writes Ukrainian keys (`артикул`, `кількість`); English keys are
/// accepted as well.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    #[serde(alias = "артикул")]
    pub article: FieldValue,
    #[serde(alias = "кількість")]
    pub quantity: FieldValue,
}

#[cfg(test)]
impl Item {
    pub fn new(article: impl Into<FieldValue>, quantity: impl Into<FieldValue>) -> Self {
        Self {
            article: article.into(),
            quantity: quantity.into(),
        }
    }
}
