//! Ingredient records and their wire representation

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// An ingredient as held in the local collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub title: String,
    pub amount: String,
}

impl Ingredient {
    pub fn new(id: impl Into<String>, title: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            amount: amount.into(),
        }
    }

    /// Attach a store-generated key to submitted form data
    pub fn from_new(id: impl Into<String>, new: NewIngredient) -> Self {
        Self {
            id: id.into(),
            title: new.title,
            amount: new.amount,
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.amount)
    }
}

/// Form data for an ingredient that has not been stored yet.
///
/// This is also the body stored under each key of the remote collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIngredient {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: String,
}

impl NewIngredient {
    pub fn new(title: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            amount: amount.into(),
        }
    }
}

/// Body returned by the store after a create
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedKey {
    pub name: String,
}

/// Amounts are written as strings but other clients may store numbers.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Convert a collection listing (`{ key: { title, amount } }`) into ingredients.
///
/// An empty collection is served as `null`. Entries keep the order of the
/// response body.
pub fn ingredients_from_listing(body: &Value) -> Result<Vec<Ingredient>, serde_json::Error> {
    match body {
        Value::Null => Ok(Vec::new()),
        Value::Object(entries) => entries
            .iter()
            .map(|(key, entry)| {
                let record = NewIngredient::deserialize(entry)?;
                Ok(Ingredient::from_new(key.clone(), record))
            })
            .collect(),
        other => Err(serde::de::Error::custom(format!(
            "expected an object of ingredients, got {}",
            value_kind(other)
        ))),
    }
}

/// Read the generated key out of a create response
pub fn created_key(body: &Value) -> Result<String, serde_json::Error> {
    CreatedKey::deserialize(body).map(|created| created.name)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
