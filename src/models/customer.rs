//! JobNimbus contact records and the customer summaries derived from them.

use crate::domain::ContactId;
use serde::{Deserialize, Deserializer, Serialize};

/// Address shown when a contact has no street address.
pub const NO_ADDRESS: &str = "No address";

/// Accepts a JSON string or number; any other value reads as absent.
fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// A contact as returned by the JobNimbus contacts endpoint.
///
/// Only the fields used for customer lookup are modelled; everything else in
/// the payload is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct JobNimbusContact {
    /// JobNimbus id
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_lenient_string"
    )]
    pub jnid: Option<String>,

    /// Legacy record number, used when `jnid` is missing
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_lenient_string"
    )]
    pub recid: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_lenient_string"
    )]
    pub first_name: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_lenient_string"
    )]
    pub last_name: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_lenient_string"
    )]
    pub company: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_lenient_string"
    )]
    pub address_line1: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_lenient_string"
    )]
    pub city: Option<String>,
}

impl JobNimbusContact {
    /// The id used to deduplicate this contact: `jnid`, falling back to `recid`.
    pub fn identifier(&self) -> Option<ContactId> {
        [&self.jnid, &self.recid]
            .into_iter()
            .flatten()
            .find_map(|id| ContactId::new(id.as_str()).ok())
    }

    /// "First Last", or the company when both name fields are blank.
    pub fn display_name(&self) -> String {
        let name = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        );
        let name = name.trim();

        if name.is_empty() {
            self.company.clone().unwrap_or_default()
        } else {
            name.to_string()
        }
    }

    /// "Address line 1, City", or [`NO_ADDRESS`].
    pub fn display_address(&self) -> String {
        match self.address_line1.as_deref().filter(|line| !line.is_empty()) {
            Some(line) => match self.city.as_deref().filter(|city| !city.is_empty()) {
                Some(city) => format!("{}, {}", line, city),
                None => line.to_string(),
            },
            None => NO_ADDRESS.to_string(),
        }
    }
}

/// A customer search result, shaped for the scope document form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub id: ContactId,
    pub display_name: String,
    pub address: String,
    /// Same value as `id`; the file-linking flow reads it under this name
    pub jnid: ContactId,
}

impl CustomerSummary {
    /// Build a summary, or `None` when the contact has no usable id.
    pub fn from_contact(contact: &JobNimbusContact) -> Option<Self> {
        let id = contact.identifier()?;
        Some(Self {
            jnid: id.clone(),
            id,
            display_name: contact.display_name(),
            address: contact.display_address(),
        })
    }
}
