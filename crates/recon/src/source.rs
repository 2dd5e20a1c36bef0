//! Record source: parses a JSON lead document into `Vec<Lead>`.
//!
//! Parsing fails fast; a partially parsed record set would silently
//! corrupt the uniqueness reconciliation downstream.

use serde_json::Value;

use crate::error::DedupeError;
use crate::model::Lead;

/// Parse a JSON document holding a named array of lead objects.
///
/// All six fields are required strings; nothing is defaulted.
pub fn parse_document(input: &str, array_key: &str) -> Result<Vec<Lead>, DedupeError> {
    let doc: Value =
        serde_json::from_str(input).map_err(|e| DedupeError::DocumentParse(e.to_string()))?;

    let items = doc
        .get(array_key)
        .and_then(Value::as_array)
        .ok_or_else(|| DedupeError::MissingArray {
            key: array_key.into(),
        })?;

    let mut leads = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        leads.push(parse_lead(index, item)?);
    }

    Ok(leads)
}

fn parse_lead(index: usize, value: &Value) -> Result<Lead, DedupeError> {
    let field = |name: &str| -> Result<String, DedupeError> {
        value
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| DedupeError::MissingField {
                index,
                field: name.into(),
            })
    };

    Ok(Lead {
        id: field("_id")?,
        email: field("email")?,
        first_name: field("firstName")?,
        last_name: field("lastName")?,
        address: field("address")?,
        entry_date: field("entryDate")?,
    })
}
