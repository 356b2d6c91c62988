use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::github::queries;

/// A Projects V2 board as returned by the repository enumeration query.
#[derive(Debug, Clone)]
pub struct Board {
    pub id: String,
    pub title: String,
    pub number: u64,
    pub url: Option<String>,
}

/// One custom field on a board, restricted to the kinds we know how to
/// write. Fields of any other kind are filtered out at fetch time.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub id: String,
    pub name: String,
    pub kind: FieldKind,
}

#[derive(Debug, Clone)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    SingleSelect(Vec<SelectOption>),
    Iteration(Vec<IterationSchema>),
}

#[derive(Debug, Clone)]
pub struct SelectOption {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct IterationSchema {
    pub id: String,
    pub title: String,
    pub start_date: Option<String>,
    pub duration: Option<u32>,
}

/// A desired field value that survived validation against the board's
/// schema, carrying everything needed to address and shape the mutation.
#[derive(Debug, Clone)]
pub struct CoercedField {
    pub name: String,
    pub field_id: String,
    pub value: FieldValue,
}

/// The typed representation of a field value. Each variant knows its own
/// mutation document, variable shape, and human-readable rendering, so
/// adding a new field kind fails to compile until all three are supplied.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    SingleSelect { option_id: String, label: String },
    Iteration { iteration_id: String, title: String },
}

impl FieldValue {
    pub fn mutation_document(&self) -> &'static str {
        match self {
            Self::Text(_) => queries::UPDATE_TEXT_FIELD,
            Self::Number(_) => queries::UPDATE_NUMBER_FIELD,
            Self::Date(_) => queries::UPDATE_DATE_FIELD,
            Self::SingleSelect { .. } => queries::UPDATE_SINGLE_SELECT_FIELD,
            Self::Iteration { .. } => queries::UPDATE_ITERATION_FIELD,
        }
    }

    /// Full variable map for `updateProjectV2ItemFieldValue`, addressed by
    /// (board, item, field).
    pub fn mutation_variables(&self, board_id: &str, item_id: &str, field_id: &str) -> Value {
        let mut variables = json!({
            "projectId": board_id,
            "itemId": item_id,
            "fieldId": field_id,
        });
        let extra = match self {
            Self::Text(text) => json!({ "value": text }),
            Self::Number(number) => json!({ "value": number }),
            Self::Date(date) => json!({ "value": date.format("%Y-%m-%d").to_string() }),
            Self::SingleSelect { option_id, .. } => json!({ "optionId": option_id }),
            Self::Iteration { iteration_id, .. } => json!({ "iterationId": iteration_id }),
        };
        if let (Some(map), Some(extra)) = (variables.as_object_mut(), extra.as_object()) {
            for (key, value) in extra {
                map.insert(key.clone(), value.clone());
            }
        }
        variables
    }

    /// What the value looks like to a human, used for test-mode reporting.
    /// Iterations and options render as their titles, not their ids.
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => number.to_string(),
            Self::Date(date) => date.format("%Y-%m-%d").to_string(),
            Self::SingleSelect { label, .. } => label.clone(),
            Self::Iteration { title, .. } => title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_variables_carry_option_id() {
        let value = FieldValue::SingleSelect {
            option_id: "opt-1".into(),
            label: "Done".into(),
        };
        let vars = value.mutation_variables("proj-1", "item-1", "field-1");
        assert_eq!(vars["projectId"], "proj-1");
        assert_eq!(vars["itemId"], "item-1");
        assert_eq!(vars["fieldId"], "field-1");
        assert_eq!(vars["optionId"], "opt-1");
        assert!(vars.get("value").is_none());
    }

    #[test]
    fn date_variables_are_iso_formatted() {
        let value = FieldValue::Date(NaiveDate::from_ymd_opt(2024, 4, 3).unwrap());
        let vars = value.mutation_variables("p", "i", "f");
        assert_eq!(vars["value"], "2024-04-03");
    }

    #[test]
    fn number_variables_are_numeric() {
        let value = FieldValue::Number(5.0);
        let vars = value.mutation_variables("p", "i", "f");
        assert_eq!(vars["value"], 5.0);
    }

    #[test]
    fn iteration_displays_as_title() {
        let value = FieldValue::Iteration {
            iteration_id: "iter-9".into(),
            title: "Sprint 9".into(),
        };
        assert_eq!(value.display(), "Sprint 9");
        let vars = value.mutation_variables("p", "i", "f");
        assert_eq!(vars["iterationId"], "iter-9");
    }
}
