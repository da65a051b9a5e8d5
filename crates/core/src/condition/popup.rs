//! Assembly of the "new action condition" popup.
//!
//! The popup is rendered in two passes: an initial empty render that only
//! needs the event source, and a submit pass carrying the chosen condition.
//! The submit pass validates the condition and remembers its type as the
//! user's preferred one for that event source.

use serde::{Deserialize, Serialize};

use super::validator::{ConditionInput, ConditionValidator};
use super::{ConditionType, EventSource, PopupType};
use crate::error::CoreError;

pub const POPUP_TITLE: &str = "New condition";
pub const POPUP_ACTION: &str = "popup.condition.actions";

/// Preference key holding the last condition type picked, per event source.
pub const LAST_TYPE_PREFERENCE: &str = "popup.condition.actions_last_type";

/// Query parameters exactly as received.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PopupQuery {
    #[serde(rename = "type")]
    pub popup_type: Option<i32>,
    pub source: Option<i32>,
    pub validate: Option<i32>,
    pub condition_type: Option<i32>,
    pub operator: Option<i32>,
    pub value: Option<String>,
    pub value2: Option<String>,
}

/// A popup request whose enumerated fields have been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupRequest {
    pub popup_type: PopupType,
    pub source: EventSource,
    pub validate: bool,
    pub condition: Option<ConditionInput>,
}

impl PopupQuery {
    /// Check the popup type, event source and validate flag.
    ///
    /// The condition itself is not examined here; see [`assemble`].
    pub fn parse(&self) -> Result<PopupRequest, CoreError> {
        let popup_type = self
            .popup_type
            .ok_or_else(|| CoreError::invalid_parameter("/type", "the parameter is missing"))
            .and_then(|code| {
                PopupType::try_from(code)
                    .map_err(|_| CoreError::invalid_parameter("/type", "value must be one of 0"))
            })?;

        let source = self
            .source
            .ok_or_else(|| CoreError::invalid_parameter("/source", "the parameter is missing"))
            .and_then(|code| {
                EventSource::try_from(code).map_err(|_| {
                    CoreError::invalid_parameter("/source", "value must be one of 0, 1, 2, 3")
                })
            })?;

        let validate = match self.validate {
            None => false,
            Some(1) => true,
            Some(_) => {
                return Err(CoreError::invalid_parameter("/validate", "value must be one of 1"));
            }
        };

        let condition = self.condition_type.map(|condition_type| ConditionInput {
            condition_type,
            operator: self.operator,
            value: self.value.clone(),
            value2: self.value2.clone(),
        });

        Ok(PopupRequest {
            popup_type,
            source,
            validate,
            condition,
        })
    }
}

/// Where a validated condition is handed back to on the calling form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupForm {
    pub name: &'static str,
    pub param: &'static str,
    pub input_name: &'static str,
}

impl PopupForm {
    fn action_edit() -> Self {
        Self {
            name: "action.edit",
            param: "add_condition",
            input_name: "new_condition",
        }
    }
}

/// Everything the popup view needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupData {
    pub title: &'static str,
    pub command: String,
    pub message: String,
    pub errors: Vec<String>,
    pub action: &'static str,
    #[serde(rename = "type")]
    pub popup_type: PopupType,
    pub source: EventSource,
    pub last_type: i32,
    pub allowed_conditions: Vec<ConditionType>,
    pub condition_type: Option<i32>,
    pub operator: Option<i32>,
    pub value: Option<String>,
    pub value2: Option<String>,
    pub has_errors: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<PopupForm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<ConditionInput>,
}

/// Result of assembling a popup: the view data plus the preference write
/// the caller should perform, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupOutcome {
    pub data: PopupData,
    pub preference_update: Option<ConditionType>,
}

/// Build the popup for `request`.
///
/// `stored_last_type` is the user's saved preference for the request's
/// event source. The validator runs only when a condition was submitted,
/// and its failure is reported in `errors` rather than returned.
pub fn assemble(
    request: &PopupRequest,
    stored_last_type: Option<i32>,
    validator: &dyn ConditionValidator,
) -> PopupOutcome {
    let mut last_type =
        stored_last_type.unwrap_or_else(|| request.source.default_condition_type().code());
    let mut preference_update = None;
    let mut errors = Vec::new();

    if let Some(condition) = &request.condition {
        if let Err(message) = validator.validate(condition) {
            errors.push(message);
        }

        if let Ok(submitted) = ConditionType::try_from(condition.condition_type) {
            if submitted.code() != last_type {
                preference_update = Some(submitted);
                last_type = submitted.code();
            }
        }
    }

    let has_errors = !errors.is_empty();
    let (form, inputs) = match &request.condition {
        Some(condition) if request.validate && !has_errors => {
            (Some(PopupForm::action_edit()), Some(condition.clone()))
        }
        _ => (None, None),
    };

    let condition = request.condition.as_ref();
    let data = PopupData {
        title: POPUP_TITLE,
        command: String::new(),
        message: String::new(),
        errors,
        action: POPUP_ACTION,
        popup_type: request.popup_type,
        source: request.source,
        last_type,
        allowed_conditions: request.source.allowed_conditions().to_vec(),
        condition_type: condition.map(|c| c.condition_type),
        operator: condition.and_then(|c| c.operator),
        value: condition.and_then(|c| c.value.clone()),
        value2: condition.and_then(|c| c.value2.clone()),
        has_errors,
        form,
        inputs,
    };

    PopupOutcome {
        data,
        preference_update,
    }
}
