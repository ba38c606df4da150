use serde::{Deserialize, Serialize};

use super::state::AlertState;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RuleDefinition {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub state: AlertState,
}

impl RuleDefinition {
    pub fn new(name: impl Into<String>, message: impl Into<String>, state: AlertState) -> Self {
        Self {
            id: 0,
            name: name.into(),
            message: message.into(),
            state,
        }
    }
}
