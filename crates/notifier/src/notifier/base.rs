use serde::{Deserialize, Serialize};

/// A configured notifier instance as stored by the host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertNotification {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub notifier_type: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default = "empty_settings")]
    pub settings: serde_json::Value,
}

fn empty_settings() -> serde_json::Value {
    serde_json::Value::Object(Default::default())
}

impl AlertNotification {
    pub fn new(name: impl Into<String>, notifier_type: impl Into<String>, settings: serde_json::Value) -> Self {
        Self {
            id: 0,
            name: name.into(),
            notifier_type: notifier_type.into(),
            is_default: false,
            settings,
        }
    }

    pub fn setting_str(&self, key: &str) -> Option<&str> {
        self.settings.get(key).and_then(|v| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotifierBase {
    pub id: i64,
    pub name: String,
    pub notifier_type: String,
    pub is_default: bool,
    pub settings: serde_json::Value,
}

impl NotifierBase {
    pub fn from_model(model: &AlertNotification) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            notifier_type: model.notifier_type.clone(),
            is_default: model.is_default,
            settings: model.settings.clone(),
        }
    }
}
