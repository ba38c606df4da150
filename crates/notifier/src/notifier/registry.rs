use std::collections::HashMap;
use std::sync::Arc;

use super::alertmanager::AlertmanagerNotifier;
use super::base::AlertNotification;
use super::channel::{ConfigError, Notifier};
use super::webhook::WebhookSender;

pub type NotifierFactory =
    fn(&AlertNotification, Arc<dyn WebhookSender>) -> Result<Box<dyn Notifier>, ConfigError>;

#[derive(Clone)]
pub struct NotifierPlugin {
    pub type_name: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub factory: NotifierFactory,
}

impl std::fmt::Debug for NotifierPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifierPlugin")
            .field("type_name", &self.type_name)
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

/// Maps a notifier type identifier to its constructor. Built once at startup.
#[derive(Debug, Default, Clone)]
pub struct NotifierRegistry {
    plugins: HashMap<&'static str, NotifierPlugin>,
}

impl NotifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(AlertmanagerNotifier::plugin());
        registry
    }

    pub fn register(&mut self, plugin: NotifierPlugin) {
        self.plugins.insert(plugin.type_name, plugin);
    }

    pub fn get(&self, type_name: &str) -> Option<&NotifierPlugin> {
        self.plugins.get(type_name)
    }

    pub fn plugins(&self) -> Vec<&NotifierPlugin> {
        let mut list: Vec<&NotifierPlugin> = self.plugins.values().collect();
        list.sort_by_key(|p| p.type_name);
        list
    }

    pub fn create(
        &self,
        model: &AlertNotification,
        sender: Arc<dyn WebhookSender>,
    ) -> Result<Box<dyn Notifier>, ConfigError> {
        let plugin = self
            .get(&model.notifier_type)
            .ok_or_else(|| ConfigError::UnknownType(model.notifier_type.clone()))?;
        (plugin.factory)(model, sender)
    }
}
