use std::sync::Arc;

use super::base::{AlertNotification, NotifierBase};
use super::channel::{ConfigError, Notifier, NotifyError};
use super::registry::NotifierPlugin;
use super::webhook::{WebhookRequest, WebhookSender};
use crate::alert::EvaluationSnapshot;
use crate::alertmanager::{compile, to_json, CompileMode};

pub const ALERTMANAGER_TYPE: &str = "alertmanager";

pub struct AlertmanagerNotifier {
    base: NotifierBase,
    url: String,
    mode: CompileMode,
    sender: Arc<dyn WebhookSender>,
}

impl AlertmanagerNotifier {
    pub fn new(model: &AlertNotification, sender: Arc<dyn WebhookSender>) -> Result<Self, ConfigError> {
        let url = model.setting_str("url").unwrap_or_default();
        if url.is_empty() {
            return Err(ConfigError::Validation(
                "Could not find url property in settings".into(),
            ));
        }

        let mode = match model.settings.get("mode") {
            None | Some(serde_json::Value::Null) => CompileMode::default(),
            Some(v) => v
                .as_str()
                .ok_or_else(|| ConfigError::Validation("mode must be a string".into()))?
                .parse()
                .map_err(ConfigError::Validation)?,
        };

        Ok(Self {
            base: NotifierBase::from_model(model),
            url: url.to_string(),
            mode,
            sender,
        })
    }

    pub fn plugin() -> NotifierPlugin {
        NotifierPlugin {
            type_name: ALERTMANAGER_TYPE,
            name: "alertmanager",
            description: "Sends alert to Alertmanager",
            factory: create,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn mode(&self) -> CompileMode {
        self.mode
    }

    pub fn alerts_endpoint(&self) -> String {
        format!("{}/api/v1/alerts", self.url)
    }
}

fn create(
    model: &AlertNotification,
    sender: Arc<dyn WebhookSender>,
) -> Result<Box<dyn Notifier>, ConfigError> {
    Ok(Box::new(AlertmanagerNotifier::new(model, sender)?))
}

#[async_trait::async_trait]
impl Notifier for AlertmanagerNotifier {
    fn base(&self) -> &NotifierBase {
        &self.base
    }

    fn should_notify(&self, _snapshot: &EvaluationSnapshot) -> bool {
        true
    }

    async fn notify(&self, snapshot: &EvaluationSnapshot) -> Result<(), NotifyError> {
        tracing::info!(
            alertmanager = %self.base.name,
            rule = %snapshot.rule.name,
            state = %snapshot.state(),
            mode = self.mode.as_str(),
            "sending alertmanager"
        );

        let alerts = compile(snapshot, self.mode);
        if alerts.is_empty() {
            tracing::debug!(alertmanager = %self.base.name, "no evaluation matches, nothing to send");
            return Ok(());
        }

        let body = to_json(&alerts).map_err(|e| NotifyError::Serialize(e.to_string()))?;
        let request = WebhookRequest::post_json(self.alerts_endpoint(), body);

        if let Err(e) = self.sender.send_webhook(&request).await {
            tracing::error!(error = %e, alertmanager = %self.base.name, "failed to send alertmanager");
            return Err(e);
        }

        Ok(())
    }
}
