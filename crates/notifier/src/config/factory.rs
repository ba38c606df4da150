use std::sync::Arc;

use super::schema::RelayConfig;
use crate::notifier::{ConfigError, Notifier, NotifierRegistry, WebhookSender};

/// Instantiates every configured notifier, failing on the first invalid one.
pub fn build_notifiers(
    cfg: &RelayConfig,
    registry: &NotifierRegistry,
    sender: Arc<dyn WebhookSender>,
) -> Result<Vec<Box<dyn Notifier>>, ConfigError> {
    cfg.notifiers
        .iter()
        .map(|model| {
            registry.create(model, sender.clone()).map_err(|e| match e {
                ConfigError::Validation(reason) => {
                    ConfigError::Validation(format!("notifier '{}': {reason}", model.name))
                }
                other => other,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_from_str;
    use crate::notifier::HttpWebhookSender;

    fn sender() -> Arc<dyn WebhookSender> {
        Arc::new(HttpWebhookSender::new())
    }

    #[test]
    fn builds_all_in_order() {
        let cfg = load_from_str(
            r#"
notifiers:
  - name: primary
    type: alertmanager
    settings: { url: "http://am-1:9093" }
  - name: secondary
    type: alertmanager
    settings: { url: "http://am-2:9093", mode: per_match }
"#,
        )
        .unwrap();
        let notifiers = build_notifiers(&cfg, &NotifierRegistry::with_builtin(), sender()).unwrap();
        let names: Vec<&str> = notifiers.iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["primary", "secondary"]);
    }

    #[test]
    fn validation_error_names_notifier() {
        let cfg = load_from_str("notifiers:\n  - name: broken\n    type: alertmanager\n").unwrap();
        let err = build_notifiers(&cfg, &NotifierRegistry::with_builtin(), sender())
            .err()
            .unwrap();
        assert_eq!(
            err,
            ConfigError::Validation(
                "notifier 'broken': Could not find url property in settings".into()
            )
        );
    }

    #[test]
    fn unknown_type_propagates() {
        let cfg = load_from_str("notifiers:\n  - name: x\n    type: opsgenie\n").unwrap();
        let err = build_notifiers(&cfg, &NotifierRegistry::with_builtin(), sender())
            .err()
            .unwrap();
        assert_eq!(err, ConfigError::UnknownType("opsgenie".into()));
    }
}
