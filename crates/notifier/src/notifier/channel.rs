use crate::alert::EvaluationSnapshot;

use super::base::NotifierBase;

#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    fn base(&self) -> &NotifierBase;

    fn name(&self) -> &str {
        &self.base().name
    }

    fn notifier_type(&self) -> &str {
        &self.base().notifier_type
    }

    fn should_notify(&self, snapshot: &EvaluationSnapshot) -> bool;

    async fn notify(&self, snapshot: &EvaluationSnapshot) -> Result<(), NotifyError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotifyError {
    Serialize(String),
    Delivery(String),
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(msg) => write!(f, "notify: serialize: {msg}"),
            Self::Delivery(msg) => write!(f, "notify: delivery: {msg}"),
        }
    }
}

impl std::error::Error for NotifyError {}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Validation(String),
    UnknownType(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(reason) => write!(f, "validation: {reason}"),
            Self::UnknownType(t) => write!(f, "unknown notifier type '{t}'"),
        }
    }
}

impl std::error::Error for ConfigError {}
