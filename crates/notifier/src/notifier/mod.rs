mod alertmanager;
mod base;
mod channel;
mod registry;
mod webhook;

pub use alertmanager::{AlertmanagerNotifier, ALERTMANAGER_TYPE};
pub use base::{AlertNotification, NotifierBase};
pub use channel::{ConfigError, Notifier, NotifyError};
pub use registry::{NotifierFactory, NotifierPlugin, NotifierRegistry};
pub use webhook::{HttpWebhookSender, WebhookRequest, WebhookSender};
