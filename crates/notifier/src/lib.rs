pub mod alert;
pub mod alertmanager;
pub mod config;
pub mod notifier;
