mod factory;
mod loader;
mod schema;

pub use factory::build_notifiers;
pub use loader::{default_config_path, load_from_file, load_from_str, LoadError};
pub use schema::{RelayConfig, TransportConfig};
