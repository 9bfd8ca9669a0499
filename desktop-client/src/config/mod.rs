mod desktop_config;

pub use desktop_config::{DesktopConfig, get_config_manager};
