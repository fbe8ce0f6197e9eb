//! Reading `config.toml`, and creating it on first run.

mod loader;
mod paths;
mod template;


pub use loader::{load_default, load_from_path};
pub use paths::{config_path_in, create_default_config, default_config_path};
