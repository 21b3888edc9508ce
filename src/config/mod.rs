//! Configuration loaded from `.asterism.toml`.

mod core;
mod loader;

pub use self::core::{AsterismConfig, PaginationConfig, SearchConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from_dir,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
