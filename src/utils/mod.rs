//! Utility module for smenu.
//!
//! Path resolution and config file locations.

mod paths;

pub use paths::{
    config_dir, expand_home, global_config_file, local_config_file, resolve_script_dir,
    LOCAL_CONFIG_NAME, SCRIPT_DIR_ENV,
};
