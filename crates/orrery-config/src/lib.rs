//! Configuration for the Orrery viewer.
//!
//! Settings persist to disk as RON, accept CLI overrides via clap, and can be
//! hot-reloaded. Every section defaults field by field, so old files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    BodyConfig, BodyKindSetting, CameraConfig, Config, CullModeSetting, DebugConfig, SceneConfig,
    WindowConfig, default_config_dir,
};
pub use error::ConfigError;
