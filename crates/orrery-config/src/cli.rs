//! Command-line arguments for the Orrery viewer.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// Shape flags edit the focus body named in `scene.focus`. Everything else
/// overrides the matching field loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "UV-sphere orrery viewer")]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Radius of the focus body.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Longitudinal subdivisions of the focus body (minimum 3).
    #[arg(long)]
    pub sectors: Option<u32>,

    /// Latitudinal subdivisions of the focus body (minimum 2).
    #[arg(long)]
    pub stacks: Option<u32>,

    /// Smooth shading for the focus body.
    #[arg(long)]
    pub smooth: Option<bool>,

    /// Coalesce shape edits into one rebuild per frame.
    #[arg(long)]
    pub deferred: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Frames to simulate before exiting.
    #[arg(long, default_value_t = 240)]
    pub frames: u32,

    /// Seconds per simulated frame.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub timestep: f32,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(deferred) = args.deferred {
            self.scene.deferred_rebuild = deferred;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }

        let shape_overridden = args.radius.is_some()
            || args.sectors.is_some()
            || args.stacks.is_some()
            || args.smooth.is_some();
        if !shape_overridden {
            return;
        }
        let Some(body) = self.focus_body_mut() else {
            log::warn!(
                "Focus body '{}' not found; shape overrides ignored",
                self.scene.focus
            );
            return;
        };
        if let Some(r) = args.radius {
            body.radius = r;
        }
        if let Some(s) = args.sectors {
            body.sector_count = s;
        }
        if let Some(s) = args.stacks {
            body.stack_count = s;
        }
        if let Some(smooth) = args.smooth {
            body.smooth = smooth;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1920),
            sectors: Some(72),
            smooth: Some(false),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.window.width, 1920);
        let earth = config.focus_body().unwrap();
        assert_eq!(earth.sector_count, 72);
        assert!(!earth.smooth);
        // Non-overridden fields retain defaults
        assert_eq!(config.window.height, 720);
        assert_eq!(earth.stack_count, 18);
        assert_eq!(config.bodies[1].sector_count, 36);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_shape_override_without_focus_body_is_ignored() {
        let mut config = Config::default();
        config.scene.focus = "Pluto".to_string();
        let before = config.clone();
        let args = CliArgs {
            stacks: Some(4),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config, before);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "orrery",
            "--sectors",
            "12",
            "--smooth",
            "false",
            "--frames",
            "10",
        ]);
        assert_eq!(args.sectors, Some(12));
        assert_eq!(args.smooth, Some(false));
        assert_eq!(args.frames, 10);
        assert!(args.width.is_none());
        assert!((args.timestep - 1.0 / 60.0).abs() < 1e-6);
    }
}
