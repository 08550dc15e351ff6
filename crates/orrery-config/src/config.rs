//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Sun position in the default scene, in scene units.
const SUN_X: f32 = 214.080_46;

/// Top-level viewer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Fly camera settings.
    pub camera: CameraConfig,
    /// Scene-wide toggles and mesh rebuild behaviour.
    pub scene: SceneConfig,
    /// Bodies placed in the scene, in draw order.
    pub bodies: Vec<BodyConfig>,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Enable vsync.
    pub vsync: bool,
    /// MSAA sample count (1, 2, 4).
    pub msaa_samples: u32,
    /// Window title.
    pub title: String,
}

/// Fly camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting position.
    pub position: [f32; 3],
    /// Starting yaw in degrees (-90 looks down -Z).
    pub yaw_degrees: f32,
    /// Starting pitch in degrees.
    pub pitch_degrees: f32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
    /// Movement speed in units per second.
    pub speed: f32,
    /// Degrees of rotation per pixel of mouse movement.
    pub mouse_sensitivity: f32,
}

/// Which triangle faces are culled.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum CullModeSetting {
    #[default]
    Back,
    Front,
}

/// Scene-wide toggles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Name of the body whose shape the interactive controls edit.
    pub focus: String,
    /// Batch shape changes and rebuild once per frame instead of per change.
    pub deferred_rebuild: bool,
    /// Draw triangle edges only.
    pub wireframe: bool,
    /// Face culling mode.
    pub cull_mode: CullModeSetting,
    /// Draw orbit rings for orbiting planets.
    pub show_orbits: bool,
    /// Draw body name labels.
    pub show_labels: bool,
    /// Advance orbits each frame.
    pub simulation_running: bool,
    /// Simulation seconds per real second.
    pub time_scale: f32,
    /// Points per orbit ring.
    pub orbit_segments: u32,
}

/// Kind of body.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum BodyKindSetting {
    /// Fixed at `position`.
    Sun,
    /// Placed on a circular orbit around `orbit_center`.
    #[default]
    Planet,
}

/// One renderable body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BodyConfig {
    /// Display name, unique within the scene.
    pub name: String,
    pub kind: BodyKindSetting,
    /// Sphere radius in scene units.
    pub radius: f64,
    pub sector_count: u32,
    pub stack_count: u32,
    pub smooth: bool,
    /// Position of a sun.
    pub position: [f32; 3],
    /// Center of a planet's orbit.
    pub orbit_center: [f32; 3],
    /// Distance from `orbit_center`. Zero places the planet on the center.
    pub orbit_radius: f32,
    /// Simulation seconds per revolution. Zero keeps the planet still.
    pub orbital_period: f32,
    /// Starting angle on the orbit in degrees, from +X towards +Z.
    pub phase_degrees: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log the averaged frame rate.
    pub show_fps: bool,
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            scene: SceneConfig::default(),
            bodies: default_bodies(),
            debug: DebugConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            vsync: true,
            msaa_samples: 4,
            title: "Orrery".to_string(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            yaw_degrees: -90.0,
            pitch_degrees: 0.0,
            fov_degrees: 45.0,
            near: 0.1,
            far: 5000.0,
            speed: 2.5,
            mouse_sensitivity: 0.1,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            focus: "Earth".to_string(),
            deferred_rebuild: false,
            wireframe: false,
            cull_mode: CullModeSetting::Back,
            show_orbits: true,
            show_labels: false,
            simulation_running: true,
            time_scale: 1.0,
            orbit_segments: 128,
        }
    }
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            name: "Body".to_string(),
            kind: BodyKindSetting::Planet,
            radius: 1.0,
            sector_count: 36,
            stack_count: 18,
            smooth: true,
            position: [0.0; 3],
            orbit_center: [0.0; 3],
            orbit_radius: 0.0,
            orbital_period: 0.0,
            phase_degrees: 0.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_fps: true,
            log_level: "info".to_string(),
        }
    }
}

/// Earth at the origin, the Sun far along +X, the Moon circling Earth, and Mars
/// on the far side of Earth from the Sun.
fn default_bodies() -> Vec<BodyConfig> {
    vec![
        BodyConfig {
            name: "Earth".to_string(),
            radius: 0.0465,
            sector_count: 36,
            stack_count: 18,
            orbit_center: [SUN_X, 0.0, 0.0],
            orbit_radius: SUN_X,
            phase_degrees: 180.0,
            ..BodyConfig::default()
        },
        BodyConfig {
            name: "Sun".to_string(),
            kind: BodyKindSetting::Sun,
            radius: 10.0,
            sector_count: 36,
            stack_count: 16,
            position: [SUN_X, 0.0, 0.0],
            ..BodyConfig::default()
        },
        BodyConfig {
            name: "Moon".to_string(),
            radius: 0.01,
            sector_count: 24,
            stack_count: 9,
            orbit_radius: 1.395,
            orbital_period: 27.3,
            ..BodyConfig::default()
        },
        BodyConfig {
            name: "Mars".to_string(),
            radius: 0.04,
            sector_count: 24,
            stack_count: 9,
            orbit_center: [SUN_X, 0.0, 0.0],
            orbit_radius: SUN_X + 20.0,
            phase_degrees: 180.0,
            ..BodyConfig::default()
        },
    ]
}

/// Platform config directory for the viewer, if the platform has one.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("orrery"))
}

// --- Lookup ---

impl Config {
    /// The body the interactive shape controls edit.
    pub fn focus_body(&self) -> Option<&BodyConfig> {
        self.bodies.iter().find(|b| b.name == self.scene.focus)
    }

    pub fn focus_body_mut(&mut self) -> Option<&mut BodyConfig> {
        let focus = &self.scene.focus;
        self.bodies.iter_mut().find(|b| &b.name == focus)
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load `config.ron` from `config_dir`, or write and return the defaults.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Write this config to `config_dir/config.ron`, creating the directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path,
            source,
        })
    }

    /// Hot-reload: `Some(new_config)` if the file differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("width: 1280"));
        assert!(ron_str.contains("focus: \"Earth\""));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_default_scene_matches_solar_layout() {
        let config = Config::default();
        let names: Vec<&str> = config.bodies.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Earth", "Sun", "Moon", "Mars"]);

        let earth = config.focus_body().unwrap();
        assert_eq!((earth.sector_count, earth.stack_count), (36, 18));
        assert!(earth.smooth);

        let sun = &config.bodies[1];
        assert_eq!(sun.kind, BodyKindSetting::Sun);
        assert_eq!(sun.radius, 10.0);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(window: (width: 800), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.scene, SceneConfig::default());
        assert_eq!(config.bodies.len(), 4);
    }

    #[test]
    fn test_partial_body_entry_fills_defaults() {
        let ron_str = r#"(bodies: [(name: "Io", radius: 0.5, orbit_radius: 3.0)])"#;
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.bodies.len(), 1);
        let io = &config.bodies[0];
        assert_eq!(io.kind, BodyKindSetting::Planet);
        assert_eq!(io.sector_count, 36);
        assert_eq!(io.orbit_radius, 3.0);
        assert!(config.focus_body().is_none());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.window.width = 1920;
        config.scene.cull_mode = CullModeSetting::Front;
        config.bodies[0].sector_count = 64;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.scene.wireframe = true;
        modified.save(dir.path()).unwrap();

        let reloaded = config.reload(dir.path()).unwrap();
        assert!(reloaded.unwrap().scene.wireframe);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.ron"), "{{not valid}}").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.ron"));
    }

    #[test]
    fn test_ron_comments_accepted() {
        let ron_str = "// viewer settings\n(\n  // nothing overridden\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }
}
