//! Configuration for courtside.
//!
//! The config lives in a TOML file in the platform config directory. Every
//! field has a default, so a missing file or a partial one both load.

mod error;

use std::fs;
use std::path::{Path, PathBuf};

use courtside_background::{
    BUILTIN_SCENE_NAMES, BackgroundOptions, CellMetrics, LayoutOptions, builtin_scene,
};
use courtside_core::{AnimationSpeed, Palette, Rgb, Scene, Shape};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

pub use error::{ConfigError, Result};

const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "courtside.log";
const MAX_FPS: u32 = 240;
/// Smallest cell edge, in logical pixels, for layout and terminal cells.
const MIN_CELL_PX: f64 = 1.0;

/// Verbosity of the log file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Cell-grid sizing, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub narrow_breakpoint_px: f64,
    pub wide_cell_px: f64,
    pub narrow_cell_px: f64,
    pub max_pixel_ratio: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let defaults = LayoutOptions::default();
        Self {
            narrow_breakpoint_px: defaults.narrow_breakpoint_px,
            wide_cell_px: defaults.wide_cell_px,
            narrow_cell_px: defaults.narrow_cell_px,
            max_pixel_ratio: defaults.max_pixel_ratio,
        }
    }
}

/// Terminal rendering settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Logical pixels covered by one terminal column.
    pub cell_width_px: f64,
    /// Logical pixels covered by one terminal row.
    pub cell_height_px: f64,
    /// Target frame rate while animating.
    pub fps: u32,
    /// Color glyphs are blended over.
    pub backdrop: Rgb,
    /// Size background cells to one terminal column, ignoring the
    /// `[layout]` cell sizes.
    pub align_to_cells: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        let metrics = CellMetrics::default();
        Self {
            cell_width_px: metrics.width_px,
            cell_height_px: metrics.height_px,
            fps: 30,
            backdrop: Rgb(10, 10, 12),
            align_to_cells: true,
        }
    }
}

/// Which scenes to show, and in what order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenesConfig {
    /// Scene names in display order. May name built-in or custom scenes.
    pub order: Vec<String>,
    /// Extra scenes; those not named in `order` are shown after it.
    pub custom: Vec<Scene>,
}

impl Default for ScenesConfig {
    fn default() -> Self {
        Self {
            order: BUILTIN_SCENE_NAMES.iter().map(|s| s.to_string()).collect(),
            custom: Vec::new(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Show one static frame instead of animating.
    pub reduced_motion: bool,
    pub speed: AnimationSpeed,
    pub palette: Palette,
    pub log_level: LogLevel,
    pub layout: LayoutConfig,
    pub terminal: TerminalConfig,
    pub scenes: ScenesConfig,
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "courtside").ok_or(ConfigError::NoConfigDir)
}

impl Config {
    /// Default location of the config file.
    pub fn path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join(CONFIG_FILE))
    }

    /// Location of the log file.
    pub fn log_path() -> Result<PathBuf> {
        Ok(project_dirs()?.data_local_dir().join(LOG_FILE))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load and validate a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Write the config, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text).map_err(io_err)
    }

    /// Check value ranges and that the scene list resolves.
    pub fn validate(&self) -> Result<()> {
        let layout = &self.layout;
        cell_size("layout.wide_cell_px", layout.wide_cell_px)?;
        cell_size("layout.narrow_cell_px", layout.narrow_cell_px)?;
        non_negative("layout.narrow_breakpoint_px", layout.narrow_breakpoint_px)?;
        if !(layout.max_pixel_ratio.is_finite() && layout.max_pixel_ratio >= 1.0) {
            return Err(ConfigError::invalid(
                "layout.max_pixel_ratio",
                "must be at least 1",
            ));
        }

        cell_size("terminal.cell_width_px", self.terminal.cell_width_px)?;
        cell_size("terminal.cell_height_px", self.terminal.cell_height_px)?;
        if !(1..=MAX_FPS).contains(&self.terminal.fps) {
            return Err(ConfigError::invalid(
                "terminal.fps",
                format!("must be between 1 and {MAX_FPS}"),
            ));
        }

        for scene in &self.scenes.custom {
            if scene.name().is_empty() {
                return Err(ConfigError::invalid("scenes.custom.name", "must not be empty"));
            }
            for (i, shape) in scene.shapes().iter().enumerate() {
                validate_shape(shape).map_err(|reason| {
                    ConfigError::invalid(format!("scene `{}` shape {i}", scene.name()), reason)
                })?;
            }
        }

        self.resolve_scenes().map(|_| ())
    }

    /// Scenes to show, in display order.
    pub fn resolve_scenes(&self) -> Result<Vec<Scene>> {
        let custom = |name: &str| self.scenes.custom.iter().find(|s| s.name() == name);

        let mut scenes = self
            .scenes
            .order
            .iter()
            .map(|name| {
                custom(name)
                    .cloned()
                    .or_else(|| builtin_scene(name))
                    .ok_or_else(|| ConfigError::UnknownScene(name.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        scenes.extend(
            self.scenes
                .custom
                .iter()
                .filter(|s| !self.scenes.order.iter().any(|name| name == s.name()))
                .cloned(),
        );

        if scenes.is_empty() {
            return Err(ConfigError::NoScenes);
        }
        Ok(scenes)
    }

    /// Options for mounting the background.
    pub fn background_options(&self) -> BackgroundOptions {
        let layout = LayoutOptions {
            narrow_breakpoint_px: self.layout.narrow_breakpoint_px,
            wide_cell_px: self.layout.wide_cell_px,
            narrow_cell_px: self.layout.narrow_cell_px,
            max_pixel_ratio: self.layout.max_pixel_ratio,
        };
        BackgroundOptions {
            reduced_motion: self.reduced_motion,
            speed: self.speed,
            palette: self.palette,
            layout: if self.terminal.align_to_cells {
                self.cell_metrics().align_layout(layout)
            } else {
                layout
            },
            start_scene: 0,
        }
    }

    /// How terminal cells map to logical pixels.
    pub fn cell_metrics(&self) -> CellMetrics {
        CellMetrics {
            width_px: self.terminal.cell_width_px,
            height_px: self.terminal.cell_height_px,
        }
    }
}

fn cell_size(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= MIN_CELL_PX {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("must be at least {MIN_CELL_PX} px"),
        ))
    }
}

fn non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, "must be zero or more"))
    }
}

/// Reject shapes the sampler cannot make sense of.
fn validate_shape(shape: &Shape) -> std::result::Result<(), String> {
    let density = shape.density();
    if !(density.is_finite() && (0.0..=1.0).contains(&density)) {
        return Err(format!("{} density {density} is outside [0, 1]", shape.kind()));
    }

    let (coords, extents): (Vec<f64>, Vec<f64>) = match *shape {
        Shape::Circle { cx, cy, r, .. } => (vec![cx, cy], vec![r]),
        Shape::Arc {
            cx,
            cy,
            r,
            start_angle,
            end_angle,
            ..
        } => (vec![cx, cy, start_angle, end_angle], vec![r]),
        Shape::Line { x1, y1, x2, y2, .. } => (vec![x1, y1, x2, y2], Vec::new()),
        Shape::Rect { cx, cy, w, h, .. } => (vec![cx, cy], vec![w, h]),
        Shape::Bezier {
            x1,
            y1,
            cx1,
            cy1,
            cx2,
            cy2,
            x2,
            y2,
            ..
        } => (vec![x1, y1, cx1, cy1, cx2, cy2, x2, y2], Vec::new()),
    };

    if coords.iter().chain(&extents).any(|v| !v.is_finite()) {
        return Err(format!("{} has a non-finite value", shape.kind()));
    }
    if extents.iter().any(|&v| v < 0.0) {
        return Err(format!("{} has a negative size", shape.kind()));
    }
    Ok(())
}
