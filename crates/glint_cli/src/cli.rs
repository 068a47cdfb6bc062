use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glint_math::Vec3;
use glint_renderer::RenderConfig;
use log::LevelFilter;
use serde::Deserialize;

/// Log levels accepted by `--log-level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments.
///
/// Render settings are optional so that values from `--config` survive
/// unless a flag is given explicitly.
#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "Render a built-in scene with the Glint ray tracer")]
pub struct Args {
    /// Scene to render (simple, lights, materials, shapes, cornell-box)
    #[arg(long)]
    pub scene: Option<String>,

    /// Tracer to use (simple, core, completion, challenge)
    #[arg(long)]
    pub tracer: Option<String>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Samples per pixel
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Maximum reflection depth
    #[arg(long)]
    pub depth: Option<u32>,

    /// Camera position as x,y,z
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub position: Option<Vec3>,

    /// Camera yaw in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub yaw: Option<f32>,

    /// Camera pitch in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub pitch: Option<f32>,

    /// Vertical field of view in degrees
    #[arg(long)]
    pub fov: Option<f32>,

    /// JSON file with render settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Contents of a `--config` file: render settings plus an optional scene.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub scene: Option<String>,
    #[serde(flatten)]
    pub render: RenderConfig,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

pub const DEFAULT_SCENE: &str = "cornell-box";

impl Args {
    /// Scene name: flag, then config file, then the default.
    pub fn scene_name(&self, file: &FileConfig) -> String {
        self.scene
            .clone()
            .or_else(|| file.scene.clone())
            .unwrap_or_else(|| DEFAULT_SCENE.to_string())
    }

    /// Overlay explicit flags on top of the file config.
    pub fn render_config(&self, file: &FileConfig) -> Result<RenderConfig> {
        let mut config = file.render.clone();

        if let Some(tracer) = &self.tracer {
            config.tracer = tracer.parse()?;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(samples) = self.samples {
            config.samples_per_pixel = samples;
        }
        if let Some(depth) = self.depth {
            config.max_depth = depth;
        }
        if let Some(position) = self.position {
            config.camera.position = position;
        }
        if let Some(yaw) = self.yaw {
            config.camera.yaw = yaw;
        }
        if let Some(pitch) = self.pitch {
            config.camera.pitch = pitch;
        }
        if let Some(fov) = self.fov {
            config.camera.fov_y = fov;
        }

        Ok(config)
    }
}

/// Parse "x,y,z" into a vector.
fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts = s
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in '{}': {}", s, e))?;

    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(format!("expected x,y,z but got '{}'", s)),
    }
}
