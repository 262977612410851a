//! JSON scene configuration for the demo binaries.
use crate::recognizer::RecognizerParams;
use crate::types::{Point, Rect};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    pub json_out: Option<PathBuf>,
}

/// A recorded scene: dot positions plus the selection rectangle.
#[derive(Clone, Debug, Deserialize)]
pub struct SceneConfig {
    pub dots: Vec<Point>,
    pub selection: Rect,
    #[serde(default)]
    pub recognizer: RecognizerParams,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<SceneConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
