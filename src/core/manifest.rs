use glam::Vec3;
use serde::Deserialize;
use thiserror::Error;

use super::constants::MAX_PARTS;
use super::parts::{parse_hex_color, PartShape, PartSpec};

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("manifest lists no parts")]
    Empty,
    #[error("manifest lists {0} parts, at most {max} are supported", max = MAX_PARTS)]
    TooManyParts(usize),
    #[error("part {part:?}: bad color {color:?}")]
    BadColor { part: String, color: String },
    #[error("part {part:?}: {shape} expects {expected} size values, got {got}")]
    BadSize {
        part: String,
        shape: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("part {0:?}: sizes and positions must be finite, sizes positive")]
    NonFinite(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ShapeKind {
    Box,
    Cylinder,
    Sphere,
}

#[derive(Debug, Deserialize)]
struct PartEntry {
    name: String,
    shape: ShapeKind,
    size: Vec<f32>,
    position: [f32; 3],
    #[serde(default)]
    exploded: Option<[f32; 3]>,
    color: String,
}

#[derive(Debug, Deserialize)]
struct AssemblyManifest {
    parts: Vec<PartEntry>,
}

fn shape_from(entry: &PartEntry) -> Result<PartShape, ManifestError> {
    let (label, expected) = match entry.shape {
        ShapeKind::Box => ("box", 3),
        ShapeKind::Cylinder => ("cylinder", 3),
        ShapeKind::Sphere => ("sphere", 1),
    };
    if entry.size.len() != expected {
        return Err(ManifestError::BadSize {
            part: entry.name.clone(),
            shape: label,
            expected,
            got: entry.size.len(),
        });
    }
    if entry.size.iter().any(|v| !v.is_finite() || *v <= 0.0) {
        return Err(ManifestError::NonFinite(entry.name.clone()));
    }
    let s = &entry.size;
    Ok(match entry.shape {
        ShapeKind::Box => PartShape::Box {
            width: s[0],
            height: s[1],
            depth: s[2],
        },
        ShapeKind::Cylinder => PartShape::Cylinder {
            radius_top: s[0],
            radius_bottom: s[1],
            height: s[2],
        },
        ShapeKind::Sphere => PartShape::Sphere { radius: s[0] },
    })
}

/// Parse an assembly manifest. The first part anchors connection lines; a
/// part without `exploded` stays put when the view explodes.
pub fn parse_manifest(json: &str) -> Result<Vec<PartSpec>, ManifestError> {
    let manifest: AssemblyManifest = serde_json::from_str(json)?;
    if manifest.parts.is_empty() {
        return Err(ManifestError::Empty);
    }
    if manifest.parts.len() > MAX_PARTS {
        return Err(ManifestError::TooManyParts(manifest.parts.len()));
    }
    manifest
        .parts
        .iter()
        .map(|entry| {
            let shape = shape_from(entry)?;
            let color = parse_hex_color(&entry.color).ok_or_else(|| ManifestError::BadColor {
                part: entry.name.clone(),
                color: entry.color.clone(),
            })?;
            let rest = Vec3::from_array(entry.position);
            let exploded = entry.exploded.map(Vec3::from_array).unwrap_or(rest);
            if !rest.is_finite() || !exploded.is_finite() {
                return Err(ManifestError::NonFinite(entry.name.clone()));
            }
            Ok(PartSpec {
                name: entry.name.clone(),
                shape,
                rest_position: rest,
                exploded_position: exploded,
                color,
            })
        })
        .collect()
}
