use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::Path;

use anyhow::Context;

use crate::assets::io::save_png;
use crate::blend::mode::{BlendMode, ModeGroup};
use crate::foundation::core::Canvas;
use crate::foundation::error::BlendlabResult;
use crate::render::gallery::Gallery;

/// File name of the manifest written next to exported PNGs.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Description of an exported gallery directory.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GalleryManifest {
    /// Shared canvas of every output.
    pub canvas: Canvas,
    /// One entry per exported mode, in gallery order.
    pub modes: Vec<ManifestEntry>,
}

/// One exported mode.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ManifestEntry {
    /// Mode identifier.
    pub id: BlendMode,
    /// English display name.
    pub label: String,
    /// Chinese display name.
    pub label_zh: String,
    /// Gallery section.
    pub group: ModeGroup,
    /// PNG file name, relative to the manifest.
    pub file: String,
}

/// Write `<id>.png` for every output plus [`MANIFEST_FILE`] into `dir`.
#[tracing::instrument(skip_all, fields(out_dir = %dir.display()))]
pub fn write_gallery(gallery: &Gallery, dir: &Path) -> BlendlabResult<GalleryManifest> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;

    let mut modes = Vec::with_capacity(gallery.len());
    for (mode, buf) in gallery.iter() {
        let file = format!("{}.png", mode.id());
        save_png(buf, &dir.join(&file))?;
        modes.push(ManifestEntry {
            id: mode,
            label: mode.label().to_string(),
            label_zh: mode.label_zh().to_string(),
            group: mode.group(),
            file,
        });
    }

    let manifest = GalleryManifest {
        canvas: gallery.canvas(),
        modes,
    };
    let path = dir.join(MANIFEST_FILE);
    let f = File::create(&path).with_context(|| format!("create '{}'", path.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &manifest)
        .with_context(|| format!("write manifest '{}'", path.display()))?;
    w.flush()
        .with_context(|| format!("flush manifest '{}'", path.display()))?;

    tracing::debug!(files = manifest.modes.len(), "gallery exported");
    Ok(manifest)
}

/// Read a manifest previously written by [`write_gallery`].
pub fn read_manifest(dir: &Path) -> BlendlabResult<GalleryManifest> {
    let path = dir.join(MANIFEST_FILE);
    let f = File::open(&path).with_context(|| format!("open manifest '{}'", path.display()))?;
    let manifest: GalleryManifest = serde_json::from_reader(std::io::BufReader::new(f))
        .with_context(|| format!("parse manifest '{}'", path.display()))?;
    Ok(manifest)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/export.rs"]
mod tests;
