// Card header pictures. References are opaque strings from the feed; only
// local files are resolved here. Anything that cannot be loaded falls back
// to the placeholder gradient and is logged once.

use eframe::egui;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::{Card, CardId};

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("remote image references are not fetched: {0}")]
    Remote(String),

    #[error("image not found: {0}")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),
}

/// Raw RGBA pixels ready for upload as a texture.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ImageData {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        debug_assert_eq!(rgba.len(), (width * height * 4) as usize, "RGBA buffer size mismatch");
        Self { width, height, rgba }
    }

    fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied([self.width as usize, self.height as usize], &self.rgba)
    }
}

fn is_remote(reference: &str) -> bool {
    let lower = reference.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("data:")
}

/// Finds a local file for an image reference. Tried in order: the reference
/// as given, then relative to `assets_dir` (with a leading '/' stripped, the
/// way a web server roots "/picts/a.png" at its public folder).
pub fn resolve_image_path(reference: &str, assets_dir: &Path) -> Result<PathBuf, ImageError> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(ImageError::NotFound(String::new()));
    }
    if is_remote(reference) {
        return Err(ImageError::Remote(reference.to_string()));
    }

    let direct = PathBuf::from(reference);
    if direct.is_file() {
        return Ok(direct);
    }
    let rooted = assets_dir.join(reference.trim_start_matches(['/', '\\']));
    if rooted.is_file() {
        return Ok(rooted);
    }
    Err(ImageError::NotFound(reference.to_string()))
}

pub fn decode_image_file(path: &Path) -> Result<ImageData, ImageError> {
    let bytes = std::fs::read(path)?;
    let img = image::load_from_memory(&bytes)?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok(ImageData::new(w, h, rgba.into_vec()))
}

pub fn load_card_image(reference: &str, assets_dir: &Path) -> Result<ImageData, ImageError> {
    let path = resolve_image_path(reference, assets_dir)?;
    decode_image_file(&path)
}

/// One texture per card id; failed ids are remembered so they are not retried every frame.
#[derive(Default)]
pub struct ImageCache {
    textures: HashMap<CardId, egui::TextureHandle>,
    failed: HashSet<CardId>,
}

impl ImageCache {
    pub fn textures(&self) -> &HashMap<CardId, egui::TextureHandle> {
        &self.textures
    }

    /// Loads the card's picture if it has one and it was not tried yet.
    pub fn ensure(&mut self, ctx: &egui::Context, card: &Card, assets_dir: &Path) {
        let id = *card.id();
        if self.textures.contains_key(&id) || self.failed.contains(&id) {
            return;
        }
        let Some(reference) = card.image().as_deref() else {
            return;
        };
        match load_card_image(reference, assets_dir) {
            Ok(data) => {
                log::debug!("image ok: card={} size={}x{}", id, data.width, data.height);
                let tex = ctx.load_texture(
                    format!("card_image_{}", id),
                    data.to_color_image(),
                    egui::TextureOptions::LINEAR,
                );
                self.textures.insert(id, tex);
            }
            Err(e) => {
                log::warn!("image unavailable for card {}: {}", id, e);
                self.failed.insert(id);
            }
        }
    }
}
