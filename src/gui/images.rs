// src/gui/images.rs
//
// Card artwork → egui textures, decoded once per path.
// A missing or undecodable file is replaced by the fallback artwork, drawn
// translucent. If the fallback is missing too the caller gets `None` and
// draws a text placeholder. None of this is ever an error to the user.

use std::{
    collections::HashMap,
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use eframe::egui::{self, TextureHandle};

use crate::core::sanitize::missing_card_path;

#[derive(Clone)]
pub struct CardImage {
    pub texture: TextureHandle,
    /// Path actually shown (the fallback path when substituted).
    pub path: String,
    /// True only when the requested artwork was unavailable and the
    /// fallback stands in for it. Asking for the fallback path directly
    /// (an empty card label) is not a substitution.
    pub substituted: bool,
}

pub struct ImageCache {
    /// Directory the relative `images/...` paths resolve against.
    root: PathBuf,
    entries: HashMap<String, Option<CardImage>>,
    fallback: Option<Option<TextureHandle>>,
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::with_root(".")
    }
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: HashMap::new(),
            fallback: None,
        }
    }

    /// Texture for `path`, loading (or substituting) it on first use.
    pub fn get(&mut self, ctx: &egui::Context, path: &str) -> Option<&CardImage> {
        if !self.entries.contains_key(path) {
            let loaded = self.load(ctx, path);
            self.entries.insert(s!(path), loaded);
        }
        self.entries.get(path).and_then(Option::as_ref)
    }

    /// Drop every cached texture (used on reload so replaced artwork shows).
    pub fn clear(&mut self) {
        self.entries.clear();
        self.fallback = None;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn load(&mut self, ctx: &egui::Context, path: &str) -> Option<CardImage> {
        let missing = missing_card_path();
        if path == missing {
            return self.fallback_texture(ctx).map(|texture| CardImage {
                texture,
                path: missing,
                substituted: false,
            });
        }

        match decode(ctx, &self.root, path) {
            Ok(texture) => Some(CardImage { texture, path: s!(path), substituted: false }),
            Err(e) => {
                logd!("Image: {path} unavailable ({e}), using fallback");
                self.fallback_texture(ctx).map(|texture| CardImage {
                    texture,
                    path: missing,
                    substituted: true,
                })
            }
        }
    }

    fn fallback_texture(&mut self, ctx: &egui::Context) -> Option<TextureHandle> {
        let root = &self.root;
        self.fallback
            .get_or_insert_with(|| {
                let path = missing_card_path();
                match decode(ctx, root, &path) {
                    Ok(t) => Some(t),
                    Err(e) => {
                        loge!("Image: fallback {path} unavailable ({e})");
                        None
                    }
                }
            })
            .clone()
    }
}

fn decode(ctx: &egui::Context, root: &Path, path: &str) -> Result<TextureHandle, Box<dyn Error>> {
    let bytes = fs::read(root.join(path))?;
    let rgba = image::load_from_memory(&bytes)?.to_rgba8();
    let (w, h) = rgba.dimensions();
    let color = egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], rgba.as_raw());
    Ok(ctx.load_texture(path, color, egui::TextureOptions::LINEAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sanitize::card_image_path;

    fn write_png(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        image::RgbaImage::from_pixel(4, 6, image::Rgba([200, 10, 10, 255]))
            .save(&path)
            .unwrap();
    }

    #[test]
    fn missing_art_is_replaced_by_fallback() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), &missing_card_path());
        let ctx = egui::Context::default();
        let mut cache = ImageCache::with_root(dir.path());

        let img = cache.get(&ctx, &card_image_path("Scales")).unwrap();
        assert!(img.substituted);
        assert_eq!(img.path, "images/missing-card.png");
        assert_eq!(img.texture.size(), [4, 6]);
    }

    #[test]
    fn present_art_is_not_substituted() {
        let dir = tempfile::tempdir().unwrap();
        let scales = card_image_path("Scales");
        write_png(dir.path(), &scales);
        let ctx = egui::Context::default();
        let mut cache = ImageCache::with_root(dir.path());

        let img = cache.get(&ctx, &scales).unwrap();
        assert!(!img.substituted);
        assert_eq!(img.path, scales);
    }

    #[test]
    fn requesting_the_fallback_itself_is_not_substituted() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), &missing_card_path());
        let ctx = egui::Context::default();
        let mut cache = ImageCache::with_root(dir.path());

        let img = cache.get(&ctx, &missing_card_path()).unwrap();
        assert!(!img.substituted);
    }

    #[test]
    fn no_fallback_file_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = egui::Context::default();
        let mut cache = ImageCache::with_root(dir.path());

        assert!(cache.get(&ctx, &card_image_path("Scales")).is_none());
        assert!(cache.get(&ctx, &missing_card_path()).is_none());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn fallback_is_decoded_once() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), &missing_card_path());
        let ctx = egui::Context::default();
        let mut cache = ImageCache::with_root(dir.path());

        let a = cache.get(&ctx, "images/a.png").unwrap().texture.id();
        let b = cache.get(&ctx, "images/b.png").unwrap().texture.id();
        let c = cache.get(&ctx, &missing_card_path()).unwrap().texture.id();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn clear_drops_cached_entries() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), &missing_card_path());
        let ctx = egui::Context::default();
        let mut cache = ImageCache::with_root(dir.path());

        let before = cache.get(&ctx, "images/a.png").unwrap().texture.id();
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());

        // Artwork added after a reload is picked up.
        write_png(dir.path(), "images/a.png");
        let after = cache.get(&ctx, "images/a.png").unwrap();
        assert!(!after.substituted);
        assert_ne!(after.texture.id(), before);
    }
}
