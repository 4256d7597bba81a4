// File: crates/ledgerview-render-skia/src/lib.rs
// Summary: Skia CPU raster backend for ledgerview scenes (PNG files, PNG bytes, RGBA8 buffers).

use std::path::Path;

use anyhow::{anyhow, Result};
use skia_safe as skia;
use tracing::debug;

use ledgerview_core::scene::Scene;
use ledgerview_core::tooltip::Tooltip;

mod paint;
pub mod text;

pub use text::TextShaper;

/// RGBA8 pixels (unpremultiplied), width, height and row stride in bytes.
pub type Rgba8Frame = (Vec<u8>, u32, u32, usize);

pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    fn raster(&self, scene: &Scene, tooltip: Option<&Tooltip>) -> Result<skia::Surface> {
        let (w, h) = (scene.width.max(1) as i32, scene.height.max(1) as i32);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create raster surface {w}x{h}"))?;
        let canvas = surface.canvas();
        paint::scene(canvas, &self.shaper, scene);
        if let Some(tip) = tooltip.filter(|t| t.visible) {
            paint::tooltip(canvas, &self.shaper, tip, &scene.theme, (w as f32, h as f32));
        }
        Ok(surface)
    }

    /// Render to unpremultiplied RGBA8, optionally with a tooltip overlay.
    pub fn render_rgba8(&self, scene: &Scene, tooltip: Option<&Tooltip>) -> Result<Rgba8Frame> {
        let mut surface = self.raster(scene, tooltip)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(anyhow!("reading back {w}x{h} pixels failed"));
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    /// Render to encoded PNG bytes.
    pub fn render_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let mut surface = self.raster(scene, None)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG file at `path`, creating parent directories.
    pub fn write_png(&self, scene: &Scene, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.render_png_bytes(scene)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
        Ok(())
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}
