//! PNG export of a rendered surface.

use std::path::Path;

use crate::render::Surface;

#[derive(Debug)]
pub struct SnapshotError {
    pub message: String,
    pub phase: &'static str,
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.phase, self.message)
    }
}

impl std::error::Error for SnapshotError {}

/// Convert `surface` into an owned RGBA image.
pub fn to_image(surface: &Surface) -> Result<image::RgbaImage, SnapshotError> {
    let (w, h) = (surface.width as u32, surface.height as u32);
    if w == 0 || h == 0 {
        return Err(SnapshotError {
            message: "surface is empty".to_string(),
            phase: "encode",
        });
    }
    image::RgbaImage::from_raw(w, h, surface.pixels.clone()).ok_or_else(|| SnapshotError {
        message: format!("pixel buffer does not match {}x{}", w, h),
        phase: "encode",
    })
}

/// Write `surface` to `path` as PNG.
pub fn save_png(surface: &Surface, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    let img = to_image(surface)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| SnapshotError {
            message: format!("{}: {}", path.display(), e),
            phase: "write",
        })?;
    log::info!("snapshot saved to {} ({}x{})", path.display(), surface.width, surface.height);
    Ok(())
}
