//! PNG output of a rasterized scene.
//!
//! Feature-gated behind `png` (default on) so the WASM build can depend on
//! the gallery without pulling in the `image` crate.

use gl_sketches_core::SketchError;
use std::path::Path;

use crate::raster::Raster;

/// Writes the raster's RGBA8 pixels as a PNG image.
///
/// Returns `SketchError::Io` on encode or write failure.
pub fn write_png(raster: &Raster, path: &Path) -> Result<(), SketchError> {
    let img = image::RgbaImage::from_raw(raster.width(), raster.height(), raster.pixels().to_vec())
        .ok_or_else(|| SketchError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| SketchError::Io(e.to_string()))?;
    log::info!("wrote {}x{} snapshot to {}", raster.width(), raster.height(), path.display());
    Ok(())
}
