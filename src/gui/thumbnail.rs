// src/gui/thumbnail.rs
use eframe::egui::ColorImage;

/// Decode `bytes` and shrink to fit a `max_px` square, keeping the aspect
/// ratio. Images already inside the box are left at their size.
pub fn decode(bytes: &[u8], max_px: u32) -> Result<ColorImage, image::ImageError> {
    let img = image::load_from_memory(bytes)?;
    let img = if img.width() > max_px || img.height() > max_px {
        img.thumbnail(max_px, max_px)
    } else {
        img
    };
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
