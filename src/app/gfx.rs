// src/app/gfx.rs
use egui::{self as eg, ColorImage, TextureHandle};
use image::imageops::FilterType;

/// Upload an RGBA image to a GPU texture. (UI thread only)
pub fn upload_rgba(
    ctx: &eg::Context,
    w: u32,
    h: u32,
    bytes: &[u8],
    name: &str,
) -> TextureHandle {
    let img = ColorImage::from_rgba_unmultiplied([w as usize, h as usize], bytes);
    ctx.load_texture(name.to_string(), img, eg::TextureOptions::LINEAR)
}

/// Replace the pixels of an existing texture in place. (UI thread only)
pub fn update_rgba(tex: &mut TextureHandle, w: u32, h: u32, bytes: &[u8]) {
    let img = ColorImage::from_rgba_unmultiplied([w as usize, h as usize], bytes);
    tex.set(img, eg::TextureOptions::LINEAR);
}

/// Decode a poster file and squash it to `size`, like the list thumbnails.
pub fn load_poster_rgba(path: &str, size: [u32; 2]) -> Result<(u32, u32, Vec<u8>), String> {
    let img = image::ImageReader::open(path)
        .map_err(|e| format!("open image {path}: {e}"))?
        .with_guessed_format()
        .map_err(|e| format!("guess format {path}: {e}"))?
        .decode()
        .map_err(|e| format!("decode {path}: {e}"))?;
    let [w, h] = size;
    let rgba = img.resize_exact(w, h, FilterType::Triangle).to_rgba8();
    Ok((w, h, rgba.into_raw()))
}

/// Load a poster texture from disk. (UI thread only)
pub fn load_texture_from_path(
    ctx: &eg::Context,
    path: &str,
    size: [u32; 2],
) -> Result<TextureHandle, String> {
    let (w, h, bytes) = load_poster_rgba(path, size)?;
    Ok(upload_rgba(ctx, w, h, &bytes, &format!("poster:{path}")))
}
