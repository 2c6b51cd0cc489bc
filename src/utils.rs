//! Utility functions

use crate::constants::DATA_DIR_NAME;
use std::path::PathBuf;

// Orange isometric block, square viewBox for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><path fill="#fb923c" d="M32 4 58 18 32 32 6 18Z"/><path fill="#ea580c" d="M6 18 32 32V60L6 46Z"/><path fill="#c2410c" d="M58 18 32 32V60L58 46Z"/></svg>"##;

/// Rasterize the icon SVG to a square RGBA image. `None` if the SVG or pixmap
/// cannot be built.
pub fn rasterize_icon(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the app data directory (settings, logs)
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_rasterizes_to_requested_size() {
        let (rgba, w, h) = rasterize_icon(32).expect("icon should rasterize");
        assert_eq!((w, h), (32, 32));
        assert_eq!(rgba.len(), 32 * 32 * 4);
        // Inside the left face of the block
        let inside = (20 * 32 + 8) * 4;
        assert_eq!(rgba[inside + 3], 255);
        // Top-left corner is outside the block
        assert_eq!(rgba[3], 0);
    }

    #[test]
    fn data_dir_ends_with_app_name() {
        assert!(data_dir().ends_with(DATA_DIR_NAME));
    }
}
