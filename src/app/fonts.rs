// egui's built-in fonts have no CJK glyphs. Register the first usable system
// (or configured) font as a fallback so Chinese text does not render as boxes.

use eframe::egui;
use std::path::{Path, PathBuf};

const CJK_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\simhei.ttf",
];

const FONT_NAME: &str = "cjk_fallback";

fn candidates(configured: Option<&Path>) -> Vec<PathBuf> {
    configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(CJK_FONT_CANDIDATES.iter().map(PathBuf::from))
        .collect()
}

fn find_font(configured: Option<&Path>) -> Option<(PathBuf, Vec<u8>)> {
    candidates(configured).into_iter().find_map(|path| match std::fs::read(&path) {
        Ok(bytes) => Some((path, bytes)),
        Err(_) => None,
    })
}

pub fn install_fonts(ctx: &egui::Context, configured: Option<&Path>) {
    let Some((path, bytes)) = find_font(configured) else {
        log::warn!("No CJK font found; Chinese text will not render");
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(FONT_NAME.to_owned(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push(FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);
    log::info!("Using {} as CJK fallback font", path.to_string_lossy());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_font_is_tried_first() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("my.ttf");
        std::fs::write(&font, b"fake font bytes").unwrap();
        let (path, bytes) = find_font(Some(&font)).unwrap();
        assert_eq!(path, font);
        assert_eq!(bytes, b"fake font bytes");
    }

    #[test]
    fn candidate_list_without_config() {
        let list = candidates(None);
        assert_eq!(list.len(), CJK_FONT_CANDIDATES.len());
    }
}
