//! Font discovery for the `ab_glyph` text path, which does not search OS fonts itself.

use plotters::style::{FontStyle, register_font};
use std::sync::OnceLock;

/// Environment variable naming a TrueType font to use for labels.
pub const FONT_ENV: &str = "PIPLOT_FONT";

const FONT_CANDIDATES: [&str; 8] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static FONT_READY: OnceLock<bool> = OnceLock::new();

/// Register a "sans-serif" font once per process. Returns whether text can be drawn.
pub fn ensure_fonts_registered() -> bool {
    *FONT_READY.get_or_init(|| {
        let from_env = std::env::var(FONT_ENV).ok();
        let candidates = from_env
            .iter()
            .map(String::as_str)
            .chain(FONT_CANDIDATES.iter().copied());
        for path in candidates {
            let Ok(bytes) = std::fs::read(path) else {
                continue;
            };
            // plotters keeps the font for the rest of the process
            let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
            match register_font("sans-serif", FontStyle::Normal, bytes) {
                Ok(()) => {
                    log::debug!("using font {path}");
                    return true;
                }
                Err(_) => log::debug!("skipping unreadable font {path}"),
            }
        }
        log::warn!("no TrueType font found (set {FONT_ENV}); tick labels and legend are not drawn");
        false
    })
}
