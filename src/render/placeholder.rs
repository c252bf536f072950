//! Placeholder lesson cards: a flat colour field, two white frames, a large
//! centred glyph and the subject name along the bottom, both with a hard
//! black drop shadow.

use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontArc, GlyphId, OutlinedGlyph, PxScale, Rect, ScaleFont};
use image::{Rgb, RgbImage};
use tracing::{debug, warn};

use crate::core::errors::{AppError, AppResult};

const BOLD_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
];
const REGULAR_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
];

const GLYPH_PX: f32 = 60.0;
const CAPTION_PX: f32 = 24.0;
const GLYPH_RAISE: i32 = 20;
const CAPTION_FROM_BOTTOM: i32 = 50;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Faces used for the glyph and the caption. Either may be missing, in which
/// case that text is left off the card.
pub struct CardFonts {
    glyph: Option<FontArc>,
    caption: Option<FontArc>,
}

impl CardFonts {
    /// Loads `override_path` for both faces, or falls back to the usual
    /// DejaVu install locations.
    pub fn load(override_path: Option<&Path>) -> Self {
        let (glyph, caption) = match override_path {
            Some(path) => {
                let face = load_font(path);
                (face.clone(), face)
            }
            None => (
                first_loadable(BOLD_FONT_CANDIDATES),
                first_loadable(REGULAR_FONT_CANDIDATES),
            ),
        };
        if glyph.is_none() || caption.is_none() {
            warn!(
                glyph_font = glyph.is_some(),
                caption_font = caption.is_some(),
                "no usable font found, placeholder text will be skipped"
            );
        }
        Self { glyph, caption }
    }

    pub fn none() -> Self {
        Self {
            glyph: None,
            caption: None,
        }
    }
}

fn first_loadable(candidates: &[&str]) -> Option<FontArc> {
    candidates
        .iter()
        .map(|candidate| PathBuf::from(*candidate))
        .filter(|path| path.exists())
        .find_map(|path| load_font(&path))
}

fn load_font(path: &Path) -> Option<FontArc> {
    let loaded = std::fs::read(path)
        .map_err(|err| AppError::Font(format!("cannot read {}: {err}", path.display())))
        .and_then(|bytes| {
            FontArc::try_from_vec(bytes)
                .map_err(|err| AppError::Font(format!("invalid font {}: {err}", path.display())))
        });
    match loaded {
        Ok(font) => {
            debug!(font = %path.display(), "loaded font");
            Some(font)
        }
        Err(err) => {
            warn!(code = err.code(), "{err}");
            None
        }
    }
}

/// Accepts `#RRGGBB` and `#RGB`.
pub fn parse_hex_color(raw: &str) -> AppResult<Rgb<u8>> {
    let hex = raw
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| AppError::InvalidInput(format!("colour must start with '#': {raw}")))?;
    if !hex.is_ascii() {
        return Err(AppError::InvalidInput(format!("invalid hex colour: {raw}")));
    }
    let expanded: String = match hex.len() {
        6 => hex.to_string(),
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        _ => {
            return Err(AppError::InvalidInput(format!(
                "colour must be #RRGGBB or #RGB: {raw}"
            )))
        }
    };
    let channel = |idx: usize| {
        u8::from_str_radix(&expanded[idx..idx + 2], 16)
            .map_err(|_| AppError::InvalidInput(format!("invalid hex colour: {raw}")))
    };
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

/// `english-literature.jpg` -> `English Literature`.
pub fn caption_for(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    title_case(&stem.replace('-', " "))
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

pub fn render_card(
    filename: &str,
    background: Rgb<u8>,
    glyph: &str,
    fonts: &CardFonts,
    width: u32,
    height: u32,
) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, background);
    let (w, h) = (width as i32, height as i32);

    stroke_rect(&mut img, 10, 10, w - 10, h - 10, 3, WHITE);
    stroke_rect(&mut img, 20, 20, w - 20, h - 20, 1, WHITE);

    if let Some(font) = &fonts.glyph {
        let run = TextRun::layout(font, PxScale::from(GLYPH_PX), glyph);
        if let Some((tw, th)) = run.size() {
            let x = (w - tw) / 2;
            let y = (h - th) / 2 - GLYPH_RAISE;
            run.draw(&mut img, x + 2, y + 2, BLACK);
            run.draw(&mut img, x, y, WHITE);
        }
    }

    if let Some(font) = &fonts.caption {
        let run = TextRun::layout(font, PxScale::from(CAPTION_PX), &caption_for(filename));
        if let Some((tw, _)) = run.size() {
            let x = (w - tw) / 2;
            let y = h - CAPTION_FROM_BOTTOM;
            run.draw(&mut img, x + 1, y + 1, BLACK);
            run.draw(&mut img, x, y, WHITE);
        }
    }

    img
}

/// Outline drawn inward from the given inclusive corners, `thickness` px wide.
fn stroke_rect(img: &mut RgbImage, x0: i32, y0: i32, x1: i32, y1: i32, thickness: i32, color: Rgb<u8>) {
    for inset in 0..thickness {
        let (left, top, right, bottom) = (x0 + inset, y0 + inset, x1 - inset, y1 - inset);
        if left > right || top > bottom {
            break;
        }
        for x in left..=right {
            put_clipped(img, x, top, color);
            put_clipped(img, x, bottom, color);
        }
        for y in top..=bottom {
            put_clipped(img, left, y, color);
            put_clipped(img, right, y, color);
        }
    }
}

fn put_clipped(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// A laid out line of text; positions are relative to its ink bounding box.
struct TextRun {
    glyphs: Vec<OutlinedGlyph>,
    bounds: Option<Rect>,
}

impl TextRun {
    fn layout(font: &FontArc, scale: PxScale, text: &str) -> Self {
        let scaled = font.as_scaled(scale);
        let mut caret = 0.0_f32;
        let mut previous: Option<GlyphId> = None;
        let mut glyphs = Vec::new();

        for ch in text.chars() {
            let id = font.glyph_id(ch);
            // .notdef: emoji and variation selectors the face does not cover
            if id.0 == 0 {
                continue;
            }
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
            caret += scaled.h_advance(id);
            previous = Some(id);
            if let Some(outlined) = font.outline_glyph(glyph) {
                glyphs.push(outlined);
            }
        }

        let bounds = glyphs.iter().map(OutlinedGlyph::px_bounds).reduce(|acc, b| Rect {
            min: point(acc.min.x.min(b.min.x), acc.min.y.min(b.min.y)),
            max: point(acc.max.x.max(b.max.x), acc.max.y.max(b.max.y)),
        });
        Self { glyphs, bounds }
    }

    fn size(&self) -> Option<(i32, i32)> {
        self.bounds
            .map(|b| (b.width().round() as i32, b.height().round() as i32))
    }

    /// Blends the run so its ink box starts at (`left`, `top`).
    fn draw(&self, img: &mut RgbImage, left: i32, top: i32, color: Rgb<u8>) {
        let Some(bounds) = self.bounds else {
            return;
        };
        let dx = left - bounds.min.x.round() as i32;
        let dy = top - bounds.min.y.round() as i32;
        for glyph in &self.glyphs {
            let gb = glyph.px_bounds();
            let (gx0, gy0) = (gb.min.x.round() as i32 + dx, gb.min.y.round() as i32 + dy);
            glyph.draw(|x, y, coverage| {
                let (px, py) = (gx0 + x as i32, gy0 + y as i32);
                if px < 0 || py < 0 || px as u32 >= img.width() || py as u32 >= img.height() {
                    return;
                }
                let cov = coverage.clamp(0.0, 1.0);
                let dst = img.get_pixel_mut(px as u32, py as u32);
                for c in 0..3 {
                    let blended = f32::from(dst[c]) * (1.0 - cov) + f32::from(color[c]) * cov;
                    dst[c] = blended.round() as u8;
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(parse_hex_color("#2E86AB").unwrap(), Rgb([0x2E, 0x86, 0xAB]));
        assert_eq!(parse_hex_color("#fff").unwrap(), Rgb([255, 255, 255]));
        assert!(parse_hex_color("2E86AB").is_err());
        assert!(parse_hex_color("#2E86A").is_err());
        assert!(parse_hex_color("#GGGGGG").is_err());
    }

    #[test]
    fn captions_are_title_cased_without_hyphens() {
        assert_eq!(caption_for("english-literature.jpg"), "English Literature");
        assert_eq!(caption_for("art-design.jpg"), "Art Design");
        assert_eq!(caption_for("mathematics.jpg"), "Mathematics");
        assert_eq!(title_case("mUSIC theory"), "Music Theory");
    }

    #[test]
    fn card_without_fonts_still_has_frames() {
        let background = Rgb([0x2E, 0x86, 0xAB]);
        let card = render_card("mathematics.jpg", background, "∑∫π", &CardFonts::none(), 400, 300);
        assert_eq!(card.dimensions(), (400, 300));
        assert_eq!(card.get_pixel(0, 0), &background);
        assert_eq!(card.get_pixel(200, 150), &background);
        // outer frame rows 10..=12, inner frame at 20
        assert_eq!(card.get_pixel(200, 10), &WHITE);
        assert_eq!(card.get_pixel(200, 12), &WHITE);
        assert_eq!(card.get_pixel(200, 13), &background);
        assert_eq!(card.get_pixel(200, 20), &WHITE);
        assert_eq!(card.get_pixel(390, 150), &WHITE);
        assert_eq!(card.get_pixel(380, 150), &WHITE);
    }

    fn fixture_fonts() -> CardFonts {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/fonts/DejaVuSans-Bold.ttf");
        let fonts = CardFonts::load(Some(&path));
        assert!(fonts.glyph.is_some() && fonts.caption.is_some(), "fixture font should load");
        fonts
    }

    /// Bounding boxes of white ink and of shadow inside a band. The card
    /// background is red 200, which only the black shadow can pull below 150.
    fn ink_boxes(card: &RgbImage, ys: std::ops::Range<u32>) -> ((u32, u32, u32, u32), (u32, u32, u32, u32)) {
        let mut white = (u32::MAX, u32::MAX, 0, 0);
        let mut shadow = (u32::MAX, u32::MAX, 0, 0);
        let grow = |b: &mut (u32, u32, u32, u32), x: u32, y: u32| {
            *b = (b.0.min(x), b.1.min(y), b.2.max(x), b.3.max(y));
        };
        for y in ys {
            // stay inside the inner frame
            for x in 30..card.width() - 30 {
                let px = card.get_pixel(x, y).0;
                if px.iter().all(|&c| c >= 250) {
                    grow(&mut white, x, y);
                } else if px[0] < 150 {
                    grow(&mut shadow, x, y);
                }
            }
        }
        assert!(white.0 != u32::MAX, "expected white ink");
        assert!(shadow.0 != u32::MAX, "expected shadow");
        (white, shadow)
    }

    #[test]
    fn override_font_draws_glyph_and_caption_with_shadows() {
        let background = Rgb([200, 40, 40]);
        let card = render_card("mathematics.jpg", background, "π", &fixture_fonts(), 400, 300);

        // glyph sits above centre
        let (white, shadow) = ink_boxes(&card, 40..150);
        assert!(white.3 < 150, "glyph box {white:?}");
        assert!(shadow.2 > white.2 && shadow.3 > white.3, "glyph shadow {shadow:?} vs {white:?}");
        let pure_black = (40..150)
            .flat_map(|y| (30..370).map(move |x| (x, y)))
            .any(|(x, y)| card.get_pixel(x, y) == &BLACK);
        assert!(pure_black, "2px glyph shadow should show solid black");

        // caption band, above the inner frame row at 280
        let (white, shadow) = ink_boxes(&card, 235..279);
        assert!(white.1 >= 245, "caption box {white:?}");
        assert!(shadow.2 > white.2 && shadow.3 > white.3, "caption shadow {shadow:?} vs {white:?}");
    }

    #[test]
    fn override_font_that_fails_to_load_leaves_text_off() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not a font").expect("write");

        let fonts = CardFonts::load(Some(&path));
        assert!(fonts.glyph.is_none() && fonts.caption.is_none());
    }
}
