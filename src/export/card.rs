//! Winner card layout.
//!
//! Coordinates are in base units on a 480x400 canvas and multiplied by the
//! export scale.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;

use crate::ui::selection::WinnerRecord;

use super::text::{blend_pixel, TextPainter};
use super::ExportError;

pub const BASE_WIDTH: u32 = 480;
pub const BASE_HEIGHT: u32 = 400;

const WHITE: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);
const INK: Rgba<u8> = Rgba([0x11, 0x18, 0x27, 0xff]);
const MUTED: Rgba<u8> = Rgba([0x6b, 0x72, 0x80, 0xff]);
const BORDER: Rgba<u8> = Rgba([0xe5, 0xe7, 0xeb, 0xff]);
const SHADOW: Rgba<u8> = Rgba([0x4c, 0x1d, 0x95, 0xff]);
const TROPHY_BLUE: Rgba<u8> = Rgba([0x3b, 0x82, 0xf6, 0xff]);

/// pink-500, purple-500, indigo-500
const GRADIENT: [[u8; 3]; 3] = [[0xec, 0x48, 0x99], [0xa8, 0x55, 0xf7], [0x63, 0x66, 0xf1]];
const GRADIENT_OPACITY: f32 = 0.2;

/// Text content of the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnerCard {
    pub name: String,
    pub date: String,
    pub footer: Option<String>,
}

impl WinnerCard {
    pub fn from_record(record: &WinnerRecord, footer: Option<&str>) -> Self {
        Self {
            name: record.name.clone(),
            date: record.display_date(),
            footer: footer
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(str::to_string),
        }
    }
}

/// Rasterize `card` with the font in `font_data`.
pub fn render_card(card: &WinnerCard, font_data: &[u8], scale: u32) -> Result<RgbaImage, ExportError> {
    let mut painter = TextPainter::new(font_data).ok_or(ExportError::InvalidFont)?;
    let s = scale.clamp(1, 4);
    let u = |v: i32| v * s as i32;
    let size = |v: f32| v * s as f32;

    let mut img = paint_backdrop(BASE_WIDTH * s, BASE_HEIGHT * s);
    let center_x = u(BASE_WIDTH as i32 / 2);

    // Panel with a soft offset shadow and a 1-unit border.
    for (dx, dy, alpha) in [(6, 8, 24u8), (3, 4, 36)] {
        blend_rect(&mut img, u(32 + dx), u(32 + dy), u(416), u(336), SHADOW, alpha);
    }
    draw_filled_rect_mut(&mut img, rect(u(32), u(32), u(416), u(336)), BORDER);
    draw_filled_rect_mut(&mut img, rect(u(33), u(33), u(414), u(334)), WHITE);

    paint_trophy(&mut img, center_x, u(92), s as i32);

    painter.draw_centered(&mut img, "Congratulations!", center_x, u(136), size(18.0), INK);

    let max_name_width = size(384.0);
    let mut name_size = size(32.0);
    let name_width = painter.measure(&card.name, name_size);
    if name_width > max_name_width {
        name_size = (name_size * max_name_width / name_width).max(size(12.0));
    }
    let name_y = u(166) + ((size(32.0) - name_size) / 2.0) as i32;
    painter.draw_centered(&mut img, &card.name, center_x, name_y, name_size, INK);

    painter.draw_centered(&mut img, "Winner of the Giveaway", center_x, u(218), size(14.0), MUTED);
    painter.draw_centered(&mut img, &card.date, center_x, u(242), size(14.0), MUTED);

    if let Some(footer) = &card.footer {
        draw_filled_rect_mut(&mut img, rect(u(64), u(290), u(352), u(1)), BORDER);
        painter.draw_centered(&mut img, footer, center_x, u(304), size(11.0), MUTED);
    }

    Ok(img)
}

/// White canvas washed with a diagonal pink→purple→indigo gradient.
pub fn paint_backdrop(width: u32, height: u32) -> RgbaImage {
    let span = (width + height).saturating_sub(2).max(1) as f32;
    RgbaImage::from_fn(width, height, |x, y| {
        let t = (x + y) as f32 / span;
        let [r, g, b] = gradient_at(t);
        let wash = |c: f32| (255.0 * (1.0 - GRADIENT_OPACITY) + c * GRADIENT_OPACITY).round() as u8;
        Rgba([wash(r), wash(g), wash(b), 0xff])
    })
}

fn gradient_at(t: f32) -> [f32; 3] {
    let t = t.clamp(0.0, 1.0) * 2.0;
    let (from, to, local) = if t <= 1.0 {
        (GRADIENT[0], GRADIENT[1], t)
    } else {
        (GRADIENT[1], GRADIENT[2], t - 1.0)
    };
    let lerp = |a: u8, b: u8| a as f32 + (b as f32 - a as f32) * local;
    [lerp(from[0], to[0]), lerp(from[1], to[1]), lerp(from[2], to[2])]
}

/// Blue badge with a white cup, stem and base.
fn paint_trophy(img: &mut RgbaImage, cx: i32, cy: i32, s: i32) {
    draw_filled_circle_mut(img, (cx, cy), 28 * s, TROPHY_BLUE);

    // Handles first so the cup body covers their inner halves.
    draw_filled_circle_mut(img, (cx - 12 * s, cy - 9 * s), 5 * s, WHITE);
    draw_filled_circle_mut(img, (cx + 12 * s, cy - 9 * s), 5 * s, WHITE);
    draw_filled_circle_mut(img, (cx - 12 * s, cy - 9 * s), 2 * s, TROPHY_BLUE);
    draw_filled_circle_mut(img, (cx + 12 * s, cy - 9 * s), 2 * s, TROPHY_BLUE);

    draw_filled_rect_mut(img, rect(cx - 11 * s, cy - 16 * s, 22 * s, 12 * s), WHITE);
    draw_filled_circle_mut(img, (cx, cy - 4 * s), 11 * s, WHITE);
    draw_filled_rect_mut(img, rect(cx - 3 * s, cy + 6 * s, 6 * s, 6 * s), WHITE);
    draw_filled_rect_mut(img, rect(cx - 10 * s, cy + 12 * s, 20 * s, 5 * s), WHITE);
}

fn blend_rect(img: &mut RgbaImage, x: i32, y: i32, w: i32, h: i32, color: Rgba<u8>, alpha: u8) {
    for py in y..y + h {
        for px in x..x + w {
            blend_pixel(img, px, py, color, alpha);
        }
    }
}

fn rect(x: i32, y: i32, w: i32, h: i32) -> Rect {
    Rect::at(x, y).of_size(w.max(1) as u32, h.max(1) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> WinnerRecord {
        WinnerRecord::new("Uzi", NaiveDate::from_ymd_opt(2026, 10, 17).unwrap())
    }

    #[test]
    fn card_from_record_formats_date() {
        let card = WinnerCard::from_record(&record(), None);
        assert_eq!(card.name, "Uzi");
        assert_eq!(card.date, "October 17, 2026");
        assert_eq!(card.footer, None);
    }

    #[test]
    fn blank_footer_is_dropped() {
        let card = WinnerCard::from_record(&record(), Some("   "));
        assert_eq!(card.footer, None);
        let card = WinnerCard::from_record(&record(), Some(" Prize night "));
        assert_eq!(card.footer.as_deref(), Some("Prize night"));
    }

    #[test]
    fn backdrop_is_opaque_and_tinted() {
        let img = paint_backdrop(40, 30);
        assert_eq!(img.dimensions(), (40, 30));
        assert!(img.pixels().all(|p| p[3] == 0xff));
        // Top-left leans pink, bottom-right leans indigo.
        let start = img.get_pixel(0, 0);
        let end = img.get_pixel(39, 29);
        assert!(start[0] > end[0]);
        assert!(start[1] < 0xff && end[2] < 0xff);
    }

    #[test]
    fn invalid_font_is_rejected() {
        let card = WinnerCard::from_record(&record(), None);
        let err = render_card(&card, b"not a font", 2).unwrap_err();
        assert!(matches!(err, ExportError::InvalidFont));
    }
}
