//! Winner card export to PNG.

mod card;
mod text;

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use thiserror::Error;

use crate::config::ExportConfig;
use crate::ui::selection::WinnerRecord;

pub use card::{paint_backdrop, render_card, WinnerCard, BASE_HEIGHT, BASE_WIDTH};

/// Font files tried when no `export.font_path` is configured.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No usable font found (tried: {tried})")]
    FontNotFound { tried: String },

    #[error("Failed to read font '{path}': {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Font file could not be parsed")]
    InvalidFont,

    #[error("Failed to create output directory '{path}': {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// `winner-<name>.png`, whitespace runs collapsed to `-`, lowercased.
///
/// Characters that cannot appear in a file name (path separators, control
/// characters, Windows-reserved punctuation) become `-`, so the result is
/// always a single path component inside the output directory.
pub fn file_name_for(name: &str) -> String {
    let slug = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .map(|ch| if is_file_name_safe(ch) { ch } else { '-' })
        .collect::<String>()
        .to_lowercase();
    format!("winner-{slug}.png")
}

fn is_file_name_safe(ch: char) -> bool {
    !ch.is_control() && !matches!(ch, '/' | '\\' | '<' | '>' | ':' | '"' | '|' | '?' | '*')
}

/// Pick the configured font, or the first system font that exists.
pub fn locate_font(configured: Option<&Path>) -> Result<PathBuf, ExportError> {
    if let Some(path) = configured {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(ExportError::FontNotFound {
            tried: path.display().to_string(),
        });
    }

    SYSTEM_FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
        .ok_or_else(|| ExportError::FontNotFound {
            tried: SYSTEM_FONT_CANDIDATES.join(", "),
        })
}

/// Render the card for `record` and write it into the output directory.
///
/// Returns the path of the written PNG.
pub fn export_winner_card(record: &WinnerRecord, config: &ExportConfig) -> Result<PathBuf, ExportError> {
    let font_path = locate_font(config.font_path.as_deref())?;
    let font_data = fs::read(&font_path).map_err(|source| ExportError::FontRead {
        path: font_path.clone(),
        source,
    })?;

    let card = WinnerCard::from_record(record, config.footer.as_deref());
    let image = render_card(&card, &font_data, config.scale)?;

    let dir = config.resolved_output_dir();
    fs::create_dir_all(&dir).map_err(|source| ExportError::OutputDir {
        path: dir.clone(),
        source,
    })?;

    let path = dir.join(file_name_for(&record.name));
    image
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| ExportError::Encode {
            path: path.clone(),
            source,
        })?;

    tracing::info!(path = %path.display(), font = %font_path.display(), "winner card written");
    Ok(path)
}
