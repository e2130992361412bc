use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the entry panel in single-name mode.
pub const SINGLE_ENTRY_HEIGHT: u16 = 3;
/// Height of the entry panel in bulk mode.
pub const BULK_ENTRY_HEIGHT: u16 = 9;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Regions inside the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyRegions {
    pub entry: Rect,
    pub participants: Rect,
    pub winner: Rect,
}

/// Entry and participants stacked on the left, winner panel on the right.
pub fn body_regions(body: Rect, entry_height: u16) -> BodyRegions {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(entry_height), Constraint::Min(0)])
        .split(columns[0]);

    BodyRegions {
        entry: left[0],
        participants: left[1],
        winner: columns[1],
    }
}

/// First visible row so that `cursor` stays inside a window of `height` rows.
pub fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    cursor.saturating_sub(height - 1)
}
