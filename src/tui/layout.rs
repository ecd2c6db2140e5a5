//! Layout definitions for the TUI
//!
//! Header, step indicator, step body, footer and status bar, stacked
//! vertically. The body is capped in width so forms stay readable on wide
//! terminals.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

const MAX_BODY_WIDTH: u16 = 80;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Product title
    pub header: Rect,
    /// Three-step progress indicator
    pub indicator: Rect,
    /// The mounted step view
    pub body: Rect,
    /// Copyright line
    pub footer: Rect,
    /// Key hints and session id
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(2), // Indicator
                Constraint::Min(8),    // Body
                Constraint::Length(1), // Footer
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: vertical[0],
            indicator: vertical[1],
            body: centered_columns(MAX_BODY_WIDTH, vertical[2]),
            footer: vertical[3],
            status_bar: vertical[4],
        }
    }
}

/// Center a column of at most `width` cells inside `r`
fn centered_columns(width: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let x = r.x + (r.width - width) / 2;
    Rect::new(x, r.y, width, r.height)
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Area for a toast, anchored above the footer on the right
pub fn toast_area(r: Rect) -> Rect {
    let width = 50.min(r.width);
    let height = 4.min(r.height);
    let x = r.x + r.width - width;
    let y = r.y + r.height.saturating_sub(height + 2);
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = AppLayout::new(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.footer.y, 38);
        assert_eq!(layout.body.width, 80);
        assert_eq!(layout.body.x, 20);
    }

    #[test]
    fn test_narrow_terminal_uses_full_width() {
        let layout = AppLayout::new(Rect::new(0, 0, 60, 30));
        assert_eq!(layout.body.width, 60);
        assert_eq!(layout.body.x, 0);
    }

    #[test]
    fn test_toast_area_stays_inside() {
        let area = Rect::new(0, 0, 30, 10);
        let toast = toast_area(area);
        assert!(toast.right() <= area.right());
        assert!(toast.bottom() <= area.bottom());
    }
}
