//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::feed_header::FeedHeader;
use super::photos_tab::PhotosTab;

/// Feed screen: header, tab row, feed body, and a bottom status bar.
pub struct AppLayout {
    pub header_area: Rect,
    pub tabs_area: Rect,
    pub body_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FeedHeader::HEIGHT),
                Constraint::Length(PhotosTab::HEIGHT),
                Constraint::Min(0),    // feed body (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            header_area: chunks[0],
            tabs_area: chunks[1],
            body_area: chunks[2],
            status_area: chunks[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stack_top_to_bottom() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 60, 30));
        assert_eq!(layout.header_area, Rect::new(0, 0, 60, FeedHeader::HEIGHT));
        assert_eq!(layout.tabs_area.y, FeedHeader::HEIGHT);
        assert_eq!(layout.tabs_area.height, PhotosTab::HEIGHT);
        assert_eq!(layout.status_area, Rect::new(0, 29, 60, 1));
        assert_eq!(
            layout.body_area.height,
            30 - FeedHeader::HEIGHT - PhotosTab::HEIGHT - 1
        );
    }
}
