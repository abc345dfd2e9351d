//! Feed header — greeting, user name, and the "Your feed" banner.
//!
//! Purely presentational: no state, no input handling.  Drawn in inverted
//! colours (surface-coloured text on an on-surface background) so it reads
//! as a dark band above the tab row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use super::theme::Theme;

/// Left inset of the text lines, in columns.
const TEXT_INSET: u16 = 2;

pub struct FeedHeader<'a> {
    name: &'a str,
}

impl<'a> FeedHeader<'a> {
    /// Rows the full header occupies.
    pub const HEIGHT: u16 = 4 + RoundedHeader::HEIGHT;

    pub fn new(name: &'a str) -> Self {
        Self { name }
    }
}

impl Default for FeedHeader<'_> {
    fn default() -> Self {
        Self::new("Alice")
    }
}

impl Widget for FeedHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let inverted = Style::default()
            .bg(Theme::on_surface())
            .fg(Theme::surface());
        buf.set_style(area, inverted);

        // Row 0 is spacing.
        let text_x = area.x + TEXT_INSET.min(area.width);
        let text_w = area.width.saturating_sub(TEXT_INSET);
        let rows = [
            (1, Span::styled("Hello,", Theme::body2_style())),
            (2, Span::styled(self.name, Theme::h6_style())),
        ];
        for (dy, span) in rows {
            if dy < area.height {
                buf.set_line(text_x, area.y + dy, &Line::from(span), text_w);
            }
        }
        // Row 3 is spacing.

        if area.height > 4 {
            let banner = Rect {
                y: area.y + 4,
                height: (area.height - 4).min(RoundedHeader::HEIGHT),
                ..area
            };
            RoundedHeader::new("Your feed").render(banner, buf);
        }
    }
}

// ───────────────────────────────────────── banner ────────────

/// Section title on a surface-coloured card with rounded top corners.
pub struct RoundedHeader<'a> {
    title: &'a str,
}

impl<'a> RoundedHeader<'a> {
    pub const HEIGHT: u16 = 2;

    pub fn new(title: &'a str) -> Self {
        Self { title }
    }
}

impl Widget for RoundedHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let block = Block::default()
            .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
            .border_set(border::ROUNDED)
            .style(Style::default().bg(Theme::surface()).fg(Theme::on_surface()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height > 0 && inner.width > 1 {
            let title = Line::from(Span::styled(self.title, Theme::h6_style()));
            buf.set_line(inner.x + 1, inner.y, &title, inner.width - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn renders_greeting_name_and_banner() {
        let area = Rect::new(0, 0, 30, FeedHeader::HEIGHT);
        let mut buf = Buffer::empty(area);
        FeedHeader::default().render(area, &mut buf);

        assert_eq!(row_text(&buf, 0).trim(), "");
        assert_eq!(row_text(&buf, 1).trim(), "Hello,");
        assert_eq!(row_text(&buf, 2).trim(), "Alice");
        assert_eq!(row_text(&buf, 3).trim(), "");
        assert!(row_text(&buf, 4).starts_with('╭'));
        assert!(row_text(&buf, 4).ends_with('╮'));
        assert!(row_text(&buf, 5).contains("Your feed"));
    }

    #[test]
    fn text_is_inset() {
        let area = Rect::new(0, 0, 30, FeedHeader::HEIGHT);
        let mut buf = Buffer::empty(area);
        FeedHeader::new("Bob").render(area, &mut buf);
        assert_eq!(buf[(TEXT_INSET, 2)].symbol(), "B");
        assert_eq!(buf[(TEXT_INSET - 1, 2)].symbol(), " ");
    }

    #[test]
    fn header_uses_inverted_colours() {
        let area = Rect::new(0, 0, 30, FeedHeader::HEIGHT);
        let mut buf = Buffer::empty(area);
        FeedHeader::default().render(area, &mut buf);
        assert_eq!(buf[(TEXT_INSET, 1)].fg, Theme::surface());
        assert_eq!(buf[(TEXT_INSET, 1)].bg, Theme::on_surface());
        // Banner flips back to normal surface colours.
        assert_eq!(buf[(5, 5)].bg, Theme::surface());
    }

    #[test]
    fn short_area_clips_from_the_bottom() {
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        FeedHeader::default().render(area, &mut buf);
        assert_eq!(row_text(&buf, 2).trim(), "Alice");
    }
}
