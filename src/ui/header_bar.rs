use crate::ui::{theme, truncate_with_ellipsis};
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

pub enum HeaderContent<'a> {
    /// Query box of the search screen.
    Query { text: &'a str, editing: bool },
    Title(&'a str),
}

pub struct HeaderBar<'a> {
    pub content: HeaderContent<'a>,
    pub favourites_count: usize,
}

impl<'a> Widget for HeaderBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::HEADER_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let right = format!("\u{2605} {}  ? help ", self.favourites_count);
        let right_w = UnicodeWidthStr::width(right.as_str());
        let area_w = area.width as usize;

        let mut spans: Vec<Span<'static>> = vec![
            Span::styled(
                " octoscout",
                Style::default()
                    .fg(theme::ACCENT)
                    .bg(theme::HEADER_BG)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " \u{2503} ",
                Style::default().fg(theme::SEPARATOR).bg(theme::HEADER_BG),
            ),
        ];
        let used: usize = spans.iter().map(|s| s.width()).sum();
        let room = area_w.saturating_sub(used + right_w + 2);

        match self.content {
            HeaderContent::Query { text, editing } => {
                let label = if editing { "search: " } else { "/ search: " };
                spans.push(Span::styled(
                    label,
                    Style::default().fg(theme::DIM_TEXT).bg(theme::HEADER_BG),
                ));
                let room = room.saturating_sub(label.len() + 1);
                let fg = if editing {
                    theme::FILTER_COLOR
                } else {
                    ratatui::style::Color::Reset
                };
                spans.push(Span::styled(
                    truncate_with_ellipsis(text, room),
                    Style::default().fg(fg).bg(theme::HEADER_BG),
                ));
                if editing {
                    spans.push(Span::styled(
                        "\u{258f}",
                        Style::default().fg(theme::FILTER_COLOR).bg(theme::HEADER_BG),
                    ));
                }
            }
            HeaderContent::Title(title) => {
                spans.push(Span::styled(
                    truncate_with_ellipsis(title, room),
                    Style::default().bg(theme::HEADER_BG),
                ));
            }
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        if area_w > right_w {
            let right_x = area.x + (area_w - right_w) as u16;
            let right_span = Span::styled(
                right,
                Style::default().fg(theme::DIM_TEXT).bg(theme::HEADER_BG),
            );
            buf.set_line(right_x, area.y, &Line::from(right_span), right_w as u16);
        }
    }
}
