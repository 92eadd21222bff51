use crate::github::rate_limit::rate_limited_message;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// What the footer shows about the rate limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cooldown {
    None,
    /// Seconds left until requests are accepted again.
    Active(i64),
    /// A cooldown ran out; offer an explicit "load more".
    Cleared { load_more_enabled: bool },
}

pub struct StatusBar<'a> {
    pub cooldown: Cooldown,
    pub loading: bool,
    pub loaded: usize,
    pub total_count: Option<u64>,
    pub incomplete: bool,
    pub has_more: bool,
    pub hint: &'a str,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::STATUS_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let sep = || {
            Span::styled(
                "\u{2502}",
                Style::default().fg(theme::SEPARATOR).bg(theme::STATUS_BG),
            )
        };

        let mut spans = Vec::new();
        match self.cooldown {
            Cooldown::Active(wait) => {
                spans.push(Span::styled(
                    format!(" {} ", rate_limited_message(wait)),
                    Style::default()
                        .fg(theme::WARN_FG)
                        .bg(theme::STATUS_BG)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            Cooldown::Cleared { load_more_enabled } => {
                let fg = if load_more_enabled {
                    theme::ACCENT
                } else {
                    theme::DIM_TEXT
                };
                spans.push(Span::styled(
                    " [m] Load more ",
                    Style::default().fg(fg).bg(theme::STATUS_BG),
                ));
                spans.push(sep());
            }
            Cooldown::None => {}
        }

        if !matches!(self.cooldown, Cooldown::Active(_)) {
            if self.loading {
                spans.push(Span::styled(
                    " loading\u{2026} ",
                    Style::default().fg(theme::FILTER_COLOR).bg(theme::STATUS_BG),
                ));
            }
            if let Some(total) = self.total_count {
                spans.push(Span::styled(
                    format!(" {} of {total} ", self.loaded),
                    Style::default().bg(theme::STATUS_BG),
                ));
                if self.incomplete {
                    spans.push(Span::styled(
                        "(partial) ",
                        Style::default().fg(theme::WARN_FG).bg(theme::STATUS_BG),
                    ));
                }
                if !self.has_more && self.loaded > 0 {
                    spans.push(sep());
                    spans.push(Span::styled(
                        " That\u{2019}s everything we found ",
                        Style::default().fg(theme::DIM_TEXT).bg(theme::STATUS_BG),
                    ));
                }
            }
        }

        let left = Line::from(spans);
        buf.set_line(area.x, area.y, &left, area.width);

        let hint_w = UnicodeWidthStr::width(self.hint);
        let left_w = left.width();
        let area_w = area.width as usize;
        if hint_w > 0 && left_w + hint_w + 1 < area_w {
            let x = area.x + (area_w - hint_w - 1) as u16;
            let hint = Span::styled(
                self.hint.to_string(),
                Style::default().fg(theme::DIM_TEXT).bg(theme::STATUS_BG),
            );
            buf.set_line(x, area.y, &Line::from(hint), hint_w as u16);
        }
    }
}
