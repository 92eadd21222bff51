use crate::github::types::User;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

pub struct ProfileCard<'a> {
    pub user: &'a User,
    pub is_favourite: bool,
}

impl<'a> Widget for ProfileCard<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let (star, star_style) = if self.is_favourite {
            ("\u{2605} ", Style::default().fg(theme::STAR_COLOR))
        } else {
            ("\u{2606} ", Style::default().fg(theme::DIM_TEXT))
        };

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(star, star_style),
                Span::styled(
                    format!("@{} ", self.user.login),
                    Style::default().fg(theme::ACCENT),
                ),
            ]))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::SEPARATOR));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        let label = Style::default().fg(theme::DIM_TEXT);
        let mut lines = vec![
            Line::from(Span::styled(
                self.user.display_name().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("@{}", self.user.login),
                Style::default().fg(theme::LINK_COLOR),
            )),
        ];

        if let Some(bio) = self.user.bio.as_deref().filter(|b| !b.trim().is_empty()) {
            lines.push(Line::raw(""));
            for bio_line in bio.lines() {
                lines.push(Line::from(Span::styled(bio_line.to_string(), label)));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("FOLLOWERS ", label),
            Span::raw(self.user.followers.unwrap_or(0).to_string()),
            Span::styled("   FOLLOWING ", label),
            Span::raw(self.user.following.unwrap_or(0).to_string()),
            Span::styled("   REPOS ", label),
            Span::raw(self.user.public_repos.unwrap_or(0).to_string()),
        ]));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(self.user.html_url.clone(), label)));

        let x = inner.x + 1;
        let w = inner.width.saturating_sub(2);
        for (i, line) in lines.iter().enumerate() {
            if i >= inner.height as usize {
                break;
            }
            buf.set_line(x, inner.y + i as u16, line, w);
        }
    }
}
