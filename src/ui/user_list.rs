use crate::github::types::User;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

const STAR: &str = "\u{2605}";
const NO_STAR: &str = "\u{2606}";

/// Scrollable list of accounts, one per row, with a favourite marker.
pub struct UserList<'a> {
    pub users: &'a [User],
    pub favourites: &'a [User],
    pub selected: usize,
    pub scroll: usize,
}

impl<'a> UserList<'a> {
    fn is_favourite(&self, login: &str) -> bool {
        self.favourites.iter().any(|u| u.login == login)
    }
}

impl<'a> Widget for UserList<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let height = area.height as usize;
        let width = area.width as usize;
        if height == 0 || width < 4 {
            return;
        }

        for (row, (idx, user)) in self
            .users
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(height)
            .enumerate()
        {
            let y = area.y + row as u16;
            let is_selected = idx == self.selected;
            let bg = if is_selected {
                theme::SELECTED_BG
            } else {
                ratatui::style::Color::Reset
            };

            if is_selected {
                for x in area.x..area.right() {
                    buf[(x, y)].set_style(Style::default().bg(bg));
                }
            }

            let (marker, marker_style) = if self.is_favourite(&user.login) {
                (STAR, Style::default().fg(theme::STAR_COLOR).bg(bg))
            } else {
                (NO_STAR, Style::default().fg(theme::DIM_TEXT).bg(bg))
            };

            let mut login_style = Style::default().fg(theme::LINK_COLOR).bg(bg);
            if is_selected {
                login_style = login_style.add_modifier(Modifier::BOLD);
            }

            let mut spans = vec![
                Span::styled(format!(" {marker} "), marker_style),
                Span::styled(format!("@{}", user.login), login_style),
            ];
            if let Some(name) = user.name.as_deref().filter(|n| !n.is_empty()) {
                spans.push(Span::styled(
                    format!("  {name}"),
                    Style::default().fg(theme::DIM_TEXT).bg(bg),
                ));
            }

            buf.set_line(area.x, y, &Line::from(spans), area.width);
        }
    }
}
