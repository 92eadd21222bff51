use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("/", "Edit search query"),
    ("Enter", "Open profile / Confirm query"),
    ("j/k  \u{2191}/\u{2193}", "Move selection"),
    ("PgUp / PgDn", "Move by a page"),
    ("s / Space", "Toggle favourite"),
    ("f", "Favourites"),
    ("r", "Refresh results"),
    ("m", "Load more"),
    ("Esc / h", "Back"),
    ("?", "This help"),
    ("q / Ctrl-C", "Quit"),
];

pub struct HelpPanel;

impl Widget for HelpPanel {
    fn render(self, area: Rect, buf: &mut Buf) {
        let popup = super::centered_rect(50, 60, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Keybindings ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let key_style = Style::default()
            .fg(theme::FILTER_COLOR)
            .add_modifier(Modifier::BOLD);
        for (i, (key, desc)) in BINDINGS.iter().enumerate() {
            if i >= inner.height as usize {
                break;
            }
            let line = Line::from(vec![
                Span::styled(format!(" {:<14}", key), key_style),
                Span::raw(desc.to_string()),
            ]);
            buf.set_line(inner.x, inner.y + i as u16, &line, inner.width);
        }
    }
}
