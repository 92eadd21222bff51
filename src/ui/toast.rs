use crate::notify::Notification;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

pub struct Toast<'a> {
    pub notification: &'a Notification,
}

impl<'a> Widget for Toast<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let first_line = self.notification.message.lines().next().unwrap_or("");
        let text_w = UnicodeWidthStr::width(first_line);
        let box_w = text_w.saturating_add(4).min(area.width as usize) as u16;
        let box_h: u16 = 3;

        if area.width < box_w || area.height < box_h.saturating_add(1) {
            return;
        }

        let x = area.right().saturating_sub(box_w.saturating_add(1));
        let y = area.bottom().saturating_sub(box_h + 1);
        let toast_area = Rect::new(x, y, box_w, box_h);

        Clear.render(toast_area, buf);

        let color = theme::notify_color(self.notification.level);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let inner = block.inner(toast_area);
        block.render(toast_area, buf);

        if inner.width == 0 {
            return;
        }

        let text = super::truncate_with_ellipsis(first_line, inner.width as usize);
        let line = Line::from(Span::styled(text, Style::default().fg(color)));
        buf.set_line(inner.x, inner.y, &line, inner.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotifyLevel;
    use std::time::Instant;

    fn rendered_text(buf: &Buf) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn draws_message_in_bottom_right_box() {
        let notification = Notification {
            message: "Failed to fetch users".to_string(),
            level: NotifyLevel::Error,
            created: Instant::now(),
        };
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buf::empty(area);
        Toast {
            notification: &notification,
        }
        .render(area, &mut buf);

        assert!(rendered_text(&buf).contains("Failed to fetch users"));
        assert_eq!(buf[(59, 9)].symbol(), " ");
    }

    #[test]
    fn skips_tiny_areas() {
        let notification = Notification {
            message: "Failed".to_string(),
            level: NotifyLevel::Error,
            created: Instant::now(),
        };
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buf::empty(area);
        Toast {
            notification: &notification,
        }
        .render(area, &mut buf);
        assert!(!rendered_text(&buf).contains("Failed"));
    }
}
