use crate::notify::NotifyLevel;
use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(140, 115, 200);
pub const STAR_COLOR: Color = Color::Rgb(244, 180, 0);
pub const LINK_COLOR: Color = Color::Rgb(30, 136, 229);
pub const SELECTED_BG: Color = Color::Rgb(50, 50, 80);
pub const STATUS_BG: Color = Color::Rgb(30, 30, 40);
pub const HEADER_BG: Color = Color::Rgb(25, 25, 38);
pub const SEPARATOR: Color = Color::Rgb(55, 55, 75);
pub const FILTER_COLOR: Color = Color::Cyan;
pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
pub const ERROR_FG: Color = Color::LightRed;
pub const WARN_FG: Color = Color::Yellow;

pub fn notify_color(level: NotifyLevel) -> Color {
    match level {
        NotifyLevel::Error => ERROR_FG,
        NotifyLevel::Warn => WARN_FG,
        NotifyLevel::Info => ACCENT,
    }
}
