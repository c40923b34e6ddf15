use ratatui::style::{Color, Modifier, Style};

use crate::Person;

pub const BAR_BG: Color = Color::Rgb(40, 40, 50);
pub const STATUS_BG: Color = Color::Rgb(0, 95, 135);
pub const HIGHLIGHT_BG: Color = Color::Rgb(60, 60, 80);

/// Women are shown in red, everyone else in blue
pub fn color_for_person(person: &Person) -> Color {
    if person.is_female() {
        Color::Red
    } else {
        Color::Blue
    }
}

pub fn name_style(person: &Person, highlighted: bool) -> Style {
    let style = Style::default().fg(color_for_person(person));
    if highlighted {
        style.bg(HIGHLIGHT_BG).add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

pub fn input_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn alert() -> Style {
    Style::default().fg(Color::Red)
}
