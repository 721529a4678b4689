use crate::core::calculator::summary::DayClass;
use crossterm::style::Color;

/// Company colors, assigned in discovery order.
pub const COMPANY_PALETTE: [Color; 6] = [
    Color::Blue,
    Color::Green,
    Color::Red,
    Color::Magenta,
    Color::Cyan,
    Color::Yellow,
];

pub fn palette_index(discovery_index: usize) -> usize {
    discovery_index % COMPANY_PALETTE.len()
}

pub fn company_color(discovery_index: usize) -> Color {
    COMPANY_PALETTE[palette_index(discovery_index)]
}

/// Text on company-colored backgrounds.
pub fn company_text_color(bg: Color) -> Color {
    match bg {
        Color::Yellow | Color::Cyan | Color::Green => Color::Black,
        _ => Color::White,
    }
}

/// `(fg, bg)` of the day-number line, `None` for days without work.
pub fn day_class_colors(class: DayClass) -> Option<(Color, Color)> {
    match class {
        DayClass::Full => Some((Color::Black, Color::Green)),
        DayClass::Partial => Some((Color::Black, Color::Yellow)),
        DayClass::Low => Some((Color::Black, Color::Red)),
        DayClass::None => None,
    }
}
