pub mod proportion;

use std::str::FromStr;

use ratatui::style::Color;

use crate::domain::visualization::palette_color;

pub use proportion::ProportionChart;

/// Palette entry `index`, wrapping around the five chart colors
pub fn palette(index: usize) -> Color {
    Color::from_str(palette_color(index)).unwrap_or(Color::White)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_parses_hex() {
        assert_eq!(palette(0), Color::Rgb(0x88, 0x84, 0xd8));
        assert_eq!(palette(4), Color::Rgb(0xff, 0x00, 0x00));
        assert_eq!(palette(5), palette(0));
    }
}
