//! Stacked proportion bar with a colored legend

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use super::palette;
use crate::domain::visualization::{slice_label, Datum, LabelStyle};

const BAR_CHAR: char = '█';

/// One row of colored blocks sized by share, then one legend line per slice
pub struct ProportionChart<'a> {
    data: &'a [Datum],
    labels: LabelStyle,
}

impl<'a> ProportionChart<'a> {
    pub fn new(data: &'a [Datum], labels: LabelStyle) -> Self {
        Self { data, labels }
    }
}

impl<'a> Widget for ProportionChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.data.is_empty() {
            return;
        }
        let total: u64 = self.data.iter().map(|d| d.value).sum();
        if total == 0 {
            return;
        }

        // Cumulative end columns, so rounding never leaves a gap at the right edge.
        let width = u64::from(area.width);
        let mut start = area.x;
        let mut acc = 0u64;
        for (i, datum) in self.data.iter().enumerate() {
            acc += datum.value;
            let end = area.x + (acc * width / total) as u16;
            let style = Style::default().fg(palette(i));
            for x in start..end {
                buf.get_mut(x, area.y).set_char(BAR_CHAR).set_style(style);
            }
            start = end;
        }

        // Leave a blank line under the bar when there is room for it.
        let legend_top = if area.height > self.data.len() as u16 + 1 {
            area.y + 2
        } else {
            area.y + 1
        };
        let bottom = area.y + area.height;
        for i in 0..self.data.len() {
            let y = legend_top + i as u16;
            if y >= bottom {
                break;
            }
            buf.set_stringn(
                area.x,
                y,
                "■ ",
                usize::from(area.width),
                Style::default().fg(palette(i)),
            );
            if area.width > 2 {
                buf.set_stringn(
                    area.x + 2,
                    y,
                    slice_label(self.data, i, self.labels),
                    usize::from(area.width - 2),
                    Style::default().fg(Color::Gray),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.get(x, y).symbol().to_string())
            .collect()
    }

    const HALVES: [Datum; 2] = [
        Datum {
            label: "Connected",
            value: 2,
        },
        Datum {
            label: "Not Connected",
            value: 2,
        },
    ];

    #[test]
    fn test_bar_fills_width_and_splits_evenly() {
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        ProportionChart::new(&HALVES, LabelStyle::Value).render(area, &mut buf);

        assert_eq!(row(&buf, 0), "██████████");
        assert_eq!(buf.get(0, 0).fg, palette(0));
        assert_eq!(buf.get(4, 0).fg, palette(0));
        assert_eq!(buf.get(5, 0).fg, palette(1));
        assert!(row(&buf, 2).starts_with("■ Connecte"));
    }

    #[test]
    fn test_legend_truncates_to_height() {
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);
        ProportionChart::new(&HALVES, LabelStyle::Value).render(area, &mut buf);
        assert!(row(&buf, 1).starts_with("■ Connected 2"));
    }

    #[test]
    fn test_legend_stays_inside_narrow_area() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 4));
        ProportionChart::new(&HALVES, LabelStyle::Value).render(Rect::new(0, 0, 1, 4), &mut buf);
        assert_eq!(buf.get(0, 2).symbol(), "■");
        for y in 0..4 {
            assert_eq!(buf.get(1, y).symbol(), " ");
            assert_eq!(buf.get(2, y).symbol(), " ");
        }
    }

    #[test]
    fn test_empty_area_is_noop() {
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        ProportionChart::new(&HALVES, LabelStyle::Value).render(area, &mut buf);
    }
}
