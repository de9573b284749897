use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows a widget card takes, borders included
pub const CARD_HEIGHT: u16 = 9;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub main: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    UiAreas {
        size,
        header: vertical[0],
        main: vertical[1],
        status_line: vertical[2],
        command_line: vertical[3],
    }
}

/// Cards per row for a given width: 1, 2, 3 or 4 as the terminal widens
pub fn card_columns(width: u16) -> u16 {
    match width {
        0..=59 => 1,
        60..=99 => 2,
        100..=139 => 3,
        _ => 4,
    }
}

/// Rects for `count` cards laid out left-to-right, top-to-bottom.
///
/// Rows start at `first_row`; cards on rows that do not fit are left out, so
/// the result can be shorter than `count`.
pub fn card_grid(area: Rect, count: usize, first_row: usize) -> Vec<Rect> {
    let columns = usize::from(card_columns(area.width));
    let card_width = area.width / columns as u16;
    let visible_rows = usize::from(area.height / CARD_HEIGHT);

    (0..count)
        .filter_map(|idx| {
            let row = idx / columns;
            if row < first_row || row >= first_row + visible_rows {
                return None;
            }
            let col = (idx % columns) as u16;
            let y = area.y + ((row - first_row) as u16) * CARD_HEIGHT;
            Some(Rect {
                x: area.x + col * card_width,
                y,
                width: card_width,
                height: CARD_HEIGHT,
            })
        })
        .collect()
}

/// First grid row to draw so that card `focus` stays on screen
pub fn first_visible_row(area: Rect, focus: usize) -> usize {
    let columns = usize::from(card_columns(area.width));
    let visible_rows = usize::from(area.height / CARD_HEIGHT).max(1);
    let focus_row = focus / columns;
    (focus_row + 1).saturating_sub(visible_rows)
}

/// Right-hand slide-in panel for the picker
pub fn side_panel(size: Rect) -> Rect {
    let width = if size.width < 60 {
        size.width
    } else {
        (size.width * 2 / 5).max(56).min(size.width)
    };
    Rect {
        x: size.x + size.width - width,
        y: size.y,
        width,
        height: size.height,
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
