use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Bar, BarChart, BarGroup, Block, BorderType, Borders, Clear, List, ListItem, ListState,
    Paragraph, Tabs, Wrap,
};
use ratatui::Frame;

pub mod layout;
pub mod widgets;

use crate::app::{App, InputMode, StatusLevel};
use crate::domain::{select_visualization, CatalogTab, RenderSpec, SectionName, Widget};
use crate::modules::PickerFocus;
use widgets::{palette, ProportionChart};

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, app);
    draw_sections(f, areas.main, app);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.menu_open {
        draw_menu(f, areas.size, app);
    }
    if app.picker_open {
        draw_picker(f, layout::side_panel(areas.size), app);
    }
    if app.help_open {
        draw_help_popup(f, areas.size);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "CNAPP Dashboard",
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL));

    let editing = app.input_mode == InputMode::Search;
    let search = if app.search.is_empty() && !editing {
        Span::styled("Search...", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(app.search.clone())
    };
    let mut spans = vec![
        Span::styled(
            "/ ",
            Style::default().fg(if editing { Color::Yellow } else { Color::DarkGray }),
        ),
        search,
    ];
    if editing {
        spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
    }
    spans.extend([
        Span::raw("   "),
        Span::styled("+ Add Widget", Style::default().fg(Color::White)),
        Span::styled(" (a)", Style::default().fg(Color::DarkGray)),
        Span::raw("   "),
        Span::styled("Last 2 days ▼", Style::default().fg(Color::Gray)),
    ]);
    let right = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Right);

    f.render_widget(title, chunks[0]);
    f.render_widget(right, chunks[1]);
}

fn draw_sections(f: &mut Frame, area: Rect, app: &App) {
    let constraints: Vec<Constraint> = SectionName::ALL
        .iter()
        .map(|section| {
            if *section == app.focus_section {
                Constraint::Min(layout::CARD_HEIGHT + 2)
            } else {
                Constraint::Length(layout::CARD_HEIGHT + 2)
            }
        })
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (section, chunk) in SectionName::ALL.iter().zip(chunks.iter()) {
        draw_section(f, *chunk, app, *section);
    }
}

fn draw_section(f: &mut Frame, area: Rect, app: &App, section: SectionName) {
    let focused = section == app.focus_section;
    let widgets: Vec<&Widget> = app.visible_widgets(section).collect();
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", section.title()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // One extra slot for the "+ Add Widget" card.
    let focus = if focused { app.focus_card } else { 0 };
    let first_row = layout::first_visible_row(inner, focus);
    let cards = layout::card_grid(inner, widgets.len() + 1, first_row);
    let columns = usize::from(layout::card_columns(inner.width));
    let first_index = first_row * columns;

    for (offset, rect) in cards.into_iter().enumerate() {
        let idx = first_index + offset;
        match widgets.get(idx) {
            Some(widget) => draw_card(f, rect, widget, focused && idx == app.focus_card),
            None => draw_add_card(f, rect),
        }
    }
}

fn draw_card(f: &mut Frame, area: Rect, widget: &Widget, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(
            truncate_str(&widget.name, usize::from(area.width.saturating_sub(4))),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match select_visualization(widget) {
        RenderSpec::Proportion { data, labels } => {
            f.render_widget(ProportionChart::new(&data, labels), inner);
        }
        RenderSpec::Magnitude { data } => {
            let bars: Vec<Bar> = data
                .iter()
                .map(|datum| {
                    Bar::default()
                        .value(datum.value)
                        .label(Line::from(datum.label))
                })
                .collect();
            let count = bars.len().max(1) as u16;
            let bar_width = (inner.width.saturating_sub(count - 1) / count).max(1);
            let chart = BarChart::default()
                .data(BarGroup::default().bars(&bars))
                .bar_width(bar_width)
                .bar_gap(1)
                .bar_style(Style::default().fg(palette(0)))
                .value_style(Style::default().fg(Color::Black).bg(palette(0)));
            f.render_widget(chart, inner);
        }
        RenderSpec::Text(text) => {
            let paragraph = Paragraph::new(text)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, inner);
        }
    }
}

fn draw_add_card(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let top = inner.y + inner.height.saturating_sub(1) / 2;
    let label = Rect {
        y: top,
        height: inner.height.min(1),
        ..inner
    };
    let paragraph = Paragraph::new("+ Add Widget")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, label);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let total = app.dashboard.state().total_widgets();
    let mut spans = vec![
        Span::styled("Section ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.focus_section.title())),
        Span::styled("Widgets ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", total)),
        Span::styled("Tab ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.active_tab().title()),
    ];
    if !app.search.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Search ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(format!(
            "{} ({} shown)",
            app.search,
            app.ctx.visible.len()
        )));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = if app.input_mode == InputMode::Search {
        Line::from(vec![
            Span::styled("/ ", Style::default().fg(Color::Yellow)),
            Span::raw(app.search.clone()),
            Span::styled(
                "  Enter=keep  Esc=clear",
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else if let Some((text, level)) = app.status_text() {
        let color = match level {
            StatusLevel::Info => Color::LightGreen,
            StatusLevel::Warn => Color::LightYellow,
        };
        Line::from(vec![
            Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
            Span::styled(text.to_string(), Style::default().fg(color)),
        ])
    } else {
        action_hints()
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn action_hints() -> Line<'static> {
    let keys = [
        ("h/l", "Card"),
        ("j/k", "Section"),
        ("x", "Remove"),
        ("a", "Add"),
        ("/", "Search"),
        ("m", "Menu"),
        ("?", "Help"),
        ("q", "Quit"),
    ];
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (key, label) in keys {
        spans.push(Span::styled(key, Style::default().fg(Color::LightCyan)));
        spans.push(Span::raw(format!(" {label}  ")));
    }
    Line::from(spans)
}

fn draw_picker(f: &mut Frame, area: Rect, app: &App) {
    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Add Widget ",
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(inner);

    let focus = app.picker.focus();
    draw_picker_tabs(f, chunks[0], app.active_tab());
    draw_picker_catalog(f, chunks[1], app, focus == PickerFocus::Catalog);

    f.render_widget(
        Paragraph::new(Span::styled(
            "Custom Widget",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        chunks[2],
    );
    let draft = app.picker.draft();
    draw_field(f, chunks[3], "Widget Name", &draft.name, focus == PickerFocus::Name);
    draw_field(
        f,
        chunks[4],
        "Widget Description",
        &draft.text,
        focus == PickerFocus::Description,
    );

    let hints = Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::LightCyan)),
        Span::raw(" Confirm  "),
        Span::styled("Esc", Style::default().fg(Color::LightCyan)),
        Span::raw(" Cancel  "),
        Span::styled("Tab", Style::default().fg(Color::LightCyan)),
        Span::raw(" Field  "),
        Span::styled("←/→", Style::default().fg(Color::LightCyan)),
        Span::raw(" Category  "),
        Span::styled("Space", Style::default().fg(Color::LightCyan)),
        Span::raw(" Toggle"),
    ]);
    f.render_widget(Paragraph::new(hints), chunks[5]);
}

fn draw_picker_tabs(f: &mut Frame, area: Rect, active: CatalogTab) {
    let titles: Vec<Line> = CatalogTab::ALL
        .iter()
        .map(|tab| Line::from(tab.title()))
        .collect();
    let selected = CatalogTab::ALL
        .iter()
        .position(|tab| *tab == active)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" │ ");
    f.render_widget(tabs, area);
}

fn draw_picker_catalog(f: &mut Frame, area: Rect, app: &App, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Available Widgets");

    let entries = app.active_tab().widgets();
    if entries.is_empty() {
        let paragraph = Paragraph::new("No widgets available for this category.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let mark = if app.ctx.is_checked(entry.widget_id()) {
                "[x]"
            } else {
                "[ ]"
            };
            ListItem::new(Text::from(vec![
                Line::from(vec![
                    Span::raw(format!("{mark} ")),
                    Span::styled(entry.name, Style::default().add_modifier(Modifier::BOLD)),
                ]),
                Line::from(Span::styled(
                    format!("    {}", entry.text),
                    Style::default().fg(Color::DarkGray),
                )),
            ]))
        })
        .collect();

    let highlight_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style)
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(app.picker.cursor().min(entries.len() - 1)));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_field(f: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut spans = vec![Span::raw(value.to_string())];
    if focused {
        spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
    }
    let paragraph = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title.to_string()),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_menu(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = layout::centered_rect(60, 80, area);
    f.render_widget(Clear, popup_area);

    let mut items = Vec::new();
    let mut selected = None;
    let mut visible_idx = 0;
    for section in SectionName::ALL {
        items.push(ListItem::new(Line::from(Span::styled(
            section.title(),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ))));
        for widget in app.visible_widgets(section) {
            if visible_idx == app.menu.cursor() {
                selected = Some(items.len());
            }
            items.push(ListItem::new(Line::from(vec![
                Span::raw(format!("  {}", widget.name)),
                Span::styled("  Remove", Style::default().fg(Color::LightRed)),
            ])));
            visible_idx += 1;
        }
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(popup_area);

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Menu"))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");
    let mut state = ListState::default();
    state.select(selected);
    f.render_stateful_widget(list, chunks[0], &mut state);

    let hints = Line::from(vec![
        Span::styled("x", Style::default().fg(Color::LightCyan)),
        Span::raw(" Remove  "),
        Span::styled("a", Style::default().fg(Color::LightCyan)),
        Span::raw(" Add Widgets  "),
        Span::styled("Esc", Style::default().fg(Color::LightCyan)),
        Span::raw(" Close Menu"),
    ]);
    f.render_widget(
        Paragraph::new(hints).style(Style::default().bg(Color::Black)),
        chunks[1],
    );
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = layout::centered_rect(60, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Dashboard"),
        Line::from("  h / l      Previous / next card"),
        Line::from("  j / k      Next / previous section"),
        Line::from("  1-3        Jump to section"),
        Line::from("  x          Remove card"),
        Line::from("  /          Search widget names"),
        Line::from("  Esc        Clear search"),
        Line::from("  a          Add widget"),
        Line::from("  m          Compact menu"),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
        Line::from(""),
        Line::from("Add Widget panel"),
        Line::from("  ← / →      Switch category (also [ ] or h l)"),
        Line::from("  j / k      Move in list"),
        Line::from("  Space      Check / uncheck widget"),
        Line::from("  Tab        Next field"),
        Line::from("  Enter      Confirm"),
        Line::from("  Esc        Cancel"),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, popup_area);
}

fn truncate_str(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    value.chars().take(max.saturating_sub(1)).collect::<String>() + "…"
}
