//! TUI rendering using ratatui.

use eventdeck_models::Event;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::app::{App, Focus, NavAction};
use super::events::GRID_COLUMNS;
use crate::commands::{truncate, EMPTY_STATE};

/// Rows taken by one event card, borders included.
const CARD_HEIGHT: u16 = 9;

/// Width of the toast overlay.
const TOAST_WIDTH: u16 = 46;

/// Draw the TUI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navbar
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search box
            Constraint::Length(1), // Filter row
            Constraint::Min(CARD_HEIGHT), // Card grid
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_navbar(frame, chunks[0]);
    draw_header(frame, chunks[1]);
    draw_search(frame, app, chunks[2]);
    draw_filters(frame, app, chunks[3]);
    draw_grid(frame, app, chunks[4]);
    draw_footer(frame, app, chunks[5]);

    if app.toast.is_visible() {
        draw_toast(frame, app, chunks[4]);
    }
}

/// Draw the navigation bar.
fn draw_navbar(frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::styled(
        " eventdeck ",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for action in NavAction::ALL {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("[{}] {}", action.key(), action.label()),
            Style::default().fg(Color::White),
        ));
    }

    let navbar = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Blue).fg(Color::White));
    frame.render_widget(navbar, area);
}

/// Draw the page header.
fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            " Tech Events",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Discover and attend the best tech events in your area",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            " 1.2K subscribers · 347 events",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Draw the search box, placing the cursor when it has focus.
fn draw_search(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Search;
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Scroll horizontally so the cursor stays inside the box
    let inner_width = usize::from(area.width.saturating_sub(2));
    let scroll = app.cursor_pos.saturating_sub(inner_width.saturating_sub(1));

    let content = if app.search.is_empty() && !focused {
        Span::styled("Search events...", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(app.search.chars().skip(scroll).take(inner_width).collect::<String>())
    };

    let search = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Search (/) "),
    );
    frame.render_widget(search, area);

    if focused {
        let offset = u16::try_from(app.cursor_pos - scroll).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(offset);
        let max_x = area.x.saturating_add(area.width.saturating_sub(2));
        frame.set_cursor_position((x.min(max_x), area.y.saturating_add(1)));
    }
}

/// Draw the category filter row.
fn draw_filters(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (index, option) in app.filter_options.iter().enumerate() {
        let style = if index == app.category_index {
            Style::default().bg(Color::White).fg(Color::Black).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", option.label()), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the event cards, three per row, scrolled to the selection.
fn draw_grid(frame: &mut Frame, app: &App, area: Rect) {
    let events = app.visible_events();

    if events.is_empty() {
        let empty = Paragraph::new(EMPTY_STATE)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(ratatui::layout::Alignment::Center)
            .block(Block::default().borders(Borders::NONE));
        let y = area.y + area.height / 2;
        frame.render_widget(empty, Rect::new(area.x, y, area.width, area.height.min(1)));
        return;
    }

    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let selected_row = app.selected / GRID_COLUMNS;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let rows = events.chunks(GRID_COLUMNS).skip(first_row).take(visible_rows);
    for (row_offset, row) in rows.enumerate() {
        let y = area.y + row_offset as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(area.y + area.height - y);
        let row_area = Rect::new(area.x, y, area.width, height);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(row_area);

        for (column, event) in row.iter().enumerate() {
            let index = (first_row + row_offset) * GRID_COLUMNS + column;
            draw_card(frame, event, index == app.selected, columns[column]);
        }
    }
}

/// Draw a single event card.
fn draw_card(frame: &mut Frame, event: &Event, selected: bool, area: Rect) {
    let border = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let inner_width = usize::from(area.width.saturating_sub(2));

    let mut lines = vec![
        Line::from(vec![
            Span::styled(event.category.label(), Style::default().fg(Color::Magenta)),
            Span::raw("  "),
            Span::styled(
                format!("{} attending", event.attendees),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            truncate(&event.title, inner_width),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Date  {}", event.date)),
        Line::from(format!("Time  {}", event.time)),
        Line::from(format!("Where {}", truncate(&event.location, inner_width.saturating_sub(6)))),
    ];
    if let Some(image) = &event.image {
        lines.push(Line::from(Span::styled(
            truncate(image, inner_width),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(Span::styled(
        if selected { "RSVP (Enter) →" } else { "RSVP →" },
        Style::default().fg(Color::Cyan),
    )));

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(card, area);
}

/// Draw the toast overlay in the bottom-right corner of `area`.
fn draw_toast(frame: &mut Frame, app: &App, area: Rect) {
    let Some(message) = app.toast.message() else {
        return;
    };

    let width = TOAST_WIDTH.min(area.width);
    let text_width = usize::from(width.saturating_sub(4)).max(1);
    let text_lines = (message.chars().count() / text_width + 2) as u16;
    let height = (text_lines + 2).min(area.height);
    let toast_area = Rect::new(
        area.x + area.width - width,
        area.y + area.height - height,
        width,
        height,
    );

    let toast = Paragraph::new(message)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(" Notice ")
                .title_bottom(" x to close "),
        );

    frame.render_widget(Clear, toast_area);
    frame.render_widget(toast, toast_area);
}

/// Draw the footer with keybindings.
fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let count = app.visible_events().len();
    let hints = match app.focus {
        Focus::Search => "Type to search | Ctrl+U clear | Enter/Esc done | Tab filter",
        Focus::Cards => "/ search | Tab filter | arrows move | Enter RSVP | x close notice | q quit",
    };
    let footer = Paragraph::new(format!(" {} event(s) | {} ", count, hints))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(footer, area);
}
