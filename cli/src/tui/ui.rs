use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use slotbook_core::WeekView;

use crate::tui::app::App;

pub fn draw(f: &mut Frame, app: &App) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Grid
            Constraint::Length(1), // Status
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    let mut title = format!("SLOTBOOK  {}  week of {}", app.owner(), view.label);
    if app.dirty {
        title.push_str("  [unsaved]");
    }
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, chunks[0]);

    draw_grid(f, app, &view, chunks[1]);

    let status = Paragraph::new(app.status.as_str()).alignment(Alignment::Left);
    f.render_widget(status, chunks[2]);

    let mut hints = Vec::new();
    if !view.can_go_previous {
        hints.push("p: -");
    } else {
        hints.push("p: prev week");
    }
    if !view.can_go_next {
        hints.push("n: -");
    } else {
        hints.push("n: next week");
    }
    let footer = Paragraph::new(format!("space: toggle | s: save | {} | q: quit", hints.join(" | ")))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[3]);
}

fn draw_grid(f: &mut Frame, app: &App, view: &WeekView, area: Rect) {
    let header_cells: Vec<Cell> = std::iter::once(Cell::from("Time"))
        .chain(view.days.iter().map(|day| {
            let mut label = format!("{} {}", day.weekday, day.date.format("%m-%d"));
            if day.is_today {
                label.push_str(" *");
            }
            let style = if !day.selectable {
                Style::default().fg(Color::DarkGray)
            } else if day.is_today {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Yellow)
            };
            Cell::from(Span::styled(label, style))
        }))
        .collect();

    let slot_count = view.days.first().map(|d| d.time_slots.len()).unwrap_or(0);
    let rows: Vec<Row> = (0..slot_count)
        .map(|si| {
            let mut cells = Vec::with_capacity(view.days.len() + 1);
            cells.push(Cell::from(view.days[0].time_slots[si].time.clone()));
            for (di, day) in view.days.iter().enumerate() {
                let slot = &day.time_slots[si];
                let mark = if slot.is_available { "✔" } else { "·" };
                let mut style = if slot.is_available {
                    Style::default().fg(Color::Green)
                } else if day.selectable {
                    Style::default().fg(Color::Gray)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                if (di, si) == app.selection() {
                    style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
                }
                cells.push(Cell::from(Span::styled(mark, style)));
            }
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Length(6)];
    widths.extend(std::iter::repeat(Constraint::Min(8)).take(view.days.len()));

    let table = Table::new(rows, widths)
        .header(Row::new(header_cells))
        .block(
            Block::default()
                .title(" Availability ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(table, area);
}
