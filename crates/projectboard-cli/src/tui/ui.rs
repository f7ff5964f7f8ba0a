//! TUI rendering using ratatui.

use projectboard_models::Project;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::app::{App, FormField};

/// Draw the TUI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Title field
            Constraint::Length(3), // Description field
            Constraint::Length(3), // People field
            Constraint::Min(5),    // Project lists
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_header(frame, chunks[0]);
    draw_field(frame, app, chunks[1], FormField::Title, " Title ", &app.title);
    draw_field(
        frame,
        app,
        chunks[2],
        FormField::Description,
        " Description ",
        &app.description,
    );
    draw_field(
        frame,
        app,
        chunks[3],
        FormField::People,
        " People (1-5) ",
        &app.people,
    );
    draw_lists(frame, app, chunks[4]);
    draw_footer(frame, chunks[5]);

    if let Some(message) = &app.alert {
        draw_alert(frame, message);
    }
}

/// Draw the header bar.
fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(" Projectboard ").style(
        Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_widget(header, area);
}

/// Draw one form input field.
fn draw_field(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    field: FormField,
    title: &str,
    value: &str,
) {
    let focused = app.focus == field;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let input = Paragraph::new(value).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title.to_string()),
    );

    frame.render_widget(input, area);

    // Show the cursor in the focused field unless an alert is up.
    // Text longer than the box keeps the cursor on the last inner cell.
    if focused && app.alert.is_none() {
        let inner_width = area.width.saturating_sub(2);
        let offset = (app.cursor_pos as u16).min(inner_width.saturating_sub(1));
        let cursor_x = area.x + offset + 1;
        let cursor_y = area.y + 1;
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Draw the active and finished project lists side by side.
fn draw_lists(frame: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_project_list(
        frame,
        halves[0],
        "Active Projects",
        &app.active_projects(),
        Color::Green,
    );
    draw_project_list(
        frame,
        halves[1],
        "Finished Projects",
        &app.finished_projects(),
        Color::DarkGray,
    );
}

/// Draw one project list column.
fn draw_project_list(frame: &mut Frame, area: Rect, name: &str, projects: &[&Project], color: Color) {
    let items: Vec<ListItem> = projects
        .iter()
        .map(|project| {
            ListItem::new(Line::from(vec![Span::styled(
                project.title.clone(),
                Style::default().fg(color),
            )]))
        })
        .collect();

    let title = format!(" {} ({}) ", name, projects.len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(list, area);
}

/// Draw the footer with keybindings.
fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(" Tab: next field | Enter: submit | Esc: quit ")
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(footer, area);
}

/// Draw the blocking alert overlay.
fn draw_alert(frame: &mut Frame, message: &str) {
    let area = centered_rect(40, 20, frame.area());

    let lines = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(vec![Span::styled(
            "press any key to continue",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let alert = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Invalid input "),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(alert, area);
}

/// Centered rectangle taking the given percentages of the available area.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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
