use crate::application::{App, View};
use crate::domain::FormField;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    if app.workflow.session().is_resolving() {
        render_loading(f, app, chunks[1]);
    } else {
        match app.view() {
            View::Scan => render_scan(f, chunks[1]),
            View::ManualIsbnEntry => render_manual_entry(f, app, chunks[1]),
            View::LiveScanner => render_live_scanner(f, app, chunks[1]),
            View::PriceEntry => render_price_entry(f, app, chunks[1]),
        }
    }

    render_status_bar(f, app, chunks[2]);

    if let Some(alert) = &app.alert {
        render_alert_popup(f, alert);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let view = match app.view() {
        View::Scan => "Scan",
        View::ManualIsbnEntry => "Manual Entry",
        View::LiveScanner => "Live Scanner",
        View::PriceEntry => "Price Entry",
    };
    let header = Paragraph::new(format!("shelfscan - ISBN Intake | {view}"))
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn card(title: &str) -> Block<'_> {
    Block::default().borders(Borders::ALL).title(title)
}

fn render_scan(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::styled(
            "ISBN Scanner",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Line::styled("Scan to Store Book", Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::from("[s] Scan ISBN"),
        Line::from(""),
        Line::styled("OR", Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::from("[m] Enter Manually"),
    ];
    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(card("Scan"));
    f.render_widget(body, area);
}

fn render_manual_entry(f: &mut Frame, app: &App, area: Rect) {
    let block = card("Manual ISBN Entry");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    let draft = app.workflow.session().manual_isbn_draft();
    render_text_input(f, rows[0], "ISBN", draft, "Enter ISBN", true);
    set_input_cursor(f, rows[0], app.cursor_position.min(draft.chars().count()));
}

fn render_live_scanner(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::styled(
            "Focus on Barcode",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("Point the scanner at the barcode on the back cover."),
        Line::from(""),
        Line::styled(
            if app.scan_buffer.is_empty() {
                "waiting for scan...".to_string()
            } else {
                format!("reading {}", app.scan_buffer)
            },
            Style::default().fg(Color::DarkGray),
        ),
    ];
    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(card("Live Scanner").border_style(Style::default().fg(Color::Cyan)));
    f.render_widget(body, area);
}

fn render_loading(f: &mut Frame, app: &App, area: Rect) {
    let isbn = app.workflow.session().pending_isbn().unwrap_or_default();
    let lines = vec![
        Line::from(""),
        Line::styled(
            "Searching for book...",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(format!("ISBN {isbn}"), Style::default().fg(Color::Gray)),
    ];
    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(card("Please wait"));
    f.render_widget(body, area);
}

fn render_price_entry(f: &mut Frame, app: &App, area: Rect) {
    let session = app.workflow.session();
    let block = card("Price Entry");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let title_required = session.title_entry_required();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(if title_required { 3 } else { 1 }),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let label = Style::default().fg(Color::LightBlue);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("ISBN: ", label),
            Span::raw(session.isbn()),
        ])),
        rows[0],
    );

    let editable = !session.is_saving() && !session.is_saved();
    let focused = |field: FormField| editable && app.alert.is_none() && app.focus == field;

    if title_required {
        render_text_input(
            f,
            rows[1],
            "Enter Book Title",
            session.manual_title_draft(),
            "Enter title",
            focused(FormField::Title),
        );
    } else {
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Title: ", label),
                Span::raw(session.resolved_title()),
            ])),
            rows[1],
        );
    }

    render_text_input(f, rows[2], "Enter Price", session.price(), "Enter price", focused(FormField::Price));
    render_text_input(
        f,
        rows[3],
        "Enter Quantity (+/-)",
        session.quantity(),
        "Enter quantity",
        focused(FormField::Quantity),
    );

    let location = session
        .location()
        .map_or("-- Select Location --", |loc| loc.label());
    render_text_input(
        f,
        rows[4],
        "Select Location",
        &format!("< {location} >"),
        "",
        focused(FormField::Location),
    );

    if !session.is_saved() {
        let save = if session.is_saving() {
            Span::styled("[ Saving... ]", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(
                "[Enter] Save",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        };
        f.render_widget(Paragraph::new(Line::from(save)), rows[5]);
    }

    if !session.save_message().is_empty() {
        let color = if session.is_saved() { Color::Green } else { Color::Red };
        f.render_widget(
            Paragraph::new(session.save_message())
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
            rows[6],
        );
    }

    if focused(FormField::Location) {
        return;
    }
    let cursor_row = match app.focus {
        FormField::Title if title_required => Some((rows[1], session.manual_title_draft())),
        FormField::Price => Some((rows[2], session.price())),
        FormField::Quantity => Some((rows[3], session.quantity())),
        _ => None,
    };
    if let Some((row, text)) = cursor_row {
        if focused(app.focus) {
            set_input_cursor(f, row, app.cursor_position.min(text.chars().count()));
        }
    }
}

fn render_text_input(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let content = if value.is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(value.to_string())
    };
    let input = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(label.to_string())
            .border_style(border),
    );
    f.render_widget(input, area);
}

fn set_input_cursor(f: &mut Frame, area: Rect, cursor: usize) {
    let max = area.width.saturating_sub(2);
    let x = area.x + 1 + (cursor as u16).min(max);
    f.set_cursor_position((x, area.y + 1));
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let session = app.workflow.session();
    let text = if app.alert.is_some() {
        "Enter/Esc: dismiss".to_string()
    } else if session.is_resolving() {
        "Esc: back".to_string()
    } else {
        match app.view() {
            View::Scan => "s/Enter: scan ISBN | m: enter manually | q: quit".to_string(),
            View::ManualIsbnEntry => "Enter: next | Esc: back".to_string(),
            View::LiveScanner => "Waiting for the scanner | Esc: back".to_string(),
            View::PriceEntry if session.is_saved() => "Esc: return to scanner".to_string(),
            View::PriceEntry => {
                "Tab/↑↓: move | ←→: location | Enter: save | Esc: return to scanner".to_string()
            }
        }
    };

    let style = match app.view() {
        View::Scan => Style::default(),
        View::ManualIsbnEntry => Style::default().fg(Color::Yellow),
        View::LiveScanner => Style::default().fg(Color::Cyan),
        View::PriceEntry => Style::default().fg(Color::Green),
    };
    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}

fn render_alert_popup(f: &mut Frame, message: &str) {
    let area = f.area();
    let width = area.width.saturating_mul(3) / 5;
    let popup_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height / 3,
        width,
        height: 5.min(area.height),
    };

    f.render_widget(Clear, popup_area);
    let popup = Paragraph::new(message.to_string())
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Missing information")
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(popup, popup_area);
}
