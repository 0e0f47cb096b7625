//! UI rendering helpers for the terminal user interface.
//!
//! `draw` paints a `view::View` with `ratatui`; it reads nothing else.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::view::{FormView, View};

const LEFT_PAD: Padding = Padding {
    left: 1,
    right: 0,
    top: 0,
    bottom: 0,
};

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the entire UI into `frame`.
pub fn draw(frame: &mut Frame, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(view.header.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" playdeck ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    draw_now_showing(frame, view, chunks[1]);
    draw_playlist(frame, view, chunks[2]);
    draw_transport(frame, view, chunks[3]);

    let footer = Paragraph::new(view.controls.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(LEFT_PAD),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);

    // Popups go last so they sit on top; the notice covers the form.
    if let Some(form) = &view.form {
        draw_form(frame, form, chunks[2]);
    }
    if let Some(notice) = &view.notice {
        draw_notice(frame, notice, frame.area());
    }
}

fn draw_now_showing(frame: &mut Frame, view: &View, area: Rect) {
    let s = &view.now_showing;
    let lines = vec![
        Line::from(vec![Span::raw(s.name.as_str()).bold()]),
        Line::from(format!("by {}", s.artist)),
        Line::from(format!("artwork: {}", s.artwork)).dim(),
    ];
    let panel = Paragraph::new(lines).block(
        Block::bordered()
            .padding(LEFT_PAD)
            .title(format!(" {} ", view.now_playing)),
    );
    frame.render_widget(panel, area);
}

fn draw_playlist(frame: &mut Frame, view: &View, area: Rect) {
    // Center the cursor row when the list is taller than the area.
    let total = view.rows.len();
    let height = area.height.saturating_sub(2) as usize;
    let cursor = view.cursor.unwrap_or(0);
    let (start, end) = if total <= height || height == 0 {
        (0, total)
    } else {
        let half = height / 2;
        let start = cursor.saturating_sub(half).min(total - height);
        (start, start + height)
    };

    let items: Vec<ListItem> = view.rows[start..end]
        .iter()
        .map(|row| {
            let marker = if row.selected { "♪ " } else { "  " };
            let line = Line::from(vec![
                Span::raw(marker),
                Span::raw(format!("{:>3}. ", row.number)).dim(),
                Span::raw(row.name.as_str()),
                Span::raw(" - ").dim(),
                Span::raw(row.artist.as_str()).italic(),
            ]);
            let item = ListItem::new(line);
            if row.selected {
                item.bold()
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" playlist "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if let Some(c) = view.cursor {
        state.select(Some(c - start));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_transport(frame: &mut Frame, view: &View, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(10),
            Constraint::Length(12),
        ])
        .split(area);

    let random = if view.random_active {
        Span::raw("⤮").reversed()
    } else {
        Span::raw("⤮")
    };
    let buttons = Paragraph::new(Line::from(vec![
        Span::raw(view.play_icon()),
        Span::raw("  "),
        random,
    ]))
    .alignment(Alignment::Center)
    .block(Block::bordered());
    frame.render_widget(buttons, cols[0]);

    let ratio = (view.seek_percent / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(Block::bordered())
        .ratio(ratio)
        .label(format!("{} / {}", view.current_time, view.total_time));
    frame.render_widget(gauge, cols[1]);

    let volume = Paragraph::new(format!("vol {}%", view.volume))
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(volume, cols[2]);
}

fn draw_form(frame: &mut Frame, form: &FormView, area: Rect) {
    let popup = centered_rect_sized(72, 2 + 2 * form.fields.len() as u16 + 1, area);
    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line> = Vec::new();
    for field in &form.fields {
        let label = Span::raw(format!("{}:", field.label));
        lines.push(Line::from(if field.focused {
            label.bold()
        } else {
            label
        }));
        let cursor = if field.focused { "_" } else { "" };
        lines.push(Line::from(format!("  {}{}", field.value, cursor)));
    }
    lines.push(Line::from("[tab] next field | [enter] save | [esc] cancel").dim());

    let body = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .padding(LEFT_PAD)
            .title(form.title),
    );
    frame.render_widget(body, popup);
}

fn draw_notice(frame: &mut Frame, notice: &str, area: Rect) {
    let popup = centered_rect_sized(48, 5, area);
    frame.render_widget(Clear, popup);
    let body = Paragraph::new(notice)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" notice (enter closes) "),
        );
    frame.render_widget(body, popup);
}
