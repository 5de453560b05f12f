// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use citylog_app::{
    AddCityDialog, City, DialogEdit, DialogField, ScreenCommand, ScreenEvent, ScreenState,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use std::io;
use std::time::{Duration, Instant};

const APP_TITLE: &str = "Cities";
const EMPTY_PLACEHOLDER: &str = "No cities available";
const ADD_TRIGGER: &str = " [+] add city ";
const PAGE_ROWS: isize = 10;
const STATUS_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ViewData {
    list_cursor: usize,
    help_visible: bool,
    status_deadline: Option<Instant>,
}

pub fn run_app(state: &mut ScreenState, tick: Duration) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let result = Terminal::new(backend)
        .context("create terminal")
        .and_then(|mut terminal| event_loop(&mut terminal, state, tick));

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut ScreenState,
    tick: Duration,
) -> Result<()> {
    let mut view_data = ViewData::default();

    loop {
        expire_status(state, &mut view_data, Instant::now());

        terminal
            .draw(|frame| render(frame, state, &view_data))
            .context("draw frame")?;

        if !event::poll(tick).context("poll event")? {
            continue;
        }
        match event::read().context("read event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if handle_key_event(state, &mut view_data, key) {
                    tracing::info!(cities = state.store.len(), "quit requested");
                    return Ok(());
                }
            }
            _ => {}
        }
    }
}

fn expire_status(state: &mut ScreenState, view_data: &mut ViewData, now: Instant) {
    if view_data.status_deadline.is_some_and(|deadline| now >= deadline) {
        view_data.status_deadline = None;
        state.dispatch(ScreenCommand::ClearStatus);
    }
}

/// Applies `command` and keeps the view in step with the events it produced.
fn dispatch(state: &mut ScreenState, view_data: &mut ViewData, command: ScreenCommand) {
    let events = state.dispatch(command);
    for event in &events {
        match event {
            ScreenEvent::SortChanged(_) => view_data.list_cursor = 0,
            ScreenEvent::CityAdded(city) => select_city(state, view_data, city),
            ScreenEvent::StatusUpdated(_) => {
                view_data.status_deadline = Some(Instant::now() + STATUS_TTL);
            }
            ScreenEvent::StatusCleared => view_data.status_deadline = None,
            ScreenEvent::DialogOpened
            | ScreenEvent::DialogClosed
            | ScreenEvent::AddRejected(_) => {}
        }
    }
}

fn select_city(state: &ScreenState, view_data: &mut ViewData, city: &City) {
    // Equal cities keep insertion order, so the newest one is the last match.
    if let Some(index) = state
        .visible_cities()
        .iter()
        .rposition(|candidate| candidate == city)
    {
        view_data.list_cursor = index;
    }
}

/// Returns true when the app should exit.
fn handle_key_event(state: &mut ScreenState, view_data: &mut ViewData, key: KeyEvent) -> bool {
    tracing::trace!(?key, "key");

    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    if state.dialog.is_visible() {
        handle_dialog_key(state, view_data, key);
        return false;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return true,
        (KeyCode::Char('a') | KeyCode::Char('+'), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            dispatch(state, view_data, ScreenCommand::OpenDialog);
        }
        (KeyCode::Char('s'), KeyModifiers::NONE) => {
            dispatch(state, view_data, ScreenCommand::ToggleSort);
        }
        (KeyCode::Char('j') | KeyCode::Down, _) => move_cursor(state, view_data, 1),
        (KeyCode::Char('k') | KeyCode::Up, _) => move_cursor(state, view_data, -1),
        (KeyCode::PageDown, _) => move_cursor(state, view_data, PAGE_ROWS),
        (KeyCode::PageUp, _) => move_cursor(state, view_data, -PAGE_ROWS),
        (KeyCode::Char('g') | KeyCode::Home, _) => view_data.list_cursor = 0,
        (KeyCode::Char('G') | KeyCode::End, _) => {
            view_data.list_cursor = state.store.len().saturating_sub(1);
        }
        (KeyCode::Char('?'), _) => view_data.help_visible = true,
        (KeyCode::Esc, _) => dispatch(state, view_data, ScreenCommand::ClearStatus),
        _ => {}
    }
    false
}

fn handle_dialog_key(state: &mut ScreenState, view_data: &mut ViewData, key: KeyEvent) {
    let command = match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => ScreenCommand::CancelDialog,
        (KeyCode::Enter, _) => ScreenCommand::ConfirmDialog,
        (KeyCode::Char('s'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            ScreenCommand::ConfirmDialog
        }
        (KeyCode::Tab | KeyCode::Down, _) => ScreenCommand::EditDialog(DialogEdit::NextField),
        (KeyCode::BackTab | KeyCode::Up, _) => ScreenCommand::EditDialog(DialogEdit::PrevField),
        (KeyCode::Backspace, _) => ScreenCommand::EditDialog(DialogEdit::Backspace),
        (KeyCode::Char(ch), modifiers)
            if modifiers.is_empty() || modifiers == KeyModifiers::SHIFT =>
        {
            ScreenCommand::EditDialog(DialogEdit::Push(ch))
        }
        _ => return,
    };
    dispatch(state, view_data, command);
}

fn move_cursor(state: &ScreenState, view_data: &mut ViewData, delta: isize) {
    let len = state.store.len();
    if len == 0 {
        view_data.list_cursor = 0;
        return;
    }
    let max = (len - 1) as isize;
    let next = (view_data.list_cursor as isize + delta).clamp(0, max);
    view_data.list_cursor = next as usize;
}

fn render(frame: &mut ratatui::Frame<'_>, state: &ScreenState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let header = Paragraph::new(sort_indicator(state.sort_enabled))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(APP_TITLE)
                .title_style(Style::default().add_modifier(Modifier::BOLD))
                .borders(Borders::ALL),
        );
    frame.render_widget(header, layout[0]);

    render_body(frame, layout[1], state, view_data);

    let trigger = Paragraph::new(Span::styled(
        ADD_TRIGGER,
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(trigger, layout[2]);

    let status =
        Paragraph::new(status_text(state, view_data)).style(Style::default().fg(Color::Yellow));
    frame.render_widget(status, layout[3]);

    if state.dialog.is_visible() {
        let area = centered_rect(60, 40, frame.area());
        frame.render_widget(Clear, area);
        let dialog = Paragraph::new(dialog_overlay_text(&state.dialog)).block(
            Block::default()
                .title("Add city")
                .title_style(Style::default().add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(dialog, area);
    }

    if view_data.help_visible {
        let area = centered_rect(70, 50, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_body(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &ScreenState,
    view_data: &ViewData,
) {
    let cities = state.visible_cities();
    if cities.is_empty() {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .split(area);
        let placeholder = Paragraph::new(EMPTY_PLACEHOLDER).alignment(Alignment::Center);
        frame.render_widget(placeholder, rows[1]);
        return;
    }

    let items = cities.iter().map(city_card).collect::<Vec<ListItem<'_>>>();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut list_state =
        ListState::default().with_selected(Some(view_data.list_cursor.min(cities.len() - 1)));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn city_card(city: &City) -> ListItem<'_> {
    ListItem::new(Text::from(vec![
        Line::from(Span::styled(
            city.name(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(city.country()),
        Line::default(),
    ]))
}

fn sort_indicator(sort_enabled: bool) -> &'static str {
    if sort_enabled {
        "[s] A→Z on "
    } else {
        "[s] A→Z off "
    }
}

fn dialog_overlay_text(dialog: &AddCityDialog) -> String {
    let mut lines = Vec::new();
    for field in DialogField::ALL {
        let focused = dialog.focus() == Some(field);
        let marker = if focused { ">" } else { " " };
        let cursor = if focused { "_" } else { "" };
        lines.push(format!("{marker} {}", field.label()));
        lines.push(format!("  [{}{cursor}]", dialog.buffer(field)));
        lines.push(String::new());
    }
    lines.push("enter add | esc cancel | tab next field".to_owned());
    lines.join("\n")
}

fn status_text(state: &ScreenState, view_data: &ViewData) -> String {
    if view_data.help_visible {
        return String::new();
    }

    let (mode, hints) = if state.dialog.is_visible() {
        ("ADD", "type | tab field | enter add | esc cancel | ctrl+q")
    } else {
        ("LIST", "a add | s sort | j/k g/G move | ? help | q quit")
    };
    match &state.status_line {
        Some(status) => format!("{mode} | {status} | {hints}"),
        None => format!("{mode} | {hints}"),
    }
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q quit\n\
list: a or + add city | s toggle A-Z sort | j/k up/down | g/G first/last | pgup/pgdn page\n\
list: esc clear status | ? help | q quit\n\
add city: type text | tab/shift+tab or up/down switch field | backspace delete\n\
add city: enter or ctrl+s add | esc cancel\n\
help: esc or ? close"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
