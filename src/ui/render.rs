use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::commands;
use super::theme;
use super::util::format_money;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], app);
    render_screen(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
    render_command_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let label = if *s == app.screen {
                Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
            } else {
                theme::dim_style()
            };
            Line::from(vec![
                Span::styled(format!("{}:", i + 1), theme::dim_style()),
                Span::styled(s.to_string(), label),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .divider(Span::styled(" | ", Style::default().fg(theme::OVERLAY)))
        .style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(tabs, area);
}

fn render_screen(f: &mut Frame, area: Rect, app: &App) {
    match app.screen {
        Screen::Dashboard => super::screens::dashboard::render(f, area, app),
        Screen::Expenses => super::screens::expenses::render(f, area, app),
        Screen::Chat => super::screens::chat::render(f, area, app),
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
        InputMode::Chat => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::YELLOW)
            .add_modifier(Modifier::BOLD),
        InputMode::Command => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::GREEN)
            .add_modifier(Modifier::BOLD),
    };

    let info = format!(
        " {} | {} expenses | {} spent",
        app.screen,
        app.expenses.len(),
        format_money(&app.currency_symbol, app.summary.total_expense)
    );

    let right = match app.screen {
        Screen::Dashboard => " i chat | :income | :report | ? help ",
        Screen::Expenses => " j/k move | g/G top/bottom | :export | ? help ",
        Screen::Chat => " i chat | :clear | ? help ",
    };

    let available = area.width as usize;
    let used = mode_label.chars().count() + info.chars().count() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(&app.command_input, theme::command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Chat => (
            Line::from(vec![
                Span::styled("> ", Style::default().fg(theme::YELLOW)),
                Span::styled(&app.chat_input, theme::command_bar_style()),
            ]),
            Some(2 + app.chat_input.chars().count() as u16),
        ),
        InputMode::Normal => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press i to chat, : for commands, ? for help",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    &app.status_message,
                    theme::command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

/// Key bindings shown in the help overlay, grouped by section.
const KEY_HELP: &[(&str, &[(&str, &str)])] = &[
    (
        "Keys",
        &[
            ("1-3, Tab", "Switch screens"),
            ("j/k, g/G", "Move through expenses"),
            ("i", "Talk to the assistant"),
            (":", "Command mode"),
            ("Enter / Esc", "Send / cancel"),
            ("Ctrl-q", "Quit"),
        ],
    ),
    (
        "Try asking",
        &[
            ("i spent 250 on food", "Record an expense"),
            ("how much did i spend", "Total for the month"),
            ("biggest expense", "Top spending category"),
            ("savings", "Income left after spending"),
            ("tax on 800000", "Estimate income tax"),
        ],
    ),
];

/// Every line of the help overlay. Commands come from the registry, one per
/// description, under their long name.
pub(crate) fn help_lines() -> Vec<Line<'static>> {
    let heading = Style::default().fg(theme::YELLOW).add_modifier(Modifier::BOLD);
    let entry = |key: &str, desc: &str| {
        Line::from(Span::styled(format!("  {key:<24} {desc}"), theme::normal_style()))
    };

    let mut lines = vec![Line::from(Span::styled(
        " FinChat Help ",
        Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
    ))];
    for (section, entries) in KEY_HELP {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!(" {section}"), heading)));
        lines.extend(entries.iter().map(|&(key, desc)| entry(key, desc)));
    }

    let mut named: Vec<(&str, &str)> = commands::COMMANDS
        .iter()
        .map(|(&name, cmd)| (name, cmd.description))
        .collect();
    // Longest alias first so the dedup below keeps `:quit` over `:q`.
    named.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));
    let mut seen = std::collections::HashSet::new();
    named.retain(|(_, desc)| seen.insert(*desc));
    named.sort_by_key(|(name, _)| *name);

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Commands", heading)));
    lines.extend(named.iter().map(|&(name, desc)| entry(&format!(":{name}"), desc)));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Press any key to close ", theme::dim_style())));
    lines
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let lines = help_lines();
    let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let width = 76.min(area.width.saturating_sub(4));
    let popup = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::ACCENT))
                .style(Style::default().bg(theme::HEADER_BG)),
        ),
        popup,
    );
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
