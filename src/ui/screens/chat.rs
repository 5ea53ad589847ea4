use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::app::{App, Speaker};
use crate::ui::theme;

const GREETING: &str = "Ask me things like \"I spent 500 on groceries\", \
\"how much did i spend\", \"biggest expense\", \"savings\" or \"tax on 20000\".";

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();
    if app.chat_log.is_empty() {
        lines.push(Line::from(Span::styled(GREETING, theme::dim_style())));
    }
    for entry in &app.chat_log {
        let (who, style) = match entry.speaker {
            Speaker::User => (
                "you ",
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Speaker::Assistant => (
                "bot ",
                Style::default()
                    .fg(theme::GREEN)
                    .add_modifier(Modifier::BOLD),
            ),
        };
        lines.push(Line::from(vec![
            Span::styled(who, style),
            Span::styled(entry.text.as_str(), theme::normal_style()),
        ]));
    }

    // Keep the newest lines in view
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Chat ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(block),
        area,
    );
}
