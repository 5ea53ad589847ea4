use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_money, format_percent, truncate};

pub(crate) const EMPTY_WARNING: &str = "No expenses yet! Add some to view your summary.";

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Min(10),   // Charts
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);

    if app.expenses.is_empty() {
        render_empty(f, chunks[1]);
        return;
    }

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);
    render_spending_chart(f, charts[0], app);
    render_distribution(f, charts[1], app);
}

fn titled_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ))
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let summary = &app.summary;
    let count = app.expenses.len();
    let symbol = app.currency_symbol.as_str();

    render_card(
        f,
        cards[0],
        "Total Income",
        format_money(symbol, summary.income),
        theme::GREEN,
        None,
    );
    render_card(
        f,
        cards[1],
        "Total Expenses",
        format_money(symbol, summary.total_expense),
        theme::RED,
        Some(format!("{count} expenses")),
    );
    render_card(
        f,
        cards[2],
        "Estimated Savings",
        format_money(symbol, summary.savings),
        if summary.savings > Decimal::ZERO {
            theme::GREEN
        } else {
            theme::YELLOW
        },
        None,
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    display: String,
    color: ratatui::style::Color,
    subtitle: Option<String>,
) {
    let sub_text = subtitle.unwrap_or_default();

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            display,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(sub_text, theme::dim_style())),
    ])
    .centered()
    .block(titled_block(title));

    f.render_widget(text, area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            EMPTY_WARNING,
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press i to chat, or :add <category> <amount>",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(titled_block("Expenses by Category"));
    f.render_widget(msg, area);
}

fn render_spending_chart(f: &mut Frame, area: Rect, app: &App) {
    let bars: Vec<Bar> = app
        .category_totals
        .iter()
        .map(|total| {
            let val = total.amount.round().to_u64().unwrap_or(0);
            Bar::default()
                .value(val)
                .label(Line::from(truncate(&total.category, 10)))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(titled_block("Expenses by Category"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::ACCENT))
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}

/// Share of total spend per category, as a list of proportional gauges.
fn render_distribution(f: &mut Frame, area: Rect, app: &App) {
    let label_width = 12;
    let bar_room = (area.width as usize).saturating_sub(label_width + 12).max(1);

    let lines: Vec<Line> = app
        .category_shares
        .iter()
        .enumerate()
        .map(|(i, (category, share))| {
            let filled = (*share / Decimal::ONE_HUNDRED * Decimal::from(bar_room))
                .round()
                .to_usize()
                .unwrap_or(0)
                .min(bar_room);
            let color = theme::SLICE_COLORS[i % theme::SLICE_COLORS.len()];
            Line::from(vec![
                Span::styled(
                    format!("{:<label_width$}", truncate(category, label_width)),
                    theme::normal_style(),
                ),
                Span::styled("█".repeat(filled), Style::default().fg(color)),
                Span::styled(
                    "░".repeat(bar_room - filled),
                    Style::default().fg(theme::OVERLAY),
                ),
                Span::styled(format!(" {:>7}", format_percent(*share)), theme::dim_style()),
            ])
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines).block(titled_block("Expense Distribution")),
        area,
    );
}
