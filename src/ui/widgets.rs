use perf_core::{ModelScore, MODEL_SCOREBOARD};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::theme::Theme;

/// The static model comparison table.
pub fn scoreboard_table() -> Table<'static> {
    let header = Row::new(vec!["model", "train R²", "test R²", "predict (ms)"])
        .style(Theme::title());

    let rows = MODEL_SCOREBOARD.iter().map(|score| {
        Row::new(vec![
            Cell::from(score.name),
            Cell::from(format!("{:.3}", score.train_r2)),
            Cell::from(format!("{:.3}", score.test_r2)),
            Cell::from(format!("{:.4}", score.predict_ms)),
        ])
        .style(Theme::text())
    });

    Table::new(
        rows,
        [
            Constraint::Length(20),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Min(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border())
            .title(" Model Performance ")
            .title_style(Theme::title()),
    )
}

/// Train-vs-test R² bars, one group per model.
///
/// Bar values are scaled by 1000 (the widget draws integers); the text
/// value shows the real score.
pub fn accuracy_chart() -> BarChart<'static> {
    let mut chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(" Accuracy (train vs test) ")
                .title_style(Theme::title()),
        )
        .bar_width(5)
        .bar_gap(1)
        .group_gap(3);

    for score in &MODEL_SCOREBOARD {
        let bars = [
            Bar::default()
                .value((score.train_r2 * 1000.0) as u64)
                .text_value(format!("{:.3}", score.train_r2))
                .style(Theme::bar()),
            Bar::default()
                .value((score.test_r2 * 1000.0) as u64)
                .text_value(format!("{:.3}", score.test_r2))
                .style(Theme::bar_alt()),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::styled(short_name(score), Theme::dim()))
                .bars(&bars),
        );
    }

    chart
}

/// Prediction latency bars, one per model, scaled to microseconds.
pub fn timing_chart() -> BarChart<'static> {
    let bars: Vec<Bar> = MODEL_SCOREBOARD
        .iter()
        .map(|score| {
            Bar::default()
                .value((score.predict_ms * 1000.0) as u64)
                .text_value(format!("{:.4}", score.predict_ms))
                .label(Line::styled(short_name(score), Theme::dim()))
                .style(Theme::bar())
        })
        .collect();

    BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(" Prediction time (ms) ")
                .title_style(Theme::title()),
        )
        .bar_width(7)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bars))
}

fn short_name(score: &ModelScore) -> &'static str {
    match score.name {
        "Linear Regression" => "LinReg",
        "Random Forest" => "Forest",
        "Decision Tree" => "Tree",
        other => other,
    }
}

/// Bottom-of-screen key hints.
pub fn render_hints(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans: Vec<Span> = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(format!("[{key}]"), Theme::accent_cyan()));
        spans.push(Span::styled(format!(" {action}    "), Theme::dim()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
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
        .split(vert[1])[1]
}
