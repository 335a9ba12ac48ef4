use crossterm::event::KeyCode;
use perf_core::{ColumnKind, Dataset};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::AppContext;
use crate::ui::theme::Theme;
use crate::ui::widgets::{accuracy_chart, render_hints, scoreboard_table, timing_chart};

use super::Action;

const HISTOGRAM_BINS: usize = 20;

const TAB_TITLES: [&str; 2] = ["Data Overview", "Model Comparison"];

/// Hand-curated blurbs per well-known column. Static content, nothing
/// is computed from the dataset.
const INSIGHTS: &[(&str, &[&str])] = &[
    ("age", &[
        "Average age of each gender is ~16.",
        "16-year-olds are the most engaged in extracurricular activities.",
    ]),
    ("gender", &["Females have a higher share in high grades than males."]),
    ("tutoring", &["Non-tutored students are more likely to score higher."]),
    ("parent_support", &["Greater parental support increases the probability of higher grades."]),
    ("ethnicity", &["Asians tend to be the weakest scorers among ethnicities."]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Models,
}

pub struct InsightsState {
    tab: Tab,
    dataset: Result<Dataset, String>,
    column: usize,
    hue: Option<usize>,
}

impl InsightsState {
    /// Loads the dataset fresh — the view never caches across visits.
    pub fn new(ctx: &AppContext) -> Self {
        let dataset = Dataset::load(&ctx.config.dataset_path).map_err(|e| e.to_string());
        Self { tab: Tab::Overview, dataset, column: 0, hue: None }
    }

    fn column_count(&self) -> usize {
        self.dataset.as_ref().map(|d| d.columns().len()).unwrap_or(0)
    }

    /// Hue candidates: categorical columns other than the selected one.
    fn hue_candidates(&self) -> Vec<usize> {
        let Ok(dataset) = &self.dataset else {
            return Vec::new();
        };
        let selected_is_categorical = dataset
            .column(self.column)
            .is_some_and(|c| c.kind == ColumnKind::Categorical);
        if !selected_is_categorical {
            return Vec::new();
        }
        dataset
            .categorical_indices()
            .into_iter()
            .filter(|&i| i != self.column)
            .collect()
    }

    fn cycle_hue(&mut self) {
        let candidates = self.hue_candidates();
        self.hue = match self.hue {
            None => candidates.first().copied(),
            Some(current) => candidates
                .iter()
                .position(|&i| i == current)
                .and_then(|pos| candidates.get(pos + 1))
                .copied(),
        };
    }
}

pub fn handle_key(state: &mut InsightsState, key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => {
            Action::Transition(super::Screen::Menu(super::menu::MenuState::new()))
        }
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
            state.tab = match state.tab {
                Tab::Overview => Tab::Models,
                Tab::Models => Tab::Overview,
            };
            Action::None
        }
        KeyCode::Up | KeyCode::Char('k') if state.tab == Tab::Overview => {
            if state.column > 0 {
                state.column -= 1;
                state.hue = None;
            }
            Action::None
        }
        KeyCode::Down | KeyCode::Char('j') if state.tab == Tab::Overview => {
            if state.column + 1 < state.column_count() {
                state.column += 1;
                state.hue = None;
            }
            Action::None
        }
        KeyCode::Char('h') if state.tab == Tab::Overview => {
            state.cycle_hue();
            Action::None
        }
        _ => Action::None,
    }
}

pub fn draw(f: &mut Frame, state: &InsightsState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(2), // tabs
            Constraint::Min(0),    // body
            Constraint::Length(1), // hints
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled("Interactive Data & Model Insights", Theme::title()))
            .alignment(Alignment::Center),
        chunks[0],
    );

    let selected = match state.tab {
        Tab::Overview => 0,
        Tab::Models => 1,
    };
    f.render_widget(
        Tabs::new(TAB_TITLES.to_vec())
            .select(selected)
            .style(Theme::dim())
            .highlight_style(Theme::accent_cyan()),
        chunks[1],
    );

    match state.tab {
        Tab::Overview => draw_overview(f, chunks[2], state),
        Tab::Models => draw_models(f, chunks[2]),
    }

    render_hints(
        f,
        chunks[3],
        &[
            ("←→ / tab", "switch tab"),
            ("↑↓", "choose feature"),
            ("h", "cycle hue"),
            ("q / esc", "back"),
        ],
    );
}

fn draw_overview(f: &mut Frame, area: Rect, state: &InsightsState) {
    let dataset = match &state.dataset {
        Ok(dataset) => dataset,
        Err(msg) => {
            f.render_widget(
                Paragraph::new(msg.as_str())
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Theme::error())
                            .title(" Dataset Unavailable ")
                            .title_style(Theme::error()),
                    )
                    .style(Theme::error())
                    .wrap(Wrap { trim: true }),
                area,
            );
            return;
        }
    };

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(0)])
        .split(area);

    draw_column_list(f, cols[0], state, dataset);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(6)])
        .split(cols[1]);

    draw_chart(f, right[0], state, dataset);
    draw_insights(f, right[1], state, dataset);
}

fn draw_column_list(f: &mut Frame, area: Rect, state: &InsightsState, dataset: &Dataset) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(" Features ")
        .title_style(Theme::title());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = dataset
        .columns()
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let tag = match column.kind {
                ColumnKind::Numeric => "num",
                ColumnKind::Categorical => "cat",
            };
            let selected = i == state.column;
            let style = if selected {
                Theme::accent_cyan().patch(Theme::highlight_bg())
            } else {
                Theme::dim()
            };
            let prefix = if selected { "▶ " } else { "  " };
            Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(column.name.clone(), style),
                Span::styled(format!("  [{tag}]"), Theme::muted()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_chart(f: &mut Frame, area: Rect, state: &InsightsState, dataset: &Dataset) {
    let Some(column) = dataset.column(state.column) else {
        return;
    };

    match column.kind {
        ColumnKind::Numeric => {
            let Some(hist) = column.histogram(HISTOGRAM_BINS) else {
                return;
            };
            let bars: Vec<Bar> = hist
                .counts
                .iter()
                .enumerate()
                .map(|(i, &count)| {
                    Bar::default()
                        .value(count as u64)
                        .label(Line::styled(hist.bin_label(i), Theme::muted()))
                        .style(Theme::bar())
                })
                .collect();

            f.render_widget(
                BarChart::default()
                    .block(chart_block(format!(" Distribution of {} ", column.name)))
                    .bar_width(4)
                    .bar_gap(1)
                    .data(BarGroup::default().bars(&bars)),
                area,
            );
        }
        ColumnKind::Categorical => match state.hue {
            None => {
                let bars: Vec<Bar> = column
                    .category_counts()
                    .into_iter()
                    .map(|(label, count)| {
                        Bar::default()
                            .value(count as u64)
                            .label(Line::styled(label, Theme::dim()))
                            .style(Theme::bar())
                    })
                    .collect();

                f.render_widget(
                    BarChart::default()
                        .block(chart_block(format!(" Distribution by {} ", column.name)))
                        .bar_width(8)
                        .bar_gap(2)
                        .data(BarGroup::default().bars(&bars)),
                    area,
                );
            }
            Some(hue) => {
                let Some((hue_labels, groups)) = dataset.category_counts_by_hue(state.column, hue)
                else {
                    return;
                };
                let hue_name = dataset
                    .column(hue)
                    .map(|c| c.name.clone())
                    .unwrap_or_default();

                let mut chart = BarChart::default()
                    .block(chart_block(format!(
                        " Distribution by {} (hue: {hue_name}) ",
                        column.name
                    )))
                    .bar_width(6)
                    .bar_gap(1)
                    .group_gap(3);

                for (label, counts) in groups {
                    let bars: Vec<Bar> = counts
                        .iter()
                        .enumerate()
                        .map(|(i, &count)| {
                            let style = if i % 2 == 0 { Theme::bar() } else { Theme::bar_alt() };
                            Bar::default()
                                .value(count as u64)
                                .label(Line::styled(hue_labels[i].clone(), Theme::muted()))
                                .style(style)
                        })
                        .collect();
                    chart = chart.data(
                        BarGroup::default()
                            .label(Line::styled(label, Theme::dim()))
                            .bars(&bars),
                    );
                }

                f.render_widget(chart, area);
            }
        },
    }
}

fn draw_insights(f: &mut Frame, area: Rect, state: &InsightsState, dataset: &Dataset) {
    let name = dataset
        .column(state.column)
        .map(|c| c.name.to_lowercase())
        .unwrap_or_default();

    let lines: Vec<Line> = match INSIGHTS.iter().find(|(key, _)| *key == name) {
        Some((_, blurbs)) => blurbs
            .iter()
            .map(|b| {
                Line::from(vec![
                    Span::styled("• ", Theme::accent_blue()),
                    Span::styled(*b, Theme::text()),
                ])
            })
            .collect(),
        None => vec![Line::from(Span::styled(
            "No curated insight for this feature.",
            Theme::muted(),
        ))],
    };

    f.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::border())
                    .title(" Insights ")
                    .title_style(Theme::title()),
            )
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_models(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(area);

    f.render_widget(scoreboard_table(), chunks[0]);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    f.render_widget(accuracy_chart(), charts[0]);
    f.render_widget(timing_chart(), charts[1]);
}

fn chart_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(title)
        .title_style(Theme::title())
}
