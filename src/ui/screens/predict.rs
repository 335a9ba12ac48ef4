use crossterm::event::KeyCode;
use perf_core::{validate, FeatureVector, RawSubmission, SubmissionLog};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::AppContext;
use crate::ui::theme::Theme;
use crate::ui::widgets::{centered_rect, render_hints};

use super::Action;

const FIELDS: [(&str, &str); 5] = [
    ("Name", "enter your full name"),
    ("Age", "age in years (15 - 100)"),
    ("Weekly Study Time (hours)", "daily studying hours * count of studying days"),
    ("Absences", "number of absences per month (0 - 30) days"),
    ("GPA", "final GPA out of 4.0, e.g. 3.75"),
];

enum Outcome {
    /// A successful prediction for the named student.
    Score { name: String, score: f64 },
    /// The model was unavailable or the call failed. Fatal to this
    /// attempt only; the user may fix inputs and submit again.
    Failure(String),
}

pub struct PredictState {
    values: [String; 5],
    focus: usize,
    errors: Vec<String>,
    outcome: Option<Outcome>,
}

impl PredictState {
    pub fn new() -> Self {
        Self {
            values: Default::default(),
            focus: 0,
            errors: Vec::new(),
            outcome: None,
        }
    }

    fn submission(&self) -> RawSubmission {
        RawSubmission {
            name: self.values[0].clone(),
            age: self.values[1].clone(),
            study_time: self.values[2].clone(),
            absences: self.values[3].clone(),
            gpa: self.values[4].clone(),
        }
    }
}

pub fn handle_key(state: &mut PredictState, key: KeyCode, ctx: &AppContext) -> Action {
    match key {
        KeyCode::Esc => {
            Action::Transition(super::Screen::Menu(super::menu::MenuState::new()))
        }
        KeyCode::Up | KeyCode::BackTab => {
            state.focus = (state.focus + FIELDS.len() - 1) % FIELDS.len();
            Action::None
        }
        KeyCode::Down | KeyCode::Tab => {
            state.focus = (state.focus + 1) % FIELDS.len();
            Action::None
        }
        KeyCode::Enter => {
            submit(state, ctx);
            Action::None
        }
        KeyCode::Char(c) => {
            state.values[state.focus].push(c);
            Action::None
        }
        KeyCode::Backspace => {
            state.values[state.focus].pop();
            Action::None
        }
        _ => Action::None,
    }
}

/// Validates, logs and predicts in one action.
///
/// Prediction only ever runs on the inputs validated by this same
/// submit: there is no stale-state path from a previous attempt.
fn submit(state: &mut PredictState, ctx: &AppContext) {
    state.errors.clear();
    state.outcome = None;

    let raw = state.submission();
    let inputs = match validate(&raw) {
        Ok(inputs) => inputs,
        Err(errors) => {
            state.errors = errors.iter().map(ToString::to_string).collect();
            return;
        }
    };

    // Audit side effect, not a gate: a log failure is reported but does
    // not block the prediction.
    if let Err(e) = SubmissionLog::new(&ctx.config.userlog_path).append(&raw) {
        log::warn!("cannot append to '{}': {e}", ctx.config.userlog_path.display());
    }

    let features = FeatureVector::from_inputs(&inputs);
    state.outcome = Some(match ctx.predictor.predict(&features) {
        Ok(score) => Outcome::Score { name: inputs.name, score },
        Err(e) => Outcome::Failure(e.to_string()),
    });
}

pub fn draw(f: &mut Frame, state: &PredictState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let outer = centered_rect(70, 92, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                      // title
            Constraint::Length(FIELDS.len() as u16 * 3), // inputs
            Constraint::Length(1),                      // spacer
            Constraint::Min(4),                         // errors / result
            Constraint::Length(1),                      // hints
        ])
        .split(outer);

    f.render_widget(
        Paragraph::new(Span::styled("Student Performance Predictor", Theme::title())),
        chunks[0],
    );

    draw_fields(f, chunks[1], state);
    draw_feedback(f, chunks[3], state);

    render_hints(
        f,
        chunks[4],
        &[
            ("↑↓ / tab", "switch field"),
            ("enter", "submit & predict"),
            ("esc", "back to menu"),
        ],
    );
}

fn draw_fields(f: &mut Frame, area: Rect, state: &PredictState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            FIELDS
                .iter()
                .map(|_| Constraint::Length(3))
                .collect::<Vec<_>>(),
        )
        .split(area);

    for (i, ((label, placeholder), row)) in FIELDS.iter().zip(rows.iter()).enumerate() {
        let focused = i == state.focus;
        let border = if focused { Theme::accent_cyan() } else { Theme::border() };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {label} "))
            .title_style(if focused { Theme::accent_cyan() } else { Theme::dim() });

        let inner = block.inner(*row);
        f.render_widget(block, *row);

        let value = &state.values[i];
        let display = if value.is_empty() && !focused {
            Line::from(Span::styled(*placeholder, Theme::muted()))
        } else if focused {
            Line::from(vec![
                Span::styled(value.clone(), Theme::text()),
                Span::styled("█", Theme::accent_cyan()),
            ])
        } else {
            Line::from(Span::styled(value.clone(), Theme::text()))
        };

        f.render_widget(Paragraph::new(display), inner);
    }
}

fn draw_feedback(f: &mut Frame, area: Rect, state: &PredictState) {
    if !state.errors.is_empty() {
        let lines: Vec<Line> = state
            .errors
            .iter()
            .map(|e| {
                Line::from(vec![
                    Span::styled("✖ ", Theme::error()),
                    Span::styled(e.clone(), Theme::error()),
                ])
            })
            .collect();

        f.render_widget(
            Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Theme::error())
                        .title(" Invalid Inputs ")
                        .title_style(Theme::error()),
                )
                .wrap(Wrap { trim: true }),
            area,
        );
        return;
    }

    match &state.outcome {
        Some(Outcome::Score { name, score }) => {
            let lines = vec![
                Line::from(Span::styled("✔ All inputs are valid", Theme::ok())),
                Line::from(""),
                Line::from(vec![
                    Span::styled(format!("Predicted performance for {name}: "), Theme::text()),
                    Span::styled(format!("{score:.3}"), Theme::ok()),
                ]),
            ];
            f.render_widget(
                Paragraph::new(lines)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Theme::ok())
                            .title(" Prediction ")
                            .title_style(Theme::ok()),
                    )
                    .wrap(Wrap { trim: true }),
                area,
            );
        }
        Some(Outcome::Failure(msg)) => {
            f.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("✖ ", Theme::error()),
                    Span::styled(msg.clone(), Theme::error()),
                ]))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Theme::error())
                        .title(" Prediction Failed ")
                        .title_style(Theme::error()),
                )
                .wrap(Wrap { trim: true }),
                area,
            );
        }
        None => {
            f.render_widget(
                Paragraph::new(Span::styled(
                    "Fill in all five fields and press enter.",
                    Theme::muted(),
                )),
                area,
            );
        }
    }
}
