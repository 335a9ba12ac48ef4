pub mod insights;
pub mod menu;
pub mod predict;

use crossterm::event::KeyCode;
use ratatui::Frame;

use crate::app::AppContext;

pub enum Action {
    None,
    Quit,
    Transition(Screen),
}

pub enum Screen {
    Menu(menu::MenuState),
    Predict(predict::PredictState),
    Insights(insights::InsightsState),
}

impl Screen {
    pub fn draw(&self, f: &mut Frame) {
        match self {
            Screen::Menu(s) => menu::draw(f, s),
            Screen::Predict(s) => predict::draw(f, s),
            Screen::Insights(s) => insights::draw(f, s),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, ctx: &AppContext) -> Action {
        match self {
            Screen::Menu(s) => menu::handle_key(s, key, ctx),
            Screen::Predict(s) => predict::handle_key(s, key, ctx),
            Screen::Insights(s) => insights::handle_key(s, key),
        }
    }
}
