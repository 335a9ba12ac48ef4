use anyhow::Result;

mod app;
mod config;
mod ui;

fn main() -> Result<()> {
    env_logger::init();
    app::run::run()
}
