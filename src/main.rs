use crate::app::App;
use title_animator::AnimatorConfig;

pub mod app;
pub mod event;
pub mod logging;
pub mod ui;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init(logging::LOG_DIR)?;

    let config = AnimatorConfig::from_env()?;
    let app = App::new(config)?;

    let terminal = ratatui::init();
    let result = app.run(terminal).await;
    ratatui::restore();
    result
}
