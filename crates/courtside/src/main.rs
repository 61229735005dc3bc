mod app;
mod logging;
mod scheduler;

use courtside_config::Config;

use crate::app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Only persist changes when the file on disk was understood.
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    if let Err(err) = logging::init(config.log_level) {
        eprintln!("courtside: file logging disabled: {err}");
    }
    if let Some(err) = &load_error {
        log::warn!("{err}; using the default configuration");
    }

    let scenes = config.resolve_scenes()?;
    let terminal = ratatui::init();
    let result = App::new(config, scenes, load_error.is_none()).run(terminal);
    ratatui::restore();
    result
}
