use clap::Parser;
use mazestep::app::{App, Config, logging};

fn main() -> std::io::Result<()> {
    let config = Config::parse();
    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = logging::init_file_logging(config.log_file.as_deref(), config.debug);
    tracing::info!("Starting with {:?}", config);

    // Fail before touching the terminal if the dimensions are invalid
    config.build_maze()?;

    let mut stdout = std::io::stdout();
    App::setup_terminal(&mut stdout)?;
    let result = App::new(config).run();
    App::restore_terminal(&mut stdout)?;
    result
}
