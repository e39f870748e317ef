use list_store::{logger, ListStore};
use log::info;
use shopping::{cli::Arguments, screen::Screen, term, AppError};

fn main() -> Result<(), AppError> {
    let config = Arguments::from_with_config()?;
    let _logger = logger::init_logger(&config.log_level, &config.log_dir, "shopping")?;

    info!("[🛒] Starting with {} id policy", config.id_policy);

    let mut store = ListStore::with_policy(config.id_policy);
    Screen::new().run(&mut store)?;

    term::reset()?;
    Ok(())
}
