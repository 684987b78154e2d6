use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use engine::{
    config::{default_config_path, load_config},
    output::DEFAULT_OUTPUT_DIR,
};
use image_generator::{APP_TITLE, Gui, cli::Cli};

pub fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let mut config = load_config(&config_path)?;
    if let Some(key) = cli.api_key {
        config.get_or_insert_default().api_key = key;
    }
    let output_dir = cli
        .output_dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    iced::application(
        move || Gui::new(config.clone(), config_path.clone(), output_dir.clone()),
        Gui::update,
        Gui::view,
    )
    .title(APP_TITLE)
    .run()?;
    Ok(())
}
