use std::{path::PathBuf, time::Duration};

use clap::Parser;
use color_eyre::Result;
use engine::{
    Credential, ImgModBox,
    config::{default_config_path, load_config},
    image_model::{HuggingFace, Model},
    output::{DEFAULT_OUTPUT_DIR, save_image},
    session::Session,
    size::ImageSize,
    style::Style,
};

/// Generates one image from a prompt and saves it as PNG.
///
/// Without --api-key (or HF_API_KEY) the key stored by the desktop app is used.
#[derive(clap::Parser)]
struct Args {
    prompt: String,

    #[arg(short, long, value_enum, default_value_t)]
    style: Style,

    /// 512x512 or 768x768
    #[arg(long, default_value_t)]
    size: ImageSize,

    #[arg(short, long, value_enum, default_value_t)]
    model: Model,

    #[arg(short = 'k', long, env = "HF_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();
    let Args {
        prompt,
        style,
        size,
        model,
        api_key,
        output_dir,
        timeout_secs,
    } = Args::parse();

    let credential = match api_key {
        Some(key) => Credential::new(key),
        None => load_config(&default_config_path()?)?
            .unwrap_or_default()
            .credential(),
    };

    let mut session = Session::new(credential.clone());
    let request = session.start(&prompt, style, size, model)?;
    let client: ImgModBox =
        Box::new(HuggingFace::new(credential).with_timeout(Duration::from_secs(timeout_secs)));

    println!("Generating image...");
    let result = client.get_image(&request).await;
    let image = session.finish(result)?;

    let path = save_image(image, &output_dir)?;
    println!(
        "Saved {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );

    Ok(())
}
