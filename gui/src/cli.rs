use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
pub struct Cli {
    /// Use this Hugging Face key instead of the stored one
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Where saved images go, defaults to ./outputs
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Path of the json config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
