use std::path::PathBuf;

use clap::Parser;

use sitegen::site::build;
use sitegen::{Config, SiteError};

#[derive(Parser)]
#[command(name = "sitegen")]
#[command(about = "Build a static site from Markdown pages")]
struct Cli {
    /// Prefix for root-relative links (defaults to the config value, usually "/")
    base_path: Option<String>,

    /// Config file
    #[arg(short, long, default_value = "sitegen.toml")]
    config: PathBuf,

    /// Directory of static assets copied verbatim
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Directory of Markdown pages
    #[arg(long)]
    content: Option<PathBuf>,

    /// Output directory (removed and rebuilt on every run)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(short, long)]
    template: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), SiteError> {
    let mut site = Config::load(&cli.config)?.site;
    if let Some(base_path) = cli.base_path {
        site.base_path = base_path;
    }
    if let Some(dir) = cli.static_dir {
        site.static_dir = dir;
    }
    if let Some(dir) = cli.content {
        site.content_dir = dir;
    }
    if let Some(dir) = cli.output {
        site.output_dir = dir;
    }
    if let Some(path) = cli.template {
        site.template = path;
    }

    build(&site)
}
