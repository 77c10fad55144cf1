use std::path::PathBuf;

use clap::Parser;

use mdsite::Config;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Generate a static HTML site from a tree of Markdown files")]
struct Cli {
    /// Base path the site is served under, e.g. "/myblog/"
    base_path: Option<String>,

    /// Site configuration file
    #[arg(short, long, default_value = "mdsite.toml")]
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let mut config = Config::load(&cli.config);
    if let Some(base_path) = cli.base_path {
        config.base_path = base_path;
    }

    if let Err(e) = mdsite::build_site(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("Site written to {}", config.output_dir.display());
}
