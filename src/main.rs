use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use loremgen::config::Settings;
use loremgen::generator::{ContentType, LoremGenerator, TextGenerator, UnitType};
use loremgen::output::{download_file_name, write_text};

#[derive(Parser)]
#[command(name = "loremgen", version, about = "Placeholder text generator")]
struct Cli {
    #[arg(help = "How many units to generate (clamped to 1-100)", allow_negative_numbers = true)]
    count: Option<i64>,

    #[arg(short, long, help = "Unit: words, sentences or paragraphs")]
    unit: Option<String>,

    #[arg(short = 't', long = "type", help = "Content type: lorem, hipster, tech or startup")]
    content_type: Option<String>,

    #[arg(long, overrides_with = "no_html", help = "Wrap paragraphs in <p> tags")]
    html: bool,

    #[arg(long, overrides_with = "html", help = "Do not wrap paragraphs in <p> tags")]
    no_html: bool,

    #[arg(short, long, help = "Write the text to this file")]
    output: Option<PathBuf>,

    #[arg(short, long, help = "Write the text to lorem-ipsum-<unit>-<count>.txt")]
    download: bool,

    #[arg(long, help = "Do not remember these settings for the next run")]
    no_save: bool,

    #[arg(long, help = "List the available content types and exit")]
    list_types: bool,

    #[arg(short, long, help = "Log generation details to stderr")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list_types {
        for content_type in ContentType::ALL {
            println!("{:<10} {}", content_type.as_str(), content_type.label());
        }
        return Ok(());
    }

    let settings_path = Settings::settings_path();
    let (mut settings, settings_loaded) = load_settings(&settings_path);
    apply_overrides(&mut settings, &cli);
    settings.normalize();

    let request = settings.request();
    tracing::info!("{request}");

    let mut generator = LoremGenerator::default();
    let text = generator.generate(&request);
    println!("{text}");

    let target = match (&cli.output, cli.download) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(PathBuf::from(download_file_name(&request))),
        (None, false) => None,
    };
    if let Some(path) = target {
        write_text(&path, &text).with_context(|| format!("saving {}", path.display()))?;
        eprintln!("Saved to {}", path.display());
    }

    if should_save(&cli, settings_loaded) {
        if let Err(err) = settings.save_to(&settings_path) {
            tracing::warn!("{err:#}");
        }
    }

    Ok(())
}

/// Falls back to defaults when the file cannot be read or parsed. The flag is
/// false in that case so the broken file is not overwritten.
fn load_settings(path: &Path) -> (Settings, bool) {
    match Settings::load_from(path) {
        Ok(settings) => (settings, true),
        Err(err) => {
            tracing::warn!("{err:#}, using defaults and leaving the file untouched");
            (Settings::default(), false)
        }
    }
}

fn should_save(cli: &Cli, settings_loaded: bool) -> bool {
    settings_loaded && !cli.no_save
}

fn apply_overrides(settings: &mut Settings, cli: &Cli) {
    if let Some(count) = cli.count {
        settings.count = count;
    }
    if let Some(unit) = &cli.unit {
        settings.unit = UnitType::from_key(unit);
    }
    if let Some(content_type) = &cli.content_type {
        settings.content_type = ContentType::from_key(content_type);
    }
    if cli.html {
        settings.include_html = true;
    } else if cli.no_html {
        settings.include_html = false;
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "loremgen=debug"
    } else {
        "loremgen=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
