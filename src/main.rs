//! Page Title CLI
//!
//! Usage:
//!   page-title [OPTIONS] --controller <PATH> --action <NAME>
//!
//! Options:
//!   -c, --config <FILE>     Configuration file (TOML format)
//!   -t, --catalog <FILE>    Translation catalog (TOML format)
//!       --title <TEXT>      Set the title explicitly instead of looking it up
//!   -f, --format <FORMAT>   Registered alias name, otherwise a template
//!       --no-format         Print the raw title
//!   -h, --help              Print help

use std::path::PathBuf;

use clap::Parser;

use page_title::config::FormatSetting;
use page_title::{
    Catalog, NoTranslations, PageTitle, RequestContext, TitleConfig, TitleOptions, Translator,
};

#[derive(Parser)]
#[command(name = "page-title")]
#[command(about = "Render a page title from translations and format aliases")]
struct Cli {
    /// Controller path, e.g. admin/account
    #[arg(long)]
    controller: String,

    /// Action name, e.g. show
    #[arg(long)]
    action: String,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Translation catalog (TOML format)
    #[arg(short = 't', long)]
    catalog: Option<PathBuf>,

    /// Title to set instead of looking one up
    #[arg(long)]
    title: Option<String>,

    /// Registered alias name, otherwise a template (static text allowed)
    #[arg(short, long, conflicts_with = "no_format")]
    format: Option<String>,

    /// Print the raw title without formatting
    #[arg(long)]
    no_format: bool,

    /// Application name
    #[arg(long)]
    app: Option<String>,

    /// Fallback title text
    #[arg(long, conflicts_with = "default_key")]
    default: Option<String>,

    /// Translation key of the fallback title
    #[arg(long)]
    default_key: Option<String>,

    /// Extra format alias, NAME=TEMPLATE (repeatable)
    #[arg(long = "alias", value_parser = parse_alias)]
    aliases: Vec<(String, String)>,
}

fn parse_alias(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, template)) if !name.is_empty() => {
            Ok((name.to_string(), template.to_string()))
        }
        _ => Err(format!("expected NAME=TEMPLATE, got '{}'", s)),
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => match TitleConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => TitleConfig::default(),
    };
    for (name, template) in &cli.aliases {
        config.formats.insert(name.clone(), template.clone());
    }
    let registry = config.build();

    let catalog = match &cli.catalog {
        Some(path) => match Catalog::from_file(path) {
            Ok(c) => Some(c),
            Err(e) => {
                eprintln!("Error loading catalog '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => None,
    };
    let translator: &dyn Translator = match &catalog {
        Some(catalog) => catalog,
        None => &NoTranslations,
    };

    let mut options = TitleOptions::new();
    if cli.no_format {
        options = options.without_format();
    } else if let Some(format) = &cli.format {
        let format = FormatSetting::Named(format.clone()).to_format_ref(registry.formats());
        options = options.with_format(format);
    }
    if let Some(app) = cli.app {
        options = options.with_app(app);
    }
    if let Some(default) = cli.default {
        options = options.with_default(default);
    }
    if let Some(key) = cli.default_key {
        options = options.with_default_key(key);
    }

    let mut view = PageTitle::new(
        &registry,
        translator,
        RequestContext::new(cli.controller, cli.action),
    );
    if let Some(title) = cli.title {
        view.set_page_title(title);
    }

    println!("{}", view.page_title(&options));
}
