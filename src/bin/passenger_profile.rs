use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use passenger_profiles::catalog::{
    embedded, CatalogSource, DirectoryCatalogSource, FileCatalogSource, StaticCatalogSource,
};
use passenger_profiles::config::{self, AppConfig};
use passenger_profiles::i18n::{translate, LANGUAGE};
use passenger_profiles::preferences::FilePreferenceStore;
use passenger_profiles::view::{
    render_html, render_text, Gesture, PassengerRef, ProfileCard, ProfileSession, Route,
};

#[derive(Parser)]
#[command(name = "passenger-profile")]
#[command(about = "Browse localized passenger profiles")]
struct Cli {
    /// Catalog file (.json/.yaml) or directory of per-locale files
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Print cards as HTML instead of plain text
    #[arg(long, global = true)]
    html: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one passenger, by id or by path such as /passenger/3
    Show { target: String },
    /// Step to the passenger after ID (wraps around)
    Next { id: u32 },
    /// Step to the passenger before ID (wraps around)
    Prev { id: u32 },
    /// List the locales the catalog offers
    Locales,
    /// Change and remember the preferred locale
    SetLocale { code: String },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let settings = config::load_or_default()?;
    let store = FilePreferenceStore::open_default()?;
    let source = catalog_source(cli.catalog.as_deref(), &settings)?;
    let mut session = ProfileSession::new(store, settings);
    session.load_catalog(source.as_ref())?;

    match cli.command {
        Commands::Show { target } => {
            let route = if target.starts_with('/') {
                Route::parse(&target)
            } else {
                Route::Passenger(PassengerRef::parse(&target))
            };
            session.open(&route);
            print_card(&session, cli.html);
        }
        Commands::Next { id } => step(&mut session, id, Gesture::NextClick, cli.html),
        Commands::Prev { id } => step(&mut session, id, Gesture::PreviousClick, cli.html),
        Commands::Locales => {
            let current = session.locale().clone();
            println!("{}:", translate(LANGUAGE, current.as_str()));
            for code in session.supported_locales() {
                let marker = if code == current { "*" } else { " " };
                println!("{marker} {code}");
            }
        }
        Commands::SetLocale { code } => {
            session.change_locale(&code)?;
            println!("{}: {}", translate(LANGUAGE, &code), session.locale());
        }
    }
    Ok(())
}

fn catalog_source(
    flag: Option<&Path>,
    settings: &AppConfig,
) -> Result<Box<dyn CatalogSource>> {
    let Some(path) = flag.or(settings.catalog_path.as_deref()) else {
        return Ok(Box::new(StaticCatalogSource::new(embedded()?)));
    };
    if path.is_dir() {
        Ok(Box::new(DirectoryCatalogSource::new(path)))
    } else {
        Ok(Box::new(FileCatalogSource::new(path)))
    }
}

fn step(session: &mut ProfileSession<FilePreferenceStore>, id: u32, gesture: Gesture, html: bool) {
    session.request(id);
    if let Some(target) = session.gesture(gesture) {
        println!("-> {}", target.path);
    }
    print_card(session, html);
}

fn print_card(session: &ProfileSession<FilePreferenceStore>, html: bool) {
    let Some(card) = session.card() else {
        return;
    };
    let rendered = if html {
        render_html(&card)
    } else {
        render_text(&card)
    };
    print!("{rendered}");
    if let ProfileCard::Empty(_) = card {
        eprintln!("locale {} has no passengers", session.locale());
    }
}
