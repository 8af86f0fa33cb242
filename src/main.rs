//! Repo Finder: search GitHub repositories from the desktop
//!
//! Usage:
//!   repofinder           - Open the search page
//!   repofinder about     - Open the about page
//!   repofinder help      - Show help

mod app;
mod config;
mod github;
mod routes;
mod search;
mod ui;

use app::RepoFinder;
use config::Config;
use iced::{window, Size};
use routes::Route;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let args: Vec<String> = env::args().collect();
    let route_arg = args.get(1).map(String::as_str).unwrap_or("/");

    if matches!(route_arg, "help" | "--help" | "-h") {
        print_help();
        return Ok(());
    }

    let initial = Route::parse(route_arg);
    let config = Config::load();

    tracing::info!("Starting Repo Finder ({})", config.api_base_url);

    iced::application(RepoFinder::title, RepoFinder::update, RepoFinder::view)
        .subscription(RepoFinder::subscription)
        .theme(RepoFinder::theme)
        .window(window::Settings {
            size: Size::new(config.window.width, config.window.height),
            min_size: Some(Size::new(360.0, 480.0)),
            position: window::Position::Centered,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || RepoFinder::new(&config, initial))
}

fn print_help() {
    println!("Repo Finder - Find the perfect GitHub repo fast\n");
    println!("Usage: repofinder [page]\n");
    println!("Pages:");
    println!("  /, home       Search GitHub repositories (default)");
    println!("  /about, about About Repo Finder");
    println!("  help          Show this help message");
    if let Some(path) = Config::default_path() {
        println!("\nConfig file: {}", path.display());
    }
}
