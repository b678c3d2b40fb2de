mod layout;
mod logging;
mod theme;
mod ui;
mod views;

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

use flota_core::config;
use flota_core::config::Config;
use flota_core::controller::InitOptions;
use flota_core::controller::NavigationController;
use flota_core::preferences::FilePreferenceStore;
use flota_core::preferences::MemoryPreferenceStore;
use flota_core::preferences::PreferenceKey;
use flota_core::preferences::PreferenceSnapshot;
use flota_core::preferences::PreferenceStore;
use flota_core::registry::nav_index_of;
use flota_core::registry::SECTION_REGISTRY;
use flota_core::routing;
use flota_core::routing::RouteTarget;
use flota_core::viewport;

/// Width assumed when the terminal size cannot be queried.
const FALLBACK_WIDTH: u16 = 120;

#[derive(Parser, Debug)]
#[command(name = "flota", version)]
#[command(about = "FlotaAdmin: fleet administration dashboard", long_about = None)]
struct Args {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Preference file, overriding the config
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Keep preferences in memory for this session only
    #[arg(long, global = true)]
    in_memory: bool,

    /// Log to stderr instead of the log file
    #[arg(long, global = true)]
    log_stderr: bool,

    /// Section to open, e.g. `vehicles`
    #[arg(long, value_name = "ID", conflicts_with = "route")]
    section: Option<String>,

    /// Path to open, e.g. `/flota-admin/maintenance` or `/login`
    #[arg(long, value_name = "PATH")]
    route: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the dashboard (the default)
    Ui,
    /// Show the stored preferences
    Prefs {
        #[arg(long)]
        json: bool,
    },
    /// Resolve a path the way `--route` does
    Route { path: String },
    /// List every section and whether it is in the menu
    Sections,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.log_stderr)?;

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(config::default_config_path);
    let config = Config::load(&config_path)?;
    tracing::debug!(path = %config_path.display(), "config loaded");

    match &args.command {
        None | Some(Command::Ui) => run_ui(&args, &config),
        Some(Command::Prefs { json }) => {
            let (store, description) = open_store(&args, &config);
            print_prefs(store.as_ref(), &description, *json)
        }
        Some(Command::Route { path }) => {
            print_route(path);
            Ok(())
        }
        Some(Command::Sections) => {
            print_sections();
            Ok(())
        }
    }
}

fn open_store(args: &Args, config: &Config) -> (Box<dyn PreferenceStore>, String) {
    if args.in_memory || config.storage.in_memory {
        return (Box::new(MemoryPreferenceStore::new()), "in memory".into());
    }
    let path = args
        .store
        .clone()
        .unwrap_or_else(|| config.preferences_path());
    match FilePreferenceStore::open(&path) {
        Ok(store) => (Box::new(store), path.display().to_string()),
        Err(err) => {
            tracing::warn!("cannot open preferences at {}: {err}", path.display());
            (
                Box::new(MemoryPreferenceStore::new()),
                format!("in memory ({} unavailable)", path.display()),
            )
        }
    }
}

fn run_ui(args: &Args, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let (store, description) = open_store(args, config);
    tracing::info!(store = %description, "preferences opened");

    let width = crossterm::terminal::size()
        .map(|(width, _)| width)
        .unwrap_or(FALLBACK_WIDTH);
    let viewport = viewport::classify(width, config.layout.mobile_breakpoint);

    let mut options = InitOptions::new(config.profile.to_user_profile())
        .with_viewport(viewport)
        .with_require_login(config.session.require_login);
    match args.route.as_deref().map(routing::resolve_path) {
        Some(RouteTarget::Login) => options = options.with_login_screen(),
        Some(target) => {
            if let Some(section) = target.section() {
                options = options.with_explicit_section(section.as_str());
            }
        }
        None => {
            if let Some(section) = &args.section {
                options = options.with_explicit_section(section.clone());
            }
        }
    }

    let mut nav = NavigationController::init(store, options);
    let settings = ui::ShellSettings {
        layout: config.layout.clone(),
        system_prefers_dark: theme::system_prefers_dark(&config.appearance),
    };
    let result = ui::run(&mut nav, &settings);
    nav.dispose();
    result
}

fn print_prefs(
    store: &dyn PreferenceStore,
    description: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let mut object = serde_json::Map::new();
        for key in PreferenceKey::ALL {
            let value = store
                .get(key)
                .map_or(serde_json::Value::Null, serde_json::Value::String);
            object.insert(key.storage_key().to_string(), value);
        }
        println!("{}", serde_json::to_string_pretty(&object)?);
        return Ok(());
    }

    let snapshot = PreferenceSnapshot::read(store);
    println!("store: {description}");
    for key in PreferenceKey::ALL {
        let raw = store.get(key).unwrap_or_else(|| "(unset)".to_string());
        let decoded = match key {
            PreferenceKey::LoggedIn => snapshot.logged_in.to_string(),
            PreferenceKey::ActiveSection => snapshot
                .active_section
                .map_or_else(|| "(default)".to_string(), |s| s.as_str().to_string()),
            PreferenceKey::SidebarCollapsed => snapshot.sidebar_collapsed.to_string(),
            PreferenceKey::ColorMode => snapshot.color_mode.as_str().to_string(),
        };
        println!("  {:<26} {raw:<16} -> {decoded}", key.storage_key());
    }
    Ok(())
}

fn print_route(path: &str) {
    match routing::resolve_path(path) {
        RouteTarget::Login => println!("login"),
        RouteTarget::Section(section) => {
            println!("section {} ({})", section.as_str(), routing::path_for(section));
        }
        RouteTarget::Redirect(section) => {
            println!("redirect -> {}", routing::path_for(section));
        }
    }
}

fn print_sections() {
    for descriptor in SECTION_REGISTRY.iter() {
        let menu = if nav_index_of(descriptor.section).is_some() {
            "menu"
        } else {
            "-"
        };
        println!(
            "{:<18} {:<12} {:<5} {}",
            descriptor.section.as_str(),
            descriptor.kind.label(),
            menu,
            descriptor.title
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn section_and_route_conflict() {
        let parsed = Args::try_parse_from(["flota", "--section", "vehicles", "--route", "/login"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn bare_invocation_runs_the_ui() {
        let args = Args::try_parse_from(["flota", "--in-memory"]).expect("parse");
        assert!(args.command.is_none());
        assert!(args.in_memory);
    }

    #[test]
    fn in_memory_flag_skips_the_file() {
        let dir = tempfile::tempdir().expect("tmpdir");
        let path = dir.path().join("prefs.json");
        let args = Args::try_parse_from([
            "flota",
            "--in-memory",
            "--store",
            path.to_str().expect("utf8 path"),
            "prefs",
        ])
        .expect("parse");
        let (_, description) = open_store(&args, &Config::default());
        assert_eq!(description, "in memory");
        assert!(!path.exists());
    }

    #[test]
    fn store_flag_overrides_config_path() {
        let dir = tempfile::tempdir().expect("tmpdir");
        let path = dir.path().join("prefs.json");
        let args = Args::try_parse_from([
            "flota",
            "--store",
            path.to_str().expect("utf8 path"),
            "prefs",
        ])
        .expect("parse");
        let (mut store, description) = open_store(&args, &Config::default());
        assert_eq!(description, path.display().to_string());
        store.set(PreferenceKey::ActiveSection, "mileage");
        assert!(path.exists());
    }
}
