//! Wayfarer - Main entry point
//!
//! Parses the CLI, loads the rule table, and either runs the TUI
//! questionnaire or resolves a recommendation headlessly.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, error, info};

use wayfarer::app::App;
use wayfarer::cli::{Cli, Commands};
use wayfarer::collector::ChoiceSet;
use wayfarer::logic::resolver;
use wayfarer::rules::RuleTable;
use wayfarer::types::{ActivityPreference, BudgetLevel, QuestionKey, TerrainPreference};

/// Initialize tracing with RUST_LOG support, writing to stderr so log
/// output never corrupts the TUI.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("wayfarer starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    let rules = load_rules(cli.rules.as_deref())?;

    match cli.command {
        Some(Commands::Resolve {
            terrain,
            activity,
            budget,
        }) => run_headless_resolve(&rules, &terrain, &activity, &budget)?,
        Some(Commands::Validate { rules_file }) => {
            info!("validating rules file: {:?}", rules_file);
            match RuleTable::load_from_file(&rules_file).and_then(|t| {
                t.validate()?;
                Ok(t)
            }) {
                Ok(table) => {
                    println!(
                        "✓ Rules file is valid: {} rules, fallback present",
                        table.rules.len()
                    );
                }
                Err(e) => {
                    error!("rules validation failed: {:#}", e);
                    eprintln!("✗ Rules validation failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        None => run_tui(rules)?,
    }

    Ok(())
}

/// Load the rule table from the given path, or fall back to the built-in
/// table. A loaded table is validated before use.
fn load_rules(path: Option<&Path>) -> Result<RuleTable, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            info!("loading rules from {:?}", path);
            let table = RuleTable::load_from_file(path)?;
            table.validate()?;
            Ok(table)
        }
        None => Ok(RuleTable::default()),
    }
}

/// Resolve a recommendation from CLI arguments without the TUI.
fn run_headless_resolve(
    rules: &RuleTable,
    terrain: &str,
    activity: &str,
    budget: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let terrain = parse_or_exit::<TerrainPreference>(QuestionKey::Terrain, terrain);
    let activity = parse_or_exit::<ActivityPreference>(QuestionKey::Activity, activity);
    let budget = parse_or_exit::<BudgetLevel>(QuestionKey::Budget, budget);

    let choices = ChoiceSet::new(terrain, activity, budget);
    let recommendation = resolver::resolve(&choices, rules)?;
    println!("{}", recommendation);
    Ok(())
}

/// Parse an enum value or exit with the valid options listed.
fn parse_or_exit<T: FromStr>(key: QuestionKey, raw: &str) -> T {
    T::from_str(raw).unwrap_or_else(|_| {
        eprintln!("✗ '{}' is not a valid {} value", raw, key);
        eprintln!("  Valid options: {}", key.options().join(", "));
        std::process::exit(1);
    })
}

/// Run the interactive TUI questionnaire.
fn run_tui(rules: RuleTable) -> Result<(), Box<dyn std::error::Error>> {
    debug!("initializing terminal for TUI mode");

    enable_raw_mode()?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(rules);
    let result = app.run(&mut terminal);

    // Always attempt cleanup, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result.map_err(Into::into)
}
