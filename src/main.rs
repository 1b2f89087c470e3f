use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use talkdocs::core::catalog::{Catalog, CatalogEntry};
use talkdocs::core::config::{self, CliOverrides, DocsConfig};
use talkdocs::core::navigation::Tab;
use talkdocs::core::search::SearchState;
use talkdocs::tui;

/// Column width for `--search` plain-text output.
const REPORT_WIDTH: usize = 80;

#[derive(Parser)]
#[command(name = "talkdocs", about = "Browse the AfricasTalking API docs in the terminal")]
struct Args {
    /// Tab to open on start (documentation, api-reference, changelog)
    #[arg(long, value_parser = parse_tab)]
    tab: Option<Tab>,

    /// Documentation section to open on start (e.g. send-sms)
    #[arg(long)]
    section: Option<String>,

    /// Start in light mode
    #[arg(long)]
    light: bool,

    /// Print the results for QUERY and exit instead of opening the TUI
    #[arg(long, value_name = "QUERY")]
    search: Option<String>,

    /// With --search, print the results as JSON
    #[arg(long, requires = "search")]
    json: bool,

    /// Read config from PATH instead of ~/.talkdocs/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn parse_tab(s: &str) -> Result<Tab, String> {
    s.parse::<Tab>().map_err(|e| e.to_string())
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to talkdocs.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("talkdocs.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let catalog = Arc::new(Catalog::builtin());

    if let Some(query) = args.search.as_deref() {
        log::info!("Non-interactive search: {:?}", query);
        let mut search = SearchState::new(catalog);
        search.set_query(query);
        let output = if args.json {
            serde_json::to_string_pretty(&search.results()).map_err(std::io::Error::other)?
        } else {
            format_results(&search.results(), REPORT_WIDTH)
        };
        println!("{output}");
        return Ok(());
    }

    let loaded = match args.config.as_deref() {
        Some(path) => config::load_config_from(path, false),
        None => config::load_config(),
    };
    let file_config = loaded.unwrap_or_else(|e| {
        log::error!("{}, using defaults", e);
        DocsConfig::default()
    });
    let cli = CliOverrides {
        tab: args.tab,
        section: args.section,
        light: args.light,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!(
        "talkdocs starting: tab={}, section={}, theme={}",
        resolved.tab,
        resolved.landing_section,
        if resolved.dark_mode { "dark" } else { "light" }
    );

    tui::run(&resolved, catalog)
}

/// Plain-text rendering of search results: title and category on one line,
/// the description wrapped and indented below.
fn format_results(results: &[&CatalogEntry], width: usize) -> String {
    if results.is_empty() {
        return "No results found".to_string();
    }
    let indent = "    ";
    let options = textwrap::Options::new(width)
        .initial_indent(indent)
        .subsequent_indent(indent);
    results
        .iter()
        .map(|entry| {
            format!(
                "{} [{}]\n{}\n    -> {}",
                entry.title,
                entry.category,
                textwrap::fill(&entry.description, &options),
                entry.target
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_results_lists_entries() {
        let catalog = Arc::new(Catalog::builtin());
        let mut search = SearchState::new(catalog);
        search.set_query("voice");
        let text = format_results(&search.results(), 40);
        assert!(text.starts_with("Voice API [API Reference]"));
        assert!(text.contains("    Make and receive voice calls"));
        assert!(text.contains("-> /api/voice"));
    }

    #[test]
    fn test_format_results_wraps_descriptions() {
        let catalog = Arc::new(Catalog::builtin());
        let search = SearchState::new(catalog);
        let text = format_results(&search.results(), 20);
        assert!(text.lines().all(|l| l.chars().count() <= 40));
        assert!(text.contains("Send SMS [Documentation]"));
    }

    #[test]
    fn test_format_no_results() {
        assert_eq!(format_results(&[], 80), "No results found");
    }

    #[test]
    fn test_args_reject_unknown_tab() {
        assert!(Args::try_parse_from(["talkdocs", "--tab", "bogus"]).is_err());
        let args = Args::try_parse_from(["talkdocs", "--tab", "changelog"]).unwrap();
        assert_eq!(args.tab, Some(Tab::Changelog));
    }

    #[test]
    fn test_json_requires_search() {
        assert!(Args::try_parse_from(["talkdocs", "--json"]).is_err());
        assert!(Args::try_parse_from(["talkdocs", "--search", "sms", "--json"]).is_ok());
    }
}
