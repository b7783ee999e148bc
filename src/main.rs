//! table-pager CLI
//!
//! Browse a JSON file of records as a paginated terminal table and print
//! the user's selection to stdout.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use table_pager::browser::TableBrowser;
use table_pager::console::TermConsole;
use table_pager::source::records_from_file;
use table_pager::types::{parse_color, Column, ColumnSchema, InputMode, Record};

#[derive(Parser)]
#[command(name = "table-pager")]
#[command(about = "Browse a JSON file of records as a paginated table")]
#[command(version)]
struct Cli {
    /// JSON file: an array of flat objects, one per record
    file: PathBuf,

    /// Columns to display, in order: "Name" or "Name:color"
    /// (default: the keys of the first record)
    #[arg(long, value_delimiter = ',')]
    columns: Option<Vec<String>>,

    /// Records per page
    #[arg(long, default_value_t = 5)]
    page_size: usize,

    /// Restrict input to indices 0..N plus the control tokens
    #[arg(long, value_name = "N")]
    strict: Option<usize>,

    /// Banner line shown above each page
    #[arg(long)]
    banner: Option<String>,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    if !std::io::stdin().is_terminal() {
        return Err("stdin is not a terminal; table-pager is interactive".to_string());
    }

    let records = records_from_file(&cli.file).map_err(|e| e.to_string())?;

    let schema = match &cli.columns {
        Some(specs) => parse_column_specs(specs)?,
        None => infer_schema(&records),
    };

    if schema.is_empty() {
        return Err("no columns to display (empty record file and no --columns)".to_string());
    }

    let console = match cli.banner {
        Some(banner) => TermConsole::with_banner(banner),
        None => TermConsole::new(),
    };

    let mut browser = TableBrowser::new(console);
    browser.configure_columns(schema);
    browser.set_page_size(cli.page_size);
    for record in records {
        browser.append(record);
    }

    let mode = match cli.strict {
        Some(max_index) => InputMode::Strict { max_index },
        None => InputMode::FreeForm,
    };

    // No upstream search pipeline in the standalone CLI.
    let last = browser.run(mode, None).map_err(|e| e.to_string())?;

    if !last.eq_ignore_ascii_case("q") {
        println!("{last}");
    }

    Ok(())
}

/// Parse "Name" / "Name:color" column specs.
fn parse_column_specs(specs: &[String]) -> Result<ColumnSchema, String> {
    specs
        .iter()
        .map(|spec| match spec.split_once(':') {
            None => Ok(Column::new(spec.as_str())),
            Some((name, color_name)) => {
                let color = parse_color(color_name)
                    .ok_or_else(|| format!("unknown color {:?} in column {:?}", color_name, spec))?;
                Ok(Column::with_color(name, color))
            }
        })
        .collect()
}

/// Without --columns, display the keys of the first record.
fn infer_schema(records: &[Record]) -> ColumnSchema {
    match records.first() {
        Some(first) => first.keys().map(Column::new).collect(),
        None => ColumnSchema::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
