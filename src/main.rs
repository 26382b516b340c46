// cinspect: lexical, syntactic and semantic analysis of C-like snippets

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use cinspect::config::{AnalyzerConfig, DEFAULT_MAX_NESTING_DEPTH, LOG_ENV_VAR};
use cinspect::error::CliError;
use cinspect::output::{render_json, render_text, OutputFormat};
use cinspect::ui::App;
use cinspect::{analyze_source_with_config, AnalysisReport};

/// Analyze a C-like source snippet and report tokens, diagnostics and symbols
#[derive(Parser, Debug)]
#[command(name = "cinspect", version, about, long_about = None)]
struct Cli {
    /// Source file to analyze; reads stdin when absent or `-`
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output format (defaults to tui for a file on a terminal, text otherwise)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Deepest parenthesis/block nesting the parser accepts
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_NESTING_DEPTH)]
    max_depth: usize,

    /// Log stage summaries to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(report) if report.is_clean() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<AnalysisReport, CliError> {
    let path = cli.file.as_deref().filter(|p| *p != Path::new("-"));
    let source = read_source(path)?;

    let config = AnalyzerConfig::new().with_max_nesting_depth(cli.max_depth);
    let report = analyze_source_with_config(&source, &config);

    let format = cli.format.unwrap_or_else(|| {
        if path.is_some() && io::stdout().is_terminal() {
            OutputFormat::Tui
        } else {
            OutputFormat::Text
        }
    });

    match format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => println!("{}", render_json(&report)?),
        OutputFormat::Tui => return run_tui(report, source),
    }
    Ok(report)
}

fn read_source(path: Option<&Path>) -> Result<String, CliError> {
    let source = match path {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if source.is_empty() {
        return Err(CliError::EmptyInput);
    }
    Ok(source)
}

fn run_tui(report: AnalysisReport, source: String) -> Result<AnalysisReport, CliError> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(report, source);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(app.report)
}
