// foldstep: step-through viewer for origami tessellation patterns

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, Level};

use foldstep::catalog::{PatternCatalog, DEFAULT_PATTERN_ID};
use foldstep::render::{RendererKind, SceneRenderer};
use foldstep::ui::App;
use foldstep::viewer::StepViewer;

#[derive(Parser)]
#[command(
    name = "foldstep",
    version,
    about = "Step through origami tessellation folding instructions"
)]
struct Cli {
    /// Pattern to open (unknown ids open the default pattern)
    #[arg(default_value = DEFAULT_PATTERN_ID)]
    pattern: String,

    /// Load patterns from a JSON catalog instead of the built-in set
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Preview renderer
    #[arg(long, value_enum, default_value_t = RendererKind::Model)]
    renderer: RendererKind,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the catalog and exit
    #[arg(long)]
    list: bool,
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .init();
    Ok(())
}

fn print_catalog(catalog: &PatternCatalog) {
    let default_id = catalog.default_record().id();
    for record in catalog.iter() {
        let marker = if record.id() == default_id { "*" } else { " " };
        println!(
            "{} {:<16} {:<13} {}",
            marker,
            record.id(),
            record.difficulty(),
            record.name()
        );
        if !record.summary().is_empty() {
            println!("  {:<16} {}", "", record.summary());
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let catalog = match &cli.catalog {
        Some(path) => PatternCatalog::from_path(path)?,
        None => PatternCatalog::builtin()?,
    };

    if cli.list {
        print_catalog(&catalog);
        return Ok(());
    }

    if !catalog.contains(&cli.pattern) {
        eprintln!(
            "Unknown pattern '{}', opening '{}' instead",
            cli.pattern,
            catalog.default_record().id()
        );
    }

    let viewer = StepViewer::new(
        &catalog,
        SceneRenderer::from_kind(cli.renderer),
        &cli.pattern,
    );
    info!(pattern = viewer.record().id(), renderer = ?cli.renderer, "starting viewer");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(viewer);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
