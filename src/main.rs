// simd-viewer: Interactive SIMD Register Lane Inspector

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use simd_viewer::demo::Catalogue;
use simd_viewer::ui::App;
use simd_viewer::viewer::{Granularity, LayoutMetrics, RenderFlags, Viewer};

/// Render SIMD registers lane by lane in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario to open with (see --list)
    #[arg(short, long, default_value = "unpack")]
    scenario: String,

    /// List the available scenarios and exit
    #[arg(long)]
    list: bool,

    /// Frame rate cap
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Show integer lanes in hexadecimal by default
    #[arg(long)]
    hex: bool,

    /// Initial lane grouping in bytes: 0 (off), 1, 2, 4, 8, 16 or 32
    #[arg(short, long, default_value = "0")]
    granularity: Granularity,

    /// Terminal columns per register byte
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(i32).range(3..=16))]
    cell_width: i32,

    /// Write log output to this file (filtered by RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let catalogue = Catalogue::builtin();

    if args.list {
        for scenario in catalogue.iter() {
            println!("{:<12} {}", scenario.name, scenario.description);
        }
        return Ok(());
    }

    // The alternate screen swallows stderr, so logs only go to a file
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let Some(start) = catalogue.index_of(&args.scenario) else {
        eprintln!("Error: Unknown scenario '{}'", args.scenario);
        eprintln!();
        eprintln!("Available scenarios: {}", catalogue.names().join(", "));
        std::process::exit(1);
    };

    let metrics = LayoutMetrics {
        cell_width: args.cell_width,
        ..LayoutMetrics::default()
    };
    let mut viewer = Viewer::with_metrics(metrics);
    if args.hex {
        viewer.set_default_flags(RenderFlags::HEX);
    }
    viewer.set_granularity(args.granularity);

    info!(
        "starting on scenario {} at {} fps, cell width {}, grouping {}",
        args.scenario, args.fps, args.cell_width, args.granularity
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(catalogue, start, viewer, args.fps);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
