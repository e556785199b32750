// traceplay: step-by-step algorithm playback in the terminal

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use traceplay::config::AppConfig;
use traceplay::logging;
use traceplay::producer::input::{parse_sequence, parse_target, random_sequence};
use traceplay::producer::{build_trace, Algorithm, TraceRequest};
use traceplay::ui::App;

#[derive(Parser)]
#[command(name = "traceplay")]
#[command(about = "Step through bubble sort, linear search and recursive factorial", long_about = None)]
struct Args {
    /// Algorithm to trace
    #[arg(short, long, value_enum, default_value_t = Algorithm::BubbleSort)]
    algorithm: Algorithm,

    /// Comma or space separated values (for factorial: the argument n)
    #[arg(short, long)]
    input: Option<String>,

    /// Value to look for (linear search)
    #[arg(short, long)]
    target: Option<String>,

    /// Generate this many random values instead of --input
    #[arg(long, conflicts_with = "input")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Delay between steps while playing, in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the narration instead of opening the TUI
    #[arg(long)]
    print: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(ms) = args.interval_ms {
        config.tick_interval_ms = ms;
        config.validate()?;
    }
    logging::init(&config.log_file, &config.log_level)
        .map_err(|e| e as Box<dyn std::error::Error>)?;
    info!(algorithm = ?args.algorithm, "starting traceplay");

    let mut seed = args.seed;
    let input_text = match (args.random, args.input) {
        (Some(size), _) => {
            let values = random_sequence(size, seed, &config.limits)?;
            seed = seed.wrapping_add(1);
            values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        }
        (None, Some(text)) => text,
        (None, None) if args.algorithm == Algorithm::Factorial => "5".to_string(),
        (None, None) => config.default_input.clone(),
    };
    let target_text = args
        .target
        .unwrap_or_else(|| config.default_target.to_string());

    if args.print {
        let mut request = TraceRequest::new(args.algorithm, parse_sequence(&input_text)?);
        if args.algorithm.needs_target() {
            request = request.with_target(parse_target(&target_text)?);
        }
        let trace = build_trace(&request, &config.limits)?;
        for (i, step) in trace.iter().enumerate() {
            println!("{:>4}  {}", i + 1, step.narration);
        }
        return Ok(());
    }

    let mut app = match App::new(config, args.algorithm, input_text, target_text, seed) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "terminal UI failed");
        eprintln!("Error: {:?}", err);
    }
    info!("exiting");

    Ok(())
}
