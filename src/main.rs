use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lrutrace::common::config::{SNAPSHOT_EXPORT_FILE, TRACE_EXPORT_FILE};
use lrutrace::export;
use lrutrace::input::parse_capacity;
use lrutrace::render::{render_stats, StepView};
use lrutrace::SimulationSession;

/// Step-by-step LRU page replacement visualizer
#[derive(Parser)]
#[command(name = "lrutrace", version)]
#[command(about = "Step through the LRU page replacement algorithm", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Comma-separated page references, e.g. "7,0,1,2,0,3"
    #[arg(short, long)]
    refs: String,

    /// Number of frames (values below 1 fall back to 3)
    #[arg(short, long, default_value = "3", allow_hyphen_values = true)]
    frames: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every step of the trace, then the statistics
    Run {
        #[command(flatten)]
        input: InputArgs,

        /// Also write the trace as JSON to this file
        #[arg(long = "export", value_name = "FILE")]
        export_path: Option<PathBuf>,
    },
    /// Play the trace back step by step
    Play {
        #[command(flatten)]
        input: InputArgs,

        /// Milliseconds between steps
        #[arg(long, default_value_t = 600)]
        period_ms: u64,
    },
    /// Step through the trace interactively (commands read from stdin)
    Step {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print only the statistics table
    Stats {
        #[command(flatten)]
        input: InputArgs,
    },
}

const STEP_HELP: &str = "commands: n(ext)  b(ack)  g(oto) <step>  s(napshot) [file]  e(xport) [file]  q(uit)";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run { input, export_path } => {
            let session = open_session(&input, None)?;
            print_all(&session)?;
            if let Some(path) = export_path {
                export::write_trace_json(session.trace(), &path)
                    .with_context(|| format!("failed to export trace to {}", path.display()))?;
                println!("Trace written to {}", path.display());
            }
        }
        Commands::Play { input, period_ms } => {
            let session = open_session(&input, Some(period_ms))?;
            play(session)?;
        }
        Commands::Step { input } => {
            let session = open_session(&input, None)?;
            step_interactive(session)?;
        }
        Commands::Stats { input } => {
            let session = open_session(&input, None)?;
            println!("{}", render_stats(&session.trace().stats()));
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open_session(input: &InputArgs, period_ms: Option<u64>) -> Result<SimulationSession> {
    let capacity = parse_capacity(&input.frames).unwrap_or_else(|| {
        warn!(frames = %input.frames, "frame count is not a number");
        0
    });

    let session = SimulationSession::from_input(&input.refs, capacity, period_ms)
        .context("failed to start simulation")?;

    for warning in session.warnings() {
        eprintln!("warning: {}", warning);
    }

    let trace = session.trace();
    let fingerprint = export::fingerprint(trace)?;
    info!(
        references = trace.len(),
        frames = trace.capacity(),
        faults = trace.total_faults(),
        fingerprint = %format!("{:08x}", fingerprint),
        "simulation ready"
    );

    Ok(session)
}

fn show_current(out: &mut impl Write, session: &SimulationSession) -> io::Result<()> {
    let trace = session.trace();
    match session.current() {
        Some(step) => writeln!(out, "{}\n", StepView::new(step, trace.capacity(), trace.len())),
        None => writeln!(out, "No page references to simulate.\n"),
    }
}

fn print_all(session: &SimulationSession) -> Result<()> {
    let trace = session.trace();
    let mut out = io::stdout().lock();

    if trace.is_empty() {
        writeln!(out, "No page references to simulate.\n")?;
    }
    for step in trace {
        writeln!(out, "{}\n", StepView::new(step, trace.capacity(), trace.len()))?;
    }
    writeln!(out, "{}", render_stats(&trace.stats()))?;
    Ok(())
}

fn play(mut session: SimulationSession) -> Result<()> {
    let mut out = io::stdout().lock();
    let period = session.playback().period();

    show_current(&mut out, &session)?;
    session.play();

    while session.is_playing() {
        out.flush()?;
        thread::sleep(period);
        if session.tick(period) > 0 {
            show_current(&mut out, &session)?;
        }
    }

    writeln!(out, "{}", render_stats(&session.trace().stats()))?;
    Ok(())
}

fn step_interactive(mut session: SimulationSession) -> Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    show_current(&mut out, &session)?;
    writeln!(out, "{}", STEP_HELP)?;
    out.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read command")?;
        let mut words = line.split_whitespace();

        match words.next() {
            None => continue,
            Some("n" | "next") => {
                if session.step_forward().is_none() {
                    writeln!(out, "Already at the last step.")?;
                }
            }
            Some("b" | "back") => {
                if session.step_back().is_none() {
                    writeln!(out, "Already at the first step.")?;
                }
            }
            Some("g" | "goto") => match words.next().and_then(|w| w.parse::<usize>().ok()) {
                // Steps are shown 1-based
                Some(n) if n >= 1 => {
                    if let Err(e) = session.seek(n - 1) {
                        writeln!(out, "{}", e)?;
                    }
                }
                _ => writeln!(out, "usage: g <step>")?,
            },
            Some("s" | "snapshot") => {
                let path = words.next().unwrap_or(SNAPSHOT_EXPORT_FILE);
                let step = match session.require_current() {
                    Ok(step) => step,
                    Err(e) => {
                        writeln!(out, "{}", e)?;
                        continue;
                    }
                };
                let trace = session.trace();
                let text = StepView::new(step, trace.capacity(), trace.len()).to_string();
                export::write_snapshot(&text, path)
                    .with_context(|| format!("failed to write snapshot to {}", path))?;
                writeln!(out, "Snapshot written to {}", path)?;
                continue;
            }
            Some("e" | "export") => {
                let path = words.next().unwrap_or(TRACE_EXPORT_FILE);
                export::write_trace_json(session.trace(), path)
                    .with_context(|| format!("failed to export trace to {}", path))?;
                writeln!(out, "Trace written to {}", path)?;
                continue;
            }
            Some("q" | "quit") => break,
            Some(_) => {
                writeln!(out, "{}", STEP_HELP)?;
                continue;
            }
        }

        show_current(&mut out, &session)?;
        out.flush()?;
    }

    Ok(())
}
