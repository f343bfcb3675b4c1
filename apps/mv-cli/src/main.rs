use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use mv_app::{AppError, AppResult, DashboardSession, StepOutcome, check_time_step, config_service};
use mv_config::Preset;
use tracing::info;

#[derive(Parser)]
#[command(name = "mv-cli")]
#[command(about = "MotorView CLI - motor telemetry dashboard tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    Rotary,
    Linear,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Rotary => Preset::Rotary,
            PresetArg::Linear => Preset::Linear,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a display config file (YAML or JSON)
    Validate {
        /// Path to the config file
        config_path: PathBuf,
    },
    /// List signal groups in a display config
    Show {
        /// Path to the config file
        config_path: PathBuf,
    },
    /// Print a built-in display config as YAML
    Defaults {
        #[arg(long, value_enum, default_value = "rotary")]
        preset: PresetArg,
    },
    /// Drive the dashboard headlessly from the demo motor
    Run {
        /// Config file; the preset is used when omitted
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "rotary")]
        preset: PresetArg,
        /// Number of frames
        #[arg(long, default_value_t = 100)]
        steps: usize,
        /// Time step in seconds
        #[arg(long, default_value_t = 0.01)]
        dt: f64,
        /// Wall-clock pause between frames in milliseconds
        #[arg(long, default_value_t = 0)]
        pause_ms: u64,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Show { config_path } => cmd_show(&config_path),
        Commands::Defaults { preset } => cmd_defaults(preset.into()),
        Commands::Run {
            config,
            preset,
            steps,
            dt,
            pause_ms,
        } => cmd_run(config.as_deref(), preset.into(), steps, dt, pause_ms),
    }
}

fn cmd_validate(config_path: &Path) -> AppResult<()> {
    println!("Validating config: {}", config_path.display());
    let config = config_service::load_config(config_path)?;
    config_service::validate(&config)?;
    println!("✓ Config is valid");
    Ok(())
}

fn cmd_show(config_path: &Path) -> AppResult<()> {
    let config = config_service::load_config(config_path)?;
    let summary = config_service::summarize(&config);

    println!("{} (version {})", summary.name, summary.version);
    match summary.history_limit {
        Some(limit) => println!("  History: last {} samples", limit),
        None => println!("  History: unbounded"),
    }
    println!("  Signals: {}", summary.signal_count);
    println!("Groups:");
    for group in summary.groups {
        let scale = if group.factor == 1.0 {
            String::new()
        } else {
            format!(" x{:.4}", group.factor)
        };
        println!(
            "  {} - {} [{}]{}",
            group.id,
            group.y_label,
            group.signals.join(", "),
            scale
        );
    }
    Ok(())
}

fn cmd_defaults(preset: Preset) -> AppResult<()> {
    let yaml = mv_config::to_yaml_string(&preset.config())?;
    print!("{}", yaml);
    Ok(())
}

fn cmd_run(
    config_path: Option<&Path>,
    preset: Preset,
    steps: usize,
    dt: f64,
    pause_ms: u64,
) -> AppResult<()> {
    if steps == 0 {
        return Err(AppError::InvalidInput("steps must be at least 1".to_string()));
    }
    let dt = check_time_step(dt)?;

    let config = config_service::resolve_config(config_path, preset)?;
    println!("Running dashboard: {}", config.name);
    println!("  steps = {}, dt = {:.3} s", steps, dt);

    let mut session = DashboardSession::new(config)?;
    let pause = Duration::from_millis(pause_ms);
    let started = Instant::now();

    let stepped = run_steps(&mut session, steps, dt, pause);
    clear_progress_line();
    stepped?;

    let summary = session.summary();
    println!(
        "✓ Rendered {} frames ({} rejected) in {:.2}s",
        summary.frames,
        summary.rejected,
        started.elapsed().as_secs_f64()
    );
    for panel in &summary.panels {
        match panel.y_range {
            Some(range) => println!(
                "  {}: {} lines, {} points, y in [{:.3}, {:.3}]",
                panel.group, panel.lines, panel.points, range.min, range.max
            ),
            None => println!("  {}: no data", panel.group),
        }
    }
    println!("  Scene: {}", summary.scene_title);

    Ok(())
}

fn run_steps(
    session: &mut DashboardSession,
    steps: usize,
    dt: f64,
    pause: Duration,
) -> AppResult<()> {
    let mut last_emit = Instant::now();
    for step in 1..=steps {
        if let StepOutcome::Rejected { reason } = session.step(dt)? {
            info!(step, %reason, "frame skipped");
        }
        if step == steps || last_emit.elapsed().as_millis() >= 100 {
            render_progress(step, steps, session.time());
            last_emit = Instant::now();
        }
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
    }
    Ok(())
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(80));
    let _ = io::stdout().flush();
}

fn render_progress(step: usize, steps: usize, t: f64) {
    let width = 28usize;
    let fraction = step as f64 / steps as f64;
    let filled = ((fraction * width as f64).round() as usize).min(width);
    print!(
        "\r[{}{}] {:>6.2}%  t={:.3}s  step={}/{}",
        "#".repeat(filled),
        "-".repeat(width - filled),
        fraction * 100.0,
        t,
        step,
        steps
    );
    let _ = io::stdout().flush();
}
