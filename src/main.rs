//! Spinning ASCII torus for the terminal.
//!
//! Controls:
//! - Space: pause (allows text selection)
//! - +/- (or ]/[): spin faster / slower
//! - R: reset angles and speed
//! - Q or Escape: quit
//!
//! Usage:
//!   ascii-torus                    - Run interactive mode
//!   ascii-torus --debug-frames 10  - Render 10 frames to ./debug/ and exit

use anyhow::{Context, Result};
use ascii_torus::renderer::{RenderConfig, Renderer};
use ascii_torus::stats::RenderStats;
use ascii_torus::terminal::{parse_key_event, Action, TerminalDisplay};
use clap::Parser;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "ascii-torus")]
#[command(version)]
#[command(about = "Renders a spinning torus as ASCII art in the terminal")]
struct Cli {
    /// Target display frame rate
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Per-frame increment of the x-axis spin angle, in radians
    #[arg(long, default_value_t = 0.04)]
    step_a: f32,

    /// Per-frame increment of the z-axis spin angle, in radians
    #[arg(long, default_value_t = 0.02)]
    step_b: f32,

    /// Render N frames to ./debug/frame_XXX.txt files and exit
    #[arg(long, value_name = "N")]
    debug_frames: Option<u32>,

    /// Print a render-time histogram and JSON summary on exit
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(n) = cli.debug_frames {
        return run_debug_mode(n, cli.step_a, cli.step_b);
    }

    let stats = run_interactive(&cli)?;

    if cli.stats && stats.frames() > 0 {
        println!("Render time distribution:");
        print!("{}", stats.histogram(8, 40));
        println!("{}", stats.to_json());
    }

    Ok(())
}

fn run_interactive(cli: &Cli) -> Result<RenderStats> {
    let mut terminal = TerminalDisplay::new().context("failed to initialize terminal")?;
    let mut renderer = Renderer::new(RenderConfig::classic());
    let mut stats = RenderStats::new();

    // The angle pair is the only state that crosses frame boundaries.
    let mut a = 0.0f32;
    let mut b = 0.0f32;
    let mut speed = 1.0f32;
    let mut paused = false;

    let frame_time = Duration::from_secs_f64(1.0 / cli.fps.max(1.0));
    let mut last_frame = Instant::now();

    loop {
        match terminal.poll_input(Duration::from_millis(16)) {
            Ok(Some(key_event)) => match parse_key_event(key_event) {
                Action::Quit => break,
                Action::Pause => paused = !paused,
                Action::Reset => {
                    a = 0.0;
                    b = 0.0;
                    speed = 1.0;
                }
                Action::Faster => speed = (speed * 1.25).min(8.0),
                Action::Slower => speed = (speed / 1.25).max(0.125),
                Action::None => {}
            },
            Ok(None) => {}
            Err(e) => log::warn!("input error: {}", e),
        }

        if paused {
            continue;
        }

        // Throttle to the target display rate; the renderer itself never sleeps.
        if last_frame.elapsed() < frame_time {
            continue;
        }
        last_frame = Instant::now();

        let started = Instant::now();
        let frame = renderer.render_frame(a, b);
        stats.record(started.elapsed());

        let status = format!(
            "{} | speed={:.2}x | [SPACE] Pause  [+/-] Speed  [R]eset  [Q]uit",
            stats.format_compact(),
            speed
        );

        let text = frame.to_ascii();
        if let Err(e) = terminal.render(&text, &status) {
            if e.kind() == std::io::ErrorKind::BrokenPipe {
                break;
            }
            log::warn!("render error: {}", e);
        }

        a += cli.step_a * speed;
        b += cli.step_b * speed;
    }

    Ok(stats)
}

/// Debug mode: render frames to files in ./debug/ for inspection.
fn run_debug_mode(frames: u32, step_a: f32, step_b: f32) -> Result<()> {
    let debug_dir = Path::new("debug");
    fs::create_dir_all(debug_dir).context("failed to create debug directory")?;

    let mut renderer = Renderer::new(RenderConfig::classic());

    for frame_idx in 0..frames {
        let a = frame_idx as f32 * step_a;
        let b = frame_idx as f32 * step_b;
        let frame = renderer.render_frame(a, b);

        let path = debug_dir.join(format!("frame_{:03}.txt", frame_idx));
        fs::write(&path, frame.to_ascii())
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote {} ({} lit cells)", path.display(), frame.lit_cells());
    }

    println!("Wrote {} frames to ./debug/", frames);
    println!("View with: cat debug/frame_000.txt");
    Ok(())
}
