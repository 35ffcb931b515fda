use clap::Parser;
use std::io::{self, Write};
use termspin::config::{Overrides, RenderConfig};
use termspin::settings::Settings;
use termspin::terminal::{DisplaySink, Terminal, TextSink};
use termspin::{driver, preset, Result};

#[derive(Parser)]
#[command(name = "termspin")]
#[command(author = "Terminal Art Generator")]
#[command(version = "0.1.0")]
#[command(about = "Rotating 3D point surface rendered as ASCII art in the terminal", long_about = None)]
struct Cli {
    /// Animation preset (see --list)
    #[arg(short = 'T', long)]
    mode: Option<String>,

    /// Side length of the sample grid
    #[arg(short, long)]
    grid: Option<usize>,

    /// Surface glyph shown in the title line
    #[arg(short = 'c', long)]
    glyph: Option<String>,

    /// Frame width in characters
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Frame height in characters
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Seconds per frame (overrides the preset's pacing)
    #[arg(short, long)]
    time: Option<f32>,

    /// Stop after this many frames
    #[arg(short = 'n', long)]
    frames: Option<u64>,

    /// Print a single frame to stdout (no interactive display)
    #[arg(short, long)]
    print: bool,

    /// Animation time of the printed frame
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    at: f64,

    /// Hide the status line
    #[arg(long)]
    no_status: bool,

    /// List available presets
    #[arg(short, long)]
    list: bool,

    /// Print a run summary on exit
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list {
        for p in preset::PRESETS {
            if p.aliases.is_empty() {
                println!("{:<14}{}", p.name, p.title);
            } else {
                println!("{:<14}{} (also: {})", p.name, p.title, p.aliases.join(", "));
            }
        }
        return Ok(());
    }

    let overrides = Overrides {
        mode: cli.mode,
        grid: cli.grid,
        glyph: cli.glyph,
        width: cli.width,
        height: cli.height,
        time: cli.time,
        frames: cli.frames,
        no_status: cli.no_status,
    };
    let config = RenderConfig::resolve(&Settings::load(), &overrides)?;

    if cli.print {
        let frame = driver::render_at(&config, cli.at);
        let mut sink = TextSink::new(io::stdout().lock());
        sink.present(&frame, None)?;
        return Ok(());
    }

    let mut surface = driver::surface_for(&config);
    let stats = {
        let mut term = Terminal::new()?;
        term.set_title(&format!(
            "{} [{} {}x{}]",
            config.preset.title,
            surface.glyph(),
            surface.width(),
            surface.width()
        ))?;
        driver::run(&config, &mut surface, &mut term)?
        // term dropped here: terminal restored before anything else prints
    };

    if cli.verbose {
        eprintln!(
            "{}: {} frames in {:.1}s ({:.1} fps, {} samples/frame)",
            config.preset.name,
            stats.frames,
            stats.elapsed.as_secs_f64(),
            stats.mean_fps(),
            config.preset.rasterizer().samples_per_frame(config.grid)
        );
    }
    io::stdout().flush()?;
    Ok(())
}
