use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use okto_core::CLOCK_SPEED;

mod keymap;
mod run;

/// A Chip-8 emulator
#[derive(Parser)]
#[command(name = "okto", version, about)]
struct Cli {
    /// Path to the ROM to run
    rom: PathBuf,

    /// Size multiplier for each display pixel
    #[arg(short, long, default_value = "10")]
    scale: u32,

    /// Milliseconds between cycles; also sets the timer decay rate
    #[arg(short, long)]
    delay: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    let period = match cli.delay {
        Some(ms) => Duration::from_millis(ms),
        None => Duration::from_nanos(CLOCK_SPEED as u64),
    };

    run::run(cli.rom, cli.scale as usize, period);
}
