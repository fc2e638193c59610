use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod keymap;
mod run;

/// Runs a Chip-8 program in a window.
///
/// Keys 1-4, Q-R, A-F and Z-V stand in for the hexadecimal keypad. Hold Space to run
/// unthrottled, press Escape to quit.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a raw program image, loaded at 0x200
    pub rom: PathBuf,

    /// Size of each Chip-8 pixel on screen
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub scale: u32,

    /// Cycles per second; the timers tick once per cycle
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    pub hz: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    run::run(&args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["chip8", "pong.ch8"]).unwrap();
        assert_eq!(args.rom, PathBuf::from("pong.ch8"));
        assert_eq!(args.scale, 10);
        assert_eq!(args.hz, 60);
    }

    #[test]
    fn test_args_rejects_zero_scale() {
        assert!(Args::try_parse_from(["chip8", "--scale", "0", "pong.ch8"]).is_err());
    }

    #[test]
    fn test_args_requires_rom() {
        assert!(Args::try_parse_from(["chip8"]).is_err());
    }
}
