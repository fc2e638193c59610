use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use tracing::info;

use display::Display;
use octet::Chip8;

use crate::keymap::keymap;
use crate::Args;

pub fn run(args: &Args) -> Result<()> {
    let mut chip8 = Chip8::new();

    // Load ROM
    let mut file = File::open(&args.rom)
        .with_context(|| format!("unable to open {}", args.rom.display()))?;
    chip8
        .load_rom(&mut file)
        .with_context(|| format!("unable to load {}", args.rom.display()))?;
    info!("loaded {}", args.rom.display());

    // Get SDL2 context
    let sdl = sdl2::init().map_err(anyhow::Error::msg)?;
    let title = format!("Chip-8 - {}", args.rom.display());
    let mut display = Display::new(&sdl, &title, args.scale)?;
    let mut events = sdl.event_pump().map_err(anyhow::Error::msg)?;

    let cycle_time = Duration::from_secs(1) / args.hz;
    let mut last_cycle = Instant::now();

    // Whether or not the clock speed should be respected
    let mut fast_forward = false;

    'event: loop {
        let cycle = chip8.step()?;
        if cycle.beep {
            info!("beep");
        }

        // If the draw flag is set, unset it and render the current frame
        if chip8.consume_draw_flag() {
            display.render(chip8.frame_buffer())?;
        }

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Handle timing
        let elapsed_cycle_time = last_cycle.elapsed();
        if !fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    info!(
        "quitting, {} unknown opcodes skipped",
        chip8.unknown_opcodes()
    );
    Ok(())
}
