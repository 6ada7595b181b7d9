use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use okto_core::Chip8;
use okto_display::Display;

use crate::keymap::keymap;

/// Drives the machine: one `step` per period, rendering whenever the core
/// reports a dirty frame and feeding keypad state back in between cycles.
pub fn run(rom: PathBuf, scale: usize, period: Duration) {
    let mut chip8 = Chip8::new();

    // Load ROM before opening a window so a bad path fails fast
    let file = File::open(&rom).expect("unable to open ROM file");
    let mut reader = BufReader::new(file);
    match chip8.load_rom(&mut reader) {
        Ok(size) => println!("loaded {} byte ROM from {}", size, rom.display()),
        Err(e) => {
            eprintln!("failed to load ROM: {}", e);
            std::process::exit(1);
        }
    };

    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init().unwrap();
    let mut display = Display::new(&sdl, scale);
    let mut events = sdl.event_pump().unwrap();

    let mut last_cycle: Instant = Instant::now();

    // Whether or not the configured clock speed should be respected
    let mut fast_forward: bool = false;

    'event: loop {
        // If the core reports a dirty frame, render it
        if let Some(frame) = chip8.frame() {
            display.render(frame);
        }

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Escape, _) => break 'event,
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

        // One call is one instruction and one timer tick; the sleep below is
        // what makes the timers decay at roughly the intended rate
        chip8.step();

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if !fast_forward && period > elapsed_cycle_time {
            std::thread::sleep(period - elapsed_cycle_time);
        }
        last_cycle = current_time;
    }
}
