//! Terminal Tetris runner (default binary).
//!
//! Emulates the handheld: crossterm key events drive the button panel, the
//! game is drawn onto the monochrome LCD once per frame and the LCD is shown
//! in the terminal.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use lcd_tetris::config::{Args, Config};
use lcd_tetris::core::{catalog_is_well_formed, GameSnapshot, GameState};
use lcd_tetris::input::{ButtonPanel, TickClock};
use lcd_tetris::term::{
    FrameBuffer, FramePacer, GameView, Lcd, ScreenView, TerminalRenderer, Viewport,
};

fn main() -> Result<()> {
    let config = Config::try_from(Args::parse())?;
    init_logging(&config)?;

    if !catalog_is_well_formed() {
        bail!("piece catalog is malformed");
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let key_release = enable_key_release_events();

    let result = run(&mut term, &config, key_release);

    // Always try to restore terminal state.
    if key_release {
        let _ = execute!(std::io::stdout(), PopKeyboardEnhancementFlags);
    }
    let _ = term.exit();

    match &result {
        Ok(score) => info!(score, "exit"),
        Err(err) => warn!(error = %err, "exit with error"),
    }
    result.map(|_| ())
}

/// Logs go to a file only; the terminal is the display.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Ask the terminal for press/release reporting. Returns whether it is on.
fn enable_key_release_events() -> bool {
    if !terminal::supports_keyboard_enhancement().unwrap_or(false) {
        return false;
    }
    execute!(
        std::io::stdout(),
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
    )
    .is_ok()
}

fn default_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Run until quit. Returns the final score.
fn run(term: &mut TerminalRenderer, config: &Config, key_release: bool) -> Result<u32> {
    let clock = TickClock::new();
    let seed = config.seed.unwrap_or_else(default_seed);
    info!(
        seed,
        fall_delay = config.timing.fall_delay,
        key_repeat = config.timing.key_repeat,
        fps = config.fps,
        orientation = ?config.orientation,
        key_release,
        "starting"
    );

    let mut game = GameState::with_timing(seed, config.timing, clock.now_tick());
    // With real release events the timeout would only cut long holds short.
    let release_timeout = (!key_release).then_some(config.release_timeout);
    let mut panel = ButtonPanel::new(config.orientation).with_release_timeout(release_timeout);

    let game_view = GameView::new();
    let screen = ScreenView::new(config.orientation);
    let mut snapshot = GameSnapshot::default();
    let mut lcd = Lcd::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut pacer = FramePacer::new(Duration::from_millis(u64::from(
        config.frame_interval_ms(),
    )));

    loop {
        let now = clock.now_tick();

        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let Event::Resize(..) = ev {
                term.invalidate();
            }
            panel.handle_event(&ev, now);
        }
        if panel.quit_requested() {
            break;
        }
        panel.expire(now);

        if let Some(action) = game.update(&panel, now) {
            debug!(?action, tick = now, "accepted");
        }

        game.snapshot_into(&mut snapshot);
        game_view.render(&snapshot, &mut lcd);
        let (w, h) = terminal::size().unwrap_or((80, 24));
        screen.render_into(&lcd, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        pacer.pace();
    }

    Ok(game.score())
}
