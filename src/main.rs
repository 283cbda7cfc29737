//! Terminal gridfall runner.
//!
//! Owns the gravity timer the engine deliberately does not have: polls for
//! input until the next tick deadline, applies actions, ticks the session,
//! and re-reads `drop_interval_ms` every iteration so level-ups speed the
//! game up immediately.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::Session;
use gridfall::input::{map_key, should_quit};
use gridfall::term::Terminal;

fn main() -> Result<()> {
    // Wall-clock nanos are plenty of entropy for piece selection.
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);

    let mut term = Terminal::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut Terminal, seed: u32) -> Result<()> {
    let mut session = Session::new(seed);
    let mut next_tick = Instant::now() + Duration::from_millis(session.drop_interval_ms() as u64);

    term.draw(&session)?;

    loop {
        let timeout = next_tick
            .checked_duration_since(Instant::now())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = map_key(key) {
                    if session.apply_action(action) {
                        term.draw(&session)?;
                    }
                }
            }
            continue;
        }

        // Deadline reached: one gravity step, then re-arm from the session's
        // current cadence (it changes on level-up).
        if session.tick() {
            term.draw(&session)?;
        }
        next_tick = Instant::now() + Duration::from_millis(session.drop_interval_ms() as u64);
    }
}
