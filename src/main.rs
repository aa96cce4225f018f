//! Terminal ray-casting walkthrough (default binary).
//!
//! Single-threaded frame loop: measure elapsed time, drain pending key
//! events without blocking, advance the simulation, render, flush. The loop
//! is uncapped; elapsed time feeds the movement so motion stays frame-rate
//! independent.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_raycast::core::{MovementConfig, Pose, Simulation, WorldGrid};
use tui_raycast::input::{map_key, should_quit, IntentTracker};
use tui_raycast::term::{FrameBuffer, SceneView, TerminalRenderer};
use tui_raycast::types::DEFAULT_MAP;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let grid = WorldGrid::parse(&DEFAULT_MAP)?;
    let mut sim = Simulation::new(grid, Pose::starting(), MovementConfig::default());

    let view = SceneView::default();
    let mut fb = FrameBuffer::new(view.width(), view.height());
    let mut tracker = IntentTracker::new();

    let mut last_frame = Instant::now();

    loop {
        let dt = last_frame.elapsed().as_secs_f32();
        last_frame = Instant::now();

        // Drain everything the terminal has queued; never stall the frame.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(intent) = map_key(key) {
                            tracker.press(intent);
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(intent) = map_key(key) {
                            tracker.release(intent);
                        }
                    }
                }
            }
        }

        sim.step(dt, &tracker.active());

        view.render_into(&sim, dt, &mut fb);
        term.draw(&fb)?;
    }
}
