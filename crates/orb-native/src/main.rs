//! Terminal frontend for the orb animation core.
//!
//! Stands in for the excluded collaborators: the microphone feeds the
//! amplitude tracker via cpal, and stdin lines play the role of the
//! hotkey/speech/action event sources. The frame snapshot is drawn as a
//! character grid so the core can be exercised without any GPU stack.

use std::io::BufRead;
use std::thread;

use anyhow::Result;
use glam::Vec2;
use orb_core::{
    amplitude_pair, constants, event_queue, particles, EventSender, FrameScheduler,
    FrameSnapshot, OrbConfig, OrbEvent,
};

mod capture;

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cfg = OrbConfig::default();
    cfg.validate()?;

    let (sink, tracker) = amplitude_pair(cfg.amplitude_ceiling, cfg.smoothing_alpha);
    let _microphone = capture::start_microphone(sink);

    let (events, queue) = event_queue(constants::EVENT_QUEUE_CAPACITY);
    spawn_command_thread(events);
    log::info!("commands: toggle | final | silence | done | act <id> | end <id> | quit");

    let mut scheduler = FrameScheduler::new(&cfg, tracker, queue)?;
    let mut canvas = TermCanvas::new(64, 26);
    scheduler.run(|snapshot| {
        canvas.draw(snapshot);
        true
    });
    Ok(())
}

/// Reads stdin lines and publishes the matching boundary events, standing
/// in for the hotkey, recognition and action-dispatcher threads.
fn spawn_command_thread(events: EventSender) {
    let spawned = thread::Builder::new()
        .name("commands".into())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                let mut parts = line.split_whitespace();
                let event = match (parts.next(), parts.next()) {
                    (Some("toggle"), _) => Some(OrbEvent::HotkeyToggle),
                    (Some("final"), _) => Some(OrbEvent::FinalTranscript),
                    (Some("silence"), _) => Some(OrbEvent::Silence),
                    (Some("done"), _) => Some(OrbEvent::SpeakingFinished),
                    (Some("act"), id) => {
                        Some(OrbEvent::ActionStarted(parse_id(id)))
                    }
                    (Some("end"), id) => {
                        Some(OrbEvent::ActionCompleted(parse_id(id)))
                    }
                    (Some("quit"), _) => std::process::exit(0),
                    (Some(other), _) => {
                        log::warn!("unknown command {other:?}");
                        None
                    }
                    (None, _) => None,
                };
                if let Some(event) = event {
                    let _ = events.publish(event);
                }
            }
        });
    if spawned.is_err() {
        log::warn!("could not spawn command thread, events disabled");
    }
}

fn parse_id(arg: Option<&str>) -> u32 {
    arg.and_then(|s| s.parse().ok()).unwrap_or(0)
}

/// Minimal character-grid renderer for the frame snapshot.
struct TermCanvas {
    width: usize,
    height: usize,
    cells: Vec<u8>,
    projected: Vec<Vec2>,
    frame: String,
}

impl TermCanvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![b' '; width * height],
            projected: Vec::new(),
            frame: String::with_capacity((width + 1) * (height + 2)),
        }
    }

    fn draw(&mut self, snapshot: &FrameSnapshot) {
        self.cells.fill(b' ');
        particles::project(snapshot.positions, snapshot.offset, &mut self.projected);

        let glyph = if snapshot.glow > 0.6 { b'@' } else { b'o' };
        for p in &self.projected {
            // Projected coordinates sit roughly in [-1, 1]; the wide grid
            // compensates for terminal cells being taller than wide.
            let col = ((p.x + 1.0) * 0.5 * (self.width - 1) as f32).round() as isize;
            let row = ((1.0 - (p.y + 1.0) * 0.5) * (self.height - 1) as f32).round() as isize;
            if col >= 0 && row >= 0 && (col as usize) < self.width && (row as usize) < self.height
            {
                self.cells[row as usize * self.width + col as usize] = glyph;
            }
        }

        self.frame.clear();
        self.frame.push_str("\x1b[H");
        for row in self.cells.chunks(self.width) {
            // Grid bytes are ASCII by construction.
            self.frame.push_str(std::str::from_utf8(row).unwrap_or(""));
            self.frame.push('\n');
        }
        let bar_len = (snapshot.amplitude * 24.0) as usize;
        self.frame.push_str(&format!(
            "{:?} amp [{:<24}] edges {:>5} glow {:.2}\n",
            snapshot.mode,
            "#".repeat(bar_len),
            snapshot.edges.len(),
            snapshot.glow,
        ));
        print!("{}", self.frame);
    }
}
