//! Bounded FIFO for discrete transition triggers.
//!
//! Hotkey, speech-recognition and action-dispatcher threads publish here;
//! the frame scheduler drains the queue fully at the start of every tick,
//! so it cannot grow without bound. Producers never block: when the queue
//! is full the event is dropped with a warning instead of stalling an
//! audio or input thread.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use thiserror::Error;

/// Boundary events produced by the excluded collaborators. Transcript text
/// never enters the core; the recognition events carry no payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbEvent {
    /// Global hotkey toggled listening on or off.
    HotkeyToggle,
    /// Recognition engine began decoding. No transition; informational.
    RecognitionStarted,
    /// Interim transcript chunk. No transition; the text flows to the
    /// overlay, not here.
    PartialTranscript,
    /// Utterance finalized; a response is about to be delivered.
    FinalTranscript,
    /// No speech detected within the recognition engine's timeout window.
    Silence,
    /// Response delivery finished without a command.
    SpeakingFinished,
    /// Response classified as an executable command; execution began.
    ActionStarted(u32),
    /// Command execution finished.
    ActionCompleted(u32),
}

#[derive(Debug, Error)]
#[error("event queue full, dropped {0:?}")]
pub struct EventOverflow(pub OrbEvent);

#[derive(Clone)]
pub struct EventSender {
    tx: Sender<OrbEvent>,
}

pub struct EventQueue {
    rx: Receiver<OrbEvent>,
}

pub fn event_queue(capacity: usize) -> (EventSender, EventQueue) {
    let (tx, rx) = bounded(capacity);
    (EventSender { tx }, EventQueue { rx })
}

impl EventSender {
    /// Publishes without ever blocking the calling thread.
    pub fn publish(&self, event: OrbEvent) -> Result<(), EventOverflow> {
        match self.tx.try_send(event) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(ev)) => {
                log::warn!("event queue full, dropping {ev:?}");
                Err(EventOverflow(ev))
            }
            // Consumer gone means shutdown is in progress; drop quietly.
            Err(TrySendError::Disconnected(ev)) => Err(EventOverflow(ev)),
        }
    }
}

impl EventQueue {
    /// Removes and yields every event currently queued.
    pub fn drain(&self) -> impl Iterator<Item = OrbEvent> + '_ {
        self.rx.try_iter()
    }
}
