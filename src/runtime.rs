use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};

pub const TICK_RATE_MS: u64 = 100;

/// What the game loop reacts to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Key(KeyEvent),
    Resize,
    /// No input for a whole tick interval
    Tick,
    /// Input will never arrive again; the loop should stop
    Closed,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait EventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError>;
}

/// Events delivered over a channel, either from the terminal reader thread
/// or from a test that owns the sender.
pub struct ChannelEventSource {
    rx: Receiver<GameEvent>,
}

impl ChannelEventSource {
    pub fn new(rx: Receiver<GameEvent>) -> Self {
        Self { rx }
    }

    /// Spawns a thread forwarding key presses and resizes from the terminal.
    /// The thread ends, closing the channel, when reading fails.
    pub fn from_terminal() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let evt = match event::read() {
                Ok(CtEvent::Key(key)) if key.kind != KeyEventKind::Release => GameEvent::Key(key),
                Ok(CtEvent::Resize(_, _)) => GameEvent::Resize,
                Ok(_) => continue,
                Err(err) => {
                    tracing::warn!(%err, "terminal input lost");
                    break;
                }
            };
            if tx.send(evt).is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl EventSource for ChannelEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Turns a blocking event source into a steady stream of events and ticks
pub struct Runner<E: EventSource> {
    event_source: E,
    tick_rate: Duration,
}

impl<E: EventSource> Runner<E> {
    pub fn new(event_source: E, tick_rate: Duration) -> Self {
        Self {
            event_source,
            tick_rate,
        }
    }

    pub fn with_default_rate(event_source: E) -> Self {
        Self::new(event_source, Duration::from_millis(TICK_RATE_MS))
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Next event, `Tick` if none arrived within the tick rate, or `Closed`
    /// once the source has hung up
    pub fn step(&self) -> GameEvent {
        match self.event_source.recv_timeout(self.tick_rate) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) => GameEvent::Tick,
            Err(RecvTimeoutError::Disconnected) => GameEvent::Closed,
        }
    }
}
