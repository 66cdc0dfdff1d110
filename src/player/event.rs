//! Player events and the observer registry.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Notifications delivered on a player's event channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerEvent {
    /// The player finished its setup
    Ready,
    /// Periodic position update
    TimeUpdate,
    /// Playback reached the end (of the media or the clip)
    Ended,
    /// A (re)load of the media started
    LoadStart,
    Play,
    Pause,
    /// The player is being torn down (delivered once)
    Dispose,
}

impl PlayerEvent {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::TimeUpdate => "timeupdate",
            Self::Ended => "ended",
            Self::LoadStart => "loadstart",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Dispose => "dispose",
        }
    }
}

impl fmt::Display for PlayerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlayerEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ready" => Ok(Self::Ready),
            "timeupdate" => Ok(Self::TimeUpdate),
            "ended" => Ok(Self::Ended),
            "loadstart" => Ok(Self::LoadStart),
            "play" => Ok(Self::Play),
            "pause" => Ok(Self::Pause),
            "dispose" => Ok(Self::Dispose),
            other => Err(format!("Unknown player event: {}", other)),
        }
    }
}

/// Identifies one registered handler, for `EventBus::off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

type Handler = Box<dyn FnMut(PlayerEvent)>;

struct Registration {
    id: HandlerId,
    event: PlayerEvent,
    once: bool,
    handler: Handler,
}

/// Observer registry for one player.
///
/// Handlers run synchronously, in registration order, on the thread that
/// calls `emit`.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    handlers: Vec<Registration>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for every future `event`.
    pub fn on<F>(&mut self, event: PlayerEvent, handler: F) -> HandlerId
    where
        F: FnMut(PlayerEvent) + 'static,
    {
        self.register(event, false, Box::new(handler))
    }

    /// Register `handler` for the next `event` only.
    pub fn once<F>(&mut self, event: PlayerEvent, handler: F) -> HandlerId
    where
        F: FnMut(PlayerEvent) + 'static,
    {
        self.register(event, true, Box::new(handler))
    }

    /// Remove a handler. Returns false if it was not registered for `event`.
    pub fn off(&mut self, event: PlayerEvent, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|reg| !(reg.id == id && reg.event == event));
        self.handlers.len() != before
    }

    /// Deliver `event` to its handlers.
    pub fn emit(&mut self, event: PlayerEvent) {
        let mut index = 0;
        while index < self.handlers.len() {
            if self.handlers[index].event != event {
                index += 1;
                continue;
            }
            if self.handlers[index].once {
                // Removed before running so it can never fire twice
                let mut reg = self.handlers.remove(index);
                (reg.handler)(event);
            } else {
                (self.handlers[index].handler)(event);
                index += 1;
            }
        }
    }

    /// Number of handlers currently registered for `event`.
    pub fn handler_count(&self, event: PlayerEvent) -> usize {
        self.handlers.iter().filter(|reg| reg.event == event).count()
    }

    fn register(&mut self, event: PlayerEvent, once: bool, handler: Handler) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push(Registration {
            id,
            event,
            once,
            handler,
        });
        id
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
