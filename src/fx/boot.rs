use serde::{Deserialize, Deserializer, Serialize};

use super::Tick;

pub const BOOT_IDLE_LABEL: &str = "Initializing...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    #[serde(deserialize_with = "clamped_progress")]
    pub progress: u8,
    pub label: String,
}

impl Checkpoint {
    pub fn new(progress: u8, label: impl Into<String>) -> Self {
        Self {
            progress: progress.min(100),
            label: label.into(),
        }
    }
}

fn clamped_progress<'de, D: Deserializer<'de>>(de: D) -> Result<u8, D::Error> {
    u8::deserialize(de).map(|p| p.min(100))
}

/// The fake boot overlay: a cursor over ordered checkpoints, advanced by a
/// fixed-period timer, followed by a one-time completion flag.
#[derive(Debug, Clone)]
pub struct BootSequence {
    checkpoints: Vec<Checkpoint>,
    shown: usize,
    complete: bool,
}

impl BootSequence {
    pub fn new(checkpoints: Vec<Checkpoint>) -> Self {
        Self {
            checkpoints,
            shown: 0,
            complete: false,
        }
    }

    fn current(&self) -> Option<&Checkpoint> {
        self.shown
            .checked_sub(1)
            .and_then(|i| self.checkpoints.get(i))
    }

    pub fn progress(&self) -> u8 {
        self.current().map(|c| c.progress).unwrap_or(0)
    }

    pub fn label(&self) -> &str {
        self.current()
            .map(|c| c.label.as_str())
            .unwrap_or(BOOT_IDLE_LABEL)
    }

    /// Every checkpoint has been displayed; the owner should stop the tick
    /// timer and arm the settle delay.
    pub fn is_finished(&self) -> bool {
        self.shown >= self.checkpoints.len()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Show the next checkpoint. Returns [`Tick::Done`] on the tick that
    /// displays the final one.
    pub fn tick(&mut self) -> Tick {
        if !self.is_finished() {
            self.shown += 1;
        }
        if self.is_finished() {
            Tick::Done
        } else {
            Tick::Running
        }
    }

    /// Raise the completion flag after the settle delay. Returns `true` only
    /// the first time, and never before the last checkpoint has shown.
    pub fn complete(&mut self) -> bool {
        if self.complete || !self.is_finished() {
            return false;
        }
        self.complete = true;
        true
    }

    /// Decorative indicator `index` lights up once progress passes
    /// `(index + 1) * 30`.
    pub fn indicator_lit(&self, index: usize) -> bool {
        (self.progress() as usize) > (index + 1) * 30
    }
}
