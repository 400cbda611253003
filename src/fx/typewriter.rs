use super::Tick;

/// Reveals a string one character per tick.
#[derive(Debug, Clone)]
pub struct Typewriter {
    target: String,
    total: usize,
    revealed: usize,
}

impl Typewriter {
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let total = target.chars().count();
        Self {
            target,
            total,
            revealed: 0,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.total
    }

    /// Reveal one more character. Reports [`Tick::Done`] on the tick that
    /// shows the last character and on every tick after it.
    pub fn tick(&mut self) -> Tick {
        if self.revealed < self.total {
            self.revealed += 1;
        }
        if self.is_done() {
            Tick::Done
        } else {
            Tick::Running
        }
    }

    /// The visible prefix.
    pub fn text(&self) -> &str {
        match self.target.char_indices().nth(self.revealed) {
            Some((end, _)) => &self.target[..end],
            None => &self.target,
        }
    }
}
