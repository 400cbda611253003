use super::Tick;

/// What the owner should do with its interval and delay timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCmd {
    /// Start the interval now.
    Resume,
    /// Start the one-shot delay timer; resume when it fires.
    Arm(u64),
    /// Stop the interval for good.
    Pause,
    Nothing,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Idle,
    Delayed,
    Running,
    Stopped,
}

/// Schedule for a fixed-period animation that starts once, optionally after a
/// delay, and stops on the tick its engine reports [`Tick::Done`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    period_ms: u64,
    delay_ms: u64,
    phase: Phase,
}

impl Ticker {
    pub fn new(period_ms: u64, delay_ms: u64) -> Self {
        Self {
            period_ms,
            delay_ms,
            phase: Phase::Idle,
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_stopped(&self) -> bool {
        self.phase == Phase::Stopped
    }

    /// The start condition became true. Only the first call schedules anything.
    pub fn start(&mut self) -> TimerCmd {
        if self.phase != Phase::Idle {
            return TimerCmd::Nothing;
        }
        if self.delay_ms == 0 {
            self.phase = Phase::Running;
            TimerCmd::Resume
        } else {
            self.phase = Phase::Delayed;
            TimerCmd::Arm(self.delay_ms)
        }
    }

    pub fn delay_elapsed(&mut self) -> TimerCmd {
        if self.phase != Phase::Delayed {
            return TimerCmd::Nothing;
        }
        self.phase = Phase::Running;
        TimerCmd::Resume
    }

    /// Feed the outcome of one interval callback.
    pub fn ticked(&mut self, tick: Tick) -> TimerCmd {
        if self.phase != Phase::Running || tick == Tick::Running {
            return TimerCmd::Nothing;
        }
        self.phase = Phase::Stopped;
        TimerCmd::Pause
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immediate_start() {
        let mut t = Ticker::new(100, 0);
        assert_eq!(t.start(), TimerCmd::Resume);
        assert!(t.is_running());
        assert_eq!(t.start(), TimerCmd::Nothing);
    }

    #[test]
    fn test_delayed_start() {
        let mut t = Ticker::new(50, 1500);
        assert_eq!(t.delay_elapsed(), TimerCmd::Nothing);
        assert_eq!(t.start(), TimerCmd::Arm(1500));
        assert!(!t.is_running());
        assert_eq!(t.ticked(Tick::Done), TimerCmd::Nothing);
        assert_eq!(t.delay_elapsed(), TimerCmd::Resume);
        assert!(t.is_running());
        assert_eq!(t.delay_elapsed(), TimerCmd::Nothing);
    }

    #[test]
    fn test_pauses_once_on_done() {
        let mut t = Ticker::new(15, 0);
        t.start();
        assert_eq!(t.ticked(Tick::Running), TimerCmd::Nothing);
        assert_eq!(t.ticked(Tick::Done), TimerCmd::Pause);
        assert!(t.is_stopped());
        assert_eq!(t.ticked(Tick::Done), TimerCmd::Nothing);
        // a stopped ticker never restarts
        assert_eq!(t.start(), TimerCmd::Nothing);
    }
}
