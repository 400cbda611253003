//! Animation engines behind the page effects. Each one is a plain state
//! machine advanced by its owner's timer, observer or frame callback, so the
//! browser glue in `app::effects` only schedules and renders.

pub mod boot;
pub mod decrypt;
pub mod reveal;
pub mod rain;
pub mod ticker;
pub mod typewriter;
pub mod visibility;

pub use boot::{BootSequence, Checkpoint};
pub use decrypt::Decrypter;
pub use rain::{RainField, Surface};
pub use reveal::{MountGate, Reveal, RevealStyle};
pub use ticker::{Ticker, TimerCmd};
pub use typewriter::Typewriter;
pub use visibility::VisibilityLatch;

/// Outcome of advancing a timer-driven engine. `Done` means the owner should
/// cancel the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Running,
    Done,
}

#[cfg(test)]
mod tests {
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    use super::*;
    use crate::contact::{ContactMessage, FormState, Transmission};
    use crate::content::portfolio;
    use crate::sections::SectionId;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Event {
        BootTick,
        BootSettled,
        ScrolledIntoView(SectionIdx),
        Submit,
        Transmitted,
    }

    // SectionId is not Ord; index into NAV instead.
    type SectionIdx = usize;

    /// Virtual-time stand-in for the browser's timer queue.
    struct Timeline<E> {
        now: u64,
        seq: u64,
        queue: BinaryHeap<Reverse<(u64, u64, E)>>,
    }

    impl<E: Ord> Timeline<E> {
        fn new() -> Self {
            Self {
                now: 0,
                seq: 0,
                queue: BinaryHeap::new(),
            }
        }

        fn at(&mut self, when: u64, ev: E) {
            self.seq += 1;
            self.queue.push(Reverse((when, self.seq, ev)));
        }

        fn after(&mut self, delay: u64, ev: E) {
            self.at(self.now + delay, ev);
        }

        fn pop_until(&mut self, limit: u64) -> Option<E> {
            match self.queue.peek() {
                Some(Reverse((when, _, _))) if *when <= limit => {
                    let Reverse((when, _, ev)) = self.queue.pop()?;
                    self.now = when;
                    Some(ev)
                }
                _ => {
                    self.now = self.now.max(limit);
                    None
                }
            }
        }
    }

    struct Page {
        boot: BootSequence,
        booted_at: Option<u64>,
        latches: Vec<VisibilityLatch>,
        transmission: Transmission,
        sent_at: Option<u64>,
    }

    #[test]
    fn test_boot_reveal_and_contact_end_to_end() {
        let content = portfolio().expect("embedded content");
        let timings = content.timings;
        let about = SectionId::NAV
            .iter()
            .position(|s| *s == SectionId::About)
            .unwrap();
        let contact = SectionId::NAV
            .iter()
            .position(|s| *s == SectionId::Contact)
            .unwrap();

        let mut page = Page {
            boot: BootSequence::new(content.boot.clone()),
            booted_at: None,
            latches: vec![VisibilityLatch::new(); SectionId::NAV.len()],
            transmission: Transmission::new(),
            sent_at: None,
        };
        let mut tl = Timeline::new();
        tl.after(timings.boot_tick_ms, Event::BootTick);

        let drive = |tl: &mut Timeline<Event>, page: &mut Page, limit: u64| {
            while let Some(ev) = tl.pop_until(limit) {
                match ev {
                    Event::BootTick => match page.boot.tick() {
                        Tick::Running => tl.after(timings.boot_tick_ms, Event::BootTick),
                        Tick::Done => tl.after(timings.boot_settle_ms, Event::BootSettled),
                    },
                    Event::BootSettled => {
                        assert!(page.boot.complete());
                        page.booted_at = Some(tl.now);
                    }
                    Event::ScrolledIntoView(i) => {
                        page.latches[i].observe(true);
                        page.latches[i].detach();
                    }
                    Event::Submit => {
                        let msg = ContactMessage {
                            name: "Alice".to_string(),
                            email: "alice@example.com".to_string(),
                            message: "Hello".to_string(),
                        };
                        page.transmission.submit(&msg).unwrap();
                        tl.after(timings.transmit_delay_ms, Event::Transmitted);
                    }
                    Event::Transmitted => {
                        assert!(page.transmission.complete());
                        page.sent_at = Some(tl.now);
                    }
                }
            }
        };

        // six ticks show every checkpoint
        let sixth_tick = 6 * timings.boot_tick_ms;
        drive(&mut tl, &mut page, sixth_tick);
        assert_eq!(page.boot.progress(), 100);
        assert_eq!(page.boot.label(), "Access granted.");
        assert!(!page.boot.is_complete());

        // not a millisecond early
        drive(&mut tl, &mut page, sixth_tick + timings.boot_settle_ms - 1);
        assert!(page.booted_at.is_none());
        drive(&mut tl, &mut page, sixth_tick + timings.boot_settle_ms);
        assert_eq!(page.booted_at, Some(sixth_tick + timings.boot_settle_ms));

        // scroll the about section into view
        let reveal = Reveal::up(0);
        assert_eq!(reveal.style(page.latches[about].is_visible()).opacity, 0.0);
        tl.at(3000, Event::ScrolledIntoView(about));
        drive(&mut tl, &mut page, 3000);
        assert_eq!(reveal.style(page.latches[about].is_visible()).opacity, 1.0);
        assert!(!page.latches[contact].is_visible());

        // submit the contact form
        tl.at(3100, Event::ScrolledIntoView(contact));
        tl.at(3200, Event::Submit);
        drive(&mut tl, &mut page, 3200);
        assert_eq!(page.transmission.state(), FormState::Sending);
        assert!(page
            .transmission
            .transcript()
            .iter()
            .any(|line| line.contains("Alice")));

        let submitted = 3200;
        drive(&mut tl, &mut page, submitted + timings.transmit_delay_ms - 1);
        assert_eq!(page.transmission.state(), FormState::Sending);
        assert!(page.sent_at.is_none());

        drive(&mut tl, &mut page, submitted + timings.transmit_delay_ms);
        assert_eq!(page.transmission.state(), FormState::Sent);
        assert_eq!(page.sent_at, Some(submitted + 2000));

        // revealed sections stay revealed
        assert!(page.latches[about].is_visible());
        assert!(page.latches[contact].is_visible());
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Lane {
        Title,
        Subtitle,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum TimerEvent {
        DelayElapsed(Lane),
        Interval(Lane),
    }

    struct Typing {
        ticker: Ticker,
        engine: Typewriter,
    }

    #[test]
    fn test_hero_typewriters_on_virtual_clock() {
        let content = portfolio().expect("embedded content");
        let timings = content.timings;
        let title_len = content.hero.title.chars().count() as u64;
        let subtitle_len = content.hero.subtitle.chars().count() as u64;

        let mut lanes = [
            Typing {
                ticker: Ticker::new(timings.title_tick_ms, 0),
                engine: Typewriter::new(content.hero.title.clone()),
            },
            Typing {
                ticker: Ticker::new(timings.subtitle_tick_ms, timings.subtitle_delay_ms),
                engine: Typewriter::new(content.hero.subtitle.clone()),
            },
        ];
        let idx = |lane: Lane| lane as usize;
        let mut tl = Timeline::new();

        let apply = |tl: &mut Timeline<TimerEvent>, lane: Lane, period: u64, cmd: TimerCmd| match cmd {
            TimerCmd::Resume => tl.after(period, TimerEvent::Interval(lane)),
            TimerCmd::Arm(delay) => tl.after(delay, TimerEvent::DelayElapsed(lane)),
            TimerCmd::Pause | TimerCmd::Nothing => {}
        };

        // hero visible at t=0 starts both lanes
        for lane in [Lane::Title, Lane::Subtitle] {
            let t = &mut lanes[idx(lane)];
            let cmd = t.ticker.start();
            apply(&mut tl, lane, t.ticker.period_ms(), cmd);
        }

        let drive = |tl: &mut Timeline<TimerEvent>, lanes: &mut [Typing; 2], limit: u64| {
            while let Some(ev) = tl.pop_until(limit) {
                match ev {
                    TimerEvent::DelayElapsed(lane) => {
                        let t = &mut lanes[idx(lane)];
                        let cmd = t.ticker.delay_elapsed();
                        apply(tl, lane, t.ticker.period_ms(), cmd);
                    }
                    TimerEvent::Interval(lane) => {
                        let t = &mut lanes[idx(lane)];
                        let tick = t.engine.tick();
                        if t.ticker.ticked(tick) != TimerCmd::Pause {
                            tl.after(t.ticker.period_ms(), TimerEvent::Interval(lane));
                        }
                    }
                }
            }
        };

        let subtitle_first = timings.subtitle_delay_ms + timings.subtitle_tick_ms;
        drive(&mut tl, &mut lanes, subtitle_first - 1);
        assert_eq!(lanes[1].engine.text(), "");
        assert!(!lanes[0].engine.text().is_empty());

        drive(&mut tl, &mut lanes, subtitle_first);
        assert_eq!(lanes[1].engine.text(), "D");

        let title_done = title_len * timings.title_tick_ms;
        drive(&mut tl, &mut lanes, title_done - 1);
        assert!(!lanes[0].engine.is_done());
        drive(&mut tl, &mut lanes, title_done);
        assert_eq!(lanes[0].engine.text(), content.hero.title);
        assert!(lanes[0].ticker.is_stopped());

        let subtitle_done = timings.subtitle_delay_ms + subtitle_len * timings.subtitle_tick_ms;
        drive(&mut tl, &mut lanes, subtitle_done - 1);
        assert!(!lanes[1].engine.is_done());
        drive(&mut tl, &mut lanes, subtitle_done);
        assert_eq!(lanes[1].engine.text(), content.hero.subtitle);
        assert!(lanes[1].ticker.is_stopped());

        // both intervals paused: nothing left on the clock
        assert!(tl.queue.is_empty());
    }
}
