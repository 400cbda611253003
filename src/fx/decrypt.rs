use rand::Rng;

use super::Tick;

/// Glyphs shown in place of characters that are still encrypted.
pub const SCRAMBLE_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

/// Build one frame of the scramble-resolve effect.
///
/// Whitespace (including paragraph breaks) passes through untouched at every
/// position. Characters before `resolved` show the target, the rest are drawn
/// uniformly from [`SCRAMBLE_ALPHABET`].
pub fn scramble_frame<R: Rng + ?Sized>(target: &[char], resolved: usize, rng: &mut R) -> String {
    let alphabet = SCRAMBLE_ALPHABET.as_bytes();
    target
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if c.is_whitespace() || i < resolved {
                c
            } else {
                alphabet[rng.gen_range(0..alphabet.len())] as char
            }
        })
        .collect()
}

/// Scramble-resolve text: random glyphs that lock into the target left to
/// right, `stride` characters per tick.
#[derive(Debug, Clone)]
pub struct Decrypter {
    target: Vec<char>,
    stride: usize,
    iteration: usize,
    frame: String,
    done: bool,
}

impl Decrypter {
    pub fn new(target: &str, stride: usize) -> Self {
        Self {
            target: target.chars().collect(),
            stride: stride.max(1),
            iteration: 0,
            frame: String::new(),
            done: false,
        }
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The last rendered frame; empty until the first tick.
    pub fn text(&self) -> &str {
        &self.frame
    }

    /// Render the frame for the current iteration, then advance. The stop
    /// check happens after rendering, so the frame reported with
    /// [`Tick::Done`] is always the fully resolved target even when the
    /// stride steps past the exact length.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Tick {
        if self.done {
            return Tick::Done;
        }
        self.frame = scramble_frame(&self.target, self.iteration, rng);
        if self.iteration >= self.target.len() {
            self.done = true;
            return Tick::Done;
        }
        self.iteration += self.stride;
        Tick::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    const BIO: &str = "Recent MS Cybersecurity graduate.\n\nComfortable operating at the systems level.";

    fn in_alphabet(c: char) -> bool {
        SCRAMBLE_ALPHABET.contains(c)
    }

    #[test]
    fn test_frame_respects_resolved_prefix() {
        let mut rng = StdRng::seed_from_u64(7);
        let target = BIO.chars().collect::<Vec<_>>();
        for k in [0, 1, 5, 17, 34, target.len() - 1] {
            let frame = scramble_frame(&target, k, &mut rng).chars().collect::<Vec<_>>();
            assert_eq!(frame.len(), target.len());
            for (i, (&got, &want)) in frame.iter().zip(target.iter()).enumerate() {
                if want.is_whitespace() {
                    assert_eq!(got, want, "whitespace moved at {i}");
                } else if i < k {
                    assert_eq!(got, want, "resolved char wrong at {i}");
                } else {
                    assert!(in_alphabet(got), "{got:?} not in alphabet at {i}");
                }
            }
        }
    }

    #[test]
    fn test_frame_fully_resolved_past_length() {
        let mut rng = StdRng::seed_from_u64(1);
        let target = BIO.chars().collect::<Vec<_>>();
        assert_eq!(scramble_frame(&target, target.len(), &mut rng), BIO);
        assert_eq!(scramble_frame(&target, target.len() + 1, &mut rng), BIO);
    }

    #[test]
    fn test_final_frame_equals_target_for_both_parities() {
        for target in ["abcd efgh", "abcd efghi", "x", ""] {
            let mut rng = StdRng::seed_from_u64(42);
            let mut dec = Decrypter::new(target, 2);
            let mut ticks = 0;
            while dec.tick(&mut rng) == Tick::Running {
                ticks += 1;
                assert!(ticks < 100, "decrypter never finished");
            }
            assert_eq!(dec.text(), target);
            assert!(dec.is_done());
        }
    }

    #[test]
    fn test_tick_count_with_stride_two() {
        let mut rng = StdRng::seed_from_u64(3);
        // odd length: iterations 0,2,4,6 then 8 >= 7 resolves on the fifth tick
        let mut dec = Decrypter::new("abcdefg", 2);
        let mut ticks = 1;
        while dec.tick(&mut rng) == Tick::Running {
            ticks += 1;
        }
        assert_eq!(ticks, 5);

        // even length: 0,2,4 then 6 >= 6 resolves on the fourth tick
        let mut dec = Decrypter::new("abcdef", 2);
        let mut ticks = 1;
        while dec.tick(&mut rng) == Tick::Running {
            ticks += 1;
        }
        assert_eq!(ticks, 4);
    }

    #[test]
    fn test_paragraph_breaks_survive_every_frame() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut dec = Decrypter::new(BIO, 2);
        let breaks = BIO
            .char_indices()
            .filter(|(_, c)| *c == '\n')
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        while dec.tick(&mut rng) == Tick::Running {
            let frame_breaks = dec
                .text()
                .char_indices()
                .filter(|(_, c)| *c == '\n')
                .map(|(i, _)| i)
                .collect::<Vec<_>>();
            assert_eq!(frame_breaks, breaks);
        }
    }

    #[test]
    fn test_frozen_after_done() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut dec = Decrypter::new("done", 2);
        while dec.tick(&mut rng) == Tick::Running {}
        let iteration = dec.iteration();
        assert_eq!(dec.tick(&mut rng), Tick::Done);
        assert_eq!(dec.iteration(), iteration);
        assert_eq!(dec.text(), "done");
    }

    #[test]
    fn test_zero_stride_is_clamped() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut dec = Decrypter::new("ab", 0);
        dec.tick(&mut rng);
        assert_eq!(dec.iteration(), 1);
    }
}
