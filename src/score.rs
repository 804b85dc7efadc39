use std::time::Instant;

use crate::config::SCORE_TICK_MS;

/// Turns wall-clock time into points, independent of how often frames are
/// drawn. A point is worth `SCORE_TICK_MS` milliseconds; leftover time below
/// a whole point is dropped when the clock is read.
pub struct ScoreClock {
    score: u32,
    last_update: Instant,
}

impl ScoreClock {
    pub fn new(now: Instant) -> Self {
        ScoreClock { score: 0, last_update: now }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn update(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_update).as_millis();
        if elapsed >= SCORE_TICK_MS {
            self.score = self.score.saturating_add((elapsed / SCORE_TICK_MS) as u32);
            self.last_update = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn starts_at_zero() {
        assert_eq!(ScoreClock::new(Instant::now()).score(), 0);
    }

    #[test]
    fn short_frames_accumulate_until_a_tick() {
        let start = Instant::now();
        let mut clock = ScoreClock::new(start);
        for frame in 1..=3 {
            clock.update(start + ms(16 * frame));
        }
        assert_eq!(clock.score(), 0);
        clock.update(start + ms(64));
        assert_eq!(clock.score(), 1);
    }

    #[test]
    fn long_gap_awards_several_points() {
        let start = Instant::now();
        let mut clock = ScoreClock::new(start);
        clock.update(start + ms(250));
        assert_eq!(clock.score(), 4);
    }

    #[test]
    fn remainder_is_dropped_on_update() {
        let start = Instant::now();
        let mut clock = ScoreClock::new(start);
        clock.update(start + ms(119));
        clock.update(start + ms(119 + 59));
        assert_eq!(clock.score(), 1);
        clock.update(start + ms(119 + 60));
        assert_eq!(clock.score(), 2);
    }

    #[test]
    fn never_decreases() {
        let start = Instant::now();
        let mut clock = ScoreClock::new(start);
        let mut last = 0;
        for frame in 0..1_000u64 {
            clock.update(start + ms(frame * 17));
            assert!(clock.score() >= last);
            last = clock.score();
        }
        assert!(last > 0);
    }

    #[test]
    fn clock_going_backwards_is_ignored() {
        let start = Instant::now() + ms(1_000);
        let mut clock = ScoreClock::new(start);
        clock.update(start - ms(500));
        assert_eq!(clock.score(), 0);
    }
}
