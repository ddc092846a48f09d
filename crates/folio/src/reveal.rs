//! One-shot entrance triggers for page sections.

/// Fraction of a section that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Latch that fires the first time its section becomes visible.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one intersection observation.
    ///
    /// Returns `true` only for the observation that flips the latch.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        if self.revealed || visible_ratio < REVEAL_THRESHOLD {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Entrance motion of a revealed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entrance {
    /// Fade in while rising by the given offset in px.
    Rise(f64),
    /// Fade in while sliding horizontally (negative = from the left).
    Slide(f64),
    /// Fade in while growing from the given scale.
    Grow(f64),
    Fade,
}

/// Timing of one entrance, mirroring a staggered CSS transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub entrance: Entrance,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Motion {
    pub const fn rise() -> Self {
        Self {
            entrance: Entrance::Rise(50.),
            duration_ms: 800,
            delay_ms: 0,
        }
    }

    pub const fn new(entrance: Entrance, duration_ms: u32) -> Self {
        Self {
            entrance,
            duration_ms,
            delay_ms: 0,
        }
    }

    pub const fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Delay for the `index`-th item of a staggered list.
    pub const fn stagger(self, base_ms: u32, step_ms: u32, index: usize) -> Self {
        self.delay(base_ms + step_ms * index as u32)
    }

    /// CSS `transform` before the element is revealed.
    pub fn hidden_transform(&self) -> String {
        match self.entrance {
            Entrance::Rise(offset) => format!("translateY({}px)", offset),
            Entrance::Slide(offset) => format!("translateX({}px)", offset),
            Entrance::Grow(scale) => format!("scale({})", scale),
            Entrance::Fade => "none".to_string(),
        }
    }

    /// CSS `transition` applied when the element is revealed.
    pub fn transition(&self) -> String {
        format!(
            "opacity {d}ms ease-out {delay}ms, transform {d}ms ease-out {delay}ms",
            d = self.duration_ms,
            delay = self.delay_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(0.05));
        assert!(latch.observe(0.2));
        for ratio in [0.0, 0.5, 1.0, 0.3] {
            assert!(!latch.observe(ratio));
        }
        assert!(latch.is_revealed());
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut latch = RevealLatch::new();
        assert!(latch.observe(REVEAL_THRESHOLD));
    }

    #[test]
    fn staggered_delays() {
        let motion = Motion::new(Entrance::Rise(30.), 600).stagger(600, 100, 3);
        assert_eq!(motion.delay_ms, 900);
        assert_eq!(motion.hidden_transform(), "translateY(30px)");
        assert!(motion.transition().contains("600ms ease-out 900ms"));
    }
}
