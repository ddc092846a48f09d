//! Character-by-character text reveal for the hero subtitle.

pub const TYPEWRITER_STEP_MS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: &'static str,
    shown_chars: usize,
}

impl Typewriter {
    pub fn new(text: &'static str) -> Self {
        Self {
            text,
            shown_chars: 0,
        }
    }

    /// Reveals one more character. Returns `false` once the text is complete.
    pub fn advance(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.shown_chars += 1;
        true
    }

    pub fn is_done(&self) -> bool {
        self.shown_chars >= self.text.chars().count()
    }

    /// Prefix typed so far. Always ends on a char boundary.
    pub fn visible_text(&self) -> &'static str {
        match self.text.char_indices().nth(self.shown_chars) {
            Some((end, _)) => &self.text[..end],
            None => self.text,
        }
    }

    /// Total time needed to type the whole text.
    pub fn duration_ms(&self) -> u32 {
        self.text.chars().count() as u32 * TYPEWRITER_STEP_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_one_char_per_step() {
        let mut typewriter = Typewriter::new("AI/ML");
        assert_eq!(typewriter.visible_text(), "");
        assert!(typewriter.advance());
        assert!(typewriter.advance());
        assert_eq!(typewriter.visible_text(), "AI");
        while typewriter.advance() {}
        assert_eq!(typewriter.visible_text(), "AI/ML");
        assert!(typewriter.is_done());
        assert!(!typewriter.advance());
    }

    #[test]
    fn respects_multibyte_chars() {
        let mut typewriter = Typewriter::new("a♥b");
        typewriter.advance();
        typewriter.advance();
        assert_eq!(typewriter.visible_text(), "a♥");
        assert_eq!(typewriter.duration_ms(), 300);
    }
}
