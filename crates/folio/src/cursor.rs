//! Custom cursor overlay state.

/// Elements that switch the cursor to its hover look.
pub const INTERACTIVE_SELECTOR: &str =
    r#"a, button, [role="button"], input, textarea, select, .cursor-pointer"#;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorLook {
    pub size: f64,
    pub fill_alpha: f64,
    pub glow: &'static str,
}

const IDLE: CursorLook = CursorLook {
    size: 24.,
    fill_alpha: 0.10,
    glow: "0 0 8px 2px",
};

const HOVERING: CursorLook = CursorLook {
    size: 48.,
    fill_alpha: 0.18,
    glow: "0 0 24px 8px",
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub hovering: bool,
}

impl CursorState {
    /// Cursor parked at the viewport centre until the first pointer move.
    pub fn centered(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            x: viewport_width / 2.,
            y: viewport_height / 2.,
            hovering: false,
        }
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn look(&self) -> CursorLook {
        if self.hovering { HOVERING } else { IDLE }
    }

    /// Top-left corner so that the circle is centred on the pointer.
    pub fn origin(&self) -> (f64, f64) {
        let half = self.look().size / 2.;
        (self.x - half, self.y - half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_centered() {
        let cursor = CursorState::centered(1200., 800.);
        assert_eq!((cursor.x, cursor.y), (600., 400.));
        assert!(!cursor.hovering);
    }

    #[test]
    fn hover_grows_and_recenters() {
        let mut cursor = CursorState::centered(0., 0.);
        cursor.move_to(100., 100.);
        assert_eq!(cursor.origin(), (88., 88.));

        cursor.hovering = true;
        assert_eq!(cursor.look().size, 48.);
        assert_eq!(cursor.origin(), (76., 76.));
        assert!(cursor.look().fill_alpha > IDLE.fill_alpha);
    }
}
