//! Theme switch and the colors that depend on it.

use std::rc::Rc;

use folio::theme::ThemeContext;
use folio_browser::media;
use folio_browser::storage::LocalStorage;
use folio_browser::zoon::{eprintln, println, *};

pub const ACCENT_GRADIENT: &str = "linear-gradient(90deg, #9333ea, #2563eb)";
pub const PROGRESS_GRADIENT: &str = "linear-gradient(90deg, #9333ea, #2563eb, #0d9488)";
pub const BADGE_GRADIENT: &str = "linear-gradient(135deg, #a855f7, #3b82f6)";
pub const CURSOR_COLOR: &str = "#7356f1";

/// `ThemeContext` bridged into a `Mutable` so views can react to it.
#[derive(Clone)]
pub struct ThemeSwitch {
    context: ThemeContext,
    dark: Mutable<bool>,
}

impl ThemeSwitch {
    pub fn load() -> Self {
        let context = ThemeContext::load(Rc::new(LocalStorage), media::prefers_dark());
        let dark = Mutable::new(context.is_dark());
        context.on_change({
            let dark = dark.clone();
            move |theme| dark.set_neq(theme.is_dark())
        });
        println!("[THEME] starting in {} mode", context.theme());
        Self { context, dark }
    }

    pub fn toggle(&self) {
        match self.context.toggle() {
            Ok(theme) => println!("[THEME] switched to {theme}"),
            Err(error) => eprintln!("[THEME] theme not persisted: {error}"),
        }
    }

    pub fn is_dark(&self) -> impl Signal<Item = bool> + use<> {
        self.dark.signal()
    }

    pub fn pick<T: Clone + 'static>(&self, dark: T, light: T) -> impl Signal<Item = T> + use<T> {
        self.dark
            .signal()
            .map(move |is_dark| if is_dark { dark.clone() } else { light.clone() })
    }

    pub fn page_background(&self) -> impl Signal<Item = Rgba> + use<> {
        self.pick(color!("#111827"), color!("#f9fafb"))
    }

    pub fn heading_text(&self) -> impl Signal<Item = Rgba> + use<> {
        self.pick(color!("#ffffff"), color!("#111827"))
    }

    pub fn body_text(&self) -> impl Signal<Item = Rgba> + use<> {
        self.pick(color!("#d1d5db"), color!("#4b5563"))
    }

    pub fn muted_text(&self) -> impl Signal<Item = Rgba> + use<> {
        self.pick(color!("#9ca3af"), color!("#4b5563"))
    }

    pub fn card_background(&self) -> impl Signal<Item = Rgba> + use<> {
        self.pick(color!("rgba(31, 41, 55, 0.3)"), color!("rgba(255, 255, 255, 0.3)"))
    }

    pub fn card_hover_background(&self) -> impl Signal<Item = Rgba> + use<> {
        self.pick(color!("rgba(31, 41, 55, 0.5)"), color!("rgba(255, 255, 255, 0.5)"))
    }

    pub fn border(&self) -> impl Signal<Item = &'static str> + use<> {
        self.pick("1px solid #374151", "1px solid #e5e7eb")
    }

    pub fn chip_background(&self) -> impl Signal<Item = Rgba> + use<> {
        self.pick(color!("#374151"), color!("#f3f4f6"))
    }

    pub fn solid_surface(&self) -> impl Signal<Item = Rgba> + use<> {
        self.pick(color!("#1f2937"), color!("#ffffff"))
    }

    pub fn header_background(&self) -> impl Signal<Item = Rgba> + use<> {
        self.pick(color!("rgba(17, 24, 39, 0.95)"), color!("rgba(255, 255, 255, 0.95)"))
    }
}
