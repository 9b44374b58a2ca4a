// File: crates/chart-core/src/theme.rs
// Summary: Day/Night color themes and the appearance registry that notifies subscribers on switch.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(rgb: u32) -> Self {
        Self { r: (rgb >> 16) as u8, g: (rgb >> 8) as u8, b: rgb as u8, a: 255 }
    }

    /// Parse `#RRGGBB` or `RRGGBB`, as found in chart data files.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_hex)
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub main: Rgba,
    pub accent: Rgba,
    pub text: Rgba,
    pub background: Rgba,
    pub separator: Rgba,
    pub grid_line: Rgba,
    pub origin_line: Rgba,
    pub grid_text: Rgba,
    pub box_text: Rgba,
    pub trimmer: Rgba,
    pub trimmer_fade: Rgba,
}

impl Theme {
    pub fn day() -> Self {
        Self {
            name: "day",
            main: Rgba::from_hex(0xFEFEFE),
            accent: Rgba::from_hex(0x027EE5),
            text: Rgba::from_hex(0x000000),
            background: Rgba::from_hex(0xEFEFF4),
            separator: Rgba::from_hex(0xCCCCD1),
            grid_line: Rgba::from_hex(0xF3F3F3),
            origin_line: Rgba::from_hex(0xE1E2E3),
            grid_text: Rgba::from_hex(0x989EA3),
            box_text: Rgba::from_hex(0x69696E),
            trimmer: Rgba::from_hex(0xC9D3DC).with_alpha(0.92),
            trimmer_fade: Rgba::from_hex(0xEAF0F6).with_alpha(0.8),
        }
    }

    pub fn night() -> Self {
        Self {
            name: "night",
            main: Rgba::from_hex(0x213040),
            accent: Rgba::from_hex(0x1891FF),
            text: Rgba::from_hex(0xFEFEFE),
            background: Rgba::from_hex(0x18222D),
            separator: Rgba::from_hex(0x121A23),
            grid_line: Rgba::from_hex(0x1B2734),
            origin_line: Rgba::from_hex(0x131B23),
            grid_text: Rgba::from_hex(0x5D6D7E),
            box_text: Rgba::from_hex(0xFEFEFE),
            trimmer: Rgba::from_hex(0x3B4A5A).with_alpha(0.92),
            trimmer_fade: Rgba::from_hex(0x172332).with_alpha(0.8),
        }
    }

    /// The other preset.
    pub fn toggled(&self) -> Self {
        if self.name == "night" { Theme::day() } else { Theme::night() }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::day(), Theme::night()]
}

/// Find a theme by its `name`, falling back to night.
pub fn find(name: &str) -> Theme {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name)).unwrap_or_else(Theme::night)
}

/// Opaque handle returned by [`AppearanceRegistry::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Theme) + Send>;

/// Current theme plus explicit subscribers. Subscribers are called once on subscribe and again on
/// every switch until they unsubscribe.
pub struct AppearanceRegistry {
    theme: Theme,
    next_id: u64,
    listeners: BTreeMap<SubscriptionId, Listener>,
}

impl Default for AppearanceRegistry {
    fn default() -> Self { Self::new(Theme::night()) }
}

impl fmt::Debug for AppearanceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppearanceRegistry")
            .field("theme", &self.theme.name)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}

impl AppearanceRegistry {
    pub fn new(theme: Theme) -> Self {
        Self { theme, next_id: 0, listeners: BTreeMap::new() }
    }

    pub fn theme(&self) -> &Theme { &self.theme }

    pub fn subscribe(&mut self, mut listener: impl FnMut(&Theme) + Send + 'static) -> SubscriptionId {
        listener(&self.theme);
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, Box::new(listener));
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    pub fn subscriber_count(&self) -> usize { self.listeners.len() }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        debug!(theme = theme.name, subscribers = self.listeners.len(), "theme switched");
        for listener in self.listeners.values_mut() {
            listener(&self.theme);
        }
    }

    /// Day ↔ night.
    pub fn switch_theme(&mut self) {
        self.set_theme(self.theme.toggled());
    }
}
