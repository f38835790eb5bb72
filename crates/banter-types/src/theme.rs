/// UI color theme. Global, not session-scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    NeonSunset,
}

impl Theme {
    /// Fixed cycle order: light → dark → neon-sunset → light
    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::NeonSunset,
            Theme::NeonSunset => Theme::Light,
        }
    }

    /// The literal stored in the persistent store
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::NeonSunset => "neon-sunset",
        }
    }

    /// Unknown stored values fall back to light
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            "neon-sunset" => Theme::NeonSunset,
            _ => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::NeonSunset => "Neon Sunset",
        }
    }
}
