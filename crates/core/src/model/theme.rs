/// Persisted theme preference.
///
/// Stored as `"light"`/`"dark"`. Anything else in storage falls back to the
/// light default so a stale or hand-edited value never breaks startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// The value written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Reads a stored value, defaulting unknown strings to light.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        match value {
            "dark" => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemePreference::Dark)
    }
}
