//! Theme preference store and the provider that reflects it onto the
//! document root's class list.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Light/dark preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Styling marker applied to the document root for this theme.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Holds the current theme preference.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThemeStore {
    current: Theme,
}

impl ThemeStore {
    pub fn new(theme: Theme) -> Self {
        Self { current: theme }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
    }
}

/// Class list of a document root element.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClassList(BTreeSet<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, class: &str) {
        self.0.insert(class.to_string());
    }

    pub fn remove(&mut self, class: &str) {
        self.0.remove(class);
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for class in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
            first = false;
        }
        Ok(())
    }
}

/// Reflects the theme store onto a document root.
///
/// Until `mount()` is called every sync is a no-op, so the class list is
/// never touched before the client environment is ready. The provider
/// never gates content rendering; the mount gate only avoids stamping a
/// theme early.
#[derive(Debug, Default)]
pub struct ThemeProvider {
    mounted: bool,
}

impl ThemeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self) {
        self.mounted = true;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Toggle the two mutually exclusive theme markers so that exactly
    /// the marker for `theme` remains.
    pub fn sync(&self, root: &mut ClassList, theme: Theme) {
        if !self.mounted {
            return;
        }
        root.remove(Theme::Light.class());
        root.remove(Theme::Dark.class());
        root.add(theme.class());
    }
}
