// theme.rs - Light/dark mode state
//
// One controller owns the mode. Everything else reads a `ThemeMode` snapshot
// per frame or per event and never mutates it.

use std::collections::HashMap;

use crate::tween::{Pulse, PulseFrame};

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Only an exact "light" selects light mode.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// The class that is not ours, removed from the root element on apply.
    pub fn other_class(self) -> &'static str {
        self.toggled().as_str()
    }
}

/// String key/value persistence for the preference.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-process store for tests and the preview renderer.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    pub writes: usize,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values, writes: 0 }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.writes += 1;
        self.values.insert(key.to_string(), value.to_string());
    }
}

pub struct ThemeController<P> {
    mode: ThemeMode,
    store: P,
    key: String,
    pulse: Option<Pulse>,
}

impl<P: PreferenceStore> ThemeController<P> {
    pub fn load(store: P) -> Self {
        Self::load_with_key(store, THEME_KEY)
    }

    pub fn load_with_key(store: P, key: &str) -> Self {
        let mode = ThemeMode::from_stored(store.get(key).as_deref());
        Self {
            mode,
            store,
            key: key.to_string(),
            pulse: None,
        }
    }

    #[inline]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip, persist, and kick off the transition pulse.
    pub fn toggle(&mut self, now_ms: f64) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.pulse = Some(Pulse::start(now_ms));
        self.store.set(&self.key, self.mode.as_str());
        self.mode
    }

    /// Current pulse style; clears itself once finished.
    pub fn pulse(&mut self, now_ms: f64) -> Option<PulseFrame> {
        let frame = self.pulse.as_ref().and_then(|p| p.sample(now_ms));
        if frame.is_none() {
            self.pulse = None;
        }
        frame
    }

    pub fn pulsing(&self) -> bool {
        self.pulse.is_some()
    }

    pub fn store(&self) -> &P {
        &self.store
    }
}
