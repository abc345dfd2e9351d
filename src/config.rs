//! User configuration — keybindings, feed defaults, and persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/photo-feed/config.toml` (default `~/.config/photo-feed/config.toml`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

use crate::core::spring::{SpringError, SpringSpec};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid indicator spring: {0}")]
    Spring(#[from] SpringError),
}

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions on the feed screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    PrevTab,
    NextTab,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used for serialisation).
    pub const ALL: &[Action] = &[Action::PrevTab, Action::NextTab, Action::Quit];

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::PrevTab => "prev_tab",
            Action::NextTab => "next_tab",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        match s {
            "prev_tab" => Some(Action::PrevTab),
            "next_tab" => Some(Action::NextTab),
            "quit" => Some(Action::Quit),
            _ => None,
        }
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT modifiers
    /// are compared.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// User-friendly display string (e.g. `"←"`, `"Ctrl+c"`, `"q"`).
    pub fn display(&self) -> String {
        let mut s = modifier_prefix(self.modifiers);
        s.push_str(&match self.code {
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::Backspace => "Bksp".into(),
            code => key_name(code),
        });
        s
    }

    /// Serialise to config-file format (e.g. `"Shift+Tab"`, `"q"`).
    fn to_config_string(&self) -> String {
        let mut s = modifier_prefix(self.modifiers);
        s.push_str(&key_name(self.code));
        s
    }

    /// Parse a key string like `"Ctrl+c"`, `"Left"`, `"q"`, `"Tab"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "backspace" | "bksp" => KeyCode::Backspace,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "space" => KeyCode::Char(' '),
            s if s.starts_with('f') && s.len() > 1 => {
                let n: u8 = s[1..].parse().ok()?;
                KeyCode::F(n)
            }
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

fn modifier_prefix(modifiers: KeyModifiers) -> String {
    let mut s = String::new();
    if modifiers.contains(KeyModifiers::CONTROL) {
        s.push_str("Ctrl+");
    }
    if modifiers.contains(KeyModifiers::ALT) {
        s.push_str("Alt+");
    }
    if modifiers.contains(KeyModifiers::SHIFT) {
        s.push_str("Shift+");
    }
    s
}

fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".into(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "Up".into(),
        KeyCode::Down => "Down".into(),
        KeyCode::Left => "Left".into(),
        KeyCode::Right => "Right".into(),
        KeyCode::Enter => "Enter".into(),
        KeyCode::Esc => "Esc".into(),
        KeyCode::Tab => "Tab".into(),
        KeyCode::BackTab => "BackTab".into(),
        KeyCode::Backspace => "Backspace".into(),
        KeyCode::Home => "Home".into(),
        KeyCode::End => "End".into(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    }
}

// ───────────────────────────────────────── config ────────────

pub const DEFAULT_GROUPS: &[&str] = &["sports", "portrait", "b/w", "neon city"];
pub const DEFAULT_SELECTED: &str = "b/w";
pub const DEFAULT_USER_NAME: &str = "Alice";
pub const DEFAULT_TICK_MS: u64 = 16;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Name shown in the feed header.
    pub user_name: String,
    /// Photo groups shown as tabs, in order.
    pub groups: Vec<String>,
    /// Group selected at startup.
    pub selected_group: String,
    /// Spring driving the tab indicator.
    pub indicator_spring: SpringSpec,
    /// Animation frame interval.
    pub tick_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            user_name: DEFAULT_USER_NAME.to_string(),
            groups: DEFAULT_GROUPS.iter().map(|g| g.to_string()).collect(),
            selected_group: DEFAULT_SELECTED.to_string(),
            indicator_spring: SpringSpec::indicator(),
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(PrevTab, vec![KeyBind::new(Left, n), KeyBind::new(Char('h'), n), KeyBind::new(BackTab, KeyModifiers::SHIFT)]);
        m.insert(NextTab, vec![KeyBind::new(Right, n), KeyBind::new(Char('l'), n), KeyBind::new(Tab, n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n), KeyBind::new(Esc, n)]);

        m
    }

    /// Find the action that matches a key event.  When multiple bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Short display of the first binding only (for the status bar).
    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: switch group | 1-9: jump | click: select | {}: quit",
            self.short_binding(Action::PrevTab),
            self.short_binding(Action::NextTab),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from the default path, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{err}; using default config");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&contents))
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(path)
    }

    /// Parse config text.  Unknown keys are ignored; malformed values keep
    /// their defaults.
    pub fn parse(s: &str) -> Self {
        let mut config = Self::default();
        let mut damping = config.indicator_spring.damping_ratio();
        let mut stiffness = config.indicator_spring.stiffness();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match key {
                "user_name" => {
                    if !value.is_empty() {
                        config.user_name = value.to_string();
                    }
                    continue;
                }
                "groups" => {
                    let groups: Vec<String> = value
                        .split(',')
                        .map(|g| g.trim().trim_matches('"').to_string())
                        .filter(|g| !g.is_empty())
                        .collect();
                    if !groups.is_empty() {
                        config.groups = groups;
                    }
                    continue;
                }
                "selected_group" => {
                    config.selected_group = value.to_string();
                    continue;
                }
                "indicator_damping" => {
                    match value.parse::<f64>() {
                        Ok(v) => damping = v,
                        Err(_) => tracing::warn!("ignoring indicator_damping = {value:?}"),
                    }
                    continue;
                }
                "indicator_stiffness" => {
                    match value.parse::<f64>() {
                        Ok(v) => stiffness = v,
                        Err(_) => tracing::warn!("ignoring indicator_stiffness = {value:?}"),
                    }
                    continue;
                }
                "tick_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.tick_ms = v.clamp(8, 200);
                    }
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                continue;
            };

            let parsed: Vec<KeyBind> = value
                .split(',')
                .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                .collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        match SpringSpec::new(damping, stiffness) {
            Ok(spec) => config.indicator_spring = spec,
            Err(err) => tracing::warn!("{}; using default indicator spring", ConfigError::from(err)),
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# photo-feed configuration".to_string(),
            String::new(),
            "# Feed".to_string(),
            format!("user_name = {}", self.user_name),
            format!("groups = {}", self.groups.join(", ")),
            format!("selected_group = {}", self.selected_group),
            String::new(),
            "# Animation".to_string(),
            format!("indicator_damping = {}", self.indicator_spring.damping_ratio()),
            format!("indicator_stiffness = {}", self.indicator_spring.stiffness()),
            format!("tick_ms = {}", self.tick_ms),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/photo-feed/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("photo-feed").join("config.toml")
}
