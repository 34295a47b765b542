use std::{fmt, path::PathBuf, str::FromStr};

use crate::management::token::StoreError;

/// How a library listing is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    Table,
    #[default]
    Grid,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "table" => Ok(ViewMode::Table),
            "grid" => Ok(ViewMode::Grid),
            other => Err(format!("invalid view mode '{}'", other)),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Table => write!(f, "table"),
            ViewMode::Grid => write!(f, "grid"),
        }
    }
}

/// Per-scope persisted view mode for the library screens.
///
/// Each scope (tracks, albums, artists, ...) keeps its own persisted value.
/// Switching the active scope re-reads the value for the new scope; nothing
/// of the old scope's in-memory state carries over. Values are validated on
/// read, anything unparseable falls back to the default mode.
pub struct ViewModeStore {
    base: PathBuf,
    key: String,
    mode: ViewMode,
}

impl ViewModeStore {
    pub async fn open(key: &str) -> Self {
        let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        base.push("mikocli");
        Self::open_at(base, key).await
    }

    pub async fn open_at(base: PathBuf, key: &str) -> Self {
        let mode = read_mode(&base, key).await;
        Self {
            base,
            key: key.to_string(),
            mode,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switches the active scope and adopts the persisted value of the new
    /// scope.
    pub async fn set_key(&mut self, key: &str) {
        self.key = key.to_string();
        self.mode = read_mode(&self.base, key).await;
    }

    /// Sets and persists the mode for the active scope.
    pub async fn set_mode(&mut self, mode: ViewMode) -> Result<(), StoreError> {
        let path = mode_path(&self.base, &self.key);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(StoreError::IoError)?;
        }

        let json = serde_json::to_string_pretty(&mode.to_string())
            .map_err(StoreError::SerdeError)?;
        async_fs::write(path, json)
            .await
            .map_err(StoreError::IoError)?;

        self.mode = mode;
        Ok(())
    }
}

async fn read_mode(base: &PathBuf, key: &str) -> ViewMode {
    let Ok(content) = async_fs::read_to_string(mode_path(base, key)).await else {
        return ViewMode::default();
    };
    let Ok(raw) = serde_json::from_str::<String>(&content) else {
        return ViewMode::default();
    };
    raw.parse().unwrap_or_default()
}

fn mode_path(base: &PathBuf, key: &str) -> PathBuf {
    base.join(format!("prefs/library-view-{}.json", key))
}

/// Color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(format!("invalid theme '{}'", other)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
            Theme::System => write!(f, "system"),
        }
    }
}

/// Persisted theme preference with the cycling toggle
/// light -> dark -> system -> light.
pub struct ThemeStore {
    base: PathBuf,
}

impl ThemeStore {
    pub fn new() -> Self {
        let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        base.push("mikocli");
        Self { base }
    }

    pub fn at(base: PathBuf) -> Self {
        Self { base }
    }

    /// Reads the stored theme; missing or invalid values fall back to the
    /// default.
    pub async fn load(&self) -> Theme {
        let Ok(content) = async_fs::read_to_string(self.theme_path()).await else {
            return Theme::default();
        };
        let Ok(raw) = serde_json::from_str::<String>(&content) else {
            return Theme::default();
        };
        raw.parse().unwrap_or_default()
    }

    pub async fn set(&self, theme: Theme) -> Result<(), StoreError> {
        let path = self.theme_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(StoreError::IoError)?;
        }

        let json = serde_json::to_string_pretty(&theme.to_string())
            .map_err(StoreError::SerdeError)?;
        async_fs::write(path, json)
            .await
            .map_err(StoreError::IoError)
    }

    pub async fn toggle(&self) -> Result<Theme, StoreError> {
        let next = match self.load().await {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        };
        self.set(next).await?;
        Ok(next)
    }

    fn theme_path(&self) -> PathBuf {
        self.base.join("prefs/theme.json")
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}
