use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use super::error::Error;
use super::error::Result;
use super::state::ColorModeOption;
use super::state::SectionId;

/// The four durable preferences. Keys are shared with the web dashboard's
/// local storage so exported values stay interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PreferenceKey {
    LoggedIn,
    ActiveSection,
    SidebarCollapsed,
    ColorMode,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 4] = [
        Self::LoggedIn,
        Self::ActiveSection,
        Self::SidebarCollapsed,
        Self::ColorMode,
    ];

    pub fn storage_key(self) -> &'static str {
        match self {
            Self::LoggedIn => "flota-admin-logged-in",
            Self::ActiveSection => "flota-admin-active-section",
            Self::SidebarCollapsed => "flota-admin-sidebar-collapsed",
            Self::ColorMode => "flota-admin-color-mode",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LoggedIn => "logged in",
            Self::ActiveSection => "active section",
            Self::SidebarCollapsed => "sidebar collapsed",
            Self::ColorMode => "color mode",
        }
    }
}

/// Durable key-value storage for the shell. A missing key is the normal
/// first-run state, so neither operation can fail from the caller's point of
/// view; implementations absorb their own I/O errors.
pub trait PreferenceStore {
    fn get(&self, key: PreferenceKey) -> Option<String>;
    fn set(&mut self, key: PreferenceKey, value: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<PreferenceKey, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: PreferenceKey) -> Option<String> {
        self.values.get(&key).cloned()
    }

    fn set(&mut self, key: PreferenceKey, value: &str) {
        self.values.insert(key, value.to_string());
    }
}

/// Preferences kept in a single JSON object of string values. Every `set`
/// rewrites the whole file. Once a write fails the store stops touching the
/// disk and keeps serving values from memory for the rest of the session.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
    degraded: bool,
}

impl FilePreferenceStore {
    /// A missing file is a first run. A file that is not a JSON object of
    /// strings is an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw).map_err(|err| Error::PreferenceStore {
                    path: path.clone(),
                    message: err.to_string(),
                })?
            }
        } else {
            BTreeMap::new()
        };
        tracing::debug!(path = %path.display(), entries = values.len(), "opened preference store");
        Ok(Self {
            path,
            values,
            degraded: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let body = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("json.tmp");
        let written = write_private(&tmp, body.as_bytes())
            .and_then(|()| std::fs::rename(&tmp, &self.path));
        if let Err(err) = written {
            let _ = std::fs::remove_file(&tmp);
            return Err(err.into());
        }
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: PreferenceKey) -> Option<String> {
        self.values.get(key.storage_key()).cloned()
    }

    fn set(&mut self, key: PreferenceKey, value: &str) {
        self.values
            .insert(key.storage_key().to_string(), value.to_string());
        if self.degraded {
            return;
        }
        if let Err(err) = self.flush() {
            tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "preference write failed; keeping preferences in memory for this session"
            );
            self.degraded = true;
        }
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: PreferenceKey) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: PreferenceKey, value: &str) {
        (**self).set(key, value);
    }
}

fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut opts = OpenOptions::new();
    opts.create(true).write(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o600);
    }
    let mut file = opts.open(path)?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(())
}

/// The only value ever written for the logged-in key; logging out is not
/// persisted, so the key is either this or absent.
pub const LOGGED_IN: &str = "true";

/// Only the exact string `"true"` counts as logged in.
pub fn decode_logged_in(raw: Option<&str>) -> bool {
    raw == Some(LOGGED_IN)
}

pub fn encode_sidebar_collapsed(collapsed: bool) -> String {
    serde_json::Value::Bool(collapsed).to_string()
}

pub fn decode_sidebar_collapsed(raw: Option<&str>) -> Option<bool> {
    raw.and_then(|value| serde_json::from_str::<bool>(value).ok())
}

pub fn decode_section(raw: Option<&str>) -> Option<SectionId> {
    raw.and_then(SectionId::parse)
}

pub fn decode_color_mode(raw: Option<&str>) -> Option<ColorModeOption> {
    raw.and_then(ColorModeOption::parse)
}

/// The four preferences decoded, with absent or undecodable values replaced
/// by their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreferenceSnapshot {
    pub logged_in: bool,
    /// `None` when the stored token is absent or not a known section.
    pub active_section: Option<SectionId>,
    pub sidebar_collapsed: bool,
    pub color_mode: ColorModeOption,
}

impl PreferenceSnapshot {
    pub fn read<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        let logged_in = store.get(PreferenceKey::LoggedIn);
        let section = store.get(PreferenceKey::ActiveSection);
        let collapsed = store.get(PreferenceKey::SidebarCollapsed);
        let color_mode = store.get(PreferenceKey::ColorMode);
        Self {
            logged_in: decode_logged_in(logged_in.as_deref()),
            active_section: decode_section(section.as_deref()),
            sidebar_collapsed: decode_sidebar_collapsed(collapsed.as_deref()).unwrap_or(false),
            color_mode: decode_color_mode(color_mode.as_deref()).unwrap_or_default(),
        }
    }
}
