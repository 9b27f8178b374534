/// Application-scoped directory kinds: each resolved path is unique per
/// consuming application.
///
/// [`Runtime`](AppDirKind::Runtime) is the odd one out: it has no `$HOME`
/// fallback, so resolution fails outright when `$XDG_RUNTIME_DIR` is unset.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum AppDirKind {
    Runtime,
    Config,
    Cache,
    Data,
    State,
}

/// User-scoped directory kinds: one shared folder per category of user
/// content, with no per-application segment.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum UserDirKind {
    Desktop,
    Downloads,
    Pictures,
    Videos,
    Music,
    Documents,
}

impl AppDirKind {
    /// Environment variable that overrides the default location.
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::Runtime => "XDG_RUNTIME_DIR",
            Self::Config => "XDG_CONFIG_HOME",
            Self::Cache => "XDG_CACHE_HOME",
            Self::Data => "XDG_DATA_HOME",
            Self::State => "XDG_STATE_HOME",
        }
    }

    /// Default location relative to `$HOME`, used when [`env_var`](Self::env_var)
    /// is unset. `None` for [`Runtime`](Self::Runtime), which must not be
    /// guessed from `$HOME`.
    pub const fn home_suffix(self) -> Option<&'static str> {
        match self {
            Self::Runtime => None,
            Self::Config => Some(".config"),
            Self::Cache => Some(".cache"),
            Self::Data => Some(".local/share"),
            Self::State => Some(".local/state"),
        }
    }
}

impl UserDirKind {
    /// Environment variable that overrides the default location.
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::Desktop => "XDG_DESKTOP_DIR",
            Self::Downloads => "XDG_DOWNLOAD_DIR",
            Self::Pictures => "XDG_PICTURES_DIR",
            Self::Videos => "XDG_VIDEOS_DIR",
            Self::Music => "XDG_MUSIC_DIR",
            Self::Documents => "XDG_DOCUMENTS_DIR",
        }
    }

    /// Default folder name relative to `$HOME`, used when
    /// [`env_var`](Self::env_var) is unset.
    pub const fn home_suffix(self) -> &'static str {
        match self {
            Self::Desktop => "Desktop",
            Self::Downloads => "Downloads",
            Self::Pictures => "Pictures",
            Self::Videos => "Videos",
            Self::Music => "Music",
            Self::Documents => "Documents",
        }
    }
}
