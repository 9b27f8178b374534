//! XDG Base Directory path resolution.
//!
//! Computes the standard per-application and per-user directory paths from an
//! environment snapshot: a set `XDG_*` variable must hold a valid absolute
//! path and then wins; an unset one falls back to a `$HOME`-relative default.
//! Nothing here touches the filesystem, the resolved strings are all there is.
//!
//! ```rust
//! use basedirs::os::env::Env;
//! use basedirs::xdg::{self, AppName};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let env = Env::new();
//! let app = AppName::new("foobar")?;
//!
//! match xdg::app_config_dir(&env, &app) {
//!     Ok(dir) => println!("config lives in {}", dir.display()),
//!     Err(err) => eprintln!("{err}"),
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::os::env::Env;

pub mod app_name;
pub mod kind;
pub mod resolve;

pub use app_name::{AppName, EmptyAppName};
pub use kind::{AppDirKind, UserDirKind};
pub use resolve::{PathProblem, ResolveError, resolve_app_dir, resolve_user_dir};

/// Get the runtime directory for `app`, from `$XDG_RUNTIME_DIR`.
///
/// # Returns
/// This is the one kind with no default: [`Err`] whenever the variable is
/// unset, regardless of `$HOME`.
pub fn app_runtime_dir(env: &Env, app: &AppName) -> Result<PathBuf, ResolveError> {
    resolve_app_dir(env, app, AppDirKind::Runtime)
}

/// Get the configuration directory for `app`, from `$XDG_CONFIG_HOME` or
/// `$HOME/.config`.
///
/// # Returns
/// [`Ok`] with the composed path, e.g. `/home/alice/.config/foobar`, or the
/// first [`ResolveError`] in the chain.
pub fn app_config_dir(env: &Env, app: &AppName) -> Result<PathBuf, ResolveError> {
    resolve_app_dir(env, app, AppDirKind::Config)
}

/// Get the cache directory for `app`, from `$XDG_CACHE_HOME` or `$HOME/.cache`.
pub fn app_cache_dir(env: &Env, app: &AppName) -> Result<PathBuf, ResolveError> {
    resolve_app_dir(env, app, AppDirKind::Cache)
}

/// Get the data directory for `app`, from `$XDG_DATA_HOME` or
/// `$HOME/.local/share`.
pub fn app_data_dir(env: &Env, app: &AppName) -> Result<PathBuf, ResolveError> {
    resolve_app_dir(env, app, AppDirKind::Data)
}

/// Get the state directory for `app`, from `$XDG_STATE_HOME` or
/// `$HOME/.local/state`.
pub fn app_state_dir(env: &Env, app: &AppName) -> Result<PathBuf, ResolveError> {
    resolve_app_dir(env, app, AppDirKind::State)
}

/// Get the desktop directory, from `$XDG_DESKTOP_DIR` or `$HOME/Desktop`.
pub fn desktop_dir(env: &Env) -> Result<PathBuf, ResolveError> {
    resolve_user_dir(env, UserDirKind::Desktop)
}

/// Get the downloads directory, from `$XDG_DOWNLOAD_DIR` or `$HOME/Downloads`.
pub fn download_dir(env: &Env) -> Result<PathBuf, ResolveError> {
    resolve_user_dir(env, UserDirKind::Downloads)
}

/// Get the pictures directory, from `$XDG_PICTURES_DIR` or `$HOME/Pictures`.
pub fn pictures_dir(env: &Env) -> Result<PathBuf, ResolveError> {
    resolve_user_dir(env, UserDirKind::Pictures)
}

/// Get the videos directory, from `$XDG_VIDEOS_DIR` or `$HOME/Videos`.
pub fn videos_dir(env: &Env) -> Result<PathBuf, ResolveError> {
    resolve_user_dir(env, UserDirKind::Videos)
}

/// Get the music directory, from `$XDG_MUSIC_DIR` or `$HOME/Music`.
pub fn music_dir(env: &Env) -> Result<PathBuf, ResolveError> {
    resolve_user_dir(env, UserDirKind::Music)
}

/// Get the documents directory, from `$XDG_DOCUMENTS_DIR` or
/// `$HOME/Documents`.
pub fn documents_dir(env: &Env) -> Result<PathBuf, ResolveError> {
    resolve_user_dir(env, UserDirKind::Documents)
}
