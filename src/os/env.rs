use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use thiserror::Error;

/// Immutable snapshot of the process environment, taken once via
/// [`std::env::vars_os`].
///
/// Directory resolution is a pure function of this snapshot, so callers that
/// need a fresh view of the environment take a fresh [`Env`] (or call
/// [`reload`](Env::reload)). Tests build snapshots with
/// [`new_from`](Env::new_from) instead of mutating the process environment.
#[derive(Debug, Clone)]
pub struct Env {
    vars: HashMap<OsString, OsString>,
}

/// Errors encountered when getting an environmental variable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvStrError {
    /// This variant indicates, that variable `$Missing.0` is not set at all.
    ///
    /// A variable set to the empty string is *not* missing.
    #[error("there is no environmental variable `${0:?}`")]
    Missing(OsString),

    /// This variant indicates, that variable `$NonUtf8.0` is not an UTF-8 string.
    #[error("environmental variable `${0:?}` is not an UTF-8 string")]
    NonUtf8(OsString),
}

/// Errors encountered when getting `$HOME`.
///
/// The unset and set-but-empty cases stay separate variants: both block any
/// `$HOME`-based fallback, but callers report them differently.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum HomeError {
    /// `$HOME` is not set.
    #[error("the environmental variable `$HOME` is not set")]
    NotSet,

    /// `$HOME` is set, but to the empty string.
    #[error("the environmental variable `$HOME` is set to an empty string")]
    Empty,

    /// `$HOME` is set, but is not an UTF-8 string.
    #[error("the environmental variable `$HOME` is not an UTF-8 string")]
    NonUtf8,
}

impl Env {
    /// Create new [`Env`] from the current process environment.
    pub fn new() -> Self {
        Self::new_from(std::env::vars_os().collect())
    }

    /// Create new [`Env`] using `vars` as existing environmental variables.
    pub fn new_from(vars: HashMap<OsString, OsString>) -> Self {
        Self { vars }
    }

    /// Reload environmental variables from `vars`.
    pub fn reload_from(&mut self, vars: HashMap<OsString, OsString>) {
        self.vars = vars;
    }

    /// Reload environmental variables from [`std::env::vars_os`].
    pub fn reload(&mut self) {
        self.reload_from(std::env::vars_os().collect())
    }

    /// Get environmental variable pointed by `key`.
    ///
    /// # Returns
    /// `Option<&OsStr>`. `None` variant indicates missing key, `Some`: existing
    /// key, even when its value is the empty string.
    ///
    /// # Examples
    /// ```rust
    /// use basedirs::os::env::Env;
    ///
    /// let env = Env::new();
    /// println!("$FOO = {:?}", env.get_os("FOO"));
    /// ```
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(|v| v.as_os_str())
    }

    /// Get environmental variable pointed by `key` and convert it to UTF-8.
    ///
    /// # Returns
    /// `Result<&str, EnvStrError>`. `Ok` variant indicates existing UTF-8
    /// variable, `Err` indicates some kind of error. See [`EnvStrError`] for
    /// details.
    ///
    /// # Examples
    /// ```rust
    /// use basedirs::os::env::Env;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let env = Env::new();
    /// let _path = env.get("PATH")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn get(&self, key: impl AsRef<OsStr>) -> Result<&str, EnvStrError> {
        let key = key.as_ref();
        self.get_os(key)
            .ok_or_else(|| EnvStrError::Missing(key.to_os_string()))?
            .to_str()
            .ok_or_else(|| EnvStrError::NonUtf8(key.to_os_string()))
    }

    /// Get `$HOME`, the base for every default directory fallback.
    ///
    /// # Returns
    /// `Result<&str, HomeError>`. Unlike [`get`](Env::get), an empty value is
    /// an error here: an empty `$HOME` can never anchor a fallback path, and
    /// the caller must be able to tell it apart from an unset one.
    pub fn home(&self) -> Result<&str, HomeError> {
        match self.get("HOME") {
            Ok("") => Err(HomeError::Empty),
            Ok(home) => Ok(home),
            Err(EnvStrError::Missing(_)) => Err(HomeError::NotSet),
            Err(EnvStrError::NonUtf8(_)) => Err(HomeError::NonUtf8),
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
