use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::os::env::{Env, EnvStrError, HomeError};

use super::app_name::AppName;
use super::kind::{AppDirKind, UserDirKind};

/// Why a set environment variable failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathProblem {
    /// The value is the empty string.
    Empty,
    /// The value does not start at the filesystem root.
    NotAbsolute,
    /// The value is not an UTF-8 string.
    NotUnicode,
}

impl fmt::Display for PathProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Empty => "its value is empty",
            Self::NotAbsolute => "its value is not an absolute path",
            Self::NotUnicode => "its value is not an UTF-8 string",
        };
        f.write_str(reason)
    }
}

/// Errors encountered while resolving a directory path.
///
/// The split matters for the fallback chain: only [`NotSet`](Self::NotSet)
/// describes a condition that falls back to `$HOME` (and even then not for
/// the runtime directory). [`Invalid`](Self::Invalid) is always surfaced, so
/// a misconfigured override is reported rather than silently overridden.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The variable for the requested directory is not set at all.
    #[error("the environmental variable `${0}` is not set")]
    NotSet(String),

    /// The variable is set, but its value is not usable as a base directory.
    #[error("the environmental variable `${var}` is set, but {problem}")]
    Invalid { var: String, problem: PathProblem },

    /// `$HOME` was needed for a fallback and is itself broken.
    #[error(transparent)]
    Home(#[from] HomeError),
}

/// Check that `candidate` can serve as a base directory: non-empty and
/// absolute. Returns `candidate` unchanged on success.
///
/// The absolute check is genuine ([`Path::is_absolute`]), not assumed.
fn validated<'a>(var: &str, candidate: &'a str) -> Result<&'a str, ResolveError> {
    let problem = if candidate.is_empty() {
        PathProblem::Empty
    } else if !Path::new(candidate).is_absolute() {
        PathProblem::NotAbsolute
    } else {
        return Ok(candidate);
    };
    Err(ResolveError::Invalid {
        var: var.to_string(),
        problem,
    })
}

// Joins with a single `/` and leaves both operands untouched: repeated
// separators, dot segments and trailing slashes all survive.
fn join(base: &str, segment: &str) -> PathBuf {
    PathBuf::from(format!("{base}/{segment}"))
}

/// Resolve an application-scoped directory for `app`.
///
/// The chain: a set environment variable must validate and then wins; a set
/// but invalid variable fails immediately (no fallback); an unset variable
/// falls back to `$HOME` plus the kind's default suffix. The runtime kind has
/// no default, so an unset `$XDG_RUNTIME_DIR` is a hard failure no matter
/// what `$HOME` holds.
///
/// # Returns
/// A freshly composed [`PathBuf`] ending in `app`'s name, or the first
/// [`ResolveError`] the chain runs into. Nothing is created or checked on
/// disk.
pub fn resolve_app_dir(
    env: &Env,
    app: &AppName,
    kind: AppDirKind,
) -> Result<PathBuf, ResolveError> {
    let var = kind.env_var();
    match env.get(var) {
        Ok(value) => {
            let base = validated(var, value)?;
            Ok(join(base, app.as_str()))
        }
        Err(EnvStrError::Missing(_)) => {
            let Some(suffix) = kind.home_suffix() else {
                return Err(ResolveError::NotSet(var.to_string()));
            };
            let home = env.home()?;
            Ok(join(&format!("{home}/{suffix}"), app.as_str()))
        }
        Err(EnvStrError::NonUtf8(_)) => Err(ResolveError::Invalid {
            var: var.to_string(),
            problem: PathProblem::NotUnicode,
        }),
    }
}

/// Resolve a user-scoped directory.
///
/// Same chain as [`resolve_app_dir`], without the trailing application
/// segment. Every user kind has a `$HOME` default, so only a set-but-invalid
/// variable or a broken `$HOME` can fail here.
pub fn resolve_user_dir(env: &Env, kind: UserDirKind) -> Result<PathBuf, ResolveError> {
    let var = kind.env_var();
    match env.get(var) {
        Ok(value) => Ok(PathBuf::from(validated(var, value)?)),
        Err(EnvStrError::Missing(_)) => {
            let home = env.home()?;
            Ok(join(home, kind.home_suffix()))
        }
        Err(EnvStrError::NonUtf8(_)) => Err(ResolveError::Invalid {
            var: var.to_string(),
            problem: PathProblem::NotUnicode,
        }),
    }
}
