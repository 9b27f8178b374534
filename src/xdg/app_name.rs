use std::fmt;

use thiserror::Error;

/// Validated application identifier, appended as the last segment of every
/// application-scoped directory path.
///
/// The only way to obtain one is [`AppName::new`], so a held `AppName` is
/// never empty. The wrapped string is kept verbatim: no trimming, no case
/// folding, no character-set checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

/// Error returned by [`AppName::new`] for the empty string.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("The 'name' for the application is empty. Provide a name.")]
pub struct EmptyAppName;

impl AppName {
    /// Wrap `name`, rejecting the empty string.
    ///
    /// # Examples
    /// ```rust
    /// use basedirs::xdg::AppName;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let app = AppName::new("foobar")?;
    /// assert_eq!(app.as_str(), "foobar");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, EmptyAppName> {
        let name = name.into();
        if name.is_empty() {
            Err(EmptyAppName)
        } else {
            Ok(Self(name))
        }
    }

    /// Return the wrapped name, unchanged from construction.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for AppName {
    type Error = EmptyAppName;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl TryFrom<String> for AppName {
    type Error = EmptyAppName;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::assert_ok;

    #[test]
    fn empty_name_is_rejected() {
        let err = AppName::new("").unwrap_err();
        assert_eq!(
            err.to_string(),
            "The 'name' for the application is empty. Provide a name."
        );
    }

    #[test]
    fn non_empty_name_round_trips() {
        let app = assert_ok!(AppName::new("foobar"));
        assert_eq!(app.as_str(), "foobar");
        assert_eq!(app.to_string(), "foobar");
    }

    #[test]
    fn name_is_kept_verbatim() {
        // No trimming and no charset validation, whitespace included.
        let app = assert_ok!(AppName::new("  spaced app/1.0  "));
        assert_eq!(app.as_str(), "  spaced app/1.0  ");
    }

    #[test]
    fn try_from_delegates_to_new() {
        assert_ok!(AppName::try_from("foo"));
        assert_ok!(AppName::try_from(String::from("foo")));
        assert_eq!(AppName::try_from(""), Err(EmptyAppName));
    }
}
