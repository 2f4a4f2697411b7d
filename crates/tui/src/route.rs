//! Navigational routes.
//!
//! | Path | Route |
//! |------|-------|
//! | `/` | [`Route::List`] |
//! | `/create` | [`Route::Create`] |
//! | `/edit/<id>` | [`Route::Edit`] |
//! | anything else | [`Route::NotFound`] |

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use taskflow_protocol::TaskId;

/// A screen of the application, addressable by path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// The task list with search and filters.
    #[default]
    List,
    /// The empty task form.
    Create,
    /// The task form for an existing task.
    Edit(TaskId),
    /// An unknown path.
    NotFound(String),
}

impl Route {
    /// Parses a path into a route. Unknown paths become
    /// [`Route::NotFound`].
    ///
    /// A single trailing slash is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskflow_protocol::TaskId;
    /// use taskflow_tui::Route;
    ///
    /// assert_eq!(Route::parse("/"), Route::List);
    /// assert_eq!(Route::parse("/create"), Route::Create);
    /// assert_eq!(Route::parse("/edit/abc"), Route::Edit(TaskId::from("abc")));
    /// assert_eq!(Route::parse("/nope"), Route::NotFound("/nope".to_string()));
    /// ```
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if rest.len() > 1 => rest,
            _ => path,
        };

        match trimmed {
            "" | "/" => Self::List,
            "/create" => Self::Create,
            other => match other.strip_prefix("/edit/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Self::Edit(TaskId::from(id)),
                _ => Self::NotFound(path.to_string()),
            },
        }
    }

    /// Returns the path addressing this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::List => "/".to_string(),
            Self::Create => "/create".to_string(),
            Self::Edit(id) => format!("/edit/{id}"),
            Self::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::List);
        assert_eq!(Route::parse(""), Route::List);
        assert_eq!(Route::parse("/create"), Route::Create);
        assert_eq!(Route::parse("/create/"), Route::Create);
        assert_eq!(
            Route::parse("/edit/123e4567"),
            Route::Edit(TaskId::from("123e4567"))
        );
    }

    #[test]
    fn parse_unknown_paths() {
        for path in ["/edit", "/edit/", "/edit/a/b", "/settings", "create", "//"] {
            assert_eq!(
                Route::parse(path),
                Route::NotFound(path.to_string()),
                "{path}"
            );
        }
    }

    #[test]
    fn path_roundtrip() {
        for route in [
            Route::List,
            Route::Create,
            Route::Edit(TaskId::from("abc-123")),
            Route::NotFound("/missing".to_string()),
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn display_matches_path() {
        assert_eq!(Route::Edit(TaskId::from("x")).to_string(), "/edit/x");
        assert_eq!("/create".parse::<Route>().unwrap(), Route::Create);
    }
}
