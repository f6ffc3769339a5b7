//! Backend identification.
//!
//! [`BackendKind`] names the database drivers this crate can store patients
//! in. The server uses it to pick a backend from configuration.

use std::fmt;
use std::str::FromStr;

/// Identifies the type of database backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackendKind {
    /// SQLite database (file-based or in-memory).
    #[default]
    Sqlite,
    /// PostgreSQL database.
    Postgres,
}

impl BackendKind {
    /// Returns the canonical lowercase name of the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Sqlite => "sqlite",
            BackendKind::Postgres => "postgres",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(BackendKind::Sqlite),
            "postgres" | "postgresql" | "pg" => Ok(BackendKind::Postgres),
            other => Err(format!(
                "unknown storage backend '{}', expected one of: sqlite, postgres",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_kind_display() {
        assert_eq!(BackendKind::Sqlite.to_string(), "sqlite");
        assert_eq!(BackendKind::Postgres.to_string(), "postgres");
    }

    #[test]
    fn test_backend_kind_from_str() {
        assert_eq!("sqlite".parse::<BackendKind>(), Ok(BackendKind::Sqlite));
        assert_eq!("SQLite".parse::<BackendKind>(), Ok(BackendKind::Sqlite));
        assert_eq!("postgresql".parse::<BackendKind>(), Ok(BackendKind::Postgres));
        assert!("mongodb".parse::<BackendKind>().is_err());
    }

    #[test]
    fn test_backend_kind_default() {
        assert_eq!(BackendKind::default(), BackendKind::Sqlite);
    }
}
