//! Error types for sketchpad.

use std::io;

/// Errors produced by sketchpad widgets and backends.
#[derive(Debug, thiserror::Error)]
pub enum SketchError {
    #[error("surface error: {0}")]
    Surface(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SketchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_error_display() {
        let e = SketchError::Surface("empty canvas id".into());
        assert_eq!(format!("{e}"), "surface error: empty canvas id");
    }

    #[test]
    fn backend_error_display() {
        let e = SketchError::Backend("init failed".into());
        assert_eq!(format!("{e}"), "backend error: init failed");
    }

    #[test]
    fn config_error_display() {
        let e = SketchError::Config("bad color".into());
        assert_eq!(format!("{e}"), "config error: bad color");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: SketchError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: SketchError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn result_alias_err() {
        let r: Result<u32> = Err(SketchError::Surface("oops".into()));
        assert!(r.is_err());
    }
}
