//! CLI failures and the exit code each one maps to.
//!
//! | code | failure |
//! |------|---------|
//! | 2    | clap rejected the arguments (before `run`) |
//! | 10   | the sketch layer refused: unknown name, invalid scene, bad surface size |
//! | 11   | the PNG could not be written |
//! | 12   | a `--params`, `--click` or `--key` value was malformed |
//! | 13   | the JSON report could not be encoded |

use gl_sketches_core::SketchError;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Sketch(SketchError),

    #[error("cannot write {path}: {reason}")]
    Snapshot { path: String, reason: String },

    #[error("invalid --params JSON: {0}")]
    Params(#[source] serde_json::Error),

    #[error("bad --click '{value}': {reason}")]
    Click { value: String, reason: String },

    #[error("unknown --key '{0}' (expected c, ArrowUp or ArrowDown)")]
    Key(String),

    #[error("cannot encode report: {0}")]
    Report(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Sketch(_) => 10,
            CliError::Snapshot { .. } => 11,
            CliError::Params(_) | CliError::Click { .. } | CliError::Key(_) => 12,
            CliError::Report(_) => 13,
        }
    }

    /// Attributes a snapshot write failure to `path`. Errors that are not
    /// I/O stay sketch errors.
    pub fn snapshot(path: &Path, err: SketchError) -> Self {
        match err {
            SketchError::Io(reason) => CliError::Snapshot {
                path: path.display().to_string(),
                reason,
            },
            other => CliError::Sketch(other),
        }
    }
}

impl From<SketchError> for CliError {
    fn from(e: SketchError) -> Self {
        CliError::Sketch(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_failures_share_exit_code_12() {
        let params = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let errors = [
            CliError::Params(params),
            CliError::Click {
                value: "10".into(),
                reason: "expected X,Y".into(),
            },
            CliError::Key("q".into()),
        ];
        assert!(errors.iter().all(|e| e.exit_code() == 12));
    }

    #[test]
    fn snapshot_io_failure_names_the_path() {
        let err = CliError::snapshot(Path::new("out/car.png"), SketchError::Io("denied".into()));
        assert_eq!(err.exit_code(), 11);
        let msg = err.to_string();
        assert!(msg.contains("out/car.png") && msg.contains("denied"), "{msg}");
    }

    #[test]
    fn snapshot_non_io_failure_stays_a_sketch_error() {
        let err = CliError::snapshot(Path::new("x.png"), SketchError::InvalidDimensions);
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn sketch_errors_keep_their_message() {
        let err = CliError::from(SketchError::UnknownSketch("teapot".into()));
        assert_eq!(err.exit_code(), 10);
        assert_eq!(err.to_string(), "unknown sketch: teapot");
    }

    #[test]
    fn unknown_key_message_lists_accepted_keys() {
        let msg = CliError::Key("Enter".into()).to_string();
        assert!(msg.contains("'Enter'") && msg.contains("ArrowUp"), "{msg}");
    }
}
