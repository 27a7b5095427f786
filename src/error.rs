//! Fatal error categories and their mapping to process exit codes.

use std::path::PathBuf;

/// Failures that abort the whole run.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The host OS has no published binaries. Raised before any network access.
    #[error("unsupported platform '{0}': only Linux and macOS binaries are published")]
    UnsupportedPlatform(String),

    /// Network error, timeout or non-2xx response.
    #[error("failed to download {url}: {reason}")]
    Transfer { url: String, reason: String },

    /// The downloaded binary could not be spawned or `--version` failed.
    #[error("failed to run {}: {detail}", .path.display())]
    Execution {
        path: PathBuf,
        detail: String,
        code: Option<i32>,
    },
}

impl FetchError {
    pub(crate) fn transfer(url: &str, error: reqwest::Error) -> Self {
        FetchError::Transfer {
            url: url.to_string(),
            reason: error.to_string(),
        }
    }
}

/// Exit code for a failed run.
///
/// A downloaded binary that exits non-zero hands its own code through;
/// everything else exits with 1.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<FetchError>() {
        Some(FetchError::Execution {
            code: Some(code), ..
        }) if *code != 0 => *code,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_platform_display() {
        let err = FetchError::UnsupportedPlatform("FreeBSD".to_string());
        assert!(err.to_string().contains("FreeBSD"));
        assert!(err.to_string().contains("unsupported platform"));
    }

    #[test]
    fn test_execution_display_includes_path() {
        let err = FetchError::Execution {
            path: PathBuf::from("/tmp/registry-cli"),
            detail: "exited with status 2".to_string(),
            code: Some(2),
        };
        assert_eq!(
            err.to_string(),
            "failed to run /tmp/registry-cli: exited with status 2"
        );
    }

    #[test]
    fn test_exit_code_passes_child_code_through() {
        let err = anyhow::Error::from(FetchError::Execution {
            path: PathBuf::from("registry-cli"),
            detail: "exited with status 7".to_string(),
            code: Some(7),
        });
        assert_eq!(exit_code(&err), 7);
    }

    #[test]
    fn test_exit_code_signal_termination() {
        let err = anyhow::Error::from(FetchError::Execution {
            path: PathBuf::from("registry-cli"),
            detail: "terminated by signal".to_string(),
            code: None,
        });
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_exit_code_through_context() {
        let err = anyhow::Error::from(FetchError::Transfer {
            url: "https://example.com/x".to_string(),
            reason: "HTTP status client error (404 Not Found)".to_string(),
        })
        .context("Failed to install registry-cli");
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_exit_code_other_errors() {
        let err = anyhow::anyhow!("disk full");
        assert_eq!(exit_code(&err), 1);
    }
}
