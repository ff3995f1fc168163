//! CLI error types.

use fortnox_client::ClientError;

/// Errors that end a CLI run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The command line could not be parsed.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// The API call failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Writing the result failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// The result could not be rendered as JSON.
    #[error("output error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 2,
            Self::Client(ClientError::Configuration(_)) => 3,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Command;

    #[test]
    fn exit_codes() {
        let usage = Command::try_from_args(["fortnox", "fetch", "/customers"]).unwrap_err();
        assert_eq!(CliError::from(usage).exit_code(), 2);

        let config = ClientError::Configuration("client_secret is required".into());
        assert_eq!(CliError::from(config).exit_code(), 3);

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(CliError::from(io).exit_code(), 1);
    }
}
