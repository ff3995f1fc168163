//! Command-line parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use fortnox_client::Method;

/// HTTP verb of an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Verb {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl Verb {
    /// The matching request method.
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::Get => Method::GET,
            Self::Post => Method::POST,
            Self::Put => Method::PUT,
            Self::Delete => Method::DELETE,
        }
    }

    /// Whether `KEY=VALUE` pairs go on the query string.
    #[must_use]
    pub const fn takes_query(self) -> bool {
        matches!(self, Self::Get | Self::Delete)
    }
}

/// One Fortnox API call from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "fortnox",
    version,
    about,
    after_help = "KEY=VALUE pairs are query parameters for get/delete and text attributes for post/put.\n\
                  Credentials are read from FORTNOX_* environment variables."
)]
pub struct Command {
    /// HTTP verb.
    #[arg(value_enum)]
    pub verb: Verb,

    /// Request path below the version prefix, e.g. `/customers`.
    #[arg(value_parser = parse_path)]
    pub path: String,

    /// `KEY=VALUE` pairs in the order given.
    #[arg(value_name = "KEY=VALUE", value_parser = parse_pair)]
    pub pairs: Vec<(String, String)>,

    /// Print the response without unwrapping its envelope.
    #[arg(long)]
    pub raw: bool,

    /// Fetch every page and print the items under KEY (get only).
    #[arg(long, value_name = "KEY", conflicts_with = "file")]
    pub all: Option<String>,

    /// Envelope key for post/put bodies [default: data].
    #[arg(long, value_name = "NAME")]
    pub service: Option<String>,

    /// Upload PATH as multipart form data (post only).
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

impl Command {
    /// Parse arguments, including the program name, and check the flags
    /// against the verb.
    ///
    /// # Errors
    ///
    /// Returns the clap error describing the first problem found.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let command = Self::try_parse_from(args)?;
        command.check_verb()?;
        Ok(command)
    }

    fn check_verb(&self) -> Result<(), clap::Error> {
        if self.all.is_some() && self.verb != Verb::Get {
            return Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                "--all only applies to get",
            ));
        }
        if self.file.is_some() && self.verb != Verb::Post {
            return Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                "--file only applies to post",
            ));
        }
        Ok(())
    }
}

fn parse_path(path: &str) -> Result<String, String> {
    if path.starts_with('/') {
        Ok(path.to_string())
    } else {
        Err(format!("path must start with '/', got {path}"))
    }
}

fn parse_pair(pair: &str) -> Result<(String, String), String> {
    pair.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got {pair}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(line: &str) -> Result<Command, clap::Error> {
        Command::try_from_args(std::iter::once("fortnox").chain(line.split_whitespace()))
    }

    #[test]
    fn definition_is_consistent() {
        Command::command().debug_assert();
    }

    #[test]
    fn get_with_params() {
        let command =
            Command::try_parse_from(["fortnox", "get", "/customers", "filter=active", "limit=10"])
                .unwrap();
        assert_eq!(command.verb, Verb::Get);
        assert_eq!(command.verb.method(), Method::GET);
        assert_eq!(command.path, "/customers");
        assert_eq!(
            command.pairs,
            vec![
                ("filter".to_string(), "active".to_string()),
                ("limit".to_string(), "10".to_string())
            ]
        );
        assert!(!command.raw);
    }

    #[test]
    fn options_anywhere() {
        let command = Command::try_parse_from([
            "fortnox", "post", "--service", "Customer", "/customers", "Name=Acme", "--raw",
        ])
        .unwrap();
        assert_eq!(command.service.as_deref(), Some("Customer"));
        assert_eq!(command.pairs, vec![("Name".to_string(), "Acme".to_string())]);
        assert!(command.raw);
    }

    #[test]
    fn value_may_contain_equals() {
        let command =
            Command::try_parse_from(["fortnox", "get", "/invoices", "filter=a=b"]).unwrap();
        assert_eq!(command.pairs, vec![("filter".to_string(), "a=b".to_string())]);
    }

    #[test]
    fn all_requires_get() {
        let err = parse_str("delete /customers/1 --all Customers").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        let command = parse_str("get /accounts --all Accounts").unwrap();
        assert_eq!(command.all.as_deref(), Some("Accounts"));
    }

    #[test]
    fn file_requires_post() {
        let err = parse_str("put /inbox --file receipt.pdf").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        let command = parse_str("post /inbox --file receipt.pdf").unwrap();
        assert_eq!(command.file, Some(PathBuf::from("receipt.pdf")));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse_str("").unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse_str("fetch /customers").unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
        assert_eq!(
            parse_str("get customers").unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse_str("get /customers novalue").unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert!(parse_str("get /customers --service").is_err());
        assert_eq!(
            parse_str("get /customers --verbose").unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
    }
}
