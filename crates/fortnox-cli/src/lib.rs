//! Command-line access to the Fortnox API.
//!
//! The `fortnox` binary issues a single transport call and prints the
//! decoded body. Configuration comes from `FORTNOX_*` environment variables.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod args;
pub mod error;

use std::io::Write;

use fortnox_client::{
    collect_all, Attributes, Body, Configuration, FileUpload, HttpClient, QueryParams, RequestBody,
    RequestOptions,
};
use serde_json::Value;

pub use args::{Command, Verb};
pub use error::CliError;

/// Run one command and write its result to `out`.
///
/// # Errors
///
/// Returns the first configuration, transport or output error.
pub async fn run(
    config: Configuration,
    command: Command,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let http = HttpClient::new(config)?;

    if let Some(key) = &command.all {
        let params = to_params(&command.pairs);
        let items = collect_all(&http, &command.path, Some(params), key).await?;
        tracing::info!(items = items.len(), "fetched all pages");
        return write_json(out, &Value::Array(items));
    }

    let options = RequestOptions {
        raw: command.raw,
        ..RequestOptions::default()
    };
    let is_query = command.verb.takes_query();
    let params = is_query.then(|| to_params(&command.pairs));
    let body = if let Some(file) = &command.file {
        let content = std::fs::read(file)?;
        let file_name = file
            .file_name()
            .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());
        Some(RequestBody::File(FileUpload::new(file_name, content)))
    } else if is_query {
        None
    } else {
        let attributes: Attributes = command.pairs.iter().cloned().collect();
        Some(RequestBody::Attributes {
            service: command.service.clone(),
            attributes,
        })
    };

    let response = http
        .request(command.verb.method(), &command.path, params, body, options)
        .await?;
    tracing::info!(status = response.status.as_u16(), "request completed");

    match response.body {
        Body::Success => write_json(out, &Value::Bool(true)),
        Body::Json(value) => write_json(out, &value),
        Body::Bytes(bytes) => Ok(out.write_all(&bytes)?),
    }
}

fn to_params(pairs: &[(String, String)]) -> QueryParams {
    pairs.iter().cloned().collect()
}

fn write_json(out: &mut impl Write, value: &Value) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_json_is_pretty() {
        let mut out = Vec::new();
        write_json(&mut out, &serde_json::json!({"Name": "Acme"})).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"Name\": \"Acme\"\n}\n");
    }

    #[test]
    fn pairs_become_params() {
        let params = to_params(&[("filter".into(), "active".into())]);
        assert_eq!(params.get("filter"), Some("active"));
    }

    #[tokio::test]
    async fn invalid_configuration_fails_before_any_call() {
        let command = Command::try_from_args(["fortnox", "get", "/customers"]).unwrap();
        let err = run(Configuration::new(), command, &mut Vec::new())
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
