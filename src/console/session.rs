//! Thin adapter between the console's actions and the digest pipeline
//!
//! Transport and authentication stay behind traits; this module only
//! decides what text ends up on the output surface.

use crate::console::resource::Resource;
use crate::digest::{extract, format_readable, NormalizedView};
use crate::error::{AuthError, FetchError};
use serde_json::Value;
use std::io::Write;

pub const LOADING_TEXT: &str = "Loading...";

/// Fetches the raw response envelope for a resource
pub trait ResourceFetcher {
    fn fetch(&self, resource: Resource) -> Result<Value, FetchError>;
}

/// The external login/logout service
pub trait AuthService {
    fn login(&self) -> Result<(), AuthError>;
    fn logout(&self) -> Result<(), AuthError>;
}

/// The display surface. Each write replaces what was shown before.
pub trait OutputSink {
    fn write(&mut self, text: &str);
}

/// Keeps every write, newest last
impl OutputSink for Vec<String> {
    fn write(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

/// Writes each update to an `io::Write`, one block per update
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        WriterSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn write(&mut self, text: &str) {
        if let Err(err) = writeln!(self.writer, "{}", text) {
            tracing::warn!(error = %err, "failed to write console output");
        }
    }
}

pub struct Console<F, A, S> {
    fetcher: F,
    auth: A,
    sink: S,
}

impl<F, A, S> Console<F, A, S>
where
    F: ResourceFetcher,
    A: AuthService,
    S: OutputSink,
{
    pub fn new(fetcher: F, auth: A, sink: S) -> Self {
        Console {
            fetcher,
            auth,
            sink,
        }
    }

    /// Fetch a resource and display its summary
    pub fn show(&mut self, resource: Resource) {
        self.sink.write(LOADING_TEXT);

        let text = match self.fetcher.fetch(resource) {
            Ok(raw) => format_readable(&extract(&raw)),
            Err(err) => {
                tracing::warn!(%resource, error = %err, "fetch failed");
                format_readable(&NormalizedView::Error {
                    message: err.to_string(),
                })
            }
        };

        self.sink.write(&text);
    }

    pub fn clear(&mut self) {
        self.sink.write("");
    }

    pub fn login(&mut self) {
        let text = match self.auth.login() {
            Ok(()) => "Logged in".to_string(),
            Err(err) => {
                tracing::warn!(error = %err, "login failed");
                format!("Error: {}", err)
            }
        };
        self.sink.write(&text);
    }

    pub fn logout(&mut self) {
        let text = match self.auth.logout() {
            Ok(()) => "Logged out".to_string(),
            Err(err) => {
                tracing::warn!(error = %err, "logout failed");
                format!("Error: {}", err)
            }
        };
        self.sink.write(&text);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
