//! The console around the digest pipeline: which resources exist, where
//! they live upstream, and how actions reach the display.

pub mod config;
pub mod resource;
pub mod session;

pub use config::{ConsoleConfig, OAuthCredentials, DEFAULT_PORT};
pub use resource::Resource;
pub use session::{AuthService, Console, OutputSink, ResourceFetcher, WriterSink, LOADING_TEXT};
