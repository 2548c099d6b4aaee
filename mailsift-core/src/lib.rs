//! mailsift-core: Core library for mailsift - a demo mail client that files
//! composed messages by classifying them against a remote service.
//!
//! This crate provides:
//! - Mailbox state (message list, compose buffer, transient send status)
//! - HTTP gateway to the classification service, with a local keyword fallback
//! - The folder mapping policy that turns a classification into a folder
//! - Configuration management and path discovery

pub mod classifier;
pub mod config;
pub mod error;
pub mod fallback;
pub mod folder;
pub mod id;
pub mod mailbox;
pub mod message;
pub mod paths;
pub mod policy;
pub mod types;

pub use classifier::{ClassifierClient, ClassifierSource, ClassifyOutcome};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use folder::Folder;
pub use mailbox::Mailbox;
pub use message::Message;
pub use paths::AppPaths;
pub use types::{ClassificationResult, PrimaryLabel};
