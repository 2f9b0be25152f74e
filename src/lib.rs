//! ovite: bootstrap a Vite front-end project from an embedded template,
//! install its dependencies, and optionally commit it and start the dev server.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{BootstrapOutcome, BootstrapReport, DebugReport};
pub use domain::{AppError, BootstrapConfig, RawConfig, StageError};
