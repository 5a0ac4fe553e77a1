//! winix-collect-core: guided collection of device state transitions.
//!
//! Walks an operator through a fixed script of physical actions on a
//! purifier, snapshots the device's reported attributes after each one,
//! and assembles a before/after [`Report`].
//!
//! # Public API
//!
//! - [`SessionOrchestrator`] -- drives one collection session
//! - [`DeviceStateClient`] -- remote status lookup seam
//! - [`Prompter`] -- operator interaction seam, with [`LinePrompter`] for
//!   line-oriented input
//! - Data model: [`DeviceId`], [`DeviceAttributes`], [`DeviceInfo`],
//!   [`RecordedAction`], [`SessionLog`], [`Report`]

pub mod actions;
pub mod client;
pub mod envelope;
pub mod error;
pub mod model;
pub mod prompt;
pub mod session;

// ── Convenience re-exports ───────────────────────────────────────────

pub use actions::{INITIAL_STATE_LABEL, PRESCRIBED_ACTIONS};
pub use client::DeviceStateClient;
pub use error::{FetchError, PromptError, SessionError, UsageError};
pub use model::{
    AttributeValue, DeviceAttributes, DeviceId, DeviceInfo, RecordedAction, Report, SessionLog,
};
pub use prompt::{LinePrompter, Prompter};
pub use session::{Halt, SessionOrchestrator, SessionOutcome};
