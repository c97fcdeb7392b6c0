//! Use-case services over the entity store.
//!
//! # Responsibility
//! - Orchestrate store calls into the operations the UI layer invokes
//!   directly: sessions, device assignment, course enrollment, report
//!   export.
//! - Keep callers decoupled from document/persistence details.

pub mod auth_service;
pub mod dosimeter_service;
pub mod report_service;
pub mod training_service;
