//! Clientcheck Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the clientcheck
//! client record validator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         clientcheck-cli (CLI)           │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (ValidationService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (RecordSource)               │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    clientcheck-adapters (Infrastructure)│
//! │ (FileRecordSource, InMemoryRecordSource)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ClientRecord, checkers, FieldValidator)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use clientcheck_core::domain::{ClientRecord, validate_all};
//!
//! let record = ClientRecord::new(
//!     "Maria da Silva",
//!     "15-06-1990",
//!     "maria@example.com",
//!     "123.456.789-00",
//! );
//!
//! assert!(validate_all(&record).is_ok());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ValidationService, ports::RecordSource};
    pub use crate::domain::{
        ClientField, ClientRecord, FieldValidator, ValidationError, ValidationPolicy,
        validate_all,
    };
    pub use crate::error::{CoreError, CoreResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
