//! # Settlement Engine
//!
//! A batch processor that splits shared trip expenses: each trip's total is
//! averaged across its participants and every participant's adjustment is
//! the share minus what they already paid.
//!
//! ## Design Principles
//!
//! - **Exact decimal arithmetic**: sums and the share division use
//!   `rust_decimal` at full precision; rounding to 2 places (half-to-even)
//!   happens only when rendering output
//! - **Single read**: the input is read once into memory, validated, then
//!   parsed; no second pass over the file
//! - **Validate before create**: the output file is not touched until the
//!   input has passed validation
//!
//! ## Example
//!
//! ```
//! use settlement_engine::SettlementEngine;
//!
//! let mut engine = SettlementEngine::new();
//! engine.process_str("2\n1\n10.00\n1\n0.00\n0").unwrap();
//!
//! let mut output = Vec::new();
//! engine.write_output(&mut output).unwrap();
//! assert_eq!(String::from_utf8(output).unwrap(), "($5.00)\n$5.00\n\n");
//! ```

pub mod engine;
pub mod error;
pub mod money;
pub mod trip;
pub mod validate;

pub use engine::SettlementEngine;
pub use error::{EngineError, Result, ValidationError};
pub use money::Money;
pub use trip::{Participant, Trip};
