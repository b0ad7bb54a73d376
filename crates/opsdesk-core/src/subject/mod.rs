//! Subject domain module.
//!
//! This module identifies *what* is being viewed and detects when in-flight
//! work has been superseded.
//!
//! # Module Structure
//!
//! - `model`: Subject types (`Subject`, `EntityKind`)
//! - `tracker`: Current subject plus request token (`IdentityTracker`, `RequestToken`)

mod model;
mod tracker;

pub use model::{EntityKind, Subject};
pub use tracker::{IdentityTracker, RequestToken};
