//! # QSense Display
//!
//! Axis ticks and labels in multiples of π for plotting phase readouts.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qsense_display // L4: Display (완료)
//!     PiFraction // π 분수 (완료)
//!     pi_axis_labels // 눈금 / 레이블 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qsense_display::prelude::*;
//! use std::f64::consts::PI;
//!
//! let step: PiFraction = "1/2".parse().unwrap();
//! let ticks = pi_axis_labels(-PI, PI, step).unwrap();
//! assert_eq!(ticks.labels, vec!["-π", "-π / 2", "0", "π / 2", "π"]);
//! ```

#![warn(missing_docs)]

/// Axis ticks (Gantree: L4_Display → PiAxis)
pub mod axis;

pub use axis::{pi_axis_labels, PiFraction, PiTicks};

pub mod prelude {
    //! Prelude module for convenient imports

    pub use crate::axis::{pi_axis_labels, PiFraction, PiTicks};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
