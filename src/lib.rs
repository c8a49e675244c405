//! In-memory bicycle domain model
//!
//! A [`Bicycle`] owns the fixed physical configuration of a bicycle (frame
//! material, wheel and pedal counts, fitted brakes and chain) together with
//! its mutable riding state (speed, gear, seat height, tire condition).
//! Construction validates a [`BicycleSpec`]; the riding operations keep every
//! state transition within the documented bounds.
//!
//! ```
//! use bicycle::{Bicycle, BicycleSpec};
//!
//! let mut bike = Bicycle::new(BicycleSpec::default())?;
//! bike.start()?;
//! bike.pedal(9)?;
//! assert_eq!(bike.speed(), 10);
//!
//! bike.brake();
//! assert_eq!(bike.speed(), 9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod domain;
pub use domain::{Bicycle, BicycleSpec, BrakeOutcome, InvalidGear, NotRunnable, SpecError};
