use serde::{Deserialize, Serialize};

use super::bicycle::Bicycle;

/// The construction inputs for a [`Bicycle`].
///
/// Every field defaults to the value describing an ordinary road bicycle, so
/// partial overrides read naturally with struct-update syntax:
///
/// ```
/// use bicycle::{Bicycle, BicycleSpec};
///
/// let tourer = Bicycle::new(BicycleSpec {
///     frame: "Titanium".to_string(),
///     gears: 21,
///     ..BicycleSpec::default()
/// })?;
/// assert_eq!(tourer.gears(), 21);
/// # Ok::<(), bicycle::SpecError>(())
/// ```
///
/// Deserialization applies the same defaults, so a document naming only some
/// fields yields a valid spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct BicycleSpec {
    /// Frame material, e.g. `"Steel"`.
    ///
    /// May be empty. An empty frame passes construction, but the bicycle will
    /// never be runnable.
    pub frame: String,

    /// Whether handlebars are fitted.
    pub handlebars: bool,

    /// Whether a seat is fitted.
    pub seat: bool,

    /// Number of wheels. Must be positive.
    pub wheels: i32,

    /// Number of pedals. Must be positive.
    pub pedals: i32,

    /// Whether brakes are fitted.
    pub brakes: bool,

    /// Number of gears. Must be positive.
    pub gears: i32,

    /// Whether a chain is fitted.
    pub chain: bool,

    /// Initial speed. Must be non-negative.
    pub speed: i32,

    /// Initial gear. Must lie within `1..=gears`.
    pub gear: i32,

    /// Initial seat height. Must lie within
    /// [`Bicycle::MIN_SEAT_HEIGHT`]`..=`[`Bicycle::MAX_SEAT_HEIGHT`].
    pub seat_height: i32,
}

impl Default for BicycleSpec {
    fn default() -> Self {
        Self {
            frame: "Steel".to_string(),
            handlebars: true,
            seat: true,
            wheels: 2,
            pedals: 2,
            brakes: true,
            gears: 10,
            chain: true,
            speed: 0,
            gear: 1,
            seat_height: 0,
        }
    }
}

impl BicycleSpec {
    /// Checks every structural constraint, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns the [`SpecError`] for the first violated constraint.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.wheels <= 0 {
            return Err(SpecError::Wheels(self.wheels));
        }
        if self.pedals <= 0 {
            return Err(SpecError::Pedals(self.pedals));
        }
        if self.gears <= 0 {
            return Err(SpecError::Gears(self.gears));
        }
        if self.speed < 0 {
            return Err(SpecError::Speed(self.speed));
        }
        if !(1..=self.gears).contains(&self.gear) {
            return Err(SpecError::Gear {
                gear: self.gear,
                gears: self.gears,
            });
        }
        if !(Bicycle::MIN_SEAT_HEIGHT..=Bicycle::MAX_SEAT_HEIGHT).contains(&self.seat_height) {
            return Err(SpecError::SeatHeight(self.seat_height));
        }
        Ok(())
    }
}

/// Errors raised when a [`BicycleSpec`] fails validation.
///
/// Each variant names the offending field and carries the rejected value.
/// These are caller-correctable input faults, as opposed to the
/// state-precondition failures raised by the riding operations
/// ([`NotRunnable`](super::bicycle::NotRunnable)).
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// The wheel count is zero or negative.
    #[error("number of wheels must be positive, got {0}")]
    Wheels(i32),

    /// The pedal count is zero or negative.
    #[error("number of pedals must be positive, got {0}")]
    Pedals(i32),

    /// The gear count is zero or negative.
    #[error("number of gears must be positive, got {0}")]
    Gears(i32),

    /// The initial speed is negative.
    #[error("speed cannot be negative, got {0}")]
    Speed(i32),

    /// The initial gear lies outside the available gear range.
    #[error("current gear must be within 1..={gears}, got {gear}")]
    Gear {
        /// The rejected gear.
        gear: i32,
        /// The number of gears on the bicycle.
        gears: i32,
    },

    /// The initial seat height lies outside the adjustable range.
    #[error(
        "seat height must be within {min}..={max}, got {0}",
        min = Bicycle::MIN_SEAT_HEIGHT,
        max = Bicycle::MAX_SEAT_HEIGHT
    )]
    SeatHeight(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_is_valid() {
        BicycleSpec::default().validate().unwrap();
    }

    #[test]
    fn zero_wheels_rejected() {
        let spec = BicycleSpec {
            wheels: 0,
            ..BicycleSpec::default()
        };
        assert_eq!(spec.validate(), Err(SpecError::Wheels(0)));
    }

    #[test]
    fn negative_wheels_rejected() {
        let spec = BicycleSpec {
            wheels: -1,
            ..BicycleSpec::default()
        };
        assert_eq!(spec.validate(), Err(SpecError::Wheels(-1)));
    }

    #[test]
    fn zero_pedals_rejected() {
        let spec = BicycleSpec {
            pedals: 0,
            ..BicycleSpec::default()
        };
        assert_eq!(spec.validate(), Err(SpecError::Pedals(0)));
    }

    #[test]
    fn zero_gears_rejected() {
        let spec = BicycleSpec {
            gears: 0,
            gear: 1,
            ..BicycleSpec::default()
        };
        assert_eq!(spec.validate(), Err(SpecError::Gears(0)));
    }

    #[test]
    fn negative_speed_rejected() {
        let spec = BicycleSpec {
            speed: -5,
            ..BicycleSpec::default()
        };
        assert_eq!(spec.validate(), Err(SpecError::Speed(-5)));
    }

    #[test]
    fn gear_outside_range_rejected() {
        let spec = BicycleSpec {
            gear: 11,
            ..BicycleSpec::default()
        };
        assert_eq!(
            spec.validate(),
            Err(SpecError::Gear { gear: 11, gears: 10 })
        );

        let spec = BicycleSpec {
            gear: 0,
            ..BicycleSpec::default()
        };
        assert_eq!(spec.validate(), Err(SpecError::Gear { gear: 0, gears: 10 }));
    }

    #[test]
    fn seat_height_outside_range_rejected() {
        let spec = BicycleSpec {
            seat_height: 7,
            ..BicycleSpec::default()
        };
        assert_eq!(spec.validate(), Err(SpecError::SeatHeight(7)));

        let spec = BicycleSpec {
            seat_height: -1,
            ..BicycleSpec::default()
        };
        assert_eq!(spec.validate(), Err(SpecError::SeatHeight(-1)));
    }

    #[test]
    fn checks_run_in_declaration_order() {
        // Several violations at once: the wheel check reports first.
        let spec = BicycleSpec {
            wheels: 0,
            pedals: 0,
            gears: 0,
            speed: -1,
            ..BicycleSpec::default()
        };
        assert_eq!(spec.validate(), Err(SpecError::Wheels(0)));
    }

    #[test]
    fn empty_frame_is_structurally_valid() {
        let spec = BicycleSpec {
            frame: String::new(),
            ..BicycleSpec::default()
        };
        spec.validate().unwrap();
    }

    #[test]
    fn empty_document_deserializes_to_default() {
        let spec: BicycleSpec = toml::from_str("").unwrap();
        assert_eq!(spec, BicycleSpec::default());
    }

    #[test]
    fn partial_document_overrides_named_fields() {
        let spec: BicycleSpec = toml::from_str("frame = \"Carbon\"\ngears = 21\n").unwrap();
        assert_eq!(spec.frame, "Carbon");
        assert_eq!(spec.gears, 21);
        assert_eq!(spec.wheels, 2);
        assert_eq!(spec.gear, 1);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            SpecError::Wheels(-2).to_string(),
            "number of wheels must be positive, got -2"
        );
        assert_eq!(
            SpecError::Gear { gear: 11, gears: 10 }.to_string(),
            "current gear must be within 1..=10, got 11"
        );
        assert_eq!(
            SpecError::SeatHeight(7).to_string(),
            "seat height must be within 0..=6, got 7"
        );
    }
}
