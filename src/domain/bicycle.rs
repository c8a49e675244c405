//! The bicycle entity and its riding operations.
//!
//! A [`Bicycle`] is built once from a [`BicycleSpec`] and then mutated in
//! place. The operations enforce the domain bounds on every transition:
//! pedalling clamps the speed to [`Bicycle::MAX_SPEED`], braking is the sole
//! enforcer of the zero floor, and the gear and seat height stay within
//! their ranges. A flat tire is a one-way latch with no repair path.

use std::fmt;

use thiserror::Error;
use tracing::instrument;

use super::spec::{BicycleSpec, SpecError};

/// A bicycle with a fixed physical configuration and mutable riding state.
///
/// The configuration (frame material, component presence, wheel/pedal/gear
/// counts) is set at construction and immutable thereafter. The riding state
/// (speed, current gear, seat height, tire condition) moves within its
/// documented bounds under the operations below.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Bicycle {
    frame: String,
    handlebars: bool,
    seat: bool,
    wheels: i32,
    pedals: i32,
    brakes: bool,
    gears: i32,
    chain: bool,
    speed: i32,
    current_gear: i32,
    seat_height: i32,
    has_flat_tire: bool,
}

/// Error returned by [`Bicycle::start`] and [`Bicycle::pedal`] when the
/// bicycle is not in a runnable state.
///
/// This is a precondition failure, not a malformed input: the same call
/// could succeed once the state changes. A bicycle runs only with a named
/// frame material, handlebars, exactly two wheels, exactly two pedals,
/// brakes, at least one gear, a chain, and an intact tire.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("bicycle cannot run")]
pub struct NotRunnable;

/// Error returned by [`Bicycle::change_gear`] when the requested gear lies
/// outside the bicycle's range.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid gear {gear}: this bicycle has gears 1..={gears}")]
pub struct InvalidGear {
    /// The rejected gear.
    pub gear: i32,
    /// The number of gears fitted.
    pub gears: i32,
}

/// The result of a brake application.
///
/// Braking never fails; each case describes what actually happened to the
/// bicycle. The [`fmt::Display`] impl provides a human-readable rendering
/// for callers that present outcomes directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrakeOutcome {
    /// The brakes were not applied: the bicycle is stationary, or no brakes
    /// are fitted. No state change.
    NotApplied,

    /// The bicycle slowed down and is still moving.
    Slowing {
        /// Speed after braking.
        speed: i32,
    },

    /// Braking brought the bicycle to a standstill.
    Stopped,
}

impl fmt::Display for BrakeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotApplied => write!(f, "cannot brake: bicycle is not moving or has no brakes"),
            Self::Slowing { speed } => write!(f, "braking, speed is now {speed}"),
            Self::Stopped => write!(f, "bicycle has stopped"),
        }
    }
}

impl Bicycle {
    /// Maximum speed reachable by pedalling.
    pub const MAX_SPEED: i32 = 50;

    /// Speed shed by a single brake application.
    pub const DECELERATE_SPEED: i32 = 1;

    /// Highest seat position.
    pub const MAX_SEAT_HEIGHT: i32 = 6;

    /// Lowest seat position.
    pub const MIN_SEAT_HEIGHT: i32 = 0;

    /// Builds a bicycle from the given spec.
    ///
    /// All fields are taken verbatim from the spec; the tire starts intact.
    /// Note that only the structural constraints are checked — an initial
    /// speed above [`Bicycle::MAX_SPEED`] is accepted as-is, since the speed
    /// ceiling is enforced by [`Bicycle::pedal`], not by construction.
    ///
    /// # Errors
    ///
    /// Returns the [`SpecError`] for the first violated structural
    /// constraint.
    pub fn new(spec: BicycleSpec) -> Result<Self, SpecError> {
        spec.validate()?;
        let BicycleSpec {
            frame,
            handlebars,
            seat,
            wheels,
            pedals,
            brakes,
            gears,
            chain,
            speed,
            gear,
            seat_height,
        } = spec;
        Ok(Self {
            frame,
            handlebars,
            seat,
            wheels,
            pedals,
            brakes,
            gears,
            chain,
            speed,
            current_gear: gear,
            seat_height,
            has_flat_tire: false,
        })
    }

    /// Frame material.
    #[must_use]
    pub fn frame(&self) -> &str {
        &self.frame
    }

    /// Whether handlebars are fitted.
    #[must_use]
    pub const fn handlebars(&self) -> bool {
        self.handlebars
    }

    /// Whether a seat is fitted.
    #[must_use]
    pub const fn seat(&self) -> bool {
        self.seat
    }

    /// Number of wheels.
    #[must_use]
    pub const fn wheels(&self) -> i32 {
        self.wheels
    }

    /// Number of pedals.
    #[must_use]
    pub const fn pedals(&self) -> i32 {
        self.pedals
    }

    /// Whether brakes are fitted.
    #[must_use]
    pub const fn brakes(&self) -> bool {
        self.brakes
    }

    /// Number of gears.
    #[must_use]
    pub const fn gears(&self) -> i32 {
        self.gears
    }

    /// Whether a chain is fitted.
    #[must_use]
    pub const fn chain(&self) -> bool {
        self.chain
    }

    /// Current speed.
    #[must_use]
    pub const fn speed(&self) -> i32 {
        self.speed
    }

    /// Currently selected gear.
    #[must_use]
    pub const fn current_gear(&self) -> i32 {
        self.current_gear
    }

    /// Current seat height.
    #[must_use]
    pub const fn seat_height(&self) -> i32 {
        self.seat_height
    }

    /// The bare-essentials runnability check.
    ///
    /// The wheel and pedal counts must equal exactly 2 here, even though
    /// construction admits any positive count: a three-wheeled bicycle is a
    /// valid object that never runs.
    fn can_run(&self) -> bool {
        !self.frame.is_empty()
            && self.handlebars
            && self.wheels == 2
            && self.pedals == 2
            && self.brakes
            && self.gears > 0
            && self.chain
            && !self.has_flat_tire
    }

    /// Punctures the tire, rendering the bicycle unrunnable.
    ///
    /// The flat is permanent: there is no repair operation, so once set the
    /// bicycle never runs again. Calling this on an already-flat tire has no
    /// further effect.
    #[instrument(skip(self))]
    pub fn simulate_flat_tire(&mut self) {
        if !self.has_flat_tire {
            tracing::info!("tire is now flat");
        }
        self.has_flat_tire = true;
    }

    /// Starts riding.
    ///
    /// Starting is a first pedal stroke: on success the speed has increased
    /// by 1 (clamped to [`Bicycle::MAX_SPEED`]).
    ///
    /// # Errors
    ///
    /// Returns [`NotRunnable`] if the bicycle cannot currently run; the
    /// state is left unchanged.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), NotRunnable> {
        self.pedal(1)
    }

    /// Applies a pedal stroke of the given power, raising the speed.
    ///
    /// The speed is clamped to at most [`Bicycle::MAX_SPEED`]. There is no
    /// lower clamp: a negative power lowers the speed without limit, and
    /// only [`Bicycle::brake`] restores the zero floor.
    ///
    /// # Errors
    ///
    /// Returns [`NotRunnable`] if the bicycle cannot currently run; the
    /// speed is left unchanged.
    #[instrument(skip(self))]
    pub fn pedal(&mut self, power: i32) -> Result<(), NotRunnable> {
        if !self.can_run() {
            return Err(NotRunnable);
        }
        let raised = self.speed.saturating_add(power);
        if raised > Self::MAX_SPEED {
            tracing::debug!(unclamped = raised, "speed clamped to maximum");
        }
        self.speed = raised.min(Self::MAX_SPEED);
        Ok(())
    }

    /// Applies the brakes, shedding [`Bicycle::DECELERATE_SPEED`].
    ///
    /// Braking while stationary or without fitted brakes is a no-op, not an
    /// error. This is the only operation that clamps the speed back up to
    /// the zero floor (see [`Bicycle::pedal`]).
    #[instrument(skip(self))]
    pub fn brake(&mut self) -> BrakeOutcome {
        if self.speed == 0 || !self.brakes {
            tracing::debug!(speed = self.speed, brakes = self.brakes, "brakes not applied");
            return BrakeOutcome::NotApplied;
        }
        self.speed -= Self::DECELERATE_SPEED;
        if self.speed <= 0 {
            self.speed = 0;
            BrakeOutcome::Stopped
        } else {
            BrakeOutcome::Slowing { speed: self.speed }
        }
    }

    /// Moves the seat to `new_height`, clamped into
    /// [`Bicycle::MIN_SEAT_HEIGHT`]`..=`[`Bicycle::MAX_SEAT_HEIGHT`].
    ///
    /// Out-of-range requests are clamped, not rejected. Returns the final
    /// seat height.
    #[instrument(skip(self))]
    pub fn adjust_seat_height(&mut self, new_height: i32) -> i32 {
        let clamped = new_height.clamp(Self::MIN_SEAT_HEIGHT, Self::MAX_SEAT_HEIGHT);
        if clamped != new_height {
            tracing::debug!(new_height, clamped, "seat height clamped");
        }
        self.seat_height = clamped;
        self.seat_height
    }

    /// Selects the given gear.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGear`] if `gear` lies outside `1..=gears`; the
    /// current gear is left unchanged.
    #[instrument(skip(self))]
    pub fn change_gear(&mut self, gear: i32) -> Result<(), InvalidGear> {
        if (1..=self.gears).contains(&gear) {
            self.current_gear = gear;
            Ok(())
        } else {
            Err(InvalidGear {
                gear,
                gears: self.gears,
            })
        }
    }
}

impl Default for Bicycle {
    /// The ordinary road bicycle described by [`BicycleSpec::default`].
    fn default() -> Self {
        Self::new(BicycleSpec::default()).expect("the default spec is valid")
    }
}

impl TryFrom<BicycleSpec> for Bicycle {
    type Error = SpecError;

    fn try_from(spec: BicycleSpec) -> Result<Self, Self::Error> {
        Self::new(spec)
    }
}
