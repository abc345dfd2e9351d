//! Damped-spring animation of a single scalar.
//!
//! A [`Spring`] is a unit-mass harmonic oscillator pulled toward its target.
//! Each [`Spring::step`] advances the closed-form solution by `dt`, so the
//! trajectory is the same whether it is sampled at 60 fps or 10 fps.
//! Retargeting keeps position *and* velocity, which is what makes a
//! mid-flight selection change bend the motion instead of restarting it.

use std::time::Duration;

use thiserror::Error;

/// Longest time slice a single `step` will integrate.  A stalled frame
/// should not make the indicator jump to the end of its motion.
const MAX_STEP: Duration = Duration::from_millis(100);

/// Position/velocity below which the spring counts as settled.
const REST_EPSILON: f64 = 0.01;

#[derive(Debug, Error, PartialEq)]
pub enum SpringError {
    #[error("damping ratio must be a finite value >= 0, got {0}")]
    InvalidDampingRatio(f64),
    #[error("stiffness must be a finite value > 0, got {0}")]
    InvalidStiffness(f64),
}

// ───────────────────────────────────────── parameters ────────

/// Spring parameters: damping ratio (ζ) and stiffness (k, with unit mass).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    damping_ratio: f64,
    stiffness: f64,
}

impl SpringSpec {
    pub const DAMPING_RATIO_LOW_BOUNCY: f64 = 0.75;
    pub const DAMPING_RATIO_NO_BOUNCY: f64 = 1.0;
    pub const STIFFNESS_LOW: f64 = 200.0;
    pub const STIFFNESS_MEDIUM: f64 = 1500.0;

    pub fn new(damping_ratio: f64, stiffness: f64) -> Result<Self, SpringError> {
        if !damping_ratio.is_finite() || damping_ratio < 0.0 {
            return Err(SpringError::InvalidDampingRatio(damping_ratio));
        }
        if !stiffness.is_finite() || stiffness <= 0.0 {
            return Err(SpringError::InvalidStiffness(stiffness));
        }
        Ok(Self {
            damping_ratio,
            stiffness,
        })
    }

    /// Slow, slightly bouncy spring used for the tab indicator.
    pub const fn indicator() -> Self {
        Self {
            damping_ratio: Self::DAMPING_RATIO_LOW_BOUNCY,
            stiffness: Self::STIFFNESS_LOW,
        }
    }

    /// Quick, non-bouncy spring used for colour crossfades.
    pub const fn color() -> Self {
        Self {
            damping_ratio: Self::DAMPING_RATIO_NO_BOUNCY,
            stiffness: Self::STIFFNESS_MEDIUM,
        }
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping_ratio
    }

    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::indicator()
    }
}

// ───────────────────────────────────────── spring ────────────

/// One animated scalar: `(position, velocity)` chasing `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    spec: SpringSpec,
}

impl Spring {
    /// A spring sitting still on `value`.
    pub fn at_rest(value: f64, spec: SpringSpec) -> Self {
        Self {
            position: value,
            velocity: 0.0,
            target: value,
            spec,
        }
    }

    /// Move the target.  Position and velocity carry over unchanged.
    pub fn retarget(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump straight to `value` and stop.
    pub fn snap_to(&mut self, value: f64) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Advance the simulation by `dt`.
    pub fn step(&mut self, dt: Duration) {
        if self.is_settled() {
            self.snap_to(self.target);
            return;
        }

        let t = dt.min(MAX_STEP).as_secs_f64();
        let (x, v) = oscillate(
            self.position - self.target,
            self.velocity,
            self.spec,
            t,
        );
        self.position = self.target + x;
        self.velocity = v;

        if self.is_settled() {
            self.snap_to(self.target);
        }
    }

    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

/// Closed-form displacement and velocity after `t` seconds, starting from
/// displacement `x0` and velocity `v0`.
fn oscillate(x0: f64, v0: f64, spec: SpringSpec, t: f64) -> (f64, f64) {
    let zeta = spec.damping_ratio;
    let omega = spec.stiffness.sqrt();

    if (zeta - 1.0).abs() < 1e-6 {
        // Critically damped.
        let b = v0 + omega * x0;
        let decay = (-omega * t).exp();
        let x = (x0 + b * t) * decay;
        let v = (b - omega * (x0 + b * t)) * decay;
        (x, v)
    } else if zeta < 1.0 {
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let a = x0;
        let b = (v0 + zeta * omega * x0) / omega_d;
        let decay = (-zeta * omega * t).exp();
        let (sin, cos) = (omega_d * t).sin_cos();
        let x = decay * (a * cos + b * sin);
        let v = decay * (-zeta * omega * (a * cos + b * sin) + omega_d * (b * cos - a * sin));
        (x, v)
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega * (zeta - root);
        let r2 = -omega * (zeta + root);
        let c2 = (v0 - r1 * x0) / (r2 - r1);
        let c1 = x0 - c2;
        let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
        (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn run_until_settled(spring: &mut Spring, max_frames: usize) -> Vec<f64> {
        let mut trace = Vec::new();
        for _ in 0..max_frames {
            spring.step(FRAME);
            trace.push(spring.position());
            if spring.is_settled() {
                break;
            }
        }
        trace
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert_eq!(
            SpringSpec::new(-0.1, 200.0),
            Err(SpringError::InvalidDampingRatio(-0.1))
        );
        assert_eq!(
            SpringSpec::new(0.5, 0.0),
            Err(SpringError::InvalidStiffness(0.0))
        );
        assert!(SpringSpec::new(f64::NAN, 200.0).is_err());
        assert!(SpringSpec::new(0.5, f64::INFINITY).is_err());
        assert!(SpringSpec::new(0.0, 1.0).is_ok());
    }

    #[test]
    fn at_rest_does_not_move() {
        let mut spring = Spring::at_rest(42.0, SpringSpec::indicator());
        for _ in 0..10 {
            spring.step(FRAME);
        }
        assert_eq!(spring.position(), 42.0);
        assert_eq!(spring.velocity(), 0.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn underdamped_spring_overshoots_then_settles() {
        let mut spring = Spring::at_rest(0.0, SpringSpec::indicator());
        spring.retarget(100.0);
        let trace = run_until_settled(&mut spring, 1000);

        let peak = trace.iter().cloned().fold(f64::MIN, f64::max);
        assert!(peak > 100.0 + REST_EPSILON, "no overshoot, peak = {peak}");
        assert!(spring.is_settled());
        assert_eq!(spring.position(), 100.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn underdamped_spring_moves_gradually() {
        let mut spring = Spring::at_rest(0.0, SpringSpec::indicator());
        spring.retarget(100.0);
        spring.step(FRAME);
        assert!(spring.position() > 0.0);
        assert!(spring.position() < 50.0);
    }

    #[test]
    fn critically_damped_spring_never_overshoots() {
        let mut spring = Spring::at_rest(0.0, SpringSpec::color());
        spring.retarget(1.0);
        let trace = run_until_settled(&mut spring, 1000);
        assert!(trace.iter().all(|&p| p <= 1.0));
        assert!(spring.is_settled());
    }

    #[test]
    fn overdamped_spring_converges() {
        let spec = SpringSpec::new(2.0, 400.0).unwrap();
        let mut spring = Spring::at_rest(10.0, spec);
        spring.retarget(-10.0);
        let trace = run_until_settled(&mut spring, 2000);
        assert!(trace.iter().all(|&p| p >= -10.0));
        assert_eq!(spring.position(), -10.0);
    }

    #[test]
    fn retarget_preserves_velocity() {
        let mut spring = Spring::at_rest(0.0, SpringSpec::indicator());
        spring.retarget(100.0);
        for _ in 0..5 {
            spring.step(FRAME);
        }
        let (pos, vel) = (spring.position(), spring.velocity());
        assert!(vel > 0.0);

        spring.retarget(-50.0);
        assert_eq!(spring.position(), pos);
        assert_eq!(spring.velocity(), vel);

        // Still heading right for a moment: momentum carries over.
        spring.step(Duration::from_millis(1));
        assert!(spring.position() > pos);

        run_until_settled(&mut spring, 1000);
        assert_eq!(spring.position(), -50.0);
    }

    #[test]
    fn trajectory_is_independent_of_frame_rate() {
        let mut coarse = Spring::at_rest(0.0, SpringSpec::indicator());
        let mut fine = coarse;
        coarse.retarget(80.0);
        fine.retarget(80.0);

        for _ in 0..10 {
            coarse.step(Duration::from_millis(40));
        }
        for _ in 0..40 {
            fine.step(Duration::from_millis(10));
        }
        assert!((coarse.position() - fine.position()).abs() < 1e-6);
        assert!((coarse.velocity() - fine.velocity()).abs() < 1e-6);
    }

    #[test]
    fn long_frames_are_clamped() {
        let mut clamped = Spring::at_rest(0.0, SpringSpec::indicator());
        let mut reference = clamped;
        clamped.retarget(100.0);
        reference.retarget(100.0);

        clamped.step(Duration::from_secs(5));
        reference.step(MAX_STEP);
        assert_eq!(clamped.position(), reference.position());
    }
}
