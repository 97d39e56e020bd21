//! Analytic motion phases of the coaster
//!
//! Defines the [`MotionPhase`] trait and its two implementors:
//! free-fall descent from rest, then circular loop motion entered at `t1`

use super::params::{SimulationParameters, G};

/// Quantities derived for one time sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub height: f64,    // m
    pub velocity: f64,  // m/s
    pub g_force: f64,   // effective acceleration magnitude, not normalised by g
    pub net_force: f64, // N
}

/// Trait for closed-form motion phases
/// Implementations evaluate the cart state at elapsed time `t`
pub trait MotionPhase {
    fn sample(&self, t: f64) -> Kinematics;
}

/// Free-fall descent from rest at `height`
pub struct FreeFall {
    pub height: f64,
    pub mass: f64,
}

impl MotionPhase for FreeFall {
    fn sample(&self, t: f64) -> Kinematics {
        Kinematics {
            height: self.height - 0.5 * G * t * t,
            velocity: -G * t,
            g_force: G.abs(),
            net_force: self.mass * G,
        }
    }
}

/// Circular loop motion, time measured from the global clock and shifted by `entry`
pub struct LoopMotion {
    pub radius: f64,
    pub mass: f64,
    pub omega: f64, // sqrt(g / r)
    pub entry: f64, // t1
}

impl MotionPhase for LoopMotion {
    fn sample(&self, t: f64) -> Kinematics {
        let tau = t - self.entry;
        let angle = self.omega * tau;
        let velocity = (G * self.radius).sqrt() * angle.sin();
        let effective = G + velocity * velocity / self.radius;

        Kinematics {
            height: self.radius - self.radius * angle.cos(),
            velocity,
            g_force: effective.abs(),
            net_force: self.mass * effective,
        }
    }
}

/// Which phase owns a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Descent,
    Loop,
}

impl Phase {
    /// The switch is at the fall time `t1`, inclusive on the descent side
    pub fn at(t: f64, fall: f64) -> Self {
        if t <= fall {
            Phase::Descent
        } else {
            Phase::Loop
        }
    }
}

/// Both phases for one parameter set, dispatching on [`Phase::at`]
pub struct PhaseSet {
    pub descent: FreeFall,
    pub loop_motion: LoopMotion,
    pub fall: f64,
}

impl PhaseSet {
    pub fn new(params: &SimulationParameters, fall: f64) -> Self {
        Self {
            descent: FreeFall {
                height: params.height,
                mass: params.mass,
            },
            loop_motion: LoopMotion {
                radius: params.radius,
                mass: params.mass,
                omega: params.omega(),
                entry: fall,
            },
            fall,
        }
    }

    pub fn sample(&self, t: f64) -> (Phase, Kinematics) {
        let phase = Phase::at(t, self.fall);
        let k = match phase {
            Phase::Descent => self.descent.sample(t),
            Phase::Loop => self.loop_motion.sample(t),
        };
        (phase, k)
    }
}
