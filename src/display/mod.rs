// src/display/mod.rs

//! Per-basis-state snapshots for a bar-and-phase visualizer.
//!
//! The presentation layer owns the animation clock. It asks for bars at some
//! progress in `[0, 1]` between the stepper's current and target states and
//! draws them; nothing here touches a state vector.

use crate::core::{QuantumStateVector, magnitude, phase_angle};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// One bar of the visualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasisBar {
    /// Basis index `i`.
    pub index: usize,
    /// Ket label, e.g. `|010>`.
    pub label: String,
    /// `|a_i|`, drawn as bar height.
    pub magnitude: f64,
    /// `arg(a_i)` in radians, drawn as a phase indicator.
    pub phase: f64,
}

impl BasisBar {
    /// Phase in whole degrees, as printed under each bar.
    pub fn phase_degrees(&self) -> f64 {
        self.phase.to_degrees()
    }
}

/// One bar per basis state of `state`.
pub fn bars(state: &QuantumStateVector) -> Vec<BasisBar> {
    state
        .amplitudes()
        .iter()
        .enumerate()
        .map(|(index, amp)| BasisBar {
            index,
            label: state.basis_label(index),
            magnitude: magnitude(*amp),
            phase: phase_angle(*amp),
        })
        .collect()
}

/// Bars part-way from `current` to `target`.
///
/// `progress` is clamped to `[0, 1]`. Magnitudes move linearly; phases move
/// along the shorter arc, so a flip from `0` to `PI` and one from `0` to
/// `-PI` animate the same way. Both states must have the same length.
pub fn interpolate(current: &QuantumStateVector, target: &QuantumStateVector, progress: f64) -> Vec<BasisBar> {
    debug_assert_eq!(current.len(), target.len());
    let t = progress.clamp(0.0, 1.0);

    bars(current)
        .into_iter()
        .zip(bars(target))
        .map(|(from, to)| BasisBar {
            index: from.index,
            label: from.label,
            magnitude: lerp(from.magnitude, to.magnitude, t),
            phase: lerp_angle(from.phase, to.phase, t),
        })
        .collect()
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_angle(a: f64, b: f64, t: f64) -> f64 {
    let mut diff = b - a;
    if diff > PI {
        diff -= TAU;
    } else if diff < -PI {
        diff += TAU;
    }
    a + diff * t
}
