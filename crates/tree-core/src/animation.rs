//! Per-frame integration of particle transforms toward their layout targets.

use glam::Quat;

use crate::constants::{BOB_AMPLITUDE, BOB_FREQUENCY, DECORATION_SPIN_PER_FRAME};
use crate::particle::{Particle, ParticleKind};
use crate::registry::ParticleRegistry;
use crate::state::Mode;

/// Vertical bob added on top of the positional lerp.
#[inline]
pub fn bob_offset(time_ms: f64, phase_offset: f32) -> f32 {
    ((time_ms * BOB_FREQUENCY as f64) as f32 + phase_offset).sin() * BOB_AMPLITUDE
}

/// Advance a single particle by one frame.
///
/// Position eases toward the target, then bobs. Scale and orientation snap to
/// the target; decorations spin about y except while scattered.
pub fn step_particle(particle: &mut Particle, mode: Mode, time_ms: f64) {
    let factor = particle.smoothing_factor();
    let bob = bob_offset(time_ms, particle.phase_offset());
    let spins = matches!(particle.kind(), ParticleKind::Decoration(_)) && mode != Mode::Scatter;
    let target = particle.target;
    let current = &mut particle.current;

    current.position = current.position.lerp(target.position, factor);
    current.position.y += bob;
    current.scale = target.scale;
    if let Some(orientation) = target.orientation {
        current.rotation = orientation;
    }

    if spins {
        current.rotation = (current.rotation * Quat::from_rotation_y(DECORATION_SPIN_PER_FRAME)).normalize();
    }
}

/// Advance every particle in the registry by one frame.
pub fn step_all(registry: &mut ParticleRegistry, mode: Mode, time_ms: f64) {
    for particle in registry.all_mut() {
        step_particle(particle, mode, time_ms);
    }
}
