use glam::Vec3;

use super::Ray;

pub const DEFAULT_MARCH_STEP: f32 = 0.01;
pub const DEFAULT_MARCH_DISTANCE: f32 = 10.0;
/// Upper limit on samples taken along a single ray.
pub const MAX_MARCH_STEPS: u32 = 1_000_000;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PickingError {
    #[error("march step must be positive and finite, got {0}")]
    InvalidStep(f32),
    #[error("march distance must be positive and finite, got {0}")]
    InvalidDistance(f32),
    #[error("marching {max_distance} in steps of {step} exceeds {MAX_MARCH_STEPS} samples")]
    TooManySteps { step: f32, max_distance: f32 },
}

/// Finds where a picking ray meets the ground plane `y = 0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GroundIntersector {
    /// Walks along the ray in fixed steps and stops at the first sample on or below the plane.
    /// Accurate to one `step` along the ray.
    Marching { step: f32, max_distance: f32 },
    /// Solves `origin.y + t * direction.y = 0` directly.
    Exact,
}

impl GroundIntersector {
    pub fn marching(step: f32, max_distance: f32) -> Result<Self, PickingError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(PickingError::InvalidStep(step));
        }
        if !(max_distance.is_finite() && max_distance > 0.0) {
            return Err(PickingError::InvalidDistance(max_distance));
        }
        if step_count(step, max_distance).is_none() {
            return Err(PickingError::TooManySteps { step, max_distance });
        }
        Ok(Self::Marching { step, max_distance })
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        match *self {
            Self::Marching { step, max_distance } => march(ray, step, max_distance),
            Self::Exact => ray.intersect_ground_exact(),
        }
    }
}

impl Default for GroundIntersector {
    fn default() -> Self {
        Self::Marching {
            step: DEFAULT_MARCH_STEP,
            max_distance: DEFAULT_MARCH_DISTANCE,
        }
    }
}

/// Number of samples needed to cover `max_distance`, or `None` past [`MAX_MARCH_STEPS`].
fn step_count(step: f32, max_distance: f32) -> Option<u32> {
    let steps = (max_distance / step).ceil() + 1.0;
    (steps.is_finite() && (0.0..=MAX_MARCH_STEPS as f32).contains(&steps)).then_some(steps as u32)
}

fn march(ray: &Ray, step: f32, max_distance: f32) -> Option<Vec3> {
    let steps = step_count(step, max_distance)?;
    // t is recomputed from the step index so rounding does not accumulate
    (0..steps)
        .map(|i| i as f32 * step)
        .take_while(|&t| t < max_distance)
        .map(|t| ray.at(t))
        .find(|point| point.y <= 0.0)
}
