//! Keyframe sequences for tokens landing on the board.
//!
//! Sequences are plain data. A playback collaborator is expected to interpolate
//! position and scale linearly between neighbouring keyframes by normalized time.

use glam::Vec3;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOKEN_SCALE: f32 = 0.05;
pub const DEFAULT_DROP_HEIGHT: f32 = 0.5;

/// Position and scale; rotation is always identity.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub const fn new(position: Vec3, scale: Vec3) -> Self {
        Self { position, scale }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub transform: Transform,
    /// Normalized time in `[0, 1]`.
    pub time: f32,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum KeyframeError {
    #[error("keyframe sequence is empty")]
    Empty,
    #[error("keyframe sequence must start at 0 and end at 1, got {first}..{last}")]
    BadEndpoints { first: f32, last: f32 },
    #[error("keyframe {index} at time {time} does not come after the previous one")]
    NonIncreasingTime { index: usize, time: f32 },
}

/// Keyframes with strictly increasing times running from exactly 0 to exactly 1.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KeyframeSequence(Vec<Keyframe>);

impl KeyframeSequence {
    pub fn new(keyframes: Vec<Keyframe>) -> Result<Self, KeyframeError> {
        let (first, last) = match (keyframes.first(), keyframes.last()) {
            (Some(first), Some(last)) => (first.time, last.time),
            _ => return Err(KeyframeError::Empty),
        };
        if first != 0.0 || last != 1.0 {
            return Err(KeyframeError::BadEndpoints { first, last });
        }
        if let Some((index, pair)) = keyframes
            .windows(2)
            .enumerate()
            .find(|(_, pair)| pair[1].time <= pair[0].time)
        {
            return Err(KeyframeError::NonIncreasingTime {
                index: index + 1,
                time: pair[1].time,
            });
        }
        Ok(Self(keyframes))
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.0
    }

    pub fn first(&self) -> &Keyframe {
        &self.0[0]
    }

    pub fn last(&self) -> &Keyframe {
        &self.0[self.0.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a KeyframeSequence {
    type Item = &'a Keyframe;
    type IntoIter = std::slice::Iter<'a, Keyframe>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Produces the landing animation for a token dropped onto a cell.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenAnimator {
    /// Uniform scale of a seated token.
    pub token_scale: f32,
    /// How far above the cell the token starts.
    pub drop_height: f32,
}

impl Default for TokenAnimator {
    fn default() -> Self {
        Self {
            token_scale: DEFAULT_TOKEN_SCALE,
            drop_height: DEFAULT_DROP_HEIGHT,
        }
    }
}

impl TokenAnimator {
    fn key(&self, target: Vec3, lift: f32, scale: Vec3, time: f32) -> Keyframe {
        Keyframe {
            transform: Transform::new(
                target + Vec3::Y * (self.drop_height * lift),
                scale * self.token_scale,
            ),
            time,
        }
    }

    /// Pose a freshly seated token rests in.
    pub fn seated(&self, target: Vec3) -> Transform {
        Transform::new(target, Vec3::splat(self.token_scale))
    }

    /// Drop, stretch, settle.
    pub fn accepted(&self, target: Vec3) -> KeyframeSequence {
        self.sequence(vec![
            self.key(target, 1.0, Vec3::ONE, 0.0),
            self.key(target, 0.2, Vec3::new(0.6, 1.6, 0.6), 0.5),
            self.key(target, 0.0, Vec3::ONE, 1.0),
        ])
    }

    /// Drop, squash, bounce back up and get thrown off the board.
    pub fn rejected(&self, target: Vec3) -> KeyframeSequence {
        self.sequence(vec![
            self.key(target, 1.0, Vec3::ONE, 0.0),
            self.key(target, 0.1, Vec3::new(1.4, 0.6, 1.4), 0.2),
            self.key(target, 0.6, Vec3::ONE, 0.5),
            self.key(target, 2.0, Vec3::new(0.4, 2.0, 0.4), 1.0),
        ])
    }

    fn sequence(&self, keyframes: Vec<Keyframe>) -> KeyframeSequence {
        // Times above are constants that already satisfy the sequence rules
        KeyframeSequence(keyframes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(time: f32) -> Keyframe {
        Keyframe {
            transform: Transform::new(Vec3::ZERO, Vec3::ONE),
            time,
        }
    }

    #[test]
    fn test_sequence_validation() {
        assert_eq!(KeyframeSequence::new(vec![]), Err(KeyframeError::Empty));
        assert_eq!(
            KeyframeSequence::new(vec![key(0.1), key(1.0)]),
            Err(KeyframeError::BadEndpoints { first: 0.1, last: 1.0 })
        );
        assert_eq!(
            KeyframeSequence::new(vec![key(0.0), key(0.5), key(0.5), key(1.0)]),
            Err(KeyframeError::NonIncreasingTime { index: 2, time: 0.5 })
        );
        assert!(KeyframeSequence::new(vec![key(0.0), key(1.0)]).is_ok());
    }

    #[test]
    fn test_built_in_sequences_are_valid() {
        let animator = TokenAnimator::default();
        let target = Vec3::new(0.2, 0.0, -0.3);
        for sequence in [animator.accepted(target), animator.rejected(target)] {
            assert_eq!(KeyframeSequence::new(sequence.keyframes().to_vec()), Ok(sequence.clone()));
        }
    }

    #[test]
    fn test_accepted_ends_seated() {
        let animator = TokenAnimator::default();
        let target = Vec3::new(-0.1, 0.0, 0.4);
        let sequence = animator.accepted(target);
        let times: Vec<f32> = sequence.into_iter().map(|k| k.time).collect();
        assert_eq!(times, vec![0.0, 0.5, 1.0]);
        assert_eq!(sequence.last().transform, animator.seated(target));
        assert!(sequence.first().transform.position.y > target.y);
    }

    #[test]
    fn test_rejected_ends_off_board() {
        let animator = TokenAnimator::default();
        let target = Vec3::ZERO;
        let sequence = animator.rejected(target);
        let times: Vec<f32> = sequence.into_iter().map(|k| k.time).collect();
        assert_eq!(times, vec![0.0, 0.2, 0.5, 1.0]);

        let accepted = animator.accepted(target);
        assert_eq!(sequence.first(), accepted.first());
        assert_ne!(sequence.last().transform, animator.seated(target));

        let heights: Vec<f32> = sequence.into_iter().map(|k| k.transform.position.y).collect();
        assert!(heights[2] > heights[1], "second bounce should rise: {heights:?}");
        assert!(heights[3] > heights[0], "token should be thrown clear: {heights:?}");
    }

    #[test]
    fn test_keyframes_stay_over_target() {
        let animator = TokenAnimator::default();
        let target = Vec3::new(0.3, 0.0, 0.1);
        for keyframe in &animator.rejected(target) {
            let p = keyframe.transform.position;
            assert_eq!((p.x, p.z), (target.x, target.z));
        }
    }
}
