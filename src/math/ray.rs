use glam::Vec3;

/// A half-line `origin + t * direction` for `t >= 0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub direction: Vec3,
}

impl Ray {
    /// Builds a ray pointing from `origin` towards `through`.
    /// Returns `None` when the two points coincide and no direction exists.
    pub fn through(origin: Vec3, through: Vec3) -> Option<Self> {
        let direction = (through - origin).try_normalize()?;
        Some(Self { origin, direction })
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Exact crossing with the ground plane `y = 0`.
    ///
    /// Only rays that start above the plane and head downwards hit it.
    pub fn intersect_ground_exact(&self) -> Option<Vec3> {
        if self.origin.y <= 0.0 {
            return (self.origin.y == 0.0).then_some(self.origin);
        }
        if self.direction.y >= 0.0 {
            return None;
        }
        let t = -self.origin.y / self.direction.y;
        let mut point = self.at(t);
        point.y = 0.0;
        Some(point)
    }
}
