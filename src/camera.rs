use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::Ray;

/// Calibration applied to the per-pixel world size so picked points line up with the rendered
/// board. Found empirically for the reference viewport.
pub const PIXEL_SCALE_CORRECTION: f32 = 0.1;

const BASIS_TOLERANCE: f32 = 1e-4;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CameraError {
    #[error("vertical half-angle must lie in (0, pi/2) radians, got {0}")]
    InvalidFieldOfView(f32),
    #[error("near plane distance must be positive, got {0}")]
    InvalidNearPlane(f32),
    #[error("aspect ratio must be positive, got {0}")]
    InvalidAspectRatio(f32),
    #[error("viewport must be at least one pixel, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },
    #[error("camera {axis} vector is not unit length: {vector}")]
    NonUnitBasis { axis: &'static str, vector: Vec3 },
    #[error("camera {first} and {second} vectors are not orthogonal")]
    NonOrthogonalBasis {
        first: &'static str,
        second: &'static str,
    },
    #[error("image plane passes through the camera position; no ray direction exists")]
    DegenerateRay,
}

/// Fixed pose and projection of the virtual picking camera.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub facing: Vec3,
    pub up: Vec3,
    pub right: Vec3,
    pub near_plane: f32,
    /// Radians.
    pub vertical_half_angle: f32,
    pub aspect_ratio: f32,
    pub width: u32,
    pub height: u32,
    pub pixel_scale: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.0, 1.0),
            facing: Vec3::new(0.0, -1.0, -1.0).normalize(),
            up: Vec3::new(0.0, 1.0, -1.0).normalize(),
            right: Vec3::X,
            near_plane: 0.1,
            vertical_half_angle: 22.5_f32.to_radians(),
            aspect_ratio: 16.0 / 9.0,
            width: 1280,
            height: 720,
            pixel_scale: PIXEL_SCALE_CORRECTION,
        }
    }
}

impl CameraConfig {
    fn check(&self) -> Result<(), CameraError> {
        let half_angle = self.vertical_half_angle;
        if !(half_angle > 0.0 && half_angle < std::f32::consts::FRAC_PI_2) {
            return Err(CameraError::InvalidFieldOfView(half_angle));
        }
        if !(self.near_plane.is_finite() && self.near_plane > 0.0) {
            return Err(CameraError::InvalidNearPlane(self.near_plane));
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(CameraError::InvalidAspectRatio(self.aspect_ratio));
        }
        if self.width == 0 || self.height == 0 {
            return Err(CameraError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }

        let axes = [("facing", self.facing), ("up", self.up), ("right", self.right)];
        if let Some(&(axis, vector)) = axes
            .iter()
            .find(|(_, v)| (v.length() - 1.0).abs() > BASIS_TOLERANCE)
        {
            return Err(CameraError::NonUnitBasis { axis, vector });
        }
        for (i, &(first, a)) in axes.iter().enumerate() {
            for &(second, b) in &axes[i + 1..] {
                if a.dot(b).abs() > BASIS_TOLERANCE {
                    return Err(CameraError::NonOrthogonalBasis { first, second });
                }
            }
        }
        Ok(())
    }
}

/// Camera model with the per-pixel image plane geometry derived once at construction.
#[derive(Clone, Debug)]
pub struct Camera {
    config: CameraConfig,
    pixel_width: f32,
    pixel_height: f32,
    upper_left: Vec3,
}

impl Camera {
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        config.check()?;

        let viewport_height = 2.0 * config.vertical_half_angle.tan();
        let viewport_width = viewport_height * config.aspect_ratio;
        let pixel_width = viewport_width / config.width as f32 * config.pixel_scale;
        let pixel_height = viewport_height / config.height as f32 * config.pixel_scale;

        // Offsets of half a pixel put rays through pixel centers
        let image_plane_center = config.position + config.facing * config.near_plane;
        let upper_left = image_plane_center
            + config.up * (pixel_height * (config.height as f32 / 2.0 - 0.5))
            - config.right * (pixel_width * (config.width as f32 / 2.0 - 0.5));

        let camera = Self {
            config,
            pixel_width,
            pixel_height,
            upper_left,
        };

        let (w, h) = (camera.config.width as f32 - 1.0, camera.config.height as f32 - 1.0);
        let corners = [(0.0, 0.0), (w, 0.0), (0.0, h), (w, h)];
        if corners
            .iter()
            .any(|&(x, y)| Ray::through(camera.config.position, camera.image_plane_point(x, y)).is_none())
        {
            return Err(CameraError::DegenerateRay);
        }

        log::debug!(
            "camera ready: pixel size {:.3e}x{:.3e}, upper-left {:?}",
            pixel_width,
            pixel_height,
            upper_left
        );
        Ok(camera)
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// World-space size of one pixel on the image plane, as (width, height).
    pub fn pixel_size(&self) -> (f32, f32) {
        (self.pixel_width, self.pixel_height)
    }

    /// World-space center of the top-left pixel.
    pub fn upper_left(&self) -> Vec3 {
        self.upper_left
    }

    /// World-space point on the image plane under pixel `(x, y)`, with `y` growing downwards.
    pub fn image_plane_point(&self, x: f32, y: f32) -> Vec3 {
        self.upper_left + self.config.right * (self.pixel_width * x)
            - self.config.up * (self.pixel_height * y)
    }

    /// Ray from the camera through the center of pixel `(x, y)`.
    pub fn cast_ray(&self, x: f32, y: f32) -> Ray {
        let point = self.image_plane_point(x, y);
        Ray {
            origin: self.config.position,
            direction: (point - self.config.position).normalize(),
        }
    }
}
