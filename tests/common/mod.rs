use glam::Vec3;
use chroma_board::Camera;

/// Pixel whose picking ray passes through `point`.
pub fn pixel_for(camera: &Camera, point: Vec3) -> (f32, f32) {
    let config = camera.config();
    let (pixel_width, pixel_height) = camera.pixel_size();
    let to_point = point - config.position;
    let on_plane = config.position + to_point * (config.near_plane / to_point.dot(config.facing));
    let from_corner = on_plane - camera.upper_left();
    (
        from_corner.dot(config.right) / pixel_width,
        -from_corner.dot(config.up) / pixel_height,
    )
}
