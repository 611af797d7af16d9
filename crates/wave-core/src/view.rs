//! Camera and viewport types shared with frontends.
//!
//! These avoid platform-specific APIs so the same math drives any host. The
//! viewport carries the camera plus the physical surface metrics that the
//! presentation stage needs for perspective point sizing and the screen
//! mask.

use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};

/// Right-handed camera with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 3.5),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: std::f32::consts::FRAC_PI_4,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Viewport {
    pub camera: Camera,
    /// Logical surface size in pixels.
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        let mut camera = Camera::default();
        camera.aspect = width.max(1) as f32 / height.max(1) as f32;
        Self {
            camera,
            width,
            height,
            pixel_ratio: 1.0,
        }
    }

    pub fn physical_width(&self) -> f32 {
        self.width as f32 * self.pixel_ratio
    }

    pub fn physical_height(&self) -> f32 {
        self.height as f32 * self.pixel_ratio
    }

    /// Perspective focal length in physical pixels; the scale factor that
    /// turns world-size-over-depth into on-screen pixels.
    pub fn focal_px(&self) -> f32 {
        0.5 * self.physical_height() / (0.5 * self.camera.fovy_radians).tan()
    }

    pub fn view_proj(&self) -> Mat4 {
        self.camera.projection_matrix() * self.camera.view_matrix()
    }

    /// Project a world point to physical-pixel screen coordinates. Returns
    /// `None` behind the camera.
    pub fn project(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_proj() * world.extend(1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        let ndc = clip.xyz() / clip.w;
        Some(Vec2::new(
            (ndc.x * 0.5 + 0.5) * self.physical_width(),
            (1.0 - (ndc.y * 0.5 + 0.5)) * self.physical_height(),
        ))
    }
}
