use std::f32::consts::{PI, TAU};

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::pbr::ShadowFilteringMethod;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::render_settings::{
    CAMERA_EYE, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_TARGET, ORBIT_DAMPING_FACTOR,
    ORBIT_MAX_RADIUS, ORBIT_MIN_RADIUS,
};

use crate::engine::scene::lighting::distance_fog;

/// Keeps the camera off the poles where the view would flip.
const POLAR_EPSILON: f32 = 1e-3;

/// Dolly factor per wheel step.
const DOLLY_SCALE: f32 = 0.95;

/// Pixel scroll deltas are far larger than line steps.
const PIXEL_SCROLL_TO_STEPS: f32 = 0.01;

/// Camera orbiting `target` on a sphere. Azimuth is measured around +Y from
/// +Z, polar from +Y.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub azimuth: f32,
    pub polar: f32,
    /// Vertical field of view, used to scale panning to the view.
    pub fov_y: f32,
    pub damping: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pending_azimuth: f32,
    pending_polar: f32,
    pending_pan: Vec3,
}

impl OrbitCamera {
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length().clamp(ORBIT_MIN_RADIUS, ORBIT_MAX_RADIUS);
        let polar = if offset.length() > f32::EPSILON {
            (offset.y / offset.length()).clamp(-1.0, 1.0).acos()
        } else {
            PI / 2.0
        };

        Self {
            target,
            radius,
            azimuth: offset.x.atan2(offset.z),
            polar: polar.clamp(POLAR_EPSILON, PI - POLAR_EPSILON),
            fov_y: CAMERA_FOV_DEGREES.to_radians(),
            damping: ORBIT_DAMPING_FACTOR,
            min_radius: ORBIT_MIN_RADIUS,
            max_radius: ORBIT_MAX_RADIUS,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
            pending_pan: Vec3::ZERO,
        }
    }

    /// Queue a drag of `delta` pixels; a drag the height of the viewport is a
    /// full turn.
    pub fn rotate(&mut self, delta: Vec2, viewport_height: f32) {
        let height = viewport_height.max(1.0);
        self.pending_azimuth -= TAU * delta.x / height;
        self.pending_polar -= TAU * delta.y / height;
    }

    /// Queue a pan so the point under the cursor follows the drag.
    pub fn pan(&mut self, delta: Vec2, viewport_height: f32) {
        let height = viewport_height.max(1.0);
        let target_distance = self.radius * (self.fov_y * 0.5).tan();
        let transform = self.transform();
        let right = transform.rotation * Vec3::X;
        let up = transform.rotation * Vec3::Y;

        self.pending_pan += -right * (2.0 * delta.x * target_distance / height)
            + up * (2.0 * delta.y * target_distance / height);
    }

    /// Move towards the target for positive steps, away for negative ones.
    pub fn dolly(&mut self, steps: f32) {
        self.radius = (self.radius * DOLLY_SCALE.powf(steps)).clamp(self.min_radius, self.max_radius);
    }

    /// Apply a damped share of the queued motion and decay the remainder.
    pub fn advance(&mut self) {
        let damping = self.damping;

        self.azimuth = (self.azimuth + self.pending_azimuth * damping).rem_euclid(TAU);
        self.polar = (self.polar + self.pending_polar * damping)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        self.target += self.pending_pan * damping;

        let decay = 1.0 - damping;
        self.pending_azimuth *= decay;
        self.pending_polar *= decay;
        self.pending_pan *= decay;
    }

    pub fn eye(&self) -> Vec3 {
        let sin_polar = self.polar.sin();
        self.target
            + self.radius
                * Vec3::new(
                    sin_polar * self.azimuth.sin(),
                    self.polar.cos(),
                    sin_polar * self.azimuth.cos(),
                )
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }

    pub fn is_settled(&self) -> bool {
        self.pending_azimuth.abs() < 1e-6
            && self.pending_polar.abs() < 1e-6
            && self.pending_pan.length_squared() < 1e-12
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(CAMERA_EYE, CAMERA_TARGET)
    }
}

pub fn spawn_camera(commands: &mut Commands) {
    let orbit = OrbitCamera::default();

    commands.spawn((
        Name::new("Main camera"),
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: orbit.fov_y,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        orbit.transform(),
        orbit,
        distance_fog(),
        ShadowFilteringMethod::Gaussian,
    ));
}

pub fn orbit_camera_controller(
    mut camera_query: Query<(&mut Transform, &mut OrbitCamera)>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let scroll_steps: f32 = scroll_events
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * PIXEL_SCROLL_TO_STEPS,
        })
        .sum();

    let viewport_height = windows.single().map(|window| window.height()).unwrap_or(1.0);

    for (mut transform, mut orbit) in &mut camera_query {
        if mouse_delta != Vec2::ZERO {
            if mouse_button.pressed(MouseButton::Left) {
                orbit.rotate(mouse_delta, viewport_height);
            } else if mouse_button.pressed(MouseButton::Right) {
                orbit.pan(mouse_delta, viewport_height);
            }
        }
        if scroll_steps.abs() > f32::EPSILON {
            orbit.dolly(scroll_steps);
        }

        orbit.advance();
        *transform = orbit.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(orbit: &mut OrbitCamera) {
        for _ in 0..2000 {
            orbit.advance();
        }
    }

    #[test]
    fn starts_at_configured_eye() {
        let orbit = OrbitCamera::default();
        assert!(orbit.eye().abs_diff_eq(CAMERA_EYE, 1e-4), "{}", orbit.eye());
        assert_eq!(orbit.target, CAMERA_TARGET);

        let forward = orbit.transform().forward();
        let expected = (CAMERA_TARGET - CAMERA_EYE).normalize();
        assert!(forward.abs_diff_eq(expected, 1e-4));
    }

    #[test]
    fn damping_applies_a_fraction_per_frame() {
        let mut orbit = OrbitCamera::default();
        let start = orbit.azimuth;
        orbit.rotate(Vec2::new(-100.0, 0.0), 1000.0);
        orbit.advance();

        let full = TAU * 0.1;
        let step = (orbit.azimuth - start).rem_euclid(TAU);
        assert!((step - full * 0.05).abs() < 1e-5, "step {step}");
    }

    #[test]
    fn damped_rotation_converges_to_full_drag() {
        let mut orbit = OrbitCamera::default();
        let start = orbit.azimuth;
        orbit.rotate(Vec2::new(-250.0, 0.0), 1000.0);
        settle(&mut orbit);

        let turned = (orbit.azimuth - start).rem_euclid(TAU);
        assert!((turned - TAU * 0.25).abs() < 1e-3, "turned {turned}");
        assert!(orbit.is_settled());
        assert!((orbit.eye().distance(orbit.target) - orbit.radius).abs() < 1e-4);
    }

    #[test]
    fn polar_angle_never_reaches_the_poles() {
        let mut orbit = OrbitCamera::default();
        orbit.rotate(Vec2::new(0.0, 10_000.0), 100.0);
        settle(&mut orbit);
        assert!(orbit.polar >= POLAR_EPSILON);

        orbit.rotate(Vec2::new(0.0, -10_000.0), 100.0);
        settle(&mut orbit);
        assert!(orbit.polar <= PI - POLAR_EPSILON);
    }

    #[test]
    fn dolly_scales_radius_within_limits() {
        let mut orbit = OrbitCamera::default();
        let radius = orbit.radius;
        orbit.dolly(1.0);
        assert!((orbit.radius - radius * 0.95).abs() < 1e-5);

        orbit.dolly(-1000.0);
        assert_eq!(orbit.radius, ORBIT_MAX_RADIUS);
        orbit.dolly(1000.0);
        assert_eq!(orbit.radius, ORBIT_MIN_RADIUS);
    }

    #[test]
    fn pan_moves_target_and_eye_together() {
        let mut orbit = OrbitCamera::default();
        let eye = orbit.eye();
        let target = orbit.target;
        orbit.pan(Vec2::new(40.0, 0.0), 800.0);
        settle(&mut orbit);

        let shift = orbit.target - target;
        assert!(shift.length() > 0.0);
        assert!((orbit.eye() - eye).abs_diff_eq(shift, 1e-4));
        // Horizontal drag stays in the horizontal plane.
        assert!(shift.y.abs() < 1e-4);
    }
}
