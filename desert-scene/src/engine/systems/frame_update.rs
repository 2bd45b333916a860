use bevy::prelude::*;
use constants::animation::{PARTICLE_BOB_AMPLITUDE, PARTICLE_BOB_FREQUENCY, PARTICLE_YAW_RATE};

use crate::engine::scene::heat_haze::HeatHaze;
use crate::engine::scene::particles::ParticleField;
use crate::engine::shaders::HeatHazeMaterial;
use crate::engine::systems::render_loop::RenderLoop;

/// Everything the frame derives from elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameValues {
    pub shader_time: f32,
    /// Grows without bound; never wrapped.
    pub particle_yaw: f32,
    pub particle_offset: f32,
}

impl FrameValues {
    pub fn at(elapsed_secs: f32) -> Self {
        Self {
            shader_time: elapsed_secs,
            particle_yaw: elapsed_secs * PARTICLE_YAW_RATE,
            particle_offset: (elapsed_secs * PARTICLE_BOB_FREQUENCY).sin() * PARTICLE_BOB_AMPLITUDE,
        }
    }
}

/// Push the current frame values into the haze material and particle field.
pub fn advance_frame(
    render_loop: Res<RenderLoop>,
    heat_haze: Option<Res<HeatHaze>>,
    mut haze_materials: ResMut<Assets<HeatHazeMaterial>>,
    mut particle_fields: Query<&mut Transform, With<ParticleField>>,
) {
    let values = FrameValues::at(render_loop.elapsed_secs());

    if let Some(heat_haze) = heat_haze {
        if let Some(material) = haze_materials.get_mut(&heat_haze.material) {
            material.set_time(values.shader_time);
        }
    }

    for mut transform in &mut particle_fields {
        transform.rotation = Quat::from_rotation_y(values.particle_yaw);
        transform.translation.y = values.particle_offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_at_rest() {
        let values = FrameValues::at(0.0);
        assert_eq!(values.shader_time, 0.0);
        assert_eq!(values.particle_yaw, 0.0);
        assert_eq!(values.particle_offset, 0.0);
    }

    #[test]
    fn values_after_ten_seconds() {
        let values = FrameValues::at(10.0);
        assert_eq!(values.shader_time, 10.0);
        assert!((values.particle_yaw - 0.2).abs() < 1e-6);
        assert!((values.particle_offset - 3.0f32.sin() * 0.2).abs() < 1e-6);
        assert!((values.particle_offset - 0.0282).abs() < 1e-4);
    }

    #[test]
    fn offset_stays_within_amplitude() {
        for step in 0..10_000 {
            let values = FrameValues::at(step as f32 * 0.037);
            assert!(values.particle_offset.abs() <= 0.2 + 1e-6);
        }
    }

    #[test]
    fn same_time_same_values() {
        assert_eq!(FrameValues::at(123.456), FrameValues::at(123.456));
    }

    #[test]
    fn yaw_is_not_wrapped() {
        let values = FrameValues::at(1_000.0);
        assert!((values.particle_yaw - 20.0).abs() < 1e-4);
    }
}
