/// Custom materials: the additive heat haze and the alpha-masked floor.
use bevy::pbr::{ExtendedMaterial, MaterialExtension, MaterialPipeline, MaterialPipelineKey};
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, ShaderType, SpecializedMeshPipelineError,
};
use bevy::{prelude::*, reflect::TypePath};
use constants::paths::{FLOOR_MASK_SHADER_PATH, HEAT_HAZE_SHADER_PATH};

#[derive(Debug, Clone, Copy, PartialEq, ShaderType)]
pub struct HeatHazeUniform {
    pub tint: Vec4,
    pub time: f32,
}

/// Shimmering wall of hot air. One instance is shared by every haze plane so a
/// single time update drives all of them.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct HeatHazeMaterial {
    #[uniform(0)]
    pub params: HeatHazeUniform,
}

impl HeatHazeMaterial {
    pub fn new(tint: [f32; 3]) -> Self {
        Self {
            params: HeatHazeUniform {
                tint: Vec4::new(tint[0], tint[1], tint[2], 1.0),
                time: 0.0,
            },
        }
    }

    pub fn time(&self) -> f32 {
        self.params.time
    }

    pub fn set_time(&mut self, time: f32) {
        self.params.time = time;
    }
}

impl Material for HeatHazeMaterial {
    fn fragment_shader() -> ShaderRef {
        HEAT_HAZE_SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        _layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        // Visible from both sides and never occludes what is behind it.
        descriptor.primitive.cull_mode = None;
        if let Some(depth_stencil) = descriptor.depth_stencil.as_mut() {
            depth_stencil.depth_write_enabled = false;
        }
        Ok(())
    }
}

/// Alpha mask stretched once across the floor while the base PBR maps tile.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct FloorMaskExtension {
    #[texture(100)]
    #[sampler(101)]
    pub alpha_mask: Handle<Image>,
}

impl MaterialExtension for FloorMaskExtension {
    fn fragment_shader() -> ShaderRef {
        FLOOR_MASK_SHADER_PATH.into()
    }
}

pub type FloorMaterial = ExtendedMaterial<StandardMaterial, FloorMaskExtension>;

/// CPU mirror of the haze fragment alpha, kept in step with `heat_haze.wgsl`.
pub fn heat_haze_alpha(uv: Vec2, time: f32) -> f32 {
    let edge_fade = edge_fade(uv.x) * edge_fade(uv.y);
    ((0.1 + (uv.y * 20.0 + time * 4.0).sin() * 0.5) * edge_fade).clamp(0.0, 1.0)
}

/// CPU mirror of the two-wave shimmer term in `heat_haze.wgsl`.
pub fn heat_haze_shimmer(v: f32, time: f32) -> f32 {
    let wave1 = (v * 15.0 + time * 2.5).sin() * 0.5;
    let wave2 = (v * 25.0 - time * 3.5).sin() * 0.3;
    wave1 + wave2
}

fn edge_fade(coord: f32) -> f32 {
    1.0 - smoothstep(0.0, 0.3, (coord - 0.5).abs())
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haze_alpha_vanishes_outside_central_band() {
        for time in [0.0, 1.3, 42.0] {
            assert_eq!(heat_haze_alpha(Vec2::new(0.0, 0.5), time), 0.0);
            assert_eq!(heat_haze_alpha(Vec2::new(0.5, 0.9), time), 0.0);
            assert_eq!(heat_haze_alpha(Vec2::new(0.81, 0.19), time), 0.0);
        }
    }

    #[test]
    fn haze_alpha_stays_in_unit_range() {
        for step in 0..200 {
            let time = step as f32 * 0.37;
            let uv = Vec2::new(0.5, (step % 20) as f32 / 20.0);
            let alpha = heat_haze_alpha(uv, time);
            assert!((0.0..=1.0).contains(&alpha));
        }
    }

    #[test]
    fn haze_alpha_at_centre_follows_the_sine() {
        // At the centre the fade is 1, so alpha = 0.1 + 0.5 * sin(10 + 4t).
        let time = 0.25;
        let expected = (0.1 + (10.0f32 + 1.0).sin() * 0.5).clamp(0.0, 1.0);
        let alpha = heat_haze_alpha(Vec2::splat(0.5), time);
        assert!((alpha - expected).abs() < 1e-6);
    }

    #[test]
    fn shimmer_is_bounded_by_wave_amplitudes() {
        for step in 0..500 {
            let s = heat_haze_shimmer(step as f32 * 0.013, step as f32 * 0.1);
            assert!(s.abs() <= 0.8 + 1e-6);
        }
    }

    #[test]
    fn material_time_round_trips_through_uniform() {
        let mut material = HeatHazeMaterial::new([1.0, 0.95, 0.85]);
        assert_eq!(material.time(), 0.0);
        material.set_time(12.5);
        assert_eq!(material.params.time, 12.5);
        assert_eq!(material.params.tint, Vec4::new(1.0, 0.95, 0.85, 1.0));
    }
}
