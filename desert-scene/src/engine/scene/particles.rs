use bevy::asset::RenderAssetUsages;
use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use constants::particles::{PARTICLE_COLOUR, PARTICLE_OPACITY, PARTICLE_SIZE};
use rand::Rng;

use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::scene::scatter::SceneRng;

/// Root of the dust field. The frame updater turns and bobs it.
#[derive(Component)]
pub struct ParticleField;

/// Uniform positions inside a cube of side `extent` centred on the origin.
pub fn particle_positions<R: Rng + ?Sized>(rng: &mut R, count: usize, extent: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.random::<f32>() - 0.5) * extent,
                (rng.random::<f32>() - 0.5) * extent,
                (rng.random::<f32>() - 0.5) * extent,
            )
        })
        .collect()
}

/// Every particle becomes three crossed quads so it reads as a speck from any
/// direction, all packed into one mesh.
pub fn build_particle_mesh(positions: &[Vec3], size: f32) -> Mesh {
    let half = size * 0.5;
    let quads: [[Vec3; 4]; 3] = [
        // XY
        [
            Vec3::new(-half, -half, 0.0),
            Vec3::new(half, -half, 0.0),
            Vec3::new(half, half, 0.0),
            Vec3::new(-half, half, 0.0),
        ],
        // ZY
        [
            Vec3::new(0.0, -half, -half),
            Vec3::new(0.0, -half, half),
            Vec3::new(0.0, half, half),
            Vec3::new(0.0, half, -half),
        ],
        // XZ
        [
            Vec3::new(-half, 0.0, -half),
            Vec3::new(half, 0.0, -half),
            Vec3::new(half, 0.0, half),
            Vec3::new(-half, 0.0, half),
        ],
    ];
    let normals = [Vec3::Z, Vec3::X, Vec3::Y];

    let vertex_count = positions.len() * 12;
    let mut vertices: Vec<[f32; 3]> = Vec::with_capacity(vertex_count);
    let mut vertex_normals: Vec<[f32; 3]> = Vec::with_capacity(vertex_count);
    let mut indices: Vec<u32> = Vec::with_capacity(positions.len() * 18);

    for center in positions {
        for (quad, normal) in quads.iter().zip(normals) {
            let base = vertices.len() as u32;
            for corner in quad {
                vertices.push((*center + *corner).to_array());
                vertex_normals.push(normal.to_array());
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, vertex_normals);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

pub fn particle_material() -> StandardMaterial {
    let [r, g, b] = PARTICLE_COLOUR;
    StandardMaterial {
        base_color: Color::srgb_u8(r, g, b).with_alpha(PARTICLE_OPACITY),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

pub fn spawn_particle_field(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    manifest: Res<SceneManifest>,
    mut rng: ResMut<SceneRng>,
) {
    let config = &manifest.particles;
    let positions = particle_positions(&mut rng.0, config.count, config.extent);

    commands.spawn((
        Name::new("Particle field"),
        Mesh3d(meshes.add(build_particle_mesh(&positions, PARTICLE_SIZE))),
        MeshMaterial3d(materials.add(particle_material())),
        Transform::IDENTITY,
        NotShadowCaster,
        ParticleField,
    ));
    info!("Particle field spawned with {} particles", positions.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::MeshAabb;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn positions_fill_centred_cube() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let positions = particle_positions(&mut rng, 5000, 40.0);

        assert_eq!(positions.len(), 5000);
        for position in &positions {
            assert!(position.abs().max_element() <= 20.0, "{position}");
        }
        let mean = positions.iter().copied().sum::<Vec3>() / positions.len() as f32;
        assert!(mean.length() < 1.5, "mean {mean}");
    }

    #[test]
    fn mesh_packs_three_quads_per_particle() {
        let positions = [Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0)];
        let mesh = build_particle_mesh(&positions, 0.02);

        assert_eq!(mesh.count_vertices(), 24);
        assert_eq!(mesh.indices().map(|indices| indices.len()), Some(36));

        let aabb = mesh.compute_aabb().unwrap();
        let max = Vec3::from(aabb.max());
        assert!(max.abs_diff_eq(Vec3::new(1.01, 2.01, 3.01), 1e-5), "{max}");
    }

    #[test]
    fn material_is_unlit_translucent_sand() {
        let material = particle_material();
        assert!(material.unlit);
        assert_eq!(material.alpha_mode, AlphaMode::Blend);
        assert!((material.base_color.alpha() - 0.5).abs() < 1e-6);
    }
}
