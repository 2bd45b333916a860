use bevy::math::Affine2;
use bevy::prelude::*;
use constants::render_settings::{FLOOR_SIZE, FLOOR_TEXTURE_REPEAT};

use crate::engine::assets::scene_assets::{FloorTextures, SceneAssets};
use crate::engine::shaders::{FloorMaskExtension, FloorMaterial};

/// Handle to the floor material, kept so samplers can be swapped in later.
#[derive(Resource)]
pub struct Floor {
    pub material: Handle<FloorMaterial>,
}

#[derive(Component)]
pub struct FloorSurface;

pub fn floor_mesh() -> Mesh {
    let mut mesh = Plane3d::default()
        .mesh()
        .size(FLOOR_SIZE, FLOOR_SIZE)
        .build();
    if let Err(err) = mesh.generate_tangents() {
        warn!("Floor normal map disabled, tangents unavailable: {err}");
    }
    mesh
}

/// PBR sand with tiled maps; the displacement map doubles as occlusion.
pub fn floor_material(textures: &FloorTextures) -> FloorMaterial {
    FloorMaterial {
        base: StandardMaterial {
            base_color_texture: Some(textures.colour.clone()),
            normal_map_texture: Some(textures.normal.clone()),
            metallic_roughness_texture: Some(textures.roughness.clone()),
            occlusion_texture: Some(textures.displacement.clone()),
            metallic: 0.0,
            perceptual_roughness: 1.0,
            uv_transform: Affine2::from_scale(Vec2::splat(FLOOR_TEXTURE_REPEAT)),
            alpha_mode: AlphaMode::Blend,
            ..default()
        },
        extension: FloorMaskExtension {
            alpha_mask: textures.alpha.clone(),
        },
    }
}

pub fn spawn_floor(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<FloorMaterial>>,
    assets: Res<SceneAssets>,
) {
    let material = materials.add(floor_material(&assets.floor));

    commands.spawn((
        Name::new("Floor"),
        Mesh3d(meshes.add(floor_mesh())),
        MeshMaterial3d(material.clone()),
        Transform::IDENTITY,
        FloorSurface,
    ));
    commands.insert_resource(Floor { material });
    info!("Floor spawned ({FLOOR_SIZE}x{FLOOR_SIZE})");
}
