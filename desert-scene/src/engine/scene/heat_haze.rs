use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;
use constants::heat_haze::{
    HAZE_PLANES, HazePlane, PLANE_DISTANCE, PLANE_ELEVATION, PLANE_HEIGHT, PLANE_WIDTH, TINT,
};

use crate::engine::shaders::HeatHazeMaterial;

/// The one material all haze planes share.
#[derive(Resource)]
pub struct HeatHaze {
    pub material: Handle<HeatHazeMaterial>,
}

#[derive(Component)]
pub struct HeatHazePlane;

/// Plane centre pushed out along its direction, turned by its yaw.
pub fn haze_plane_transform(plane: &HazePlane) -> Transform {
    Transform::from_translation(plane.direction * PLANE_DISTANCE + Vec3::Y * PLANE_ELEVATION)
        .with_rotation(Quat::from_rotation_y(plane.yaw))
}

pub fn spawn_heat_haze_planes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<HeatHazeMaterial>>,
) {
    let material = materials.add(HeatHazeMaterial::new(TINT));
    let mesh = meshes.add(Rectangle::new(PLANE_WIDTH, PLANE_HEIGHT));

    for (index, plane) in HAZE_PLANES.iter().enumerate() {
        commands.spawn((
            Name::new(format!("Heat haze {index}")),
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            haze_plane_transform(plane),
            NotShadowCaster,
            NotShadowReceiver,
            HeatHazePlane,
        ));
    }

    commands.insert_resource(HeatHaze { material });
    info!("Spawned {} heat haze planes", HAZE_PLANES.len());
}
