use std::f32::consts::TAU;

use bevy::prelude::*;
use constants::scatter::{
    ROCK_COUNT, ROCK_RADIUS_MIN, ROCK_RADIUS_SPAN, ROCK_SCALE_MIN, ROCK_SCALE_SPAN,
    ROCK_TILT_JITTER, SCATTER_CENTER,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source for every draw in the scene.
#[derive(Resource)]
pub struct SceneRng(pub ChaCha8Rng);

impl SceneRng {
    /// Seeded when a seed is given, otherwise drawn from OS entropy.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(ChaCha8Rng::seed_from_u64(seed)),
            None => Self(ChaCha8Rng::from_rng(&mut rand::rng())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterSettings {
    pub count: usize,
    pub center: Vec3,
    pub radius_min: f32,
    pub radius_span: f32,
    pub scale_min: f32,
    pub scale_span: f32,
    /// Full width of the X/Z tilt jitter.
    pub tilt_jitter: f32,
}

impl Default for ScatterSettings {
    fn default() -> Self {
        Self {
            count: ROCK_COUNT,
            center: SCATTER_CENTER,
            radius_min: ROCK_RADIUS_MIN,
            radius_span: ROCK_RADIUS_SPAN,
            scale_min: ROCK_SCALE_MIN,
            scale_span: ROCK_SCALE_SPAN,
            tilt_jitter: ROCK_TILT_JITTER,
        }
    }
}

/// Where one rock sits, how it is turned and how big it is.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub yaw: f32,
    pub tilt_x: f32,
    pub tilt_z: f32,
    pub uniform_scale: f32,
}

impl Placement {
    pub fn transform(&self) -> Transform {
        Transform {
            translation: self.position,
            rotation: Quat::from_euler(EulerRot::XYZ, self.tilt_x, self.yaw, self.tilt_z),
            scale: Vec3::splat(self.uniform_scale),
        }
    }

    /// Horizontal distance from `center`.
    pub fn radius_from(&self, center: Vec3) -> f32 {
        Vec2::new(self.position.x - center.x, self.position.z - center.z).length()
    }

    /// Angle around `center` in `[0, 2π)`, measured from +X towards +Z.
    pub fn angle_from(&self, center: Vec3) -> f32 {
        (self.position.z - center.z)
            .atan2(self.position.x - center.x)
            .rem_euclid(TAU)
    }
}

/// Marks a rock spawned by the scatter generator.
#[derive(Component)]
pub struct ScatteredRock;

pub fn scatter_placement<R: Rng + ?Sized>(rng: &mut R, settings: &ScatterSettings) -> Placement {
    let angle = rng.random::<f32>() * TAU;
    let radius = settings.radius_min + rng.random::<f32>() * settings.radius_span;
    let yaw = rng.random::<f32>() * TAU;
    let tilt_x = (rng.random::<f32>() - 0.5) * settings.tilt_jitter;
    let tilt_z = (rng.random::<f32>() - 0.5) * settings.tilt_jitter;
    let uniform_scale = settings.scale_min + rng.random::<f32>() * settings.scale_span;

    Placement {
        position: Vec3::new(
            settings.center.x + angle.cos() * radius,
            settings.center.y,
            settings.center.z + angle.sin() * radius,
        ),
        yaw,
        tilt_x,
        tilt_z,
        uniform_scale,
    }
}

/// `settings.count` independent placements; overlaps are allowed.
pub fn scatter_placements<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &ScatterSettings,
) -> Vec<Placement> {
    (0..settings.count)
        .map(|_| scatter_placement(rng, settings))
        .collect()
}

/// Spawn one copy of `template` per placement.
pub fn spawn_scattered_rocks(
    commands: &mut Commands,
    template: &Handle<Scene>,
    placements: &[Placement],
) {
    for (index, placement) in placements.iter().enumerate() {
        commands.spawn((
            Name::new(format!("Rock {index}")),
            SceneRoot(template.clone()),
            placement.transform(),
            *placement,
            ScatteredRock,
        ));
    }
}
