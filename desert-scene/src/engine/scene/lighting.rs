use bevy::pbr::{CascadeShadowConfigBuilder, DistanceFog, FogFalloff};
use bevy::prelude::*;
use constants::render_settings::{FOG_COLOUR, FOG_DENSITY, SUN_ILLUMINANCE, SUN_POSITION};

#[derive(Component)]
pub struct Sun;

pub fn spawn_sun(commands: &mut Commands) {
    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        CascadeShadowConfigBuilder {
            maximum_distance: 60.0,
            ..default()
        }
        .build(),
        Sun,
    ));
}

/// Sandy exponential-squared haze that swallows the horizon.
pub fn distance_fog() -> DistanceFog {
    let [r, g, b] = FOG_COLOUR;
    DistanceFog {
        color: Color::srgb_u8(r, g, b),
        falloff: FogFalloff::ExponentialSquared {
            density: FOG_DENSITY,
        },
        ..default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fog_is_dense_sand() {
        let fog = distance_fog();
        assert_eq!(fog.color, Color::srgb_u8(0xcb, 0xd6, 0x9b));
        let FogFalloff::ExponentialSquared { density } = fog.falloff else {
            panic!("expected exponential squared falloff");
        };
        assert_eq!(density, 0.08);
    }
}
