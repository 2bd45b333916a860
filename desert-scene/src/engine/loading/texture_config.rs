use bevy::image::{ImageAddressMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;

use crate::engine::assets::scene_assets::SceneAssets;
use crate::engine::loading::progress::{AssetSettled, SceneAsset};
use crate::engine::scene::floor::Floor;
use crate::engine::shaders::FloorMaterial;

/// Linear filtering with repeat wrapping so the floor maps can tile.
pub fn repeating_sampler() -> ImageSampler {
    ImageSampler::Descriptor(ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::Repeat,
        address_mode_v: ImageAddressMode::Repeat,
        ..ImageSamplerDescriptor::linear()
    })
}

// Switch tiled floor maps to repeat wrapping as they arrive
pub fn configure_floor_textures(
    mut settled: EventReader<AssetSettled>,
    assets: Res<SceneAssets>,
    floor: Option<Res<Floor>>,
    mut images: ResMut<Assets<Image>>,
    mut floor_materials: ResMut<Assets<FloorMaterial>>,
) {
    let mut configured = false;

    for event in settled.read() {
        // The alpha mask keeps clamped sampling, it is stretched once over the floor.
        if !event.asset.is_floor_texture()
            || event.asset == SceneAsset::FloorAlpha
            || event.outcome.is_err()
        {
            continue;
        }
        let Some(handle) = assets.image_for(event.asset) else {
            continue;
        };
        if let Some(image) = images.get_mut(handle) {
            image.sampler = repeating_sampler();
            configured = true;
            debug!("Configured repeat sampling for {}", event.asset);
        }
    }

    // Touch the material so its bind group is rebuilt with the new samplers.
    if configured {
        if let Some(floor) = floor {
            floor_materials.get_mut(&floor.material);
        }
    }
}
