use std::f32::consts::{PI, TAU};

use bevy::asset::RenderAssetUsages;
use bevy::core_pipeline::Skybox;
use bevy::pbr::environment_map::EnvironmentMapLight;
use bevy::prelude::*;
use bevy::render::render_resource::{
    Extent3d, TextureDimension, TextureFormat, TextureViewDescriptor, TextureViewDimension,
};
use constants::render_settings::{ENVIRONMENT_INTENSITY, SKYBOX_BRIGHTNESS};
use half::f16;

use crate::engine::error::SceneError;

const SOURCE_PIXEL_BYTES: usize = 16;
const FACE_PIXEL_BYTES: usize = 8;

/// Cubemap faces in layer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeFace {
    PositiveX,
    NegativeX,
    PositiveY,
    NegativeY,
    PositiveZ,
    NegativeZ,
}

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PositiveX,
        CubeFace::NegativeX,
        CubeFace::PositiveY,
        CubeFace::NegativeY,
        CubeFace::PositiveZ,
        CubeFace::NegativeZ,
    ];
}

/// World direction through a face texel. `s` runs left to right and `t` top to
/// bottom, both in `[-1, 1]`.
pub fn face_direction(face: CubeFace, s: f32, t: f32) -> Vec3 {
    let direction = match face {
        CubeFace::PositiveX => Vec3::new(1.0, -t, -s),
        CubeFace::NegativeX => Vec3::new(-1.0, -t, s),
        CubeFace::PositiveY => Vec3::new(s, 1.0, t),
        CubeFace::NegativeY => Vec3::new(s, -1.0, -t),
        CubeFace::PositiveZ => Vec3::new(s, -t, 1.0),
        CubeFace::NegativeZ => Vec3::new(-s, -t, -1.0),
    };
    direction.normalize()
}

/// World direction shown through a face texel. Cubemaps are sampled
/// left-handed, at `(x, y, -z)`, so the face's own direction has its z
/// negated before the source is looked up.
pub fn world_direction(face: CubeFace, s: f32, t: f32) -> Vec3 {
    face_direction(face, s, t) * Vec3::new(1.0, 1.0, -1.0)
}

/// Equirectangular coordinates of a unit direction. `v` is 1 at the zenith.
pub fn equirect_uv(direction: Vec3) -> Vec2 {
    Vec2::new(
        direction.z.atan2(direction.x) / TAU + 0.5,
        direction.y.clamp(-1.0, 1.0).asin() / PI + 0.5,
    )
}

/// Float RGBA view over an equirectangular HDR image.
struct Equirect<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
}

impl Equirect<'_> {
    fn texel(&self, x: usize, y: usize) -> Vec4 {
        let offset = (y * self.width + x) * SOURCE_PIXEL_BYTES;
        let channel = |index: usize| {
            let start = offset + index * 4;
            let mut bytes = [0u8; 4];
            bytes.copy_from_slice(&self.data[start..start + 4]);
            f32::from_le_bytes(bytes)
        };
        Vec4::new(channel(0), channel(1), channel(2), channel(3))
    }

    /// Bilinear sample, wrapping horizontally and clamping at the poles.
    fn sample(&self, uv: Vec2) -> Vec4 {
        let x = uv.x * self.width as f32 - 0.5;
        let y = (1.0 - uv.y) * self.height as f32 - 0.5;
        let x0 = x.floor();
        let y0 = y.floor();
        let fx = x - x0;
        let fy = y - y0;

        let column = |c: f32| (c as i64).rem_euclid(self.width as i64) as usize;
        let row = |r: f32| (r.max(0.0) as usize).min(self.height - 1);

        let (left, right) = (column(x0), column(x0 + 1.0));
        let (top, bottom) = (row(y0), row(y0 + 1.0));

        let upper = self.texel(left, top).lerp(self.texel(right, top), fx);
        let lower = self.texel(left, bottom).lerp(self.texel(right, bottom), fx);
        upper.lerp(lower, fy)
    }
}

/// Resample an equirectangular `Rgba32Float` image (what the HDR loader
/// produces) into a six-layer `Rgba16Float` cubemap.
pub fn equirect_to_cubemap(source: &Image, face_size: u32) -> Result<Image, SceneError> {
    let format = source.texture_descriptor.format;
    if format != TextureFormat::Rgba32Float {
        return Err(SceneError::UnsupportedEnvironmentFormat { format });
    }
    let (width, height) = (source.width(), source.height());
    if width == 0 || height == 0 {
        return Err(SceneError::InvalidEnvironmentSize { width, height });
    }
    let data = source.data.as_deref().ok_or(SceneError::MissingPixelData)?;
    if data.len() < width as usize * height as usize * SOURCE_PIXEL_BYTES {
        return Err(SceneError::MissingPixelData);
    }

    let equirect = Equirect {
        data,
        width: width as usize,
        height: height as usize,
    };
    let face_size = face_size.max(1);
    let edge = face_size as f32;
    let mut faces = Vec::with_capacity(6 * (face_size * face_size) as usize * FACE_PIXEL_BYTES);

    for face in CubeFace::ALL {
        for j in 0..face_size {
            let t = 2.0 * (j as f32 + 0.5) / edge - 1.0;
            for i in 0..face_size {
                let s = 2.0 * (i as f32 + 0.5) / edge - 1.0;
                let colour = equirect.sample(equirect_uv(world_direction(face, s, t)));
                for value in colour.to_array() {
                    faces.extend_from_slice(&f16::from_f32(value).to_le_bytes());
                }
            }
        }
    }

    let mut cubemap = Image::new(
        Extent3d {
            width: face_size,
            height: face_size,
            depth_or_array_layers: 6,
        },
        TextureDimension::D2,
        faces,
        TextureFormat::Rgba16Float,
        RenderAssetUsages::RENDER_WORLD,
    );
    cubemap.texture_view_descriptor = Some(TextureViewDescriptor {
        dimension: Some(TextureViewDimension::Cube),
        ..default()
    });
    Ok(cubemap)
}

/// Sky background plus image based lighting from the same cubemap.
pub fn environment_components(cubemap: Handle<Image>) -> (Skybox, EnvironmentMapLight) {
    (
        Skybox {
            image: cubemap.clone(),
            brightness: SKYBOX_BRIGHTNESS,
            ..default()
        },
        EnvironmentMapLight {
            diffuse_map: cubemap.clone(),
            specular_map: cubemap,
            intensity: ENVIRONMENT_INTENSITY,
            ..default()
        },
    )
}
