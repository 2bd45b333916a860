/// Scene manifest, relative to the asset root.
pub const SCENE_MANIFEST_PATH: &str = "scene_manifest.json";

pub const SCENE_MODEL_PATH: &str = "models/scene.gltf";
pub const ROCK_MODEL_PATH: &str = "rocks/namaqualand_stones_01_1k.gltf";
pub const ENVIRONMENT_HDR_PATH: &str = "models/textures/hdr/goegap_1k.hdr";

pub const FLOOR_ALPHA_PATH: &str = "models/textures/gravelly-sand/alpha.jpg";
pub const FLOOR_COLOUR_PATH: &str = "models/textures/gravelly-sand/gravelly_sand_diff_1k.jpg";
pub const FLOOR_DISPLACEMENT_PATH: &str = "models/textures/gravelly-sand/gravelly_sand_disp_1k.png";
pub const FLOOR_NORMAL_PATH: &str = "models/textures/gravelly-sand/gravelly_sand_nor_gl_1k.exr";
pub const FLOOR_ROUGHNESS_PATH: &str = "models/textures/gravelly-sand/gravelly_sand_rough_1k.exr";

pub const HEAT_HAZE_SHADER_PATH: &str = "shaders/heat_haze.wgsl";
pub const FLOOR_MASK_SHADER_PATH: &str = "shaders/floor_alpha_mask.wgsl";
