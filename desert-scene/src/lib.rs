//! Desert scene: a GLTF set piece surrounded by scattered rocks, drifting dust
//! and heat haze, lit by an HDR environment and viewed through orbit controls.

pub mod engine;

pub use engine::core::app_setup::create_app;
