//! Per-frame runtime systems.
//!
//! The render loop owns the animation clock and the frame updater turns that
//! clock into shader and transform values. Native builds also get an FPS
//! overlay.

/// Start/stop control over the animation clock.
pub mod render_loop;

/// Time-driven values written every frame.
pub mod frame_update;

/// FPS overlay for native builds.
pub mod fps_tracking;
