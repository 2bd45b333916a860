use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

/// `Loading` until the manifest has been applied; streamed assets keep
/// arriving after the switch to `Running`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.manifest_applied {
        info!("→ Manifest applied, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
