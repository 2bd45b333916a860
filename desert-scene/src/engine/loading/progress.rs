use std::collections::BTreeMap;
use std::fmt;

use bevy::prelude::*;

use crate::engine::error::SceneError;

/// Every separately loaded part of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SceneAsset {
    Environment,
    SceneModel,
    RockModel,
    FloorAlpha,
    FloorColour,
    FloorDisplacement,
    FloorNormal,
    FloorRoughness,
}

impl SceneAsset {
    pub const ALL: [SceneAsset; 8] = [
        SceneAsset::Environment,
        SceneAsset::SceneModel,
        SceneAsset::RockModel,
        SceneAsset::FloorAlpha,
        SceneAsset::FloorColour,
        SceneAsset::FloorDisplacement,
        SceneAsset::FloorNormal,
        SceneAsset::FloorRoughness,
    ];

    pub fn is_floor_texture(self) -> bool {
        matches!(
            self,
            SceneAsset::FloorAlpha
                | SceneAsset::FloorColour
                | SceneAsset::FloorDisplacement
                | SceneAsset::FloorNormal
                | SceneAsset::FloorRoughness
        )
    }
}

impl fmt::Display for SceneAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SceneAsset::Environment => "environment map",
            SceneAsset::SceneModel => "scene model",
            SceneAsset::RockModel => "rock model",
            SceneAsset::FloorAlpha => "floor alpha mask",
            SceneAsset::FloorColour => "floor colour texture",
            SceneAsset::FloorDisplacement => "floor displacement texture",
            SceneAsset::FloorNormal => "floor normal texture",
            SceneAsset::FloorRoughness => "floor roughness texture",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum AssetStatus {
    #[default]
    Pending,
    Ready,
    Failed(SceneError),
}

impl AssetStatus {
    pub fn is_settled(&self) -> bool {
        !matches!(self, AssetStatus::Pending)
    }

    pub fn into_outcome(self) -> Option<Result<(), SceneError>> {
        match self {
            AssetStatus::Pending => None,
            AssetStatus::Ready => Some(Ok(())),
            AssetStatus::Failed(err) => Some(Err(err)),
        }
    }
}

/// Sent once per asset when its load finishes, either way.
#[derive(Event, Debug, Clone)]
pub struct AssetSettled {
    pub asset: SceneAsset,
    pub outcome: Result<(), SceneError>,
}

#[derive(Resource, Debug, Default)]
pub struct LoadingProgress {
    pub manifest_applied: bool,
    pub summary_reported: bool,
    statuses: BTreeMap<SceneAsset, AssetStatus>,
}

impl LoadingProgress {
    pub fn status(&self, asset: SceneAsset) -> &AssetStatus {
        const PENDING: &AssetStatus = &AssetStatus::Pending;
        self.statuses.get(&asset).unwrap_or(PENDING)
    }

    /// Record a settled status. Returns false when the asset had already
    /// settled or the new status is still pending; the first outcome wins.
    pub fn settle(&mut self, asset: SceneAsset, status: AssetStatus) -> bool {
        if !status.is_settled() || self.status(asset).is_settled() {
            return false;
        }
        self.statuses.insert(asset, status);
        true
    }

    pub fn is_settled(&self) -> bool {
        SceneAsset::ALL
            .iter()
            .all(|asset| self.status(*asset).is_settled())
    }

    pub fn ready_count(&self) -> usize {
        self.statuses
            .values()
            .filter(|status| matches!(status, AssetStatus::Ready))
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = (SceneAsset, &SceneError)> {
        self.statuses.iter().filter_map(|(asset, status)| match status {
            AssetStatus::Failed(err) => Some((*asset, err)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(asset: SceneAsset) -> AssetStatus {
        AssetStatus::Failed(SceneError::AssetFailed {
            asset,
            path: "missing.gltf".into(),
            reason: "not found".into(),
        })
    }

    #[test]
    fn unknown_assets_are_pending() {
        let progress = LoadingProgress::default();
        for asset in SceneAsset::ALL {
            assert_eq!(progress.status(asset), &AssetStatus::Pending);
        }
        assert!(!progress.is_settled());
    }

    #[test]
    fn first_outcome_wins() {
        let mut progress = LoadingProgress::default();
        assert!(progress.settle(SceneAsset::RockModel, AssetStatus::Ready));
        assert!(!progress.settle(SceneAsset::RockModel, failure(SceneAsset::RockModel)));
        assert_eq!(progress.status(SceneAsset::RockModel), &AssetStatus::Ready);
    }

    #[test]
    fn pending_is_not_a_settlement() {
        let mut progress = LoadingProgress::default();
        assert!(!progress.settle(SceneAsset::Environment, AssetStatus::Pending));
    }

    #[test]
    fn settles_once_every_asset_has_an_outcome() {
        let mut progress = LoadingProgress::default();
        for asset in SceneAsset::ALL {
            let status = if asset == SceneAsset::FloorNormal {
                failure(asset)
            } else {
                AssetStatus::Ready
            };
            progress.settle(asset, status);
        }

        assert!(progress.is_settled());
        assert_eq!(progress.ready_count(), 7);
        let failures: Vec<_> = progress.failures().map(|(asset, _)| asset).collect();
        assert_eq!(failures, vec![SceneAsset::FloorNormal]);
    }

    #[test]
    fn outcome_mirrors_status() {
        assert_eq!(AssetStatus::Pending.into_outcome(), None);
        assert_eq!(AssetStatus::Ready.into_outcome(), Some(Ok(())));
        assert!(matches!(
            failure(SceneAsset::SceneModel).into_outcome(),
            Some(Err(SceneError::AssetFailed { .. }))
        ));
    }

    #[test]
    fn floor_textures_are_classified() {
        let floor: Vec<_> = SceneAsset::ALL
            .into_iter()
            .filter(|asset| asset.is_floor_texture())
            .collect();
        assert_eq!(floor.len(), 5);
        assert!(!SceneAsset::Environment.is_floor_texture());
    }
}
