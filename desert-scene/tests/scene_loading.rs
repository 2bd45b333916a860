use std::time::Duration;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy_common_assets::json::JsonAssetPlugin;
use desert_scene::engine::assets::scene_assets::SceneAssets;
use desert_scene::engine::assets::scene_manifest::SceneManifest;
use desert_scene::engine::core::app_state::{AppState, transition_to_running};
use desert_scene::engine::error::SceneError;
use desert_scene::engine::loading::manifest_loader::{
    ManifestLoader, load_manifest_system, start_loading,
};
use desert_scene::engine::loading::progress::{AssetSettled, LoadingProgress, SceneAsset};
use desert_scene::engine::loading::scene_creator::scatter_rocks_when_ready;
use desert_scene::engine::scene::scatter::{
    Placement, ScatterSettings, ScatteredRock, SceneRng, scatter_placements,
    spawn_scattered_rocks,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rock_app(seed: u64) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_event::<AssetSettled>()
        .init_resource::<SceneAssets>()
        .insert_resource(SceneManifest {
            seed: Some(seed),
            ..default()
        })
        .insert_resource(SceneRng::from_seed(Some(seed)))
        .add_systems(Update, scatter_rocks_when_ready);
    app
}

fn rock_placements(app: &mut App) -> Vec<Placement> {
    let world = app.world_mut();
    let mut query = world.query_filtered::<&Placement, With<ScatteredRock>>();
    query.iter(world).copied().collect()
}

#[test]
fn spawner_creates_one_rock_per_placement() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);

    let settings = ScatterSettings::default();
    let placements = scatter_placements(&mut ChaCha8Rng::seed_from_u64(5), &settings);
    let expected = placements.clone();
    app.world_mut()
        .run_system_once(move |mut commands: Commands| {
            spawn_scattered_rocks(&mut commands, &Handle::default(), &placements);
        })
        .unwrap();

    let world = app.world_mut();
    let mut query = world.query_filtered::<(&Transform, &Placement), With<ScatteredRock>>();
    let spawned: Vec<(Transform, Placement)> =
        query.iter(world).map(|(t, p)| (*t, *p)).collect();

    assert_eq!(spawned.len(), 23);
    for (transform, placement) in &spawned {
        assert_eq!(*transform, placement.transform());
        assert!(expected.contains(placement));
    }
}

#[test]
fn rocks_scatter_once_the_rock_model_is_ready() {
    let mut app = rock_app(11);
    app.update();
    assert!(rock_placements(&mut app).is_empty());

    app.world_mut().send_event(AssetSettled {
        asset: SceneAsset::RockModel,
        outcome: Ok(()),
    });
    app.update();

    let placements = rock_placements(&mut app);
    assert_eq!(placements.len(), 23);
    for placement in &placements {
        let radius = placement.radius_from(Vec3::ZERO);
        assert!((4.0 - 1e-4..=11.0 + 1e-4).contains(&radius));
        assert!((0.5..=3.5).contains(&placement.uniform_scale));
    }

    // Later frames do not scatter again.
    app.update();
    assert_eq!(rock_placements(&mut app).len(), 23);
}

#[test]
fn failed_rock_model_leaves_the_ring_empty() {
    let mut app = rock_app(11);
    app.world_mut().send_event(AssetSettled {
        asset: SceneAsset::RockModel,
        outcome: Err(SceneError::AssetFailed {
            asset: SceneAsset::RockModel,
            path: "rocks/missing.gltf#Scene0".into(),
            reason: "not found".into(),
        }),
    });
    app.update();

    assert!(rock_placements(&mut app).is_empty());
}

#[test]
fn seeded_scenes_repeat_their_layout() {
    let layouts: Vec<Vec<Placement>> = (0..2)
        .map(|_| {
            let mut app = rock_app(99);
            app.world_mut().send_event(AssetSettled {
                asset: SceneAsset::RockModel,
                outcome: Ok(()),
            });
            app.update();
            let mut placements = rock_placements(&mut app);
            placements.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
            placements
        })
        .collect();

    assert_eq!(layouts[0], layouts[1]);
}

#[test]
fn shipped_manifest_drives_the_loading_state() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default(), StatesPlugin))
        .add_plugins(JsonAssetPlugin::<SceneManifest>::new(&["json"]))
        .init_asset::<Image>()
        .init_asset::<Scene>()
        .init_state::<AppState>()
        .init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<SceneAssets>()
        .add_systems(Startup, start_loading)
        .add_systems(
            Update,
            (load_manifest_system, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    for _ in 0..500 {
        app.update();
        if *app.world().resource::<State<AppState>>().get() == AppState::Running {
            break;
        }
        std::thread::sleep(Duration::from_millis(5));
    }

    assert_eq!(
        *app.world().resource::<State<AppState>>().get(),
        AppState::Running
    );
    assert!(app.world().resource::<LoadingProgress>().manifest_applied);
    assert!(app.world().get_resource::<SceneRng>().is_some());

    let manifest = app.world().resource::<SceneManifest>();
    assert_eq!(manifest.rocks.count, 23);
    assert_eq!(manifest.assets.scene_model, "models/scene.gltf");
}
