//! End-to-end garden rules through the public engine API.

use zen_garden::core::{Garden, GardenConfig, GridGeometry, TapOutcome, TileGrid};
use zen_garden::types::{Coordinate, Direction, GardenInput, Mode, TileKind, FEATURE_STAGES};

fn garden_14x14() -> Garden {
    let geometry = GridGeometry::square(20, 14, 14).unwrap();
    Garden::new(geometry, GardenConfig::default())
}

#[test]
fn four_taps_on_one_tile_plant_grow_and_clear() {
    let mut garden = garden_14x14();
    garden.press(Direction::Up, 0);

    let c = Coordinate::new(1, 1);
    assert_eq!(garden.tiles().get(1, 1), Some(TileKind::Rock));

    assert_eq!(garden.tap(25, 25, 0), TapOutcome::Planted(c));
    assert_eq!(garden.features().get(c).unwrap().stage, 0);

    assert_eq!(garden.tap(25, 25, 0), TapOutcome::Advanced(c, 1));
    assert_eq!(garden.features().len(), 1);

    garden.tap(25, 25, 0);
    garden.tap(25, 25, 0);
    assert_eq!(garden.features().get(c).unwrap().stage, FEATURE_STAGES - 1);

    assert_eq!(garden.tap(25, 25, 0), TapOutcome::Cleared(c));
    assert!(garden.features().is_empty());
}

#[test]
fn no_spent_or_duplicate_features_after_any_tap() {
    let mut garden = garden_14x14();
    garden.press(Direction::Up, 0);

    // Deterministic walk over a handful of tiles, many taps each.
    let mut x: i32 = 7;
    for i in 0..200 {
        x = (x * 31 + 17) % 97;
        let px = 20 + (x % 5) * 20 + 3;
        let py = 20 + ((x / 5) % 3) * 20 + 3;
        garden.tap(px, py, i);

        let feats = garden.features();
        assert!(feats.iter().all(|f| f.stage < FEATURE_STAGES));
        for (n, f) in feats.iter().enumerate() {
            assert!(feats.iter().skip(n + 1).all(|g| g.coord != f.coord));
        }
        assert_eq!(garden.sprites().count(), feats.len());
    }
}

#[test]
fn ready_start_clears_but_paused_start_resumes() {
    let mut garden = garden_14x14();
    garden.tap(45, 45, 0);
    assert_eq!(garden.features().len(), 1);

    garden.press(Direction::Up, 0);
    assert_eq!(garden.mode(), Mode::Running);
    assert_eq!(garden.features().len(), 0);

    garden.tap(45, 45, 0);
    garden.tap(85, 45, 0);
    let kept = garden.features().clone();

    garden.apply_input(GardenInput::Pause, 10);
    garden.apply_input(GardenInput::Direction(Direction::Up), 20);
    assert_eq!(garden.mode(), Mode::Running);
    assert_eq!(garden.features(), &kept);
}

#[test]
fn background_is_reclassified_on_each_running_tick() {
    let mut garden = garden_14x14();
    assert!(garden.tiles().tiles().iter().all(|t| t.is_none()));

    garden.press(Direction::Up, 0);
    let expected = TileGrid::classified(garden.geometry());
    assert!(garden.tick(0));
    assert_eq!(garden.tiles(), &expected);

    let tick_ms = u64::from(garden.config().tick_ms);
    assert!(!garden.tick(tick_ms - 1));
    assert!(garden.tick(tick_ms));
    assert_eq!(garden.tiles(), &expected);
}

#[test]
fn paused_garden_stops_ticking_until_resumed() {
    let mut garden = garden_14x14();
    garden.press(Direction::Up, 0);
    assert!(garden.tick(0));

    garden.pause();
    let tick_ms = u64::from(garden.config().tick_ms);
    assert!(!garden.tick(tick_ms));
    assert!(!garden.tick(tick_ms * 10));
    assert!(!garden.redraw_pending());

    garden.press(Direction::Up, tick_ms * 10);
    assert!(garden.tick(tick_ms * 10));
}

#[test]
fn restart_from_saved_state_comes_back_paused() {
    let mut garden = garden_14x14();
    garden.press(Direction::Up, 0);
    garden.tap(25, 25, 0);
    garden.tap(65, 65, 0);
    garden.tap(65, 65, 0);

    let saved = garden.save_state();
    let geometry = *garden.geometry();
    let mut relaunched = Garden::launch(geometry, GardenConfig::default(), Some(saved));
    assert_eq!(relaunched.mode(), Mode::Paused);
    assert_eq!(relaunched.features(), garden.features());

    // Resuming keeps the restored stones.
    relaunched.press(Direction::Up, 0);
    assert_eq!(relaunched.features().len(), 2);
}
