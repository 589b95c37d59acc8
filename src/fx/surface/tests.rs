use std::time::Duration;

use super::*;
use crate::fx::node::Layer;

fn surface(seed: u64) -> EffectSurface {
    EffectSurface::with_random(
        Bounds::new(480.0, 320.0),
        Box::new(StdRandom::seeded(seed)),
    )
}

fn run_for(surface: &mut EffectSurface, seconds: f32) {
    let steps = (seconds / 0.05).ceil() as usize;
    for _ in 0..steps {
        surface.tick(Duration::from_millis(50));
    }
}

#[test]
fn second_present_leaves_only_the_second_recipe() {
    let mut surface = surface(1);
    surface.present(WeatherCondition::HeavyRain, DayPhase::Day);
    assert_eq!(surface.stage().nodes().len(), 450);

    surface.present(WeatherCondition::Storm, DayPhase::Night);
    let nodes = surface.stage().nodes();
    assert_eq!(nodes.len(), 3);
    assert!(nodes.iter().all(|node| node.role == Role::Bolt));
    assert_eq!(surface.stage().count_role(Role::Raindrop), 0);
}

#[test]
fn day_to_night_never_mixes_rays_and_stars() {
    let mut surface = surface(2);
    surface.present(WeatherCondition::Clear, DayPhase::Day);
    assert_eq!(surface.stage().count_role(Role::Ray), 12);
    assert_eq!(surface.stage().count_role(Role::Star), 0);

    surface.present(WeatherCondition::Clear, DayPhase::Night);
    assert_eq!(surface.stage().count_role(Role::Ray), 0);
    assert_eq!(surface.stage().count_role(Role::SunDisc), 0);
    assert_eq!(surface.stage().count_role(Role::MoonDisc), 1);
    assert_eq!(surface.stage().count_role(Role::Star), 20);
}

#[test]
fn storm_alone_does_not_rain() {
    let mut surface = surface(3);
    surface.present(WeatherCondition::Storm, DayPhase::Night);
    assert_eq!(surface.stage().count_role(Role::Bolt), 3);
    assert_eq!(surface.stage().count_role(Role::Raindrop), 0);

    surface.present(WeatherCondition::StormAndRain, DayPhase::Night);
    assert_eq!(surface.stage().count_role(Role::Bolt), 3);
    assert_eq!(surface.stage().count_role(Role::Raindrop), 50);
}

#[test]
fn every_present_bumps_the_generation() {
    let mut surface = surface(4);
    let start = surface.stage().generation();
    surface.present(WeatherCondition::Fog, DayPhase::Day);
    surface.present(WeatherCondition::Fog, DayPhase::Day);
    assert_eq!(surface.stage().generation(), start.next().next());
}

#[test]
fn wind_leaves_arrive_staggered() {
    let mut surface = surface(5);
    surface.present(WeatherCondition::Wind, DayPhase::Day);
    assert_eq!(surface.stage().count_role(Role::Leaf), 0);

    surface.tick(Duration::from_millis(1));
    assert_eq!(surface.stage().count_role(Role::Leaf), 1);

    run_for(&mut surface, 2.0);
    assert_eq!(surface.stage().count_role(Role::Leaf), 6);
}

#[test]
fn stale_deferred_spawns_never_reach_a_new_recipe() {
    let mut surface = surface(6);
    surface.present(WeatherCondition::Wind, DayPhase::Day);
    surface.present(WeatherCondition::Clear, DayPhase::Night);
    assert_eq!(surface.stage().pending_spawns(), 0);

    run_for(&mut surface, 3.0);
    assert_eq!(surface.stage().count_role(Role::Leaf), 0);
    assert_eq!(surface.stage().nodes().len(), 21);
}

#[test]
fn finished_leaves_remove_themselves_and_are_replaced() {
    let mut surface = surface(7);
    surface.present(WeatherCondition::Wind, DayPhase::Day);
    surface.tick(Duration::from_millis(1));
    let first = surface.stage().nodes()[0].id;

    // Longest traverse plus the largest re-arm gap and the last launch offset.
    run_for(&mut surface, 4.5 + 0.35 + 5.0 * 0.35 + 0.5);
    let stage = surface.stage();
    assert!(stage.nodes().iter().all(|node| node.id != first));
    assert!(stage.count_role(Role::Leaf) <= 6);
    // Every launch re-arms exactly once, so each leaf chain always has one spawn queued.
    assert_eq!(stage.pending_spawns(), 6);
}

#[test]
fn infinite_particles_keep_a_steady_count() {
    let mut surface = surface(8);
    surface.present(WeatherCondition::RainAndSnow, DayPhase::Day);
    run_for(&mut surface, 12.0);
    assert_eq!(surface.stage().count_role(Role::Raindrop), 50);
    assert_eq!(surface.stage().count_role(Role::Snowflake), 50);
}

#[test]
fn paint_order_puts_celestial_behind_clouds_behind_precipitation() {
    let mut surface = surface(9);
    surface.present(WeatherCondition::LightRain, DayPhase::Day);
    let layers = surface
        .stage()
        .paint_order()
        .iter()
        .map(|node| node.layer())
        .collect::<Vec<_>>();
    assert!(layers.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(layers.first(), Some(&Layer::Celestial));
    assert_eq!(layers.last(), Some(&Layer::Precipitation));
}

#[test]
fn paint_order_does_not_depend_on_generator_order() {
    let mut surface = surface(10);
    // Storm is generated before rain, yet bolts paint above the drops.
    surface.present(WeatherCondition::StormAndRain, DayPhase::Night);
    let order = surface.stage().paint_order();
    assert_eq!(order.last().map(|node| node.role), Some(Role::Bolt));
    assert_eq!(order.first().map(|node| node.role), Some(Role::Raindrop));
}

#[test]
fn resize_rebuilds_the_active_recipe_inside_new_bounds() {
    let mut surface = surface(11);
    surface.present(WeatherCondition::Rain, DayPhase::Day);
    assert!(surface.resize(Bounds::new(40.0, 20.0)));
    assert!(!surface.resize(Bounds::new(40.0, 20.0)));
    let stage = surface.stage();
    assert_eq!(stage.count_role(Role::Raindrop), 50);
    assert!(stage.nodes().iter().all(|drop| drop.origin.x < 40.0));
    assert_eq!(
        surface.active_recipe().and_then(|recipe| recipe.condition),
        Some(WeatherCondition::Rain)
    );
}

#[test]
fn clear_empties_and_forgets_the_recipe() {
    let mut surface = surface(12);
    surface.present(WeatherCondition::Overcast, DayPhase::Night);
    surface.clear();
    assert!(surface.stage().nodes().is_empty());
    assert!(surface.active_recipe().is_none());
    assert!(!surface.resize(Bounds::new(10.0, 10.0)));
    assert!(surface.stage().nodes().is_empty());
}

#[test]
fn zero_sized_surface_presents_and_ticks() {
    let mut surface = EffectSurface::with_random(Bounds::default(), Box::new(StdRandom::seeded(13)));
    for condition in WeatherCondition::ALL {
        surface.present(condition, DayPhase::Day);
        run_for(&mut surface, 0.5);
    }
    assert_eq!(surface.bounds(), Bounds::default());
}

#[test]
fn settling_brings_delayed_rain_into_view() {
    let mut surface = surface(14);
    surface.present(WeatherCondition::Rain, DayPhase::Day);
    let height = surface.bounds().height;
    let in_view = |surface: &EffectSurface| {
        let stage = surface.stage();
        stage
            .nodes()
            .iter()
            .filter(|drop| {
                let bottom = drop.origin.y + drop.size + drop.pose(stage.clock()).offset.y;
                bottom > 0.0 && bottom <= height
            })
            .count()
    };
    assert_eq!(in_view(&surface), 0);

    surface.settle(Duration::from_secs(4), Duration::from_millis(250));
    assert!((surface.stage().clock() - 4.0).abs() < 1e-9);
    assert!(in_view(&surface) > 25, "{}", in_view(&surface));
    assert_eq!(surface.stage().count_role(Role::Raindrop), 50);
}

#[test]
fn settling_launches_wind_leaves() {
    let mut surface = surface(15);
    surface.present(WeatherCondition::Wind, DayPhase::Day);
    assert_eq!(surface.stage().count_role(Role::Leaf), 0);

    surface.settle(Duration::from_secs(4), Duration::from_millis(250));
    assert!(surface.stage().count_role(Role::Leaf) > 0);
}

#[test]
fn zero_step_settle_does_nothing() {
    let mut surface = surface(16);
    surface.present(WeatherCondition::Snow, DayPhase::Day);
    surface.settle(Duration::from_secs(4), Duration::ZERO);
    assert_eq!(surface.stage().clock(), 0.0);
}

#[test]
fn clock_keeps_frame_steps_after_days_of_running() {
    let mut surface = surface(17);
    surface.present(WeatherCondition::Rain, DayPhase::Day);
    surface.tick(Duration::from_secs(12 * 24 * 3600));
    let before = surface.stage().clock();
    surface.tick(Duration::from_millis(33));
    let stepped = surface.stage().clock() - before;
    assert!((stepped - 0.033).abs() < 1e-6, "{stepped}");
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "negative spawn delay")]
fn negative_spawn_delay_is_fatal_in_debug() {
    let mut stage = Stage::new(Bounds::new(10.0, 10.0));
    stage.defer(-1.0, SpawnJob::WindLeaf(recipe::WIND));
}

#[test]
#[cfg(not(debug_assertions))]
fn negative_spawn_delay_fires_on_the_next_tick_in_release() {
    let mut surface = surface(18);
    surface.present(WeatherCondition::Clear, DayPhase::Day);
    surface.stage.defer(-1.0, SpawnJob::WindLeaf(recipe::WIND));
    surface.tick(Duration::ZERO);
    assert_eq!(surface.stage().count_role(Role::Leaf), 1);
}
