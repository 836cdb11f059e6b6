use appledrop_engine::AppleWorld;

#[test]
fn perf_smoke_step() {
    let mut world = AppleWorld::new(1280.0, 720.0);
    world.enable_perf_metrics(true);
    for _ in 0..120 {
        world.step();
    }
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.integrate_ms() >= 0.0);
    assert!(stats.collision_ms() >= 0.0);
    assert_eq!(stats.body_count(), 25);
    assert_eq!(stats.pair_checks(), 300);
    assert_eq!(stats.bodies_dragging(), 0);
}
