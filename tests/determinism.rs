use verlet2d::{cloth, rope, ClothConfig, NoOpStepObserver, RopeConfig, Vec2, World, WorldConfig};

fn run_scene() -> Vec<Vec2<f64>> {
    let mut world: World<f64> = World::new();
    rope(&mut world, &RopeConfig::default()).unwrap();
    cloth(&mut world, &ClothConfig { origin: Vec2::new(400.0, 50.0), shear: true, ..ClothConfig::default() }).unwrap();
    let config = WorldConfig::new().with_bounds(800.0, 600.0).with_friction(0.99).with_accuracy(6);
    for _ in 0..90 {
        world.step(&config, &mut NoOpStepObserver);
    }
    world.positions()
}

#[test]
fn identical_runs_are_bit_identical() {
    let results: Vec<_> = (0..4).map(|_| run_scene()).collect();
    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
    }
}

#[test]
fn single_precision_runs_are_bit_identical() {
    let run = || {
        let mut world: World<f32> = World::new();
        rope(&mut world, &RopeConfig::default()).unwrap();
        let config = WorldConfig::new().with_bounds(800.0, 600.0);
        for _ in 0..90 {
            world.step(&config, &mut NoOpStepObserver);
        }
        world.positions()
    };
    assert_eq!(run(), run());
}
