use verlet2d::{overlaps, Particle, Polygon, Vec2, World};

fn polygon(particles: &mut Vec<Particle<f64>>, points: &[(f64, f64)]) -> Polygon<f64> {
    let base = particles.len();
    for &(x, y) in points {
        particles.push(Particle::new(Vec2::new(x, y)));
    }
    Polygon::new((base..base + points.len()).collect(), particles).unwrap()
}

const SQUARE: [(f64, f64); 4] = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];

#[test]
fn overlapping_squares() {
    let mut particles = Vec::new();
    let a = polygon(&mut particles, &SQUARE);
    let b = polygon(&mut particles, &[(5.0, 5.0), (15.0, 5.0), (15.0, 15.0), (5.0, 15.0)]);
    assert!(overlaps(&a, &b, &particles));
}

#[test]
fn separated_squares() {
    let mut particles = Vec::new();
    let a = polygon(&mut particles, &SQUARE);
    let b = polygon(&mut particles, &[(20.0, 0.0), (30.0, 0.0), (30.0, 10.0), (20.0, 10.0)]);
    assert!(!overlaps(&a, &b, &particles));
}

#[test]
fn overlap_is_symmetric() {
    let mut particles = Vec::new();
    let shapes = [
        polygon(&mut particles, &SQUARE),
        polygon(&mut particles, &[(5.0, 5.0), (15.0, 5.0), (15.0, 15.0), (5.0, 15.0)]),
        polygon(&mut particles, &[(20.0, 0.0), (30.0, 0.0), (30.0, 10.0), (20.0, 10.0)]),
        polygon(&mut particles, &[(12.0, 0.0), (24.0, 0.0), (18.0, 8.0)]),
        polygon(&mut particles, &[(-5.0, -5.0), (-1.0, -5.0), (-3.0, -1.0)]),
    ];
    for a in &shapes {
        for b in &shapes {
            assert_eq!(overlaps(a, b, &particles), overlaps(b, a, &particles));
        }
    }
}

#[test]
fn diagonal_gap_needs_a_slanted_axis() {
    // Axis-aligned bounding boxes overlap, but the triangle's hypotenuse
    // normal separates them.
    let mut particles = Vec::new();
    let tri = polygon(&mut particles, &[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
    let square = polygon(&mut particles, &[(7.0, 7.0), (12.0, 7.0), (12.0, 12.0), (7.0, 12.0)]);
    assert!(!overlaps(&tri, &square, &particles));
    assert!(!overlaps(&square, &tri, &particles));
}

#[test]
fn contained_polygon_overlaps() {
    let mut particles = Vec::new();
    let outer = polygon(&mut particles, &SQUARE);
    let inner = polygon(&mut particles, &[(4.0, 4.0), (6.0, 4.0), (5.0, 6.0)]);
    assert!(overlaps(&outer, &inner, &particles));
}

#[test]
fn square_normals_are_unit_and_orthogonal() {
    let mut particles = Vec::new();
    let square = polygon(&mut particles, &SQUARE);
    let normals = square.compute_normals(&particles);
    assert_eq!(normals.len(), 4);
    let verts = square.vertices();
    for (i, n) in normals.iter().enumerate() {
        let a = particles[verts[i]].pos;
        let b = particles[verts[(i + 1) % verts.len()]].pos;
        let edge = b - a;
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!(n.dot(edge).abs() < 1e-12);
    }
}

#[test]
fn world_refresh_tracks_moving_shapes() {
    let mut world: World<f64> = World::new();
    let a = verlet2d::rectangle(&mut world, Vec2::new(0.0, 0.0), 10.0, 10.0, Vec2::zero()).unwrap();
    let b = verlet2d::rectangle(&mut world, Vec2::new(30.0, 0.0), 10.0, 10.0, Vec2::zero()).unwrap();
    let (pa, pb) = (a.polygon.unwrap(), b.polygon.unwrap());
    assert_eq!(world.polygons_overlap(pa, pb), Ok(false));

    // Rotate b by 45 degrees about its centre and slide it onto a.
    let centre = Vec2::new(14.0, 5.0);
    let half_diag = 50.0f64.sqrt();
    let corners = [
        Vec2::new(centre.x, centre.y - half_diag),
        Vec2::new(centre.x + half_diag, centre.y),
        Vec2::new(centre.x, centre.y + half_diag),
        Vec2::new(centre.x - half_diag, centre.y),
    ];
    for (index, corner) in b.particles.clone().zip(corners) {
        world.particle_mut(index).unwrap().move_to(corner);
    }
    world.refresh_normals();
    assert_eq!(world.polygons_overlap(pa, pb), Ok(true));
    assert_eq!(world.polygons_overlap(pb, pa), Ok(true));
}
