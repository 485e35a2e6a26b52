// tests/geometry_builders.rs
use glam::Vec3;
use lsys_plant::{
    CYLINDER_RADIAL_DIVISIONS, Cylinder, Leaf, MeshAccumulator, PotConfig, TextureTag,
};

fn branch(draw: bool) -> Cylinder {
    Cylinder {
        height: 0.2,
        radius: 0.05,
        tag: TextureTag::Bottom,
        draw,
    }
}

fn vertices(mesh: &MeshAccumulator) -> Vec<Vec3> {
    (0..mesh.vertex_count()).filter_map(|i| mesh.vertex(i)).collect()
}

#[test]
fn test_cylinder_quad_counts() {
    let mut mesh = MeshAccumulator::new();
    branch(true).emit(&mut mesh, Vec3::ZERO, Vec3::ZERO);

    assert_eq!(mesh.quad_count(), CYLINDER_RADIAL_DIVISIONS * 3);
    assert_eq!(mesh.positions().len(), CYLINDER_RADIAL_DIVISIONS * 3 * 12);
    assert_eq!(mesh.uvs().len(), CYLINDER_RADIAL_DIVISIONS * 3 * 8);
    assert_eq!(&mesh.uvs()[..8], &[0.5, 1.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5]);
}

#[test]
fn test_cylinder_is_asymmetric_about_pivot() {
    let mut mesh = MeshAccumulator::new();
    let tip = branch(true).emit(&mut mesh, Vec3::ZERO, Vec3::ZERO);
    assert!(tip.abs_diff_eq(Vec3::new(0.0, 0.1, 0.0), 1e-6));

    for v in vertices(&mesh) {
        let on_top = (v.y - 0.1).abs() < 1e-6;
        let on_bottom = (v.y + 0.05).abs() < 1e-6;
        assert!(on_top || on_bottom, "vertex {v} off the rings");
        assert!(v.x * v.x + v.z * v.z <= 0.05 * 0.05 + 1e-6);
    }
}

#[test]
fn test_cylinder_without_draw_only_moves() {
    let position = Vec3::new(0.1, 0.2, 0.3);
    let angles = Vec3::new(15.0, 20.0, -35.0);

    let mut drawn = MeshAccumulator::new();
    let drawn_tip = branch(true).emit(&mut drawn, position, angles);

    let mut hidden = MeshAccumulator::new();
    let hidden_tip = branch(false).emit(&mut hidden, position, angles);

    assert!(hidden.is_empty());
    assert!(hidden.indices().is_empty());
    assert_eq!(drawn_tip, hidden_tip);
}

#[test]
fn test_cylinder_follows_z_turn() {
    let mut mesh = MeshAccumulator::new();
    let position = Vec3::new(1.0, 1.0, 1.0);
    let tip = branch(true).emit(&mut mesh, position, Vec3::new(0.0, 0.0, 90.0));
    assert!(tip.abs_diff_eq(position + Vec3::new(-0.1, 0.0, 0.0), 1e-6));
}

#[test]
fn test_leaf_is_double_sided_diamond() {
    let mut mesh = MeshAccumulator::new();
    let position = Vec3::new(0.0, 0.5, 0.0);
    let leaf = Leaf {
        height: 0.1,
        tag: TextureTag::Default,
    };
    let base = leaf.emit(&mut mesh, position, Vec3::ZERO);

    assert_eq!(base, position);
    assert_eq!(mesh.quad_count(), 2);

    let v = vertices(&mesh);
    let tip = position + Vec3::new(0.0, 0.15, 0.0);
    let left = position + Vec3::new(-0.05, 0.05, 0.0);
    let right = position + Vec3::new(0.05, 0.05, 0.0);
    for (got, want) in v.iter().zip([tip, left, position, right, left, tip, right, position]) {
        assert!(got.abs_diff_eq(want, 1e-6), "{got} != {want}");
    }
    assert_eq!(&mesh.uvs()[..8], &[0.0, 0.5, 0.0, 1.0, 0.5, 0.5, 0.5, 1.0]);
}

#[test]
fn test_pot_quad_count() {
    let pot = PotConfig::default();
    let mut mesh = MeshAccumulator::new();
    pot.emit(&mut mesh);
    assert_eq!(pot.quad_count(), 60);
    assert_eq!(mesh.quad_count(), 60);
    assert_eq!(mesh.vertex_count(), 240);

    let taller = PotConfig {
        height_divisions: 3,
        ..Default::default()
    };
    let mut mesh = MeshAccumulator::new();
    taller.emit(&mut mesh);
    assert_eq!(mesh.quad_count(), 15 * 6);
}

#[test]
fn test_pot_taper() {
    let pot = PotConfig::default();
    assert!((pot.taper(0.25) - 1.0).abs() < 1e-6);
    assert!((pot.taper(-0.25) - 0.55).abs() < 1e-6);
    assert!((pot.taper(0.225) - 0.9775).abs() < 1e-6);

    let mut mesh = MeshAccumulator::new();
    pot.emit(&mut mesh);
    for v in vertices(&mesh) {
        let r = (v.x * v.x + v.z * v.z).sqrt();
        assert!(r <= 0.25 * pot.taper(v.y) + 1e-5, "vertex {v} outside the wall");
        assert!((-0.25 - 1e-6..=0.25 + 1e-6).contains(&v.y));
    }
}

#[test]
fn test_pot_starts_with_dirt() {
    let mut mesh = MeshAccumulator::new();
    PotConfig::default().emit(&mut mesh);

    // Soil disc first, terracotta after it.
    assert_eq!(&mesh.uvs()[..8], &TextureTag::Dirt.uv_quad().concat()[..]);
    assert_eq!(&mesh.uvs()[8..16], &TextureTag::Top.uv_quad().concat()[..]);
    for i in 0..4 {
        assert!((mesh.vertex(i).unwrap().y - 0.225).abs() < 1e-6);
    }
}

#[test]
fn test_builders_share_one_accumulator() {
    let mut mesh = MeshAccumulator::new();
    PotConfig::default().emit(&mut mesh);
    let before = mesh.vertex_count();

    let tip = branch(true).emit(&mut mesh, Vec3::ZERO, Vec3::new(0.0, 20.0, 0.0));
    Leaf {
        height: 0.075,
        tag: TextureTag::Default,
    }
    .emit(&mut mesh, tip, Vec3::ZERO);

    assert_eq!(mesh.quad_count(), 60 + 30 + 2);
    let new_indices = &mesh.indices()[60 * 6..];
    assert!(new_indices.iter().all(|&i| i as usize >= before));
    assert_eq!(*mesh.indices().iter().max().unwrap() as usize, mesh.vertex_count() - 1);
}
