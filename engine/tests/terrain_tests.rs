//! Terrain Tests - Generation, Mesh and Normals
//!
//! End-to-end checks of the grid → mesh → normals pipeline.

use glam::{Vec3, Vec4};
use terrain_flight_engine::mesh::{Topology, TerrainMesh, estimate_normals, face_normal};
use terrain_flight_engine::terrain::{ConstantSource, HeightFieldGenerator, HeightGrid, RngSource};

// ============================================================================
// HeightFieldGenerator
// ============================================================================

#[test]
fn test_generated_grid_is_complete_for_all_details() {
    for detail in 1..=7 {
        let mut generator = HeightFieldGenerator::new(RngSource::seeded(detail as u64));
        let grid = generator.generate(detail, 0.003).unwrap();
        assert_eq!(grid.size(), (1usize << detail) + 1);
        assert!(grid.is_complete(), "detail {detail} left unset cells");
        assert!(grid.as_slice().iter().all(|h| h.is_finite()));
    }
}

#[test]
fn test_constant_source_is_bit_for_bit_reproducible() {
    for k in [0.0, 0.25, 0.9] {
        let a = HeightFieldGenerator::new(ConstantSource(k)).generate(5, 0.01).unwrap();
        let b = HeightFieldGenerator::new(ConstantSource(k)).generate(5, 0.01).unwrap();
        let bits_a: Vec<u32> = a.as_slice().iter().map(|h| h.to_bits()).collect();
        let bits_b: Vec<u32> = b.as_slice().iter().map(|h| h.to_bits()).collect();
        assert_eq!(bits_a, bits_b);
    }
}

#[test]
fn test_constant_high_source_raises_terrain() {
    // Every offset is positive, so every cell ends above zero
    let grid = HeightFieldGenerator::new(ConstantSource(0.9))
        .generate(4, 0.01)
        .unwrap();
    assert!(grid.as_slice().iter().all(|&h| h > 0.0));
}

#[test]
fn test_displacement_shrinks_with_step_size() {
    // symmetric(a) = 0.8 * a for a constant 0.9 source, with a = roughness * step
    let close = |a: f32, b: f32| (a - b).abs() < 1e-5;

    // One level: corners 0.24, centre 0.24 + 0.16, edges 0.88 / 3 + 0.16
    let grid = HeightFieldGenerator::new(ConstantSource(0.9)).generate(1, 0.1).unwrap();
    let edge = 0.88 / 3.0 + 0.16;
    assert!(close(grid.get(1, 1), 0.4), "centre {}", grid.get(1, 1));
    assert!(close(grid.get(0, 0), (0.4 + edge) / 2.0), "corner {}", grid.get(0, 0));
    assert!(close(grid.get(0, 1), (0.4 + edge) / 2.0), "edge {}", grid.get(0, 1));

    // Two levels: offsets 0.32 then 0.16. Before smoothing the square
    // centres at odd (i, j) hold (0.4 + 2 * 0.826667 + 0.72) / 4 + 0.16
    let grid = HeightFieldGenerator::new(ConstantSource(0.9)).generate(2, 0.1).unwrap();
    let edge_mid = 1.52 / 3.0 + 0.32;
    let square = (0.4 + 2.0 * edge_mid + 0.72) / 4.0 + 0.16;
    assert!(close(grid.get(2, 2), square), "centre {}", grid.get(2, 2));
    assert!(close(grid.get(0, 0), square), "corner {}", grid.get(0, 0));
}

#[test]
fn test_different_seeds_differ() {
    let a = HeightFieldGenerator::new(RngSource::seeded(1)).generate(5, 0.01).unwrap();
    let b = HeightFieldGenerator::new(RngSource::seeded(2)).generate(5, 0.01).unwrap();
    assert_ne!(a, b);
}

// ============================================================================
// MeshBuilder
// ============================================================================

#[test]
fn test_mesh_counts_for_generated_terrain() {
    let grid = HeightFieldGenerator::new(RngSource::seeded(4)).generate(6, 0.003).unwrap();
    let n = grid.size();
    let mesh = TerrainMesh::from_grid(&grid);
    assert_eq!(mesh.vertices.len(), n * n);
    assert_eq!(mesh.indices.len(), 2 * n * (n - 1) + 2 * (n - 2));
    assert!(mesh.indices.iter().all(|&i| (i as usize) < n * n));
    assert!(mesh.vertices.iter().all(|v| v.w == 1.0));
}

#[test]
fn test_mesh_heights_come_from_grid() {
    let grid = HeightFieldGenerator::new(RngSource::seeded(8)).generate(3, 0.01).unwrap();
    let mesh = TerrainMesh::from_grid(&grid);
    let n = grid.size();
    for i in 0..n {
        for j in 0..n {
            assert_eq!(mesh.vertices[i * n + j].y, grid.get(i, j));
        }
    }
    let (lo, hi) = grid.min_max();
    assert!((mesh.height_range() - (hi - lo)).abs() < 1e-7);
}

// ============================================================================
// NormalEstimator
// ============================================================================

#[test]
fn test_normals_are_unit_or_zero() {
    let grid = HeightFieldGenerator::new(RngSource::seeded(21)).generate(5, 0.01).unwrap();
    let mesh = TerrainMesh::from_grid(&grid);
    let normals = estimate_normals(&mesh.vertices, &mesh.indices, Topology::TriangleStrip);
    assert_eq!(normals.len(), mesh.vertices.len());
    for n in normals {
        assert_eq!(n.w, 0.0);
        let len = n.length();
        assert!(len == 0.0 || (len - 1.0).abs() < 1e-4, "bad normal length {len}");
    }
}

#[test]
fn test_tilted_plane_normals() {
    // Height equals model-space x, so the surface is the plane y = x
    let n = 9;
    let mut grid = HeightGrid::flat(n, 0.0).unwrap();
    for i in 0..n {
        for j in 0..n {
            grid.set(i, j, 2.0 * i as f32 / (n - 1) as f32 - 1.0);
        }
    }
    let mesh = TerrainMesh::from_grid(&grid);
    let normals = estimate_normals(&mesh.vertices, &mesh.indices, Topology::TriangleStrip);
    let expected = Vec3::new(-1.0, 1.0, 0.0).normalize().extend(0.0);
    for normal in normals {
        assert!((normal - expected).abs().max_element() < 1e-5, "{normal:?}");
    }
}

#[test]
fn test_vertex_normals_agree_with_strip_face_normals() {
    let grid = HeightFieldGenerator::new(RngSource::seeded(33)).generate(4, 0.002).unwrap();
    let mesh = TerrainMesh::from_grid(&grid);
    let normals = estimate_normals(&mesh.vertices, &mesh.indices, Topology::TriangleStrip);

    for k in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.strip_triangle(k);
        let face = face_normal(
            mesh.vertices[a as usize].truncate(),
            mesh.vertices[b as usize].truncate(),
            mesh.vertices[c as usize].truncate(),
            k,
            Topology::TriangleStrip,
        );
        if face.length_squared() == 0.0 {
            continue;
        }
        // Gentle terrain: every face points up and so does every vertex
        // normal it touches
        assert!(face.y > 0.0, "face {k} winds downward");
        for idx in [a, b, c] {
            let vn: Vec4 = normals[idx as usize];
            assert!(vn.truncate().dot(face) > 0.0);
        }
    }
}
