// Host-side tests for sphere mesh generation.

use glam::Vec3;
use panorama_viewer::geometry::{marker_sphere, panorama_sphere, uv_sphere, Facing, Mesh};

fn triangles(mesh: &Mesh) -> impl Iterator<Item = [Vec3; 3]> + '_ {
    mesh.indices.chunks_exact(3).map(move |t| {
        [
            Vec3::from_array(mesh.vertices[t[0] as usize].position),
            Vec3::from_array(mesh.vertices[t[1] as usize].position),
            Vec3::from_array(mesh.vertices[t[2] as usize].position),
        ]
    })
}

/// Sign of the counter-clockwise face normal relative to the direction
/// pointing away from the center.
fn outward_facing(tri: [Vec3; 3]) -> f32 {
    let [a, b, c] = tri;
    let n = (b - a).cross(c - a);
    let centroid = (a + b + c) / 3.0;
    n.dot(centroid)
}

#[test]
fn panorama_sphere_counts() {
    let mesh = panorama_sphere();
    assert_eq!(mesh.vertices.len(), 61 * 41);
    assert_eq!(mesh.indices.len(), 6 * 60 * 39);
    assert!(mesh
        .indices
        .iter()
        .all(|&i| (i as usize) < mesh.vertices.len()));
}

#[test]
fn inverted_sphere_faces_the_center() {
    let mesh = panorama_sphere();
    assert!(triangles(&mesh).all(|t| outward_facing(t) < 0.0));
}

#[test]
fn marker_sphere_faces_outward() {
    let mesh = marker_sphere();
    assert!(triangles(&mesh).all(|t| outward_facing(t) > 0.0));
}

#[test]
fn vertices_lie_on_the_sphere_with_normals_toward_the_viewer_side() {
    let mesh = uv_sphere(3.0, 12, 8, Facing::Inward);
    for v in &mesh.vertices {
        let p = Vec3::from_array(v.position);
        let n = Vec3::from_array(v.normal);
        assert!((p.length() - 3.0).abs() < 1e-4);
        assert!((n.length() - 1.0).abs() < 1e-4);
        assert!(n.dot(p) < 0.0);
    }
}

#[test]
fn texture_top_row_maps_to_the_north_pole() {
    let mesh = uv_sphere(1.0, 8, 4, Facing::Inward);
    for v in mesh.vertices.iter().filter(|v| v.uv[1] == 0.0) {
        assert!((v.position[1] - 1.0).abs() < 1e-5);
    }
    for v in &mesh.vertices {
        assert!((0.0..=1.0).contains(&v.uv[0]));
        assert!((0.0..=1.0).contains(&v.uv[1]));
    }
}

#[test]
fn inward_sphere_mirrors_the_outward_one() {
    let outer = uv_sphere(1.0, 8, 4, Facing::Outward);
    let inner = uv_sphere(1.0, 8, 4, Facing::Inward);
    for (o, i) in outer.vertices.iter().zip(&inner.vertices) {
        assert_eq!(o.position[0], -i.position[0]);
        assert_eq!(o.position[1], i.position[1]);
        assert_eq!(o.uv, i.uv);
    }
}
