//! Integration tests for pliant-render.

use pliant_math::{Mat4, Vec3};
use pliant_mesh::{RenderMesh, Vertex};
use pliant_render::{HeadlessRenderer, JsonFrameExporter, Renderer};

fn triangle_mesh() -> RenderMesh {
    RenderMesh {
        vertices: vec![
            Vertex::new(Vec3::ZERO, Vec3::Y),
            Vertex::new(Vec3::X, Vec3::Y),
            Vertex::new(Vec3::Z, Vec3::Y),
        ],
        indices: vec![0, 1, 2],
    }
}

#[test]
fn headless_counts_frames_and_submissions() {
    let mesh = triangle_mesh();
    let mut renderer = HeadlessRenderer::new();
    assert_eq!(renderer.name(), "headless");
    assert_eq!(renderer.frame_count(), 0);

    renderer.begin_frame().unwrap();
    renderer.submit(&mesh, Mat4::IDENTITY).unwrap();
    renderer.submit(&mesh, Mat4::IDENTITY).unwrap();
    renderer.end_frame().unwrap();

    assert_eq!(renderer.frame_count(), 1);
    assert_eq!(renderer.submission_count(), 2);
}

#[test]
fn json_exporter_captures_frames() {
    let mesh = triangle_mesh();
    let mut exporter = JsonFrameExporter::new("unused.json");

    exporter.begin_frame().unwrap();
    exporter.submit(&mesh, Mat4::IDENTITY).unwrap();
    exporter.end_frame().unwrap();

    exporter.begin_frame().unwrap();
    exporter.end_frame().unwrap();

    assert_eq!(exporter.frame_count(), 2);

    let json = exporter.to_json().unwrap();
    assert!(json.contains("\"frame\":0"));
    assert!(json.contains("\"frame\":1"));
    assert!(json.contains("\"indices\":[0,1,2]"));
}

#[test]
fn json_exporter_interleaves_positions() {
    let mesh = RenderMesh {
        vertices: vec![Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y)],
        indices: vec![],
    };
    let mut exporter = JsonFrameExporter::new("unused.json");
    exporter.begin_frame().unwrap();
    exporter.submit(&mesh, Mat4::IDENTITY).unwrap();
    exporter.end_frame().unwrap();

    let json = exporter.to_json().unwrap();
    assert!(json.contains("[1.0,2.0,3.0]"));
}
