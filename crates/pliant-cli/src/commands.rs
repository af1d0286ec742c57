//! CLI command implementations.

use pliant_math::Vec3;
use pliant_mesh::generators::{cube, uv_sphere};
use pliant_mesh::{deduplicate, Submesh};
use pliant_render::{HeadlessRenderer, JsonFrameExporter, Renderer};
use pliant_sim::StubWorld;
use pliant_session::{BodyCreationRequest, Session};
use pliant_types::constants::MAX_FRAME_DT;
use pliant_types::ModelId;

const CUBE: ModelId = ModelId(0);
const SPHERE: ModelId = ModelId(1);

fn generated_model(name: &str) -> Result<Submesh, Box<dyn std::error::Error>> {
    match name {
        "cube" => Ok(cube(0.5)),
        "sphere" => Ok(uv_sphere(1.0, 16, 12)),
        other => Err(format!("Unknown model: {other}. Available: cube, sphere").into()),
    }
}

/// Run a headless demo session.
pub fn demo(
    model: &str,
    frames: u32,
    mass: f32,
    pressure: f32,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Pliant Demo Session");
    println!("───────────────────");

    let spawn_cube = model == "cube" || model == "both";
    let spawn_sphere = model == "sphere" || model == "both";
    if !spawn_cube && !spawn_sphere {
        return Err(format!("Unknown model: {model}. Available: cube, sphere, both").into());
    }

    let world = StubWorld::new().with_ground(-3.0);
    let mut session = Session::new(Box::new(world));
    session.register_model(CUBE, &[generated_model("cube")?])?;
    session.register_model(SPHERE, &[generated_model("sphere")?])?;

    if spawn_cube {
        let request = BodyCreationRequest {
            color: Vec3::new(0.9, 0.3, 0.2),
            ..BodyCreationRequest::new(CUBE, Vec3::new(0.0, 3.0, 0.0), mass, pressure)
        };
        session.spawn(&request)?;
    }
    if spawn_sphere {
        let request = BodyCreationRequest {
            color: Vec3::new(0.2, 0.5, 0.9),
            ..BodyCreationRequest::new(SPHERE, Vec3::new(2.5, 3.0, 0.0), mass, pressure)
        };
        session.spawn(&request)?;
    }

    println!("Bodies:  {}", session.body_count());
    println!("Frames:  {frames}");
    println!();

    if let Some(path) = output {
        let mut exporter = JsonFrameExporter::new(path);
        run_frames(&mut session, frames, &mut exporter)?;
        exporter.write()?;
        println!("Capture written to: {path}");
    } else {
        let mut renderer = HeadlessRenderer::new();
        run_frames(&mut session, frames, &mut renderer)?;
        println!("Submissions: {}", renderer.submission_count());
    }

    println!("Average frame rate: {:.1} Hz", session.stats().average_rate());
    Ok(())
}

fn run_frames(
    session: &mut Session,
    frames: u32,
    renderer: &mut dyn Renderer,
) -> Result<(), Box<dyn std::error::Error>> {
    for _ in 0..frames {
        session.frame(MAX_FRAME_DT, renderer)?;
    }
    Ok(())
}

/// Check a generated model's deduplication invariants and print stats.
pub fn validate(model: &str) -> Result<(), Box<dyn std::error::Error>> {
    let soup = generated_model(model)?;
    let mesh = deduplicate(&[soup.clone()])?;
    mesh.validate()?;

    println!("Model: {model}");
    println!("  Source vertices:  {}", soup.vertex_count());
    println!("  Source indices:   {}", soup.indices.len());
    println!("  Unique positions: {}", mesh.vertex_count());
    println!("  Triangles:        {}", mesh.triangle_count());
    println!("  Invariants:       ok");
    Ok(())
}
