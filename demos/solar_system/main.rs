//! # Solar System Example
//!
//! Builds the solar system preset and steps it without a window: draw calls
//! are recorded instead of submitted to a GPU, and the interesting numbers
//! are logged.
//!
//! ## What this example shows:
//! - Generating the shared sphere and ring meshes through the preset
//! - Driving frames with a [`FrameClock`] (time scale, pause)
//! - Cycling camera focus between bodies with [`FocusState`]
//! - Flying a [`CameraFollow`] in along a Catmull-Rom path, then trailing the focused body
//!
//! ## Usage:
//! ```bash
//! RUST_LOG=info cargo run --example solar_system
//! ```

use std::collections::HashMap;

use anyhow::Result;
use cgmath::{perspective, vec3, Deg};
use log::info;
use orrery::gfx::scene::SolarSystemShaders;
use orrery::prelude::*;

const FRAME_TIME: Duration = Duration::from_millis(16);
const FRAMES_PER_FOCUS: usize = 120;

fn main() -> Result<()> {
    env_logger::init();

    let mut textures: HashMap<String, TextureHandle> = HashMap::new();
    let shaders = SolarSystemShaders {
        body: ShaderHandle(0),
        ring: ShaderHandle(1),
    };
    let mut system = SolarSystem::build(&SolarSystemConfig::default(), shaders, |name| {
        let next = TextureHandle(textures.len() as u32);
        *textures.entry(name.to_string()).or_insert(next)
    })?;
    info!(
        "{} bodies, {} textures requested",
        system.len(),
        textures.len()
    );
    for (handle, mesh) in system.meshes.iter() {
        info!(
            "{:?}: {} vertices, {} triangles, {} bytes interleaved",
            handle,
            mesh.vertex_count(),
            mesh.triangle_count(),
            mesh.to_vertices().len() * std::mem::size_of::<Vertex3D>()
        );
    }

    let projection = perspective(Deg(45.0f32), 16.0 / 9.0, 0.1, 1000.0);
    let mut clock = FrameClock::with_time_scale(4.0);
    let mut focus = FocusState::new(system.len());
    let mut recorder = DrawRecorder::new();

    // The first focus period flies the camera in along a spline instead of
    // following anything.
    let path = [
        vec3(0.0, 60.0, 80.0),
        vec3(0.0, 40.0, 60.0),
        vec3(10.0, 15.0, 30.0),
        vec3(4.0, 5.0, 12.0),
    ];
    let mut camera =
        CameraFollow::new(path[1], Vector3::zero()).with_eye_offset(vec3(0.0, 1.0, 3.0));

    for frame_index in 0..FRAMES_PER_FOCUS * 4 {
        if frame_index > 0 && frame_index % FRAMES_PER_FOCUS == 0 {
            focus.toggle();
        }
        if frame_index == FRAMES_PER_FOCUS * 3 {
            clock.toggle_pause();
        }

        let elapsed = clock.animation_delta(FRAME_TIME);
        let world_to_clip = projection * camera.view_matrix();
        let frame = FrameContext::new(elapsed, world_to_clip)
            .with_base_transform(system.base_transform)
            .with_focus(&focus)
            .with_basis(frame_index == 0);

        recorder.clear();
        let report = system.scene.traverse(&frame, &mut recorder);
        focus.update(&report);

        if frame_index < FRAMES_PER_FOCUS {
            let t = frame_index as f32 / (FRAMES_PER_FOCUS - 1) as f32;
            camera.eye = catmull_rom(path[0], path[1], path[2], path[3], 0.5, t);
        } else {
            let target = report.focused_position.unwrap_or_else(Vector3::zero);
            camera.step(target, FRAME_TIME);
        }

        if frame_index % 60 == 0 {
            info!(
                "frame {:>4}: {} bodies, {} draws, {} bases, focus {:?}, camera at {:?}",
                frame_index,
                report.visited(),
                recorder.draw_count(),
                recorder.bases.len(),
                focus.target(),
                camera.eye
            );
        }
    }

    for name in ["earth", "moon", "saturn"] {
        if let Some(id) = system.id(name) {
            let transform = system.scene.world_transform(id)?;
            info!("{name} ends at {:?}", transform.w.truncate());
        }
    }

    Ok(())
}
