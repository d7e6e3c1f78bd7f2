//! # Draw Call Boundary
//!
//! Bodies do not talk to a graphics API directly. Every frame they hand
//! [`DrawCommand`]s to a [`BodyRenderer`], which is implemented by whatever
//! owns the window and the GPU. [`DrawRecorder`] is the headless
//! implementation used by tests and the example binary.

use cgmath::Matrix4;

use super::handles::RenderPayload;

/// What a draw command renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    /// The body itself, spun and scaled
    Body,
    /// The decorative ring attached at the body's orbital position
    Ring,
}

/// A single mesh draw requested by a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub kind: DrawKind,
    pub payload: RenderPayload,
    /// Model-to-world transform
    pub world: Matrix4<f32>,
    /// Camera matrix, including any focus offset for this frame
    pub world_to_clip: Matrix4<f32>,
}

/// Request to draw coordinate axes for a transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasisCommand {
    pub length: f32,
    pub thickness: f32,
    pub world_to_clip: Matrix4<f32>,
    pub transform: Matrix4<f32>,
}

/// Receives the draw calls issued while a scene is traversed
pub trait BodyRenderer {
    /// Draw one mesh.
    fn draw(&mut self, command: DrawCommand);

    /// Draw a debug basis. Renderers without gizmo support can ignore it.
    fn draw_basis(&mut self, _basis: BasisCommand) {}
}

/// Renderer that only records what it was asked to draw
#[derive(Debug, Default)]
pub struct DrawRecorder {
    pub commands: Vec<DrawCommand>,
    pub bases: Vec<BasisCommand>,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded so far, e.g. at the start of a frame
    pub fn clear(&mut self) {
        self.commands.clear();
        self.bases.clear();
    }

    pub fn draw_count(&self) -> usize {
        self.commands.len()
    }

    /// Recorded commands of one kind, in submission order
    pub fn commands_of(&self, kind: DrawKind) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |command| command.kind == kind)
    }
}

impl BodyRenderer for DrawRecorder {
    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    fn draw_basis(&mut self, basis: BasisCommand) {
        self.bases.push(basis);
    }
}
