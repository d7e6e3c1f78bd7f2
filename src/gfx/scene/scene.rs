use cgmath::{Matrix4, SquareMatrix};
use log::{debug, trace, warn};
use thiserror::Error;

use crate::gfx::rendering::{BasisCommand, BodyRenderer};

use super::body::CelestialBody;
use super::frame::{FrameContext, FrameReport};

/// Stable index of a body inside a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub(crate) usize);

impl BodyId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Why [`Scene::add_child`] refused a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChildRejection {
    #[error("body {0:?} does not belong to this scene")]
    UnknownBody(BodyId),
    #[error("body {0:?} cannot be its own child")]
    SelfParent(BodyId),
    #[error("body {child:?} already orbits {parent:?}")]
    AlreadyParented { child: BodyId, parent: BodyId },
    #[error("linking {child:?} under {parent:?} would create a cycle")]
    WouldCycle { parent: BodyId, child: BodyId },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("invalid argument: {0}")]
    InvalidArgument(ChildRejection),
    #[error("body {0:?} does not belong to this scene")]
    UnknownBody(BodyId),
}

#[derive(Debug, Clone)]
struct SceneNode {
    body: CelestialBody,
    parent: Option<BodyId>,
    children: Vec<BodyId>,
    last_local: Matrix4<f32>,
}

/// Arena of bodies linked into a forest
///
/// Bodies are addressed by [`BodyId`] and never removed, so ids stay valid
/// for the lifetime of the scene. Every body has at most one parent and
/// [`add_child`](Self::add_child) refuses links that would close a cycle, so
/// a traversal reaches each body exactly once.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_body(&mut self, body: CelestialBody) -> BodyId {
        let id = BodyId(self.nodes.len());
        self.nodes.push(SceneNode {
            body,
            parent: None,
            children: Vec::new(),
            last_local: Matrix4::identity(),
        });
        id
    }

    /// Make `child` orbit `parent`
    ///
    /// Children are visited in the order they were added.
    pub fn add_child(&mut self, parent: BodyId, child: BodyId) -> Result<(), SceneError> {
        if let Err(rejection) = self.check_link(parent, child) {
            warn!("Rejected child link: {}", rejection);
            return Err(SceneError::InvalidArgument(rejection));
        }

        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        debug!("Linked body {} under body {}", child.0, parent.0);
        Ok(())
    }

    fn check_link(&self, parent: BodyId, child: BodyId) -> Result<(), ChildRejection> {
        for id in [parent, child] {
            if !self.contains(id) {
                return Err(ChildRejection::UnknownBody(id));
            }
        }
        if parent == child {
            return Err(ChildRejection::SelfParent(child));
        }
        if let Some(existing) = self.nodes[child.0].parent {
            return Err(ChildRejection::AlreadyParented {
                child,
                parent: existing,
            });
        }

        let mut ancestor = Some(parent);
        while let Some(id) = ancestor {
            if id == child {
                return Err(ChildRejection::WouldCycle { parent, child });
            }
            ancestor = self.nodes[id.0].parent;
        }
        Ok(())
    }

    pub fn contains(&self, id: BodyId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn body(&self, id: BodyId) -> Result<&CelestialBody, SceneError> {
        self.nodes
            .get(id.0)
            .map(|node| &node.body)
            .ok_or(SceneError::UnknownBody(id))
    }

    pub fn body_mut(&mut self, id: BodyId) -> Result<&mut CelestialBody, SceneError> {
        self.nodes
            .get_mut(id.0)
            .map(|node| &mut node.body)
            .ok_or(SceneError::UnknownBody(id))
    }

    pub fn parent(&self, id: BodyId) -> Result<Option<BodyId>, SceneError> {
        self.nodes
            .get(id.0)
            .map(|node| node.parent)
            .ok_or(SceneError::UnknownBody(id))
    }

    pub fn children(&self, id: BodyId) -> Result<&[BodyId], SceneError> {
        self.nodes
            .get(id.0)
            .map(|node| node.children.as_slice())
            .ok_or(SceneError::UnknownBody(id))
    }

    /// Bodies without a parent, in insertion order
    pub fn roots(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(index, _)| BodyId(index))
    }

    /// Transform the body handed to its children on the last traversal
    ///
    /// Identity until the body has been traversed once.
    pub fn world_transform(&self, id: BodyId) -> Result<Matrix4<f32>, SceneError> {
        self.nodes
            .get(id.0)
            .map(|node| node.last_local)
            .ok_or(SceneError::UnknownBody(id))
    }

    /// Advance and draw every body once, parents before children
    ///
    /// The walk is a depth-first pre-order over an explicit stack, roots and
    /// siblings in insertion order. When the visit counter reaches
    /// `frame.focus`, the camera for every draw after that body in this frame
    /// is offset so that the focused body sits at the origin.
    pub fn traverse(&mut self, frame: &FrameContext, renderer: &mut dyn BodyRenderer) -> FrameReport {
        let mut report = FrameReport {
            visit_order: Vec::with_capacity(self.nodes.len()),
            focus_offset: frame.focus_offset,
            focused_position: None,
        };

        let mut stack: Vec<(BodyId, Matrix4<f32>)> = self
            .roots()
            .map(|root| (root, frame.base_transform))
            .collect();
        stack.reverse();

        while let Some((id, parent_transform)) = stack.pop() {
            let node = &mut self.nodes[id.0];
            let transforms = node.body.step(frame.elapsed, &parent_transform);

            let world_to_clip = frame.world_to_clip * report.focus_offset;
            node.body.submit(&transforms, &world_to_clip, renderer);
            if frame.show_basis {
                renderer.draw_basis(BasisCommand {
                    length: 0.6,
                    thickness: 2.0,
                    world_to_clip,
                    transform: parent_transform,
                });
                renderer.draw_basis(BasisCommand {
                    length: 0.3,
                    thickness: 3.0,
                    world_to_clip,
                    transform: transforms.render,
                });
            }

            // The focused body itself is still drawn with the previous offset.
            if frame.focus == Some(report.visit_order.len()) {
                let position = transforms.position();
                report.focus_offset = Matrix4::from_translation(-position);
                report.focused_position = Some(position);
            }

            node.last_local = transforms.local;
            trace!("Advanced body {} to {:?}", id.0, transforms.position());
            report.visit_order.push(id);

            stack.extend(
                node.children
                    .iter()
                    .rev()
                    .map(|&child| (child, transforms.local)),
            );
        }

        report
    }
}
