//! # Per-Frame State
//!
//! The frame loop owns everything that changes between frames but is not part
//! of a body: the animation clock, the camera matrix, the focus selection.
//! It bundles them into a [`FrameContext`] and hands that to
//! [`Scene::traverse`](super::Scene::traverse), which answers with a
//! [`FrameReport`]. Nothing here is global, so a single frame can be stepped
//! and inspected in isolation.

use std::time::{Duration, Instant};

use cgmath::{Matrix4, SquareMatrix, Vector3};
use log::info;

use super::scene::BodyId;

/// Inputs for one traversal of the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Animation time to advance every body by (already paused/scaled)
    pub elapsed: Duration,
    /// Camera view-projection matrix
    pub world_to_clip: Matrix4<f32>,
    /// Parent transform handed to every root body
    pub base_transform: Matrix4<f32>,
    /// Pre-order visit index of the body the camera should center on
    pub focus: Option<usize>,
    /// Focus translation carried over from the previous frame
    pub focus_offset: Matrix4<f32>,
    /// Ask the renderer to draw coordinate axes for every body
    pub show_basis: bool,
}

impl Default for FrameContext {
    fn default() -> Self {
        Self {
            elapsed: Duration::ZERO,
            world_to_clip: Matrix4::identity(),
            base_transform: Matrix4::identity(),
            focus: None,
            focus_offset: Matrix4::identity(),
            show_basis: false,
        }
    }
}

impl FrameContext {
    pub fn new(elapsed: Duration, world_to_clip: Matrix4<f32>) -> Self {
        Self {
            elapsed,
            world_to_clip,
            ..Default::default()
        }
    }

    pub fn with_base_transform(mut self, base_transform: Matrix4<f32>) -> Self {
        self.base_transform = base_transform;
        self
    }

    /// Take the focus target and carried offset from `focus`
    pub fn with_focus(mut self, focus: &FocusState) -> Self {
        self.focus = focus.target();
        self.focus_offset = focus.offset();
        self
    }

    pub fn with_basis(mut self, show_basis: bool) -> Self {
        self.show_basis = show_basis;
        self
    }
}

/// What a traversal did
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Bodies in the order they were advanced
    pub visit_order: Vec<BodyId>,
    /// Focus translation after this frame; feed it into the next one
    pub focus_offset: Matrix4<f32>,
    /// World position of the focused body, if one was visited
    pub focused_position: Option<Vector3<f32>>,
}

impl FrameReport {
    pub fn visited(&self) -> usize {
        self.visit_order.len()
    }
}

/// Converts wall-clock frame times into animation time
///
/// Pausing yields a zero delta. The time scale is kept finite and
/// non-negative, since animation time never runs backwards.
#[derive(Debug, Clone)]
pub struct FrameClock {
    paused: bool,
    time_scale: f32,
    last_tick: Option<Instant>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            paused: false,
            time_scale: 1.0,
            last_tick: None,
        }
    }

    pub fn with_time_scale(time_scale: f32) -> Self {
        let mut clock = Self::new();
        clock.set_time_scale(time_scale);
        clock
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Set the time scale; negative or non-finite values become zero
    pub fn set_time_scale(&mut self, time_scale: f32) {
        self.time_scale = if time_scale.is_finite() {
            time_scale.max(0.0)
        } else {
            0.0
        };
    }

    /// Animation time corresponding to a wall-clock delta
    pub fn animation_delta(&self, wall: Duration) -> Duration {
        if self.paused {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(wall.as_secs_f64() * f64::from(self.time_scale))
            .unwrap_or(Duration::MAX)
    }

    /// Measure the wall time since the previous tick and convert it
    ///
    /// The first tick returns zero.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let wall = self
            .last_tick
            .map(|last| now.duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last_tick = Some(now);
        self.animation_delta(wall)
    }
}

/// Which body, if any, the camera is centered on
///
/// Toggling while focused moves the selection to the next body (wrapping
/// around) and turns focus off; toggling again focuses that body. Every
/// toggle drops the accumulated focus offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusState {
    enabled: bool,
    index: usize,
    body_count: usize,
    offset: Matrix4<f32>,
}

impl FocusState {
    pub fn new(body_count: usize) -> Self {
        Self {
            enabled: false,
            index: 0,
            body_count,
            offset: Matrix4::identity(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Currently selected visit index, whether or not focus is enabled
    pub fn index(&self) -> usize {
        self.index
    }

    /// Visit index to focus this frame
    pub fn target(&self) -> Option<usize> {
        (self.enabled && self.index < self.body_count).then_some(self.index)
    }

    pub fn offset(&self) -> Matrix4<f32> {
        self.offset
    }

    pub fn toggle(&mut self) {
        if self.enabled {
            self.index += 1;
            if self.index >= self.body_count {
                self.index = 0;
            }
        }
        self.offset = Matrix4::identity();
        self.enabled = !self.enabled;
        info!(
            "Focus {} (body #{})",
            if self.enabled { "on" } else { "off" },
            self.index
        );
    }

    /// Keep the offset computed by the last traversal
    pub fn update(&mut self, report: &FrameReport) {
        self.offset = report.focus_offset;
    }
}
