use glam::Vec2;
use log::debug;

use crate::error::RigError;
use crate::figure::constraint::{Constraint, SegmentBinding};
use crate::figure::node::{Node, NodeContext};
use crate::figure::physics::{presets, Mode, Physics};
use crate::figure::skeleton::Skeleton;
use crate::pointer::Pointer;
use crate::renderer::Renderer;
use crate::Viewport;

pub mod behavior;
pub mod constraint;
pub mod node;
pub mod physics;
pub mod skeleton;

/// Relaxation passes per frame. Approximate convergence in insertion order,
/// never a fixed-point loop.
pub const RELAXATION_PASSES: usize = 5;
/// Per-frame easing of the dragged node toward the pointer.
const DRAG_EASING: f32 = 0.5;

/// One articulated rig: an arena of nodes and the constraints between them,
/// built once from a declarative skeleton and stepped every frame.
pub struct Figure {
    index: usize,
    anchor_fraction: f32,
    anchor: f32,
    frame: u64,
    dir: f32,
    mode: Mode,
    physics: Physics,
    pub nodes: Vec<Node>,
    pub constraints: Vec<Constraint>,
}

impl Figure {
    pub fn new(
        index: usize,
        anchor_fraction: f32,
        skeleton: &Skeleton,
        viewport: Viewport,
        renderer: &mut dyn Renderer,
    ) -> Result<Self, RigError> {
        skeleton.validate()?;
        let physics = presets::RELAXED;
        let anchor = anchor_fraction * viewport.width.min(viewport.height);
        let nodes: Vec<Node> = skeleton
            .nodes
            .iter()
            .map(|spec| Node::new(spec, anchor, physics.intensity))
            .collect();
        let constraints = skeleton
            .bones
            .iter()
            .map(|bone| {
                let visual = bone.segment.as_ref().map(|segment| SegmentBinding {
                    image: renderer.prepare_image(&segment.image),
                    offset: Vec2::new(segment.x, segment.y),
                    angle: segment.angle,
                });
                Constraint::new(bone.n0, bone.n1, &nodes, visual)
            })
            .collect();
        Ok(Self {
            index,
            anchor_fraction,
            anchor,
            frame: 0,
            dir: 1.0,
            mode: Mode::Relaxed,
            physics,
            nodes,
            constraints,
        })
    }

    /// One frame: advance the oscillation, ease the drag anchor, integrate
    /// every node in declaration order, relax all constraints, then emit the
    /// visual segments.
    pub fn step(&mut self, viewport: Viewport, pointer: &mut Pointer, renderer: &mut dyn Renderer) {
        self.frame += 1;
        if self.frame % self.physics.pace == 0 {
            self.dir = -self.dir;
        }

        // Lagged, elastic-feeling drag: half the remaining gap per frame.
        if let Some(node) = pointer.dragged_node(self.index) {
            let target = viewport.unproject(pointer.position);
            let node = &mut self.nodes[node];
            node.position += (target - node.position) * DRAG_EASING;
        }

        let ctx = NodeContext {
            figure: self.index,
            viewport,
            dir: self.dir,
            friction: self.physics.friction,
            anchor: self.anchor,
        };
        for index in 0..self.nodes.len() {
            self.nodes[index].integrate(index, &ctx, pointer);
        }

        for _ in 0..RELAXATION_PASSES {
            for constraint in &self.constraints {
                constraint.solve(&mut self.nodes);
            }
        }

        for constraint in &self.constraints {
            if let Some(segment) = constraint.segment(&self.nodes, &viewport) {
                renderer.draw_segment(&segment);
            }
        }
    }

    /// Toggle between the two operating modes. Idempotent: applying a preset
    /// twice leaves the same parameter state as once.
    pub fn set_engaged(&mut self, engaged: bool) {
        let mode = if engaged { Mode::Engaged } else { Mode::Relaxed };
        if self.mode != mode {
            debug!("figure {} now {mode}", self.index);
        }
        self.mode = mode;
        self.physics = mode.physics();
        for node in &mut self.nodes {
            node.intensity = self.physics.intensity;
        }
    }

    /// Recompute the anchor and ask the renderer to regenerate every
    /// scale-dependent cache. Idempotent, safe before the first step.
    pub fn resize(&mut self, viewport: Viewport, renderer: &mut dyn Renderer) {
        self.anchor = self.anchor_fraction * viewport.width.min(viewport.height);
        for visual in self.visuals() {
            renderer.regenerate_cache(visual.image, viewport.scale);
        }
    }

    pub fn images_ready(&self, renderer: &dyn Renderer) -> bool {
        self.visuals().all(|visual| renderer.is_ready(visual.image))
    }

    /// Swap in placeholders for every image that never became ready.
    pub fn substitute_pending(&self, renderer: &mut dyn Renderer) {
        for visual in self.visuals() {
            if !renderer.is_ready(visual.image) {
                renderer.use_placeholder(visual.image);
            }
        }
    }

    fn visuals(&self) -> impl Iterator<Item = &SegmentBinding> {
        self.constraints
            .iter()
            .filter_map(|constraint| constraint.visual.as_ref())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn physics(&self) -> &Physics {
        &self.physics
    }

    /// Current oscillation sign, ±1.
    pub fn dir(&self) -> f32 {
        self.dir
    }

    pub fn anchor(&self) -> f32 {
        self.anchor
    }
}
