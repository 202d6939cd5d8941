use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use crate::figure::node::Node;
use crate::renderer::{ImageHandle, Segment};
use crate::Viewport;

/// Visual binding carried by a constraint that doubles as a body segment.
#[derive(Debug, Clone)]
pub struct SegmentBinding {
    pub image: ImageHandle,
    /// Authored local offset from the first endpoint, in simulation units
    pub offset: Vec2,
    /// Authored rotation bias in radians
    pub angle: f32,
}

/// A distance relationship between two nodes, relaxed iteratively toward the
/// rest squared-distance captured once from the authored pose. Endpoints are
/// arena indices into the owning figure's node list.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub n0: usize,
    pub n1: usize,
    rest_d2: f32,
    pub visual: Option<SegmentBinding>,
}

impl Constraint {
    /// The caller guarantees distinct endpoint positions; the skeleton is
    /// validated before any constraint is built.
    pub fn new(n0: usize, n1: usize, nodes: &[Node], visual: Option<SegmentBinding>) -> Self {
        let rest_d2 = nodes[n0].position.distance_squared(nodes[n1].position);
        Self {
            n0,
            n1,
            rest_d2,
            visual,
        }
    }

    pub fn rest_d2(&self) -> f32 {
        self.rest_d2
    }

    pub fn current_d2(&self, nodes: &[Node]) -> f32 {
        nodes[self.n0].position.distance_squared(nodes[self.n1].position)
    }

    /// One relaxation pass: a cheap squared-distance projection, not an exact
    /// solve. The correction splits by the opposite endpoint's mass fraction
    /// so the heavier end moves less; convergence needs repeated passes.
    pub fn solve(&self, nodes: &mut [Node]) {
        let tween = nodes[self.n1].position - nodes[self.n0].position;
        let d2 = tween.length_squared();
        let delta = self.rest_d2 / (d2 + self.rest_d2) - 0.5;
        let total = nodes[self.n0].mass + nodes[self.n1].mass;
        let share0 = nodes[self.n0].mass / total;
        let share1 = nodes[self.n1].mass / total;
        nodes[self.n1].position += tween * (delta * share0);
        nodes[self.n0].position -= tween * (delta * share1);
    }

    /// Screen-space transform for the bound image, if any. Pure geometry;
    /// drawing is the rendering collaborator's business.
    pub fn segment(&self, nodes: &[Node], viewport: &Viewport) -> Option<Segment> {
        let visual = self.visual.as_ref()?;
        let tween = nodes[self.n1].position - nodes[self.n0].position;
        let rotation = tween.y.atan2(tween.x) - FRAC_PI_2 + visual.angle;
        Some(Segment {
            position: viewport.project(nodes[self.n0].position),
            rotation,
            image: visual.image,
            offset: visual.offset,
        })
    }
}
