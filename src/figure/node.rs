use glam::Vec2;

use crate::figure::behavior::Behavior;
use crate::figure::skeleton::NodeSpec;
use crate::pointer::{DragTarget, Pointer};
use crate::Viewport;

/// How far a node eases toward the pointer per frame while the other figure
/// is being dragged.
const FOLLOW_RATE: f32 = 0.01;
/// Pointer capture radius as a multiple of the node's collision width.
const CAPTURE_FACTOR: f32 = 3.0;

/// A simulated point mass with previous-position Verlet state.
#[derive(Debug, Clone)]
pub struct Node {
    pub position: Vec2,
    pub previous: Vec2,
    pub mass: f32,
    /// Collision width in simulation units
    pub width: f32,
    /// Activity scalar fed to the gait behavior as an amplitude multiplier
    pub intensity: f32,
    pub behavior: Option<Behavior>,
}

/// Figure-level values every node needs during one integration step.
#[derive(Debug, Clone, Copy)]
pub struct NodeContext {
    /// Identity of the owning figure, for drag targeting
    pub figure: usize,
    pub viewport: Viewport,
    /// Oscillation sign, ±1
    pub dir: f32,
    pub friction: f32,
    /// Horizontal anchor of the owning figure
    pub anchor: f32,
}

impl Node {
    pub fn new(spec: &NodeSpec, anchor: f32, intensity: f32) -> Self {
        let position = Vec2::new(spec.x + anchor, spec.y);
        Self {
            position,
            previous: position,
            mass: spec.mass,
            width: spec.w,
            intensity,
            behavior: spec.behavior,
        }
    }

    /// Implicit velocity carried by the Verlet state.
    pub fn velocity(&self) -> Vec2 {
        self.position - self.previous
    }

    /// One integration step: gait displacement, Verlet position update,
    /// pointer capture or release, ground clamp, then cross-figure follow.
    pub fn integrate(&mut self, index: usize, ctx: &NodeContext, pointer: &mut Pointer) {
        let this = DragTarget {
            figure: ctx.figure,
            node: index,
        };

        // A dragged node is fully pointer-controlled; its gait pauses.
        if let Some(behavior) = self.behavior {
            if pointer.drag != Some(this) {
                self.position +=
                    behavior.displace(self.position, ctx.dir, self.intensity, ctx.anchor);
            }
        }

        let velocity = self.velocity();
        self.previous = self.position;
        self.position += velocity * ctx.friction;

        if pointer.pressed {
            // Earlier nodes have priority: the first uncaptured hit wins.
            if pointer.drag.is_none() {
                let reach = self.width * ctx.viewport.scale * CAPTURE_FACTOR;
                let projected = ctx.viewport.project(self.position);
                if pointer.position.distance_squared(projected) <= reach * reach {
                    pointer.drag = Some(this);
                }
            }
        } else if pointer.drag == Some(this) {
            pointer.drag = None;
        }

        // Ground contact: kill horizontal velocity, clamp without bounce.
        let floor = ctx.viewport.height / ctx.viewport.scale - self.width;
        if self.position.y > floor {
            self.position.x = self.previous.x;
            self.position.y = floor;
            self.previous.y = floor;
        }

        if self.behavior == Some(Behavior::Follow) && pointer.drag_elsewhere(ctx.figure) {
            let target = ctx.viewport.unproject(pointer.position);
            self.position += (target - self.position) * FOLLOW_RATE;
        }
    }
}
