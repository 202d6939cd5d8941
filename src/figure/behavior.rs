use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Per-node gait behaviors, a closed set dispatched by tag.
///
/// Each variant is a pure function of the node's own position, the figure's
/// oscillation sign, the node's activity scalar, and the figure anchor. A
/// behavior may only displace its own node. `Follow` is the one exception to
/// pure gait: it reads cross-figure drag state, so the node resolves it in
/// its own integration step rather than here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Behavior {
    /// Rise steadily while easing toward the figure's anchor column
    Sway { lift: f32, pull: f32 },
    /// Rise steadily
    Lift { rate: f32 },
    /// Knee drive: push up and sideways on one half of the oscillation,
    /// drop on the other; `reverse` swaps the halves for the opposite leg
    Kick {
        sway: f32,
        lift: f32,
        drop: f32,
        reverse: bool,
    },
    /// Foot plant: constant sink toward the ground plus a raise/slam split
    /// across the oscillation; `reverse` swaps the halves
    Stamp {
        sink: f32,
        raise: f32,
        slam: f32,
        reverse: bool,
    },
    /// Ease toward the pointer while the other figure is being dragged
    Follow,
}

impl Behavior {
    /// Displacement for one frame. `dir` is the oscillation sign and
    /// `intensity` the activity scalar multiplying every amplitude.
    pub fn displace(self, position: Vec2, dir: f32, intensity: f32, anchor: f32) -> Vec2 {
        let f = intensity;
        match self {
            Behavior::Sway { lift, pull } => {
                Vec2::new((anchor - position.x) * pull, -lift * f)
            }
            Behavior::Lift { rate } => Vec2::new(0.0, -rate * f),
            Behavior::Kick {
                sway,
                lift,
                drop,
                reverse,
            } => {
                let driving = (dir > 0.0) != reverse;
                if driving {
                    Vec2::new(sway * f, -lift * f)
                } else {
                    Vec2::new(0.0, drop * f)
                }
            }
            Behavior::Stamp {
                sink,
                raise,
                slam,
                reverse,
            } => {
                let raising = (dir > 0.0) != reverse;
                let split = if raising { -raise * f } else { slam * f };
                Vec2::new(0.0, sink * f + split)
            }
            Behavior::Follow => Vec2::ZERO,
        }
    }
}
