//! The two-robot cast, carried over from the authored rigs.
//!
//! Positions are simulation units relative to each figure's anchor column;
//! image fields are asset keys the rendering collaborator resolves to SVG
//! sources. Pure data.
//!
//! ```text
//!                 +1 head
//!                 |
//!                 +0 neck
//!    arms       /   \         arms
//! 4+----3+----2+-----+5----+6----+7
//!              | \ / |
//!              |  /  | body
//!              | / \ |
//!             8+-----+11
//!              |     |   legs up
//!             9+     +12
//!              |     |   legs down
//!            10+     +13
//! ```

use std::f32::consts::PI;

use crate::figure::behavior::Behavior;
use crate::figure::skeleton::{BoneSpec, NodeSpec, SegmentSpec, Skeleton};

/// Both figures with their horizontal anchor fractions: the first stands
/// right of center, the second mirrored to the left.
pub fn lineup() -> [(f32, Skeleton); 2] {
    [(0.45, female()), (-0.45, male())]
}

pub fn female() -> Skeleton {
    Skeleton {
        nodes: vec![
            // 0: neck
            mover(0.0, 253.0, 30.0, 0.1, Behavior::Sway { lift: 0.4, pull: 0.01 }),
            // 1: head
            mover(0.0, 100.0, 30.0, 0.5, Behavior::Lift { rate: 0.1 }),
            // 2: left shoulder
            node(-75.0, 280.0, 30.0, 0.1),
            // 3: left elbow
            node(-188.0, 435.0, 30.0, 0.1),
            // 4: left hand
            mover(-200.0, 560.0, 30.0, 0.1, Behavior::Follow),
            // 5: right shoulder
            node(70.0, 290.0, 30.0, 0.1),
            // 6: right elbow
            node(155.0, 400.0, 30.0, 0.1),
            // 7: right hand
            mover(60.0, 495.0, 30.0, 0.1, Behavior::Follow),
            // 8: left hip
            mover(-70.0, 602.0, 40.0, 0.1, Behavior::Sway { lift: 4.0, pull: 0.005 }),
            // 9: left knee
            mover(-90.0, 800.0, 30.0, 0.5, kick(false)),
            // 10: left foot
            mover(-90.0, 1000.0, 5.0, 0.5, stamp(1.0, 5.0, false)),
            // 11: right hip
            mover(7.0, 565.0, 40.0, 0.1, Behavior::Lift { rate: 0.4 }),
            // 12: right knee
            mover(7.0, 805.0, 40.0, 0.2, kick(true)),
            // 13: right foot
            mover(70.0, 995.0, 5.0, 0.2, stamp(1.0, 5.0, true)),
        ],
        bones: vec![
            limb(0, 8, "body", -120.0, 0.0, -0.25),
            limb(0, 1, "head", -12.0, -253.0, PI - 0.33),
            brace(0, 2),
            brace(2, 5),
            brace(5, 0),
            limb(2, 3, "leftarmup", -129.0, 0.0, -0.73),
            limb(3, 4, "leftarmdown", -53.0, -3.0, -0.35),
            limb(5, 6, "rightarmup", -19.0, 0.0, 0.0),
            limb(6, 7, "rightarmdown", -19.0, -15.0, 0.0),
            brace(2, 8),
            brace(2, 11),
            brace(0, 11),
            brace(5, 8),
            brace(5, 11),
            limb(8, 9, "leftlegup", -112.0, -15.0, -0.4),
            limb(9, 10, "leftlegdown", -29.0, 0.0, 0.0),
            limb(11, 12, "rightlegup", -54.0, 0.0, -0.05),
            limb(12, 13, "rightlegdown", -52.0, 0.0, 0.0),
            brace(8, 11),
        ],
    }
}

pub fn male() -> Skeleton {
    Skeleton {
        nodes: vec![
            // 0: neck
            mover(0.0, 255.0, 30.0, 0.1, Behavior::Sway { lift: 0.4, pull: 0.01 }),
            // 1: head
            mover(86.0, 10.0, 30.0, 0.5, Behavior::Lift { rate: 0.1 }),
            // 2: left shoulder
            node(-45.0, 328.0, 30.0, 0.1),
            // 3: left elbow
            node(-100.0, 580.0, 30.0, 0.1),
            // 4: left hand
            mover(-110.0, 600.0, 10.0, 0.1, Behavior::Follow),
            // 5: right shoulder
            node(142.0, 330.0, 30.0, 0.1),
            // 6: right elbow
            node(150.0, 510.0, 30.0, 0.1),
            // 7: right hand
            mover(150.0, 530.0, 10.0, 0.1, Behavior::Follow),
            // 8: left hip
            mover(4.0, 602.0, 40.0, 0.1, Behavior::Sway { lift: 0.1, pull: 0.005 }),
            // 9: left knee
            mover(4.0, 810.0, 30.0, 0.5, kick(false)),
            // 10: left foot
            mover(4.0, 1000.0, 30.0, 0.5, stamp(1.0, 2.0, false)),
            // 11: right hip
            mover(120.0, 600.0, 40.0, 0.1, Behavior::Lift { rate: 0.1 }),
            // 12: right knee
            mover(120.0, 810.0, 40.0, 0.2, kick(true)),
            // 13: right foot
            mover(120.0, 995.0, 30.0, 0.2, stamp(1.0, 2.0, true)),
            // 14: antenna tip
            node(120.0, 90.0, 20.0, 0.05),
        ],
        bones: vec![
            limb(0, 8, "body", -50.0, 0.0, 0.01),
            limb(0, 1, "head", -35.0, -255.0, PI - 0.3),
            brace(0, 2),
            brace(2, 5),
            brace(5, 0),
            limb(2, 3, "leftarmup", -162.0, -18.0, -0.67),
            limb(3, 4, "leftarmdown", -49.0, -49.0, -0.3),
            limb(5, 6, "rightarmup", -8.0, 0.0, 0.46),
            limb(6, 7, "rightarmdown", -60.0, -40.0, 0.0),
            brace(2, 8),
            brace(2, 11),
            brace(0, 11),
            brace(5, 8),
            brace(5, 11),
            limb(8, 9, "leftlegup", -45.0, 0.0, 0.0),
            limb(9, 10, "leftlegdown", -49.0, 0.0, 0.0),
            limb(11, 12, "rightlegup", -45.0, 0.0, 0.0),
            limb(12, 13, "rightlegdown", -30.0, 0.0, 0.0),
            brace(8, 11),
            limb(1, 14, "antenna", -14.0, 0.0, 0.26),
        ],
    }
}

fn node(x: f32, y: f32, w: f32, mass: f32) -> NodeSpec {
    NodeSpec {
        x,
        y,
        w,
        mass,
        behavior: None,
    }
}

fn mover(x: f32, y: f32, w: f32, mass: f32, behavior: Behavior) -> NodeSpec {
    NodeSpec {
        x,
        y,
        w,
        mass,
        behavior: Some(behavior),
    }
}

fn kick(reverse: bool) -> Behavior {
    let side = if reverse { 0.5 } else { -0.5 };
    Behavior::Kick {
        sway: side,
        lift: 1.5,
        drop: 2.0,
        reverse,
    }
}

fn stamp(raise: f32, slam: f32, reverse: bool) -> Behavior {
    Behavior::Stamp {
        sink: 1.5,
        raise,
        slam,
        reverse,
    }
}

fn brace(n0: usize, n1: usize) -> BoneSpec {
    BoneSpec {
        n0,
        n1,
        segment: None,
    }
}

fn limb(n0: usize, n1: usize, image: &str, x: f32, y: f32, angle: f32) -> BoneSpec {
    BoneSpec {
        n0,
        n1,
        segment: Some(SegmentSpec {
            image: image.into(),
            x,
            y,
            angle,
        }),
    }
}
