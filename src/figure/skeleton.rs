use serde::{Deserialize, Serialize};

use crate::error::RigError;
use crate::figure::behavior::Behavior;

/// Declarative rig description: authored once, never mutated after the
/// figure is built. Serializable so rigs can live as data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skeleton {
    pub nodes: Vec<NodeSpec>,
    pub bones: Vec<BoneSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    /// Authored position relative to the figure anchor
    pub x: f32,
    pub y: f32,
    /// Collision width, also the basis of the pointer capture radius
    pub w: f32,
    #[serde(default = "default_mass")]
    pub mass: f32,
    #[serde(default)]
    pub behavior: Option<Behavior>,
}

fn default_mass() -> f32 {
    1.0
}

/// A distance constraint between two nodes, by index into the node list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoneSpec {
    pub n0: usize,
    pub n1: usize,
    /// Present only when the bone is also a visible body segment
    #[serde(default)]
    pub segment: Option<SegmentSpec>,
}

/// Visual binding for a bone: which image to draw and where, relative to the
/// first endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentSpec {
    /// Asset key resolved by the rendering collaborator
    pub image: String,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    /// Rotation bias in radians
    #[serde(default)]
    pub angle: f32,
}

impl Skeleton {
    /// Reject the configuration errors that would break the solver: bones
    /// pointing at missing nodes, and authored endpoints that coincide
    /// (their rest squared-distance would be zero).
    pub fn validate(&self) -> Result<(), RigError> {
        if self.nodes.is_empty() {
            return Err(RigError::EmptySkeleton);
        }
        for (index, bone) in self.bones.iter().enumerate() {
            for node in [bone.n0, bone.n1] {
                if node >= self.nodes.len() {
                    return Err(RigError::NodeOutOfRange {
                        constraint: index,
                        node,
                    });
                }
            }
            let alpha = &self.nodes[bone.n0];
            let omega = &self.nodes[bone.n1];
            if alpha.x == omega.x && alpha.y == omega.y {
                return Err(RigError::CoincidentEndpoints { constraint: index });
            }
        }
        Ok(())
    }
}
