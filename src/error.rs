use std::fmt;

/// Configuration errors surfaced while building a figure from its skeleton.
///
/// The per-frame path has no recoverable errors by design: every numeric
/// operation is defined for all reachable states once the skeleton has been
/// validated, so only construction returns a `Result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RigError {
    /// A constraint references a node index beyond the skeleton's node list
    NodeOutOfRange { constraint: usize, node: usize },
    /// A constraint's authored endpoints coincide, so its rest distance
    /// would be zero and the solver denominator could vanish
    CoincidentEndpoints { constraint: usize },
    /// A skeleton with no nodes cannot dance
    EmptySkeleton,
}

impl fmt::Display for RigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RigError::NodeOutOfRange { constraint, node } => {
                write!(f, "constraint {constraint} references missing node {node}")
            }
            RigError::CoincidentEndpoints { constraint } => {
                write!(f, "constraint {constraint} has coincident endpoints")
            }
            RigError::EmptySkeleton => write!(f, "skeleton has no nodes"),
        }
    }
}

impl std::error::Error for RigError {}
