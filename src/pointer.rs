use glam::Vec2;

/// One frame's snapshot of pointer input, in raw screen coordinates.
///
/// The snapshot is passed explicitly into every step; the core never reads
/// ambient input state. The drag reference is the one field the core writes
/// back: nodes capture it on press and clear it on release.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub position: Vec2,
    pub pressed: bool,
    pub drag: Option<DragTarget>,
}

/// Identity of the single node currently positioned by the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragTarget {
    pub figure: usize,
    pub node: usize,
}

impl Pointer {
    pub fn moved_to(position: Vec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Which node of the given figure is being dragged, if any.
    pub fn dragged_node(&self, figure: usize) -> Option<usize> {
        self.drag
            .and_then(|drag| (drag.figure == figure).then_some(drag.node))
    }

    /// True while some other figure owns the active drag target.
    pub fn drag_elsewhere(&self, figure: usize) -> bool {
        self.drag.is_some_and(|drag| drag.figure != figure)
    }
}
