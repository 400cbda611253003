/// Whether a section has scrolled into view yet.
///
/// The latch only ever moves from hidden to visible. Observations that arrive
/// after the flip, or after the owner has detached it, change nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    visible: bool,
    detached: bool,
}

impl VisibilityLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Feed one intersection report. Returns `true` only for the report that
    /// flips the latch.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.detached || self.visible || !intersecting {
            return false;
        }
        self.visible = true;
        true
    }

    /// Stop accepting reports. Once the section has flipped there is nothing
    /// left to watch for, so owners detach right after the first flip too.
    pub fn detach(&mut self) {
        self.detached = true;
    }
}
