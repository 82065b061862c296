use super::scroll::{ScrollState, Section};

/// UI state owned by the page controller.
///
/// Event handlers mutate it through the setters; the frame loop reads it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub scroll: ScrollState,
    pub exploded: bool,
    pub hovered: Option<usize>,
}

impl PageState {
    /// Recompute scroll state from viewport geometry. Returns the new section
    /// when it differs from the previous one.
    pub fn update_scroll(
        &mut self,
        scroll_top: f64,
        document_height: f64,
        viewport_height: f64,
    ) -> Option<Section> {
        let prev = self.scroll.section_index;
        self.scroll = ScrollState::from_geometry(scroll_top, document_height, viewport_height);
        (self.scroll.section_index != prev).then(|| self.scroll.section())
    }

    /// Flip the exploded flag and return the new value.
    pub fn toggle_exploded(&mut self) -> bool {
        self.exploded = !self.exploded;
        self.exploded
    }

    /// Returns true if the hovered part changed.
    pub fn set_hovered(&mut self, hovered: Option<usize>) -> bool {
        let changed = self.hovered != hovered;
        self.hovered = hovered;
        changed
    }
}
