use super::constants::SECTION_COUNT;

/// One of the five scroll-anchored content blocks, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Landing,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; SECTION_COUNT] = [
        Section::Landing,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Section for an index; anything out of range resolves to `Landing`.
    pub fn from_index(index: usize) -> Section {
        Self::ALL.get(index).copied().unwrap_or(Section::Landing)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Landing => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

/// Derived scroll position of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Fraction of the scrollable height covered, in \[0, 1\].
    pub progress: f32,
    /// Current section, in \[0, SECTION_COUNT - 1\].
    pub section_index: usize,
}

impl ScrollState {
    /// Derive the state from raw viewport geometry.
    ///
    /// Degenerate geometry (content no taller than the viewport) yields a
    /// progress of 0 rather than dividing by zero.
    pub fn from_geometry(scroll_top: f64, document_height: f64, viewport_height: f64) -> Self {
        let progress = scroll_progress(scroll_top, document_height, viewport_height);
        Self {
            progress,
            section_index: section_index_for_progress(progress),
        }
    }

    pub fn section(&self) -> Section {
        Section::from_index(self.section_index)
    }
}

#[inline]
pub fn scroll_progress(scroll_top: f64, document_height: f64, viewport_height: f64) -> f32 {
    let scrollable = document_height - viewport_height;
    if !(scrollable > 0.0) {
        return 0.0;
    }
    let p = scroll_top / scrollable;
    if p.is_nan() {
        return 0.0;
    }
    p.clamp(0.0, 1.0) as f32
}

/// `min(floor(progress * SECTION_COUNT), SECTION_COUNT - 1)`.
#[inline]
pub fn section_index_for_progress(progress: f32) -> usize {
    let last = SECTION_COUNT - 1;
    if !(progress > 0.0) {
        return 0;
    }
    let raw = (progress * SECTION_COUNT as f32).floor();
    (raw as usize).min(last)
}

/// Scroll offset that brings section `index` to the top of the viewport,
/// assuming each section is one viewport tall.
#[inline]
pub fn section_scroll_top(index: usize, viewport_height: f64) -> f64 {
    let index = index.min(SECTION_COUNT - 1);
    viewport_height.max(0.0) * index as f64
}

/// Section jumped to by a digit key: "1" is the first section.
#[inline]
pub fn section_for_digit(key: &str) -> Option<usize> {
    let mut chars = key.chars();
    let d = chars.next()?.to_digit(10)? as usize;
    if chars.next().is_some() {
        return None;
    }
    (1..=SECTION_COUNT).contains(&d).then(|| d - 1)
}
