//! Section visibility over the page strip.
//!
//! The page is a vertical strip of sections; the viewport is a window of
//! `viewport` rows starting at the scroll offset. This is the terminal
//! analogue of an intersection observer: each frame the engine asks, per
//! section, whether it overlaps the window and what fraction of its
//! height is inside, and forwards changes to that section's reveal group.

use folio_types::ui::SectionId;

/// Per-section visibility snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub is_intersecting: bool,
    /// Visible height / section height, in `[0, 1]`. Zero for empty
    /// sections.
    pub ratio: f32,
}

/// Section heights plus the viewport height, all in rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionStrip {
    heights: [u16; SectionId::COUNT],
    viewport: u16,
}

impl SectionStrip {
    pub fn set_heights(&mut self, heights: [u16; SectionId::COUNT]) {
        self.heights = heights;
    }

    pub fn set_viewport(&mut self, viewport: u16) {
        self.viewport = viewport;
    }

    #[must_use]
    pub fn viewport(&self) -> u16 {
        self.viewport
    }

    #[must_use]
    pub fn height_of(&self, section: SectionId) -> u16 {
        self.heights[section.index()]
    }

    /// Strip row where a section starts.
    #[must_use]
    pub fn top_of(&self, section: SectionId) -> u16 {
        self.heights[..section.index()]
            .iter()
            .fold(0u16, |acc, h| acc.saturating_add(*h))
    }

    #[must_use]
    pub fn total_height(&self) -> u16 {
        self.heights
            .iter()
            .fold(0u16, |acc, h| acc.saturating_add(*h))
    }

    /// Maximum scroll offset: strip height minus one viewport.
    #[must_use]
    pub fn max_scroll(&self) -> u16 {
        self.total_height().saturating_sub(self.viewport)
    }

    /// The section whose top row is nearest the viewport top; used for
    /// the nav bar highlight.
    #[must_use]
    pub fn section_at(&self, offset: u16) -> SectionId {
        let mut active = SectionId::Hero;
        for section in SectionId::ALL {
            if self.top_of(section) <= offset {
                active = section;
            }
        }
        active
    }

    /// Visibility of one section for the viewport at `offset`.
    #[must_use]
    pub fn visibility(&self, section: SectionId, offset: u16) -> Visibility {
        let top = u32::from(self.top_of(section));
        let height = u32::from(self.height_of(section));
        let bottom = top + height;
        let view_top = u32::from(offset);
        let view_bottom = view_top + u32::from(self.viewport);

        let overlap = bottom.min(view_bottom).saturating_sub(top.max(view_top));
        if height == 0 || overlap == 0 {
            return Visibility {
                is_intersecting: false,
                ratio: 0.0,
            };
        }
        Visibility {
            is_intersecting: true,
            ratio: overlap as f32 / height as f32,
        }
    }
}
