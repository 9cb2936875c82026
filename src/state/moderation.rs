//! Visibility state for flagged comments and the page-wide toggle control.
//!
//! DESIGN
//! ======
//! Each flagged comment owns one [`BlockVisibility`] record keyed by comment
//! id. Components render warning/content regions and button chrome purely
//! from these records, so the record is the only source of truth for
//! whether a block is currently revealed.

#[cfg(test)]
#[path = "moderation_test.rs"]
mod moderation_test;

use std::collections::BTreeMap;

use super::thread::AnalyzedComment;

/// Label shown on a toggle button while its content is hidden.
pub const SHOW_CONTENT_LABEL: &str = "Show Content";
/// Label shown on a toggle button while its content is revealed.
pub const HIDE_CONTENT_LABEL: &str = "Hide Content";
/// Solid button style used while content is revealed.
pub const SOLID_BUTTON_CLASS: &str = "btn-danger";
/// Outline button style used while content is hidden.
pub const OUTLINE_BUTTON_CLASS: &str = "btn-outline-danger";

/// Whether a comment block currently shows its warning or its content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlockVisibility {
    /// Warning region visible, content region hidden.
    #[default]
    Hidden,
    /// Content region visible, warning region hidden.
    Shown,
}

impl BlockVisibility {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Hidden => Self::Shown,
            Self::Shown => Self::Hidden,
        }
    }

    #[must_use]
    pub fn is_shown(self) -> bool {
        self == Self::Shown
    }

    #[must_use]
    pub fn warning_visible(self) -> bool {
        self == Self::Hidden
    }

    #[must_use]
    pub fn content_visible(self) -> bool {
        self == Self::Shown
    }

    /// Toggle button label for this visibility.
    #[must_use]
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Hidden => SHOW_CONTENT_LABEL,
            Self::Shown => HIDE_CONTENT_LABEL,
        }
    }

    /// Toggle button style class for this visibility.
    #[must_use]
    pub fn button_class(self) -> &'static str {
        match self {
            Self::Hidden => OUTLINE_BUTTON_CLASS,
            Self::Shown => SOLID_BUTTON_CLASS,
        }
    }
}

/// Next action of the page-wide toggle control.
///
/// `Hide` means blocks are currently hidden and the next activation reveals
/// them; `Show` means the next activation hides them again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlobalToggle {
    #[default]
    Hide,
    Show,
}

impl GlobalToggle {
    /// Value rendered into the control's `data-state` attribute.
    #[must_use]
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Hide => "hide",
            Self::Show => "show",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hide => "Show All",
            Self::Show => "Hide All",
        }
    }

    /// Bootstrap icon class for the control.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Hide => "bi bi-eye",
            Self::Show => "bi bi-eye-slash",
        }
    }

    /// Visibility every block reaches when the control is activated.
    #[must_use]
    pub fn target(self) -> BlockVisibility {
        match self {
            Self::Hide => BlockVisibility::Shown,
            Self::Show => BlockVisibility::Hidden,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Hide => Self::Show,
            Self::Show => Self::Hide,
        }
    }
}

/// How a comment block offers to reveal its content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealMode {
    /// One-way "Reveal Comment" button inside the warning region.
    Reveal,
    /// Two-state Show/Hide button next to the block.
    #[default]
    Toggle,
}

/// Visibility records for every flagged comment on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModerationState {
    blocks: BTreeMap<String, BlockVisibility>,
    global: GlobalToggle,
}

impl ModerationState {
    /// Register every toxic comment as a hidden block.
    #[must_use]
    pub fn from_comments(comments: &[AnalyzedComment]) -> Self {
        let mut state = Self::default();
        for comment in comments.iter().filter(|c| c.toxicity.is_toxic) {
            state.register(&comment.id, BlockVisibility::Hidden);
        }
        state
    }

    /// Track a block. Re-registering an id overwrites its visibility.
    pub fn register(&mut self, id: &str, visibility: BlockVisibility) {
        self.blocks.insert(id.to_owned(), visibility);
    }

    #[must_use]
    pub fn visibility(&self, id: &str) -> Option<BlockVisibility> {
        self.blocks.get(id).copied()
    }

    #[must_use]
    pub fn is_shown(&self, id: &str) -> bool {
        self.visibility(id).is_some_and(BlockVisibility::is_shown)
    }

    #[must_use]
    pub fn global(&self) -> GlobalToggle {
        self.global
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[must_use]
    pub fn shown_count(&self) -> usize {
        self.blocks.values().filter(|v| v.is_shown()).count()
    }

    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.len() - self.shown_count()
    }

    /// Common visibility of all blocks, or `None` when they differ or there
    /// are no blocks.
    #[must_use]
    pub fn uniform_visibility(&self) -> Option<BlockVisibility> {
        let mut values = self.blocks.values().copied();
        let first = values.next()?;
        values.all(|v| v == first).then_some(first)
    }

    /// Flip one block. Unknown ids are ignored.
    ///
    /// Returns the block's new visibility.
    pub fn toggle_one(&mut self, id: &str) -> Option<BlockVisibility> {
        let entry = self.blocks.get_mut(id)?;
        *entry = entry.flipped();
        Some(*entry)
    }

    /// Reveal one block without offering to hide it again.
    pub fn reveal(&mut self, id: &str) -> Option<BlockVisibility> {
        let entry = self.blocks.get_mut(id)?;
        *entry = BlockVisibility::Shown;
        Some(*entry)
    }

    /// Apply the global control's pending action to every block.
    ///
    /// Returns the control's new next action.
    pub fn toggle_all(&mut self) -> GlobalToggle {
        let target = self.global.target();
        for visibility in self.blocks.values_mut() {
            *visibility = target;
        }
        self.global = self.global.flipped();
        self.global
    }
}
