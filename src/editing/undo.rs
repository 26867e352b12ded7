//! Managing undo state

use std::collections::VecDeque;

use crate::core::state::{GlyphData, OutlineData};
use bevy::prelude::*;

/// Default size of the undo stack.
pub const DEFAULT_UNDO_STACK_SIZE: usize = 128;

/// A bounded history of edits that can be undone and redone.
#[derive(Debug, Clone)]
pub struct UndoState<T> {
    /// Maximum number of edits to store.
    max_undo_count: usize,
    /// The recorded edits, oldest first.
    stack: VecDeque<T>,
    /// How many edits in `stack` are currently applied.
    live_index: usize,
}

impl<T> Default for UndoState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UndoState<T> {
    /// Create a new undo history with the default stack size.
    pub fn new() -> Self {
        Self::new_sized(DEFAULT_UNDO_STACK_SIZE)
    }

    /// Create a new undo history with a specific maximum stack size.
    pub fn new_sized(max_undo_count: usize) -> Self {
        UndoState {
            max_undo_count: max_undo_count.max(1),
            stack: VecDeque::new(),
            live_index: 0,
        }
    }

    /// Step back, returning the edit to revert.
    pub fn undo(&mut self) -> Option<&T> {
        if self.live_index == 0 {
            return None;
        }
        self.live_index -= 1;
        self.stack.get(self.live_index)
    }

    /// Step forward again, returning the edit to reapply.
    pub fn redo(&mut self) -> Option<&T> {
        if self.live_index == self.stack.len() {
            return None;
        }
        self.live_index += 1;
        self.stack.get(self.live_index - 1)
    }

    /// Record a new edit.
    pub fn push(&mut self, item: T) {
        // Recording after an undo drops the undone edits
        self.stack.truncate(self.live_index);
        self.stack.push_back(item);
        self.live_index += 1;

        if self.stack.len() > self.max_undo_count {
            self.stack.pop_front();
            self.live_index -= 1;
        }
    }

    /// Number of recorded edits.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

/// One recorded change to a glyph outline
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphEdit {
    pub label: &'static str,
    pub glyph_name: String,
    pub before: Option<OutlineData>,
    pub after: Option<OutlineData>,
}

/// A scoped undo group around edits to one glyph.
///
/// Creating the group snapshots the outline; dropping it records the
/// change, on every exit path, including early returns through `?`.
pub struct UndoGroup<'a> {
    label: &'static str,
    glyph: &'a mut GlyphData,
    undos: &'a mut UndoState<GlyphEdit>,
    before: Option<OutlineData>,
}

impl<'a> UndoGroup<'a> {
    /// Open an undo group for `glyph`
    pub fn prepare(
        label: &'static str,
        glyph: &'a mut GlyphData,
        undos: &'a mut UndoState<GlyphEdit>,
    ) -> Self {
        debug!("Preparing undo '{}' for glyph '{}'", label, glyph.name);
        let before = glyph.outline.clone();
        Self {
            label,
            glyph,
            undos,
            before,
        }
    }

    /// The glyph being edited
    pub fn glyph(&mut self) -> &mut GlyphData {
        self.glyph
    }
}

impl Drop for UndoGroup<'_> {
    fn drop(&mut self) {
        let after = self.glyph.outline.clone();
        if after == self.before {
            debug!("Undo '{}' closed without changes", self.label);
            return;
        }
        self.undos.push(GlyphEdit {
            label: self.label,
            glyph_name: self.glyph.name.clone(),
            before: self.before.take(),
            after,
        });
        debug!("Recorded undo '{}' for glyph '{}'", self.label, self.glyph.name);
    }
}
