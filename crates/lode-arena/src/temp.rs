//! Scoped temporary checkpoints over one arena.
//!
//! A [`Temp`] records the arena's cursor at creation and rewinds to it
//! when the guard ends, releasing every allocation made inside the
//! scope in one step. The guard mutably borrows the arena, so scopes
//! nest like a stack by construction: a later checkpoint reborrows an
//! earlier one and must end first, and nothing allocated inside a scope
//! can be used after the scope rewinds it.

use core::ops::{Deref, DerefMut};

use crate::arena::Arena;

/// A stack-discipline checkpoint on an [`Arena`].
///
/// Created by [`Arena::begin_temp`]; allocate through it via deref.
/// Ending the guard — explicitly with [`Temp::end`] or by dropping it —
/// rewinds the arena to the recorded position. The rewind is clamped:
/// if scoped code already popped below the checkpoint, ending it does
/// not grow the cursor back.
#[must_use]
pub struct Temp<'a> {
    arena: &'a mut Arena,
    start: usize,
}

impl Arena {
    /// Begin a temporary scope at the current cursor.
    pub fn begin_temp(&mut self) -> Temp<'_> {
        let start = self.pos();
        Temp { arena: self, start }
    }
}

impl Temp<'_> {
    /// The cursor position the arena rewinds to when this scope ends.
    pub fn start_pos(&self) -> usize {
        self.start
    }

    /// End the scope now, rewinding the arena.
    ///
    /// Equivalent to dropping the guard; spelled out for call sites
    /// where the rewind is the point.
    pub fn end(self) {}
}

impl Deref for Temp<'_> {
    type Target = Arena;

    fn deref(&self) -> &Arena {
        self.arena
    }
}

impl DerefMut for Temp<'_> {
    fn deref_mut(&mut self) -> &mut Arena {
        self.arena
    }
}

impl Drop for Temp<'_> {
    fn drop(&mut self) {
        self.arena.pop_to(self.start);
    }
}
