//! Aspect projector: anchor position → 12 aspect slots.

use palm_core::symbols::{Aspect, Branch};

/// Slot `i` at `anchor` resolves to `(anchor + i) mod 12`.
pub fn project(anchor: Branch) -> [(Aspect, Branch); 12] {
    Aspect::ALL.map(|aspect| (aspect, branch_for(anchor, aspect)))
}

/// Branch of a single aspect at `anchor`.
pub fn branch_for(anchor: Branch, aspect: Aspect) -> Branch {
    Branch::from_index(anchor.index() + aspect.slot())
}
