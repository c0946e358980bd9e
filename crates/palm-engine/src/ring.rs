//! Modular index arithmetic over the 12-branch ring.

use palm_core::constants::RING_SIZE;
use palm_core::errors::{RequestError, RingError};
use palm_core::symbols::Branch;

/// Ring position for a branch label.
pub fn index_of(label: &str) -> Result<usize, RingError> {
    Branch::from_label(label)
        .map(Branch::index)
        .ok_or_else(|| RingError::UnknownBranch {
            label: label.to_string(),
        })
}

/// `(start + steps * direction) mod 12`, always in `[0, 12)`.
pub fn advance(start: usize, steps: i64, direction: i64) -> usize {
    let ring = RING_SIZE as i64;
    (start as i64 + steps * direction).rem_euclid(ring) as usize
}

/// Same as [`advance`], on branches.
pub fn advance_branch(start: Branch, steps: i64, direction: i64) -> Branch {
    Branch::from_index(advance(start.index(), steps, direction))
}

/// Resolves branch labels from requests under the configured strictness.
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchResolver {
    strict: bool,
}

impl BranchResolver {
    /// Unknown labels default to 子.
    pub fn permissive() -> Self {
        Self { strict: false }
    }

    /// Unknown labels are rejected.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Resolve `label` from request field `field`.
    pub fn resolve(&self, field: &str, label: &str) -> Result<Branch, RequestError> {
        match index_of(label) {
            Ok(index) => Ok(Branch::from_index(index)),
            Err(_) if self.strict => Err(RequestError::UnknownBranch {
                field: field.to_string(),
                label: label.to_string(),
            }),
            Err(e) => {
                tracing::warn!(field, error = %e, "unknown branch, defaulting to 子");
                Ok(Branch::Zi)
            }
        }
    }
}
