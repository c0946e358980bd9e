//! Static symbol tables: the 12 branches, the five elements, the 12 stars,
//! and the 12 life aspects.
//!
//! All tables are `const` data resolved through `match`, so they are
//! initialized at compile time and never mutated.

pub mod aspect;
pub mod branch;
pub mod element;
pub mod star;

pub use aspect::Aspect;
pub use branch::{Branch, Realm};
pub use element::Element;
pub use star::{Star, StarTier};
