//! Keyword validators, one module per keyword family

mod bounds;
mod combinators;
mod enum_const;
mod multiple_of;
mod pattern;
mod properties;
mod range;
mod types;

pub use bounds::{Bounds, BoundsKind};
pub use combinators::{Combinator, CombinatorMode};
pub use enum_const::ValueSet;
pub use multiple_of::MultipleOf;
pub use pattern::Pattern;
pub use properties::PropertyRules;
pub use range::Range;
pub use types::TypeSet;
