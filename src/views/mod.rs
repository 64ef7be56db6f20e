//! Derived presentations of the goal collection.
//!
//! Everything in here is a pure function over a snapshot slice; callers
//! recompute after every `SkillCollection::replace_all`.

pub mod dashboard;
pub mod filter;
pub mod insights;
pub mod timeline;
