//! Screen pipelines built on [`crate::mvi`].

pub mod add_creature;
pub mod all_creatures;
