//! DOM-free rules and types for the Paper-CMS page enhancements.
//!
//! Everything here is target independent so the frontend crate can stay a
//! thin layer of event wiring on top of it.

pub mod enums;
pub mod shared;
