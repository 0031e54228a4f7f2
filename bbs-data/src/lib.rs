//! Frame shaping for the bike share dashboard.
//!
//! Turns the untyped [`Frame`](bbs_core::Frame)s the warehouse returns into
//! the typed rows and derived display fields the renderer needs.
//!
//! - [`shape`]: fixed canonical column names per query, arity checked
//! - [`rows`]: typed row extraction on top of a shaped frame
//! - [`sizing`]: marker sizes derived from trip counts
//! - [`label`]: the `"<name> (<count> trips)"` hover label and its parser
//! - [`display`]: table projection with helper columns dropped and 2-decimal rounding

pub mod display;
pub mod label;
pub mod rows;
pub mod shape;
pub mod sizing;
