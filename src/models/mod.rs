//! Input element tree and canonical output records.
//!
//! `tree` holds what authors write; everything else describes the
//! normalized presentation handed to the backend, plus the authored forms of
//! the style props that feed it.

pub mod bullet;
pub mod colors;
pub mod common;
pub mod elements;
pub mod image;
pub mod line;
pub mod link;
pub mod page;
pub mod presentation;
pub mod properties;
pub mod shape;
pub mod table;
pub mod text_element;
pub mod tree;
