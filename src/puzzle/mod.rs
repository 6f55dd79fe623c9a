//! Puzzle data model: cells, grid, and slot derivation
//!
//! This module contains the puzzle-side data model:
//! - Cell values and fill directions
//! - The validated rectangular grid
//! - Numbered slot extraction from the blocked-cell layout

/// Cell values and fill directions
pub mod cell;
/// Rectangular cell matrix with validation
pub mod grid;
/// Slot extraction and crossword numbering
pub mod slots;

pub use cell::{Cell, Direction};
pub use grid::Grid;
pub use slots::{Clue, Slot, SlotCell, SlotId, extract_slots};
