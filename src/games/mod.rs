//! # Game Variant Implementations
//!
//! This module contains the state machines for all supported mini-game
//! variants. Each variant implements the `MiniGame` trait to provide a
//! consistent interface for the session controller and host surfaces.
//!
//! ## Supported Variants
//! - **Quiz**: answer authored questions one at a time
//! - **Memory**: flip face-down cards and match pairs
//! - **Puzzle**: swap scrambled picture pieces back into place
//! - **Pairing**: connect items across two columns
//! - **Grouping**: sort a word pool into its four-word categories
//! - **Word-Search**: trace straight lines of letters on a grid
//! - **Ordering**: drag a sequence back into its correct order
//!
//! ## Adding New Variants
//! To add a variant, create a new module and implement:
//! 1. An input type (an enum of the variant's pointer/drag gestures)
//! 2. A state type with the `MiniGame` trait
//! 3. A constructor validating the variant's definition content
//! 4. The variant's terminal predicate and score formulas

pub mod grouping;
pub mod memory;
pub mod ordering;
pub mod pairing;
pub mod puzzle;
pub mod quiz;
pub mod word_search;
