//! Data carried between pipeline steps.
//!
//! The container [`PipelineData`] is the single long-lived value threaded
//! through every step of a [`crate::Pipeline`]. This module defines:
//! - `PipelineData` and the [`DataKey`] vocabulary of its slots.
//! - Carrier types for the slot values (`ImageFrame`, `ImageStack`,
//!   `BinaryMask`, `ParticleTable`). The engine never inspects these beyond
//!   moving them by slot; their semantics belong to the steps.
//! - The [`Classifier`] trait behind the shared classifier handle.

mod classify;
mod data;
mod image;
mod table;

pub use classify::{Classifier, ClassifierHandle};
pub use data::{DataKey, PipelineData, StatsOutput};
pub use image::{BinaryMask, ImageFrame, ImageStack};
pub use table::{ParticleTable, TableRow};
