//! The score comparison pipeline.
//!
//! Takes a raw worksheet table through normalization, class averaging,
//! single-student projection, and the final left join that the chart and
//! detail views consume.

pub mod aggregate;
pub mod merge;
pub mod normalize;
pub mod project;
pub mod types;
