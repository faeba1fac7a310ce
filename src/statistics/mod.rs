//! Statistics over employee records.
//!
//! This module provides typed filter criteria, grouped counts for any
//! categorical field, and the composite dashboard bundle.

mod count;
mod dashboard;
mod filter;

pub use count::{CountField, NameCount, count_by};
pub use dashboard::{
    DashboardStatistics, SexCounts, StaffingSummary, StatisticsAggregator, StatusCounts,
    UniformCoverage,
};
pub use filter::FilterCriteria;
