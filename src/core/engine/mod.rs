//! Aggregation & Share Engine.
//!
//! Pure, synchronous transformations over already-materialized record sets:
//! top-N ranking, percentage-of-total shares with an "Others" rollup,
//! filter-and-paginate, and growth-distribution statistics. The engine owns
//! no I/O and no state; each invocation takes its own input slice and
//! allocates its own output, so concurrent requests need no coordination.

pub mod paging;
pub mod share;
pub mod stats;

pub use paging::{filter_and_paginate, paginate, FilterSpec, Page, PageInfo};
pub use share::{percent_of, rank_by, share_with_others, ShareEntry, DEFAULT_TOP_LIMIT, OTHERS_LABEL};
pub use stats::{growth_distribution, GrowthClass, GrowthDistribution, GrowthMetrics};
