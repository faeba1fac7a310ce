//! Organisational hierarchy formatting.
//!
//! This module turns stored unit codes into the labels used by dashboards
//! (bare codes) and by forms (`"(code) Long Name"`), and resolves an
//! employee's organisational-unit label through an ordered resolver chain.

mod labels;
mod resolver;

pub use labels::HierarchyFormatter;
pub use resolver::{
    DirectCodeResolver, LabelResolver, LegacyTableResolver, RawOrganizationResolver,
    ResolverChain,
};
