//! Shared types between the dataset generator, the dashboard backend and any
//! page that renders the dashboard.

pub mod dashboards;
pub mod domain;
pub mod enums;
