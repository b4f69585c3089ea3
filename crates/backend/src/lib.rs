//! Sales analysis backend: dataset generation (u501) and the d400 dashboard API.

pub mod api;
pub mod dashboards;
pub mod domain;
pub mod routes;
pub mod shared;
pub mod system;
pub mod usecases;
