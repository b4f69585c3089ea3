pub mod service;

pub use service::{FilterError, SalesFilter};
