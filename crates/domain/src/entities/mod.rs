//! Domain entities

mod activity;

pub use activity::{Activity, ActivityCatalog};
