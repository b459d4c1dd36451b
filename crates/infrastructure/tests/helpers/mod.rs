#![allow(dead_code, unused_imports)]
mod builders;

pub use builders::{ResponseBuilder, DISCOVERY_SERVICE};
