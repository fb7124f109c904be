pub mod logging;
pub mod test_utils;

pub use logging::{init_test_tracing, init_tracing};
