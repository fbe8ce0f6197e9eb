pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConciergeError, ConfigError};
pub use id::new_correlation_id;
pub use types::{Coordinates, Origin};
