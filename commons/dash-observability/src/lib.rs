pub mod health;
pub mod tracing;

pub use self::health::*;
pub use self::tracing::*;
