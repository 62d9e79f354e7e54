pub mod tracing;

pub use self::tracing::{build_env_filter, init_observability, ObservabilityError};
