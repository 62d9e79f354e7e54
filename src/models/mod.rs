// Re-export all model types
pub use self::errors::*;
pub use self::item::*;
pub use self::restaurant::*;
pub use self::validation::*;

mod errors;
mod item;
mod restaurant;
mod validation;
