//! Parameter domain models.
mod mode;
mod name;

pub use mode::{Mode, UnknownModeValue};
pub use name::ParamName;
