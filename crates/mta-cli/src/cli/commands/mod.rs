//! CLI command handlers. Each command is in its own file.

mod check;
mod combine;
mod describe;
mod normalize;
mod tags;

pub use check::run_check;
pub use combine::run_combine;
pub use describe::run_describe;
pub use normalize::run_normalize;
pub use tags::run_tags;
