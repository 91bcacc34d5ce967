pub mod alignment;
pub mod container;
pub mod error;
pub mod io;
pub mod records;
pub mod stats;

pub use alignment::AlignmentSource;
pub use container::{BedContainer, Filter};
pub use error::BedError;
pub use records::*;
pub use stats::ContainerStats;

#[cfg(test)]
pub(crate) mod test_utils;
