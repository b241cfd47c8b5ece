pub mod corpus;
pub mod dataset;

pub use self::corpus::*;
pub use self::dataset::*;
