pub mod enums;
pub mod error;
pub mod records;

pub use enums::{Region, Status};
pub use error::{GuideError, Result};
pub use records::{COMMON_NAME, Place, RegionMapping, RegionStatus};
