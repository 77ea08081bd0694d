pub mod device;
pub mod fix;
pub mod track;

pub use device::*;
pub use fix::*;
pub use track::*;
