pub mod entities;
pub mod raw_profile;

pub use entities::*;
pub use raw_profile::RawProfile;
