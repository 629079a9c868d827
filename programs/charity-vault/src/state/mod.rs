pub mod authority;
pub mod bucket;
pub mod donation;
pub mod error;
pub mod events;
pub mod proposal;
pub mod transfer;
pub mod vault;

pub use authority::*;
pub use bucket::*;
pub use donation::*;
pub use error::*;
pub use events::*;
pub use proposal::*;
pub use transfer::*;
pub use vault::*;
