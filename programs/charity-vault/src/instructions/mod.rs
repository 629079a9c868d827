pub mod approve;
pub mod campaign;
pub mod donate;
pub mod initialize;
pub mod propose;
pub mod record;
pub mod views;

pub use approve::*;
pub use campaign::*;
pub use donate::*;
pub use initialize::*;
pub use propose::*;
pub use record::*;
pub use views::*;
