pub mod frames;
pub mod geodetic;
pub mod grid;
pub mod helmert;
pub mod projection;
pub mod types;
pub mod vertical;

pub use frames::*;
pub use geodetic::*;
pub use grid::*;
pub use helmert::*;
pub use projection::*;
pub use types::*;
pub use vertical::*;
