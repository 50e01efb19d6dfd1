pub mod compose;
pub mod scad;
pub mod solid;

pub use compose::{compose, Bar, Labels, SkylineModel, SkylineParams};
pub use scad::to_scad;
pub use solid::Solid;
