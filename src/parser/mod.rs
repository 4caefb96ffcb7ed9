pub mod gpx;

pub use gpx::*;
