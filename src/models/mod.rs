pub mod caption;
pub mod render;
pub mod share;

pub use caption::*;
pub use render::*;
pub use share::*;
