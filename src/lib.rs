#[macro_use]
pub mod macros;

pub mod camera;
pub mod framebuf;
pub mod geom;
pub mod shape;
pub mod types;
pub mod util;

pub use self::camera::*;
pub use self::framebuf::*;
pub use self::geom::*;
pub use self::shape::*;
pub use self::types::*;
pub use self::util::*;
