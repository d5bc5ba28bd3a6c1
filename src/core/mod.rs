pub mod avatar;
pub mod constants;
pub mod contact;
pub mod plane;
pub mod pointer;
pub mod reveal;
pub mod shaders;
pub mod state;
pub mod tilt;
pub mod typed;
pub mod waves;

pub use avatar::*;
pub use constants::*;
pub use contact::*;
pub use pointer::*;
pub use reveal::*;
pub use shaders::*;
pub use state::*;
pub use tilt::*;
pub use typed::*;

