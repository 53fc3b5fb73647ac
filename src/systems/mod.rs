pub mod assets;
pub mod debug;
pub mod event_listeners;
pub mod input;
pub mod session;
pub mod spawn_system;
pub mod systems;

pub use assets::*;
pub use debug::*;
pub use event_listeners::*;
pub use input::*;
pub use session::*;
pub use spawn_system::*;
pub use systems::*;
