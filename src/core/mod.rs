//! Engine-free gameplay core: session state machine, spawner, collision
//! classifier and level policy. Nothing in here touches the scene graph;
//! the `gameplay` plugins translate between Bevy events and these types.

pub mod classify;
pub mod config;
pub mod levels;
pub mod session;
pub mod spawner;
