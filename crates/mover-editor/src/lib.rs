pub mod coordinator;
pub mod input;
pub mod motion;
pub mod registry;
pub mod shortcuts;
pub mod spawner;

pub use coordinator::Coordinator;
pub use input::{InputEvent, Modifiers};
pub use spawner::Spawner;
