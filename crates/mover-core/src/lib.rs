pub mod config;
pub mod host;
pub mod id;
pub mod model;
pub mod place;
pub mod scene;
pub mod snapshot;

pub use config::MoverConfig;
pub use host::Host;
pub use id::ElementId;
pub use model::*;
pub use place::{clamp_to_bounds, edge_target};
pub use scene::Scene;
pub use snapshot::{ElementSnapshot, SceneSnapshot};
