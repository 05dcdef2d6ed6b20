pub mod app;
pub mod catalog;
pub mod constants;
pub mod export;
pub mod interaction;
pub mod label;
pub mod physics;
pub mod radius;
pub mod registry;
pub mod sim;
pub mod storage;
pub mod votes;

pub use app::*;
pub use catalog::*;
pub use export::*;
pub use interaction::*;
pub use label::*;
pub use physics::{Material, PhysicsWorld};
pub use radius::*;
pub use registry::*;
pub use sim::*;
pub use storage::*;
pub use votes::*;
