pub mod common;
pub mod node_v1_0;

pub use common::CommonHandler;
pub use node_v1_0::NodeV10Handler;
