pub mod group;
pub mod group_key;
pub mod identity;
pub mod peer;

pub use group::*;
pub use group_key::*;
pub use identity::*;
pub use peer::*;
