pub mod conversation;
pub mod group;
pub mod group_invite;
pub mod group_key;
pub mod identity;
pub mod peer;

pub use conversation::*;
pub use group::*;
pub use group_invite::*;
pub use group_key::*;
pub use identity::*;
pub use peer::*;
