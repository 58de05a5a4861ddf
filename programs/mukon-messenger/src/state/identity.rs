use crate::constants::{MAX_AVATAR_LEN, MAX_DISPLAY_NAME_LEN};
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq)]
pub enum AvatarKind {
    Emoji = 0,
    External = 1,
}

/// A wallet's public identity: display name, avatar, and long-lived
/// encryption public key used by peers to encrypt messages and group
/// key shares to this wallet.
#[account]
pub struct UserProfile {
    pub owner: Pubkey,
    pub display_name: String,
    pub avatar_kind: AvatarKind,
    pub avatar_payload: String,
    pub encryption_public_key: [u8; 32],
}

impl UserProfile {
    pub const SPACE: usize = 8 // discriminator
        + 32 // owner
        + (4 + MAX_DISPLAY_NAME_LEN) // display_name
        + 1 // avatar_kind
        + (4 + MAX_AVATAR_LEN) // avatar_payload
        + 32; // encryption_public_key
}
