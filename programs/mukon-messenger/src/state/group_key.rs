use crate::constants::{GROUP_KEY_NONCE_LEN, MAX_ENCRYPTED_KEY_LEN};
use anchor_lang::prelude::*;

/// Per-(group, recipient) opaque encrypted backup of a group's symmetric
/// key. The program never generates or interprets the key material; it
/// only persists it, writable and rent-paid by the recipient.
#[account]
pub struct GroupKeyShare {
    pub group_id: [u8; 32],
    pub recipient: Pubkey,
    pub encrypted_key: Vec<u8>,
    pub nonce: Vec<u8>,
    pub created_at: i64,
}

impl GroupKeyShare {
    pub const MAX_SPACE: usize = 8 // discriminator
        + 32 // group_id
        + 32 // recipient
        + (4 + MAX_ENCRYPTED_KEY_LEN) // encrypted_key
        + (4 + GROUP_KEY_NONCE_LEN) // nonce
        + 8; // created_at
}
