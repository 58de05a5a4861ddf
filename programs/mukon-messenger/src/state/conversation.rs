use anchor_lang::prelude::*;

/// A bilateral channel marker. Its existence (not its contents) witnesses
/// that two wallets have or had a channel; it is never updated after
/// creation and survives reject/block.
#[account]
pub struct Conversation {
    pub participants: [Pubkey; 2],
    pub created_at: i64,
}

impl Conversation {
    pub const SPACE: usize = 8 // discriminator
        + 32 * 2 // participants
        + 8; // created_at
}
