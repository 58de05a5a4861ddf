use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq)]
pub enum GroupInviteStatus {
    Pending = 0,
    Accepted = 1,
    Rejected = 2,
}

/// One per (group, invitee). Persists after resolution as a record;
/// rent is borne by the inviter.
#[account]
pub struct GroupInvite {
    pub group_id: [u8; 32],
    pub inviter: Pubkey,
    pub invitee: Pubkey,
    pub status: GroupInviteStatus,
    pub created_at: i64,
}

impl GroupInvite {
    pub const SPACE: usize = 8 // discriminator
        + 32 // group_id
        + 32 // inviter
        + 32 // invitee
        + 1 // status
        + 8; // created_at
}
