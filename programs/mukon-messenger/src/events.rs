//! Typed log records emitted alongside every `msg!` line so external
//! indexers can reconstruct a user's view without scanning all program
//! accounts (spec §6.4).

use anchor_lang::prelude::*;

// =============================================================================
// IDENTITY EVENTS
// =============================================================================

#[event]
pub struct ProfileRegistered {
    pub owner: Pubkey,
    pub display_name: String,
}

#[event]
pub struct ProfileUpdated {
    pub owner: Pubkey,
}

#[event]
pub struct ProfileClosed {
    pub owner: Pubkey,
}

// =========================================================================
// PEER GRAPH EVENTS
// =========================================================================

#[event]
pub struct PeerInvited {
    pub inviter: Pubkey,
    pub invitee: Pubkey,
    pub chat_hash: [u8; 32],
}

#[event]
pub struct PeerAccepted {
    pub accepter: Pubkey,
    pub inviter: Pubkey,
}

#[event]
pub struct PeerRejected {
    pub rejecter: Pubkey,
    pub other: Pubkey,
}

#[event]
pub struct PeerBlocked {
    pub blocker: Pubkey,
    pub blocked: Pubkey,
}

#[event]
pub struct PeerUnblocked {
    pub unblocker: Pubkey,
    pub unblocked: Pubkey,
}

// =========================================================================
// GROUP MEMBERSHIP EVENTS
// =========================================================================

/// Kind of membership change carried by `MembershipChanged`, matching the
/// `{group_id, member, event: joined|left|kicked}` record in spec §4.4.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq)]
pub enum MembershipEventKind {
    Joined,
    Left,
    Kicked,
}

#[event]
pub struct GroupCreated {
    pub group_id: [u8; 32],
    pub creator: Pubkey,
}

#[event]
pub struct GroupUpdated {
    pub group_id: [u8; 32],
}

#[event]
pub struct GroupClosed {
    pub group_id: [u8; 32],
}

#[event]
pub struct MembershipChanged {
    pub group_id: [u8; 32],
    pub member: Pubkey,
    pub event: MembershipEventKind,
}

#[event]
pub struct GroupInviteCreated {
    pub group_id: [u8; 32],
    pub inviter: Pubkey,
    pub invitee: Pubkey,
}

#[event]
pub struct GroupInviteResolved {
    pub group_id: [u8; 32],
    pub invitee: Pubkey,
    pub accepted: bool,
}

// =========================================================================
// GROUP-KEY VAULT EVENTS
// =========================================================================

#[event]
pub struct GroupKeyStored {
    pub group_id: [u8; 32],
    pub member: Pubkey,
}

#[event]
pub struct GroupKeyClosed {
    pub group_id: [u8; 32],
    pub member: Pubkey,
}
