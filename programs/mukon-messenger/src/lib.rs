use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod util;

use instructions::*;
use state::{AvatarKind, TokenGate};

declare_id!("GCTzU7Y6yaBNzW6WA1EJR6fnY9vLNZEEPcgsydCD8mpj");

#[program]
pub mod mukon_messenger {
    use super::*;

    // ============================================================
    // IDENTITY REGISTRY
    // ============================================================

    pub fn register(
        ctx: Context<Register>,
        display_name: String,
        avatar_payload: String,
        encryption_public_key: [u8; 32],
    ) -> Result<()> {
        instructions::register(ctx, display_name, avatar_payload, encryption_public_key)
    }

    pub fn update_profile(
        ctx: Context<UpdateProfile>,
        display_name: Option<String>,
        avatar_kind: Option<AvatarKind>,
        avatar_payload: Option<String>,
        encryption_public_key: Option<[u8; 32]>,
    ) -> Result<()> {
        instructions::update_profile(
            ctx,
            display_name,
            avatar_kind,
            avatar_payload,
            encryption_public_key,
        )
    }

    pub fn close_profile(ctx: Context<CloseProfile>) -> Result<()> {
        instructions::close_profile(ctx)
    }

    // ============================================================
    // PEER GRAPH
    // ============================================================

    pub fn invite(ctx: Context<Invite>, chat_hash: [u8; 32]) -> Result<()> {
        instructions::invite(ctx, chat_hash)
    }

    pub fn accept(ctx: Context<Accept>) -> Result<()> {
        instructions::accept(ctx)
    }

    pub fn reject(ctx: Context<Reject>) -> Result<()> {
        instructions::reject(ctx)
    }

    pub fn block(ctx: Context<Block>) -> Result<()> {
        instructions::block(ctx)
    }

    pub fn unblock(ctx: Context<Unblock>) -> Result<()> {
        instructions::unblock(ctx)
    }

    // ============================================================
    // GROUP REGISTRY
    // ============================================================

    pub fn create_group(
        ctx: Context<CreateGroup>,
        group_id: [u8; 32],
        name: String,
        admin_enc_pub: [u8; 32],
        token_gate: Option<TokenGate>,
    ) -> Result<()> {
        instructions::create_group(ctx, group_id, name, admin_enc_pub, token_gate)
    }

    pub fn update_group(
        ctx: Context<UpdateGroup>,
        name: Option<String>,
        token_gate: Option<TokenGate>,
    ) -> Result<()> {
        instructions::update_group(ctx, name, token_gate)
    }

    pub fn invite_to_group(ctx: Context<InviteToGroup>) -> Result<()> {
        instructions::invite_to_group(ctx)
    }

    pub fn accept_group_invite(ctx: Context<AcceptGroupInvite>) -> Result<()> {
        instructions::accept_group_invite(ctx)
    }

    pub fn reject_group_invite(ctx: Context<RejectGroupInvite>) -> Result<()> {
        instructions::reject_group_invite(ctx)
    }

    pub fn leave_group(ctx: Context<LeaveGroup>) -> Result<()> {
        instructions::leave_group(ctx)
    }

    pub fn kick_member(ctx: Context<KickMember>) -> Result<()> {
        instructions::kick_member(ctx)
    }

    pub fn close_group(ctx: Context<CloseGroup>) -> Result<()> {
        instructions::close_group(ctx)
    }

    // ============================================================
    // GROUP-KEY VAULT
    // ============================================================

    pub fn store_group_key(
        ctx: Context<StoreGroupKey>,
        group_id: [u8; 32],
        encrypted_key: Vec<u8>,
        nonce: Vec<u8>,
    ) -> Result<()> {
        instructions::store_group_key(ctx, group_id, encrypted_key, nonce)
    }

    pub fn close_group_key(ctx: Context<CloseGroupKey>) -> Result<()> {
        instructions::close_group_key(ctx)
    }
}
