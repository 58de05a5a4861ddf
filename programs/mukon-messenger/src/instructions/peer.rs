use crate::constants::{ACCOUNT_VERSION, CONVERSATION_SEED, WALLET_DESCRIPTOR_SEED};
use crate::errors::MessengerError;
use crate::events::{PeerAccepted, PeerBlocked, PeerInvited, PeerRejected, PeerUnblocked};
use crate::state::peer::transitions;
use crate::state::{Conversation, WalletDescriptor};
use crate::util::chat_hash;
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(chat_hash_arg: [u8; 32])]
pub struct Invite<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    /// CHECK: the invitee is identified by public key only; no data is read.
    pub invitee: AccountInfo<'info>,

    #[account(
        mut,
        seeds = [WALLET_DESCRIPTOR_SEED, payer.key().as_ref(), ACCOUNT_VERSION.as_ref()],
        bump,
        realloc = WalletDescriptor::space_for(payer_descriptor.peers.len() + 1),
        realloc::payer = payer,
        realloc::zero = false,
    )]
    pub payer_descriptor: Account<'info, WalletDescriptor>,

    #[account(
        init_if_needed,
        payer = payer,
        space = WalletDescriptor::MAX_SPACE,
        seeds = [WALLET_DESCRIPTOR_SEED, invitee.key().as_ref(), ACCOUNT_VERSION.as_ref()],
        bump
    )]
    pub invitee_descriptor: Account<'info, WalletDescriptor>,

    #[account(
        init_if_needed,
        payer = payer,
        space = Conversation::SPACE,
        seeds = [CONVERSATION_SEED, chat_hash_arg.as_ref(), ACCOUNT_VERSION.as_ref()],
        bump
    )]
    pub conversation: Account<'info, Conversation>,

    pub system_program: Program<'info, System>,
}

pub fn invite(ctx: Context<Invite>, chat_hash_arg: [u8; 32]) -> Result<()> {
    let inviter = ctx.accounts.payer.key();
    let invitee = ctx.accounts.invitee.key();

    require!(
        chat_hash(&inviter, &invitee) == chat_hash_arg,
        MessengerError::InvalidHash
    );

    let invitee_descriptor = &mut ctx.accounts.invitee_descriptor;
    if invitee_descriptor.owner == Pubkey::default() {
        invitee_descriptor.owner = invitee;
        invitee_descriptor.peers = vec![];
    }

    transitions::invite(&mut ctx.accounts.payer_descriptor, &mut ctx.accounts.invitee_descriptor)?;

    // `init_if_needed` above is idempotent on the `Conversation` PDA: a
    // re-invite after reject reuses the existing conversation and must not
    // disturb its `created_at`.
    let conversation = &mut ctx.accounts.conversation;
    if conversation.participants == [Pubkey::default(); 2] {
        conversation.participants = if inviter.to_bytes() <= invitee.to_bytes() {
            [inviter, invitee]
        } else {
            [invitee, inviter]
        };
        conversation.created_at = Clock::get()?.unix_timestamp;
    }

    msg!("Invite: inviter={:?}, invitee={:?}, chat={:?}", inviter, invitee, chat_hash_arg);
    emit!(PeerInvited {
        inviter,
        invitee,
        chat_hash: chat_hash_arg,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Accept<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    /// CHECK: the peer is identified by public key only; no data is read.
    pub peer: AccountInfo<'info>,

    #[account(
        mut,
        seeds = [WALLET_DESCRIPTOR_SEED, payer.key().as_ref(), ACCOUNT_VERSION.as_ref()],
        bump
    )]
    pub payer_descriptor: Account<'info, WalletDescriptor>,

    #[account(
        mut,
        seeds = [WALLET_DESCRIPTOR_SEED, peer.key().as_ref(), ACCOUNT_VERSION.as_ref()],
        bump
    )]
    pub peer_descriptor: Account<'info, WalletDescriptor>,
}

pub fn accept(ctx: Context<Accept>) -> Result<()> {
    let me = ctx.accounts.payer.key();
    let peer = ctx.accounts.peer.key();

    transitions::accept(&mut ctx.accounts.payer_descriptor, &mut ctx.accounts.peer_descriptor)?;

    msg!("Accept: accepter={:?}, inviter={:?}", me, peer);
    emit!(PeerAccepted {
        accepter: me,
        inviter: peer,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Reject<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    /// CHECK: the peer is identified by public key only; no data is read.
    pub peer: AccountInfo<'info>,

    #[account(
        mut,
        seeds = [WALLET_DESCRIPTOR_SEED, payer.key().as_ref(), ACCOUNT_VERSION.as_ref()],
        bump
    )]
    pub payer_descriptor: Account<'info, WalletDescriptor>,

    #[account(
        mut,
        seeds = [WALLET_DESCRIPTOR_SEED, peer.key().as_ref(), ACCOUNT_VERSION.as_ref()],
        bump
    )]
    pub peer_descriptor: Account<'info, WalletDescriptor>,
}

pub fn reject(ctx: Context<Reject>) -> Result<()> {
    let me = ctx.accounts.payer.key();
    let peer = ctx.accounts.peer.key();

    transitions::reject(&mut ctx.accounts.payer_descriptor, &mut ctx.accounts.peer_descriptor)?;

    msg!("Reject: rejecter={:?}, other={:?}", me, peer);
    emit!(PeerRejected {
        rejecter: me,
        other: peer,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Block<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    /// CHECK: the peer is identified by public key only; no data is read.
    pub peer: AccountInfo<'info>,

    #[account(
        mut,
        seeds = [WALLET_DESCRIPTOR_SEED, payer.key().as_ref(), ACCOUNT_VERSION.as_ref()],
        bump
    )]
    pub payer_descriptor: Account<'info, WalletDescriptor>,

    #[account(
        mut,
        seeds = [WALLET_DESCRIPTOR_SEED, peer.key().as_ref(), ACCOUNT_VERSION.as_ref()],
        bump
    )]
    pub peer_descriptor: Account<'info, WalletDescriptor>,
}

pub fn block(ctx: Context<Block>) -> Result<()> {
    let me = ctx.accounts.payer.key();
    let peer = ctx.accounts.peer.key();

    transitions::block(&mut ctx.accounts.payer_descriptor, &mut ctx.accounts.peer_descriptor)?;

    msg!("Block: blocker={:?}, blocked={:?}", me, peer);
    emit!(PeerBlocked {
        blocker: me,
        blocked: peer,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Unblock<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    /// CHECK: the peer is identified by public key only; no data is read.
    pub peer: AccountInfo<'info>,

    #[account(
        mut,
        seeds = [WALLET_DESCRIPTOR_SEED, payer.key().as_ref(), ACCOUNT_VERSION.as_ref()],
        bump
    )]
    pub payer_descriptor: Account<'info, WalletDescriptor>,

    #[account(
        mut,
        seeds = [WALLET_DESCRIPTOR_SEED, peer.key().as_ref(), ACCOUNT_VERSION.as_ref()],
        bump
    )]
    pub peer_descriptor: Account<'info, WalletDescriptor>,
}

pub fn unblock(ctx: Context<Unblock>) -> Result<()> {
    let me = ctx.accounts.payer.key();
    let peer = ctx.accounts.peer.key();

    // Only the blocker's own entry transitions (Blocked -> Rejected); the
    // other side's entry already reads `Rejected` from the original
    // `block` call and is left unchanged.
    transitions::unblock(&mut ctx.accounts.payer_descriptor, peer)?;

    msg!("Unblock: unblocker={:?}, unblocked={:?}", me, peer);
    emit!(PeerUnblocked {
        unblocker: me,
        unblocked: peer,
    });

    Ok(())
}
