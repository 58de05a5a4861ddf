use crate::constants::{
    ACCOUNT_VERSION, MAX_AVATAR_LEN, MAX_DISPLAY_NAME_LEN, USER_PROFILE_SEED,
    WALLET_DESCRIPTOR_SEED,
};
use crate::errors::MessengerError;
use crate::events::{ProfileClosed, ProfileRegistered, ProfileUpdated};
use crate::state::{AvatarKind, UserProfile, WalletDescriptor};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(display_name: String, avatar_payload: String, encryption_public_key: [u8; 32])]
pub struct Register<'info> {
    // `init_if_needed` so a re-registration attempt lands here instead of
    // failing with Anchor's generic "account already in use" error; the
    // handler below raises `AlreadyRegistered` explicitly once the account
    // is deserialized.
    #[account(
        init_if_needed,
        payer = payer,
        space = UserProfile::SPACE,
        seeds = [USER_PROFILE_SEED, payer.key().as_ref(), ACCOUNT_VERSION.as_ref()],
        bump
    )]
    pub user_profile: Account<'info, UserProfile>,

    // `init_if_needed`: a prior `invite` targeting this wallet may already
    // have lazily created the descriptor with pending peer entries; those
    // entries must survive registration.
    #[account(
        init_if_needed,
        payer = payer,
        space = WalletDescriptor::MAX_SPACE,
        seeds = [WALLET_DESCRIPTOR_SEED, payer.key().as_ref(), ACCOUNT_VERSION.as_ref()],
        bump
    )]
    pub wallet_descriptor: Account<'info, WalletDescriptor>,

    #[account(mut)]
    pub payer: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn register(
    ctx: Context<Register>,
    display_name: String,
    avatar_payload: String,
    encryption_public_key: [u8; 32],
) -> Result<()> {
    require!(
        display_name.len() <= MAX_DISPLAY_NAME_LEN,
        MessengerError::InputTooLong
    );
    require!(
        avatar_payload.len() <= MAX_AVATAR_LEN,
        MessengerError::InputTooLong
    );

    let descriptor = &mut ctx.accounts.wallet_descriptor;
    if descriptor.owner == Pubkey::default() {
        descriptor.owner = ctx.accounts.payer.key();
        descriptor.peers = vec![];
    }

    let profile = &mut ctx.accounts.user_profile;
    require!(
        profile.owner == Pubkey::default(),
        MessengerError::AlreadyRegistered
    );
    profile.owner = ctx.accounts.payer.key();
    profile.display_name = display_name.clone();
    profile.avatar_kind = AvatarKind::Emoji;
    profile.avatar_payload = avatar_payload;
    profile.encryption_public_key = encryption_public_key;

    msg!("Register: {:?} with display name: {}", profile.owner, display_name);
    emit!(ProfileRegistered {
        owner: profile.owner,
        display_name,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateProfile<'info> {
    #[account(
        mut,
        seeds = [USER_PROFILE_SEED, payer.key().as_ref(), ACCOUNT_VERSION.as_ref()],
        bump,
        constraint = user_profile.owner == payer.key() @ MessengerError::AccountOwnerMismatch,
    )]
    pub user_profile: Account<'info, UserProfile>,
    #[account(mut)]
    pub payer: Signer<'info>,
}

pub fn update_profile(
    ctx: Context<UpdateProfile>,
    display_name: Option<String>,
    avatar_kind: Option<AvatarKind>,
    avatar_payload: Option<String>,
    encryption_public_key: Option<[u8; 32]>,
) -> Result<()> {
    let profile = &mut ctx.accounts.user_profile;

    if let Some(name) = display_name {
        require!(name.len() <= MAX_DISPLAY_NAME_LEN, MessengerError::InputTooLong);
        profile.display_name = name;
    }
    if let Some(kind) = avatar_kind {
        profile.avatar_kind = kind;
    }
    if let Some(payload) = avatar_payload {
        require!(payload.len() <= MAX_AVATAR_LEN, MessengerError::InputTooLong);
        profile.avatar_payload = payload;
    }
    if let Some(key) = encryption_public_key {
        // Rotating the key does not invalidate existing peer relationships
        // or stored group keys; clients detect rotation out-of-band.
        profile.encryption_public_key = key;
    }

    msg!("Profile updated: {:?}", ctx.accounts.payer.key());
    emit!(ProfileUpdated {
        owner: ctx.accounts.payer.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CloseProfile<'info> {
    #[account(
        mut,
        close = payer,
        seeds = [USER_PROFILE_SEED, payer.key().as_ref(), ACCOUNT_VERSION.as_ref()],
        bump,
        constraint = user_profile.owner == payer.key() @ MessengerError::AccountOwnerMismatch,
    )]
    pub user_profile: Account<'info, UserProfile>,
    #[account(mut)]
    pub payer: Signer<'info>,
}

pub fn close_profile(ctx: Context<CloseProfile>) -> Result<()> {
    msg!("Profile closed: {:?}", ctx.accounts.payer.key());
    emit!(ProfileClosed {
        owner: ctx.accounts.payer.key(),
    });
    Ok(())
}
