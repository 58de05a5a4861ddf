use crate::constants::{
    ACCOUNT_VERSION, GROUP_KEY_NONCE_LEN, GROUP_KEY_SHARE_SEED, GROUP_SEED, MAX_ENCRYPTED_KEY_LEN,
};
use crate::errors::MessengerError;
use crate::events::{GroupKeyClosed, GroupKeyStored};
use crate::state::{Group, GroupKeyShare};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(group_id: [u8; 32])]
pub struct StoreGroupKey<'info> {
    #[account(
        init_if_needed,
        payer = payer,
        space = GroupKeyShare::MAX_SPACE,
        seeds = [GROUP_KEY_SHARE_SEED, group_id.as_ref(), payer.key().as_ref(), ACCOUNT_VERSION.as_ref()],
        bump
    )]
    pub group_key_share: Account<'info, GroupKeyShare>,

    #[account(
        seeds = [GROUP_SEED, group_id.as_ref(), ACCOUNT_VERSION.as_ref()],
        bump,
        constraint = group.is_member(&payer.key()) @ MessengerError::NotMember,
    )]
    pub group: Account<'info, Group>,

    #[account(mut)]
    pub payer: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn store_group_key(
    ctx: Context<StoreGroupKey>,
    group_id: [u8; 32],
    encrypted_key: Vec<u8>,
    nonce: Vec<u8>,
) -> Result<()> {
    require!(
        encrypted_key.len() <= MAX_ENCRYPTED_KEY_LEN,
        MessengerError::InputTooLong
    );
    require!(nonce.len() <= GROUP_KEY_NONCE_LEN, MessengerError::InputTooLong);

    let key_share = &mut ctx.accounts.group_key_share;
    key_share.group_id = group_id;
    key_share.recipient = ctx.accounts.payer.key();
    key_share.encrypted_key = encrypted_key;
    key_share.nonce = nonce;
    key_share.created_at = Clock::get()?.unix_timestamp;

    msg!("Group key stored for member: {:?}", ctx.accounts.payer.key());
    emit!(GroupKeyStored {
        group_id,
        member: ctx.accounts.payer.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CloseGroupKey<'info> {
    #[account(
        mut,
        close = payer,
        seeds = [GROUP_KEY_SHARE_SEED, group_key_share.group_id.as_ref(), payer.key().as_ref(), ACCOUNT_VERSION.as_ref()],
        bump,
        constraint = group_key_share.recipient == payer.key() @ MessengerError::AccountOwnerMismatch,
    )]
    pub group_key_share: Account<'info, GroupKeyShare>,
    #[account(mut)]
    pub payer: Signer<'info>,
}

pub fn close_group_key(ctx: Context<CloseGroupKey>) -> Result<()> {
    msg!(
        "Group key share closed for member: {:?}",
        ctx.accounts.payer.key()
    );
    emit!(GroupKeyClosed {
        group_id: ctx.accounts.group_key_share.group_id,
        member: ctx.accounts.payer.key(),
    });
    Ok(())
}
