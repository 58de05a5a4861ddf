use crate::constants::{ACCOUNT_VERSION, GROUP_INVITE_SEED, GROUP_SEED, MAX_GROUP_NAME_LEN};
use crate::errors::MessengerError;
use crate::events::{
    GroupClosed, GroupCreated, GroupInviteCreated, GroupInviteResolved, GroupUpdated,
    MembershipChanged, MembershipEventKind,
};
use crate::state::{Group, GroupInvite, GroupInviteStatus, TokenGate};
use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

#[derive(Accounts)]
#[instruction(group_id: [u8; 32], name: String)]
pub struct CreateGroup<'info> {
    #[account(
        init,
        payer = payer,
        space = Group::space_for(1),
        seeds = [GROUP_SEED, group_id.as_ref(), ACCOUNT_VERSION.as_ref()],
        bump
    )]
    pub group: Account<'info, Group>,
    #[account(mut)]
    pub payer: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn create_group(
    ctx: Context<CreateGroup>,
    group_id: [u8; 32],
    name: String,
    admin_enc_pub: [u8; 32],
    token_gate: Option<TokenGate>,
) -> Result<()> {
    require!(name.len() <= MAX_GROUP_NAME_LEN, MessengerError::InputTooLong);

    let group = &mut ctx.accounts.group;
    group.group_id = group_id;
    group.admin = ctx.accounts.payer.key();
    group.name = name;
    group.admin_enc_pub = admin_enc_pub;
    group.created_at = Clock::get()?.unix_timestamp;
    group.members = vec![ctx.accounts.payer.key()];
    group.token_gate = token_gate;

    msg!("Group created: id={:?}, creator={:?}", group_id, group.admin);
    emit!(GroupCreated {
        group_id,
        creator: group.admin,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateGroup<'info> {
    #[account(
        mut,
        seeds = [GROUP_SEED, group.group_id.as_ref(), ACCOUNT_VERSION.as_ref()],
        bump,
        constraint = group.is_admin(&payer.key()) @ MessengerError::NotAdmin,
    )]
    pub group: Account<'info, Group>,
    pub payer: Signer<'info>,
}

pub fn update_group(
    ctx: Context<UpdateGroup>,
    name: Option<String>,
    token_gate: Option<TokenGate>,
) -> Result<()> {
    let group = &mut ctx.accounts.group;

    if let Some(new_name) = name {
        require!(new_name.len() <= MAX_GROUP_NAME_LEN, MessengerError::InputTooLong);
        group.name = new_name;
    }
    if let Some(new_gate) = token_gate {
        group.token_gate = Some(new_gate);
    }

    msg!("Group updated: id={:?}", group.group_id);
    emit!(GroupUpdated {
        group_id: group.group_id,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InviteToGroup<'info> {
    #[account(
        seeds = [GROUP_SEED, group.group_id.as_ref(), ACCOUNT_VERSION.as_ref()],
        bump,
        constraint = group.is_member(&payer.key()) @ MessengerError::NotMember,
    )]
    pub group: Account<'info, Group>,

    #[account(
        init_if_needed,
        payer = payer,
        space = GroupInvite::SPACE,
        seeds = [GROUP_INVITE_SEED, group.group_id.as_ref(), invitee.key().as_ref(), ACCOUNT_VERSION.as_ref()],
        bump
    )]
    pub group_invite: Account<'info, GroupInvite>,

    /// CHECK: the invitee is identified by public key only; no data is read.
    pub invitee: AccountInfo<'info>,
    #[account(mut)]
    pub payer: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn invite_to_group(ctx: Context<InviteToGroup>) -> Result<()> {
    let group = &ctx.accounts.group;
    let invitee = ctx.accounts.invitee.key();

    require!(!group.is_member(&invitee), MessengerError::AlreadyMember);

    let invite = &mut ctx.accounts.group_invite;
    require!(
        invite.status != GroupInviteStatus::Pending && invite.status != GroupInviteStatus::Accepted,
        MessengerError::AlreadyInvited
    );

    invite.group_id = group.group_id;
    invite.inviter = ctx.accounts.payer.key();
    invite.invitee = invitee;
    invite.status = GroupInviteStatus::Pending;
    invite.created_at = Clock::get()?.unix_timestamp;

    msg!("Group invite: group={:?}, invitee={:?}", group.group_id, invitee);
    emit!(GroupInviteCreated {
        group_id: group.group_id,
        inviter: invite.inviter,
        invitee,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AcceptGroupInvite<'info> {
    #[account(
        mut,
        seeds = [GROUP_SEED, group.group_id.as_ref(), ACCOUNT_VERSION.as_ref()],
        bump,
        realloc = Group::space_for(group.members.len() + 1),
        realloc::payer = payer,
        realloc::zero = false,
    )]
    pub group: Account<'info, Group>,

    #[account(
        mut,
        seeds = [GROUP_INVITE_SEED, group.group_id.as_ref(), payer.key().as_ref(), ACCOUNT_VERSION.as_ref()],
        bump
    )]
    pub group_invite: Account<'info, GroupInvite>,

    /// Required only when the group has a token gate; see the
    /// `token_gate` check in the handler.
    pub user_token_account: Option<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub payer: Signer<'info>,
    pub system_program: Program<'info, System>,
    pub token_program: Option<Program<'info, Token>>,
}

pub fn accept_group_invite(ctx: Context<AcceptGroupInvite>) -> Result<()> {
    let invite = &mut ctx.accounts.group_invite;

    require!(
        invite.status == GroupInviteStatus::Pending,
        MessengerError::InviteNotPending
    );
    require!(
        invite.invitee == ctx.accounts.payer.key(),
        MessengerError::InviteNotFound
    );

    let group = &mut ctx.accounts.group;

    if let Some(gate) = &group.token_gate {
        let token_account = ctx
            .accounts
            .user_token_account
            .as_ref()
            .ok_or(MessengerError::TokenAccountRequired)?;

        require_keys_eq!(
            *token_account.to_account_info().owner,
            Token::id(),
            MessengerError::TokenGateWrongOwnerProgram
        );
        require_keys_eq!(
            token_account.owner,
            ctx.accounts.payer.key(),
            MessengerError::TokenGateWrongAccountOwner
        );
        require_keys_eq!(token_account.mint, gate.mint, MessengerError::TokenGateWrongMint);
        require!(
            token_account.amount >= gate.min_balance,
            MessengerError::TokenGateInsufficientBalance
        );
    }

    group.add_member(ctx.accounts.payer.key())?;
    invite.status = GroupInviteStatus::Accepted;

    msg!("Group invite accepted: group={:?}, member={:?}", group.group_id, ctx.accounts.payer.key());
    emit!(MembershipChanged {
        group_id: group.group_id,
        member: ctx.accounts.payer.key(),
        event: MembershipEventKind::Joined,
    });
    emit!(GroupInviteResolved {
        group_id: group.group_id,
        invitee: ctx.accounts.payer.key(),
        accepted: true,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RejectGroupInvite<'info> {
    #[account(
        mut,
        seeds = [GROUP_INVITE_SEED, group_invite.group_id.as_ref(), payer.key().as_ref(), ACCOUNT_VERSION.as_ref()],
        bump
    )]
    pub group_invite: Account<'info, GroupInvite>,
    pub payer: Signer<'info>,
}

pub fn reject_group_invite(ctx: Context<RejectGroupInvite>) -> Result<()> {
    let invite = &mut ctx.accounts.group_invite;

    require!(
        invite.status == GroupInviteStatus::Pending,
        MessengerError::InviteNotPending
    );
    require!(
        invite.invitee == ctx.accounts.payer.key(),
        MessengerError::InviteNotFound
    );

    invite.status = GroupInviteStatus::Rejected;

    msg!("Group invite rejected: group={:?}, invitee={:?}", invite.group_id, ctx.accounts.payer.key());
    emit!(GroupInviteResolved {
        group_id: invite.group_id,
        invitee: ctx.accounts.payer.key(),
        accepted: false,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct LeaveGroup<'info> {
    #[account(
        mut,
        seeds = [GROUP_SEED, group.group_id.as_ref(), ACCOUNT_VERSION.as_ref()],
        bump,
        realloc = Group::space_for(group.members.len().saturating_sub(1)),
        realloc::payer = payer,
        realloc::zero = false,
    )]
    pub group: Account<'info, Group>,
    #[account(mut)]
    pub payer: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn leave_group(ctx: Context<LeaveGroup>) -> Result<()> {
    let group = &mut ctx.accounts.group;
    let me = ctx.accounts.payer.key();

    require!(!group.is_admin(&me), MessengerError::CreatorCannotLeave);
    require!(group.is_member(&me), MessengerError::NotMember);

    group.remove_member(&me);

    msg!("Left group: group={:?}, member={:?}", group.group_id, me);
    emit!(MembershipChanged {
        group_id: group.group_id,
        member: me,
        event: MembershipEventKind::Left,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct KickMember<'info> {
    #[account(
        mut,
        seeds = [GROUP_SEED, group.group_id.as_ref(), ACCOUNT_VERSION.as_ref()],
        bump,
        constraint = group.is_admin(&payer.key()) @ MessengerError::NotAdmin,
        realloc = Group::space_for(group.members.len().saturating_sub(1)),
        realloc::payer = payer,
        realloc::zero = false,
    )]
    pub group: Account<'info, Group>,
    /// CHECK: the member to kick is identified by public key only.
    pub member: AccountInfo<'info>,
    #[account(mut)]
    pub payer: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn kick_member(ctx: Context<KickMember>) -> Result<()> {
    let group = &mut ctx.accounts.group;
    let member = ctx.accounts.member.key();

    require!(member != group.admin, MessengerError::CreatorCannotLeave);
    require!(group.is_member(&member), MessengerError::NotMember);

    group.remove_member(&member);

    msg!("Kicked from group: group={:?}, member={:?}", group.group_id, member);
    emit!(MembershipChanged {
        group_id: group.group_id,
        member,
        event: MembershipEventKind::Kicked,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CloseGroup<'info> {
    #[account(
        mut,
        close = payer,
        seeds = [GROUP_SEED, group.group_id.as_ref(), ACCOUNT_VERSION.as_ref()],
        bump,
        constraint = group.is_admin(&payer.key()) @ MessengerError::NotAdmin,
    )]
    pub group: Account<'info, Group>,
    #[account(mut)]
    pub payer: Signer<'info>,
}

pub fn close_group(ctx: Context<CloseGroup>) -> Result<()> {
    msg!("Group closed: group={:?}", ctx.accounts.group.group_id);
    emit!(GroupClosed {
        group_id: ctx.accounts.group.group_id,
    });
    Ok(())
}
