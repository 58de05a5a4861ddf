use anchor_lang::prelude::*;

#[error_code]
pub enum MessengerError {
    // =========================================================================
    // IDENTITY ERRORS
    // =========================================================================
    #[msg("A profile already exists for this wallet")]
    AlreadyRegistered,

    #[msg("No profile exists for this wallet")]
    NotRegistered,

    // =========================================================================
    // PEER GRAPH ERRORS
    // =========================================================================
    #[msg("A peer relationship already exists for this wallet")]
    AlreadyInvited,

    #[msg("No matching invite exists for this wallet")]
    NotInvited,

    #[msg("The peer entry is not in the expected state for this transition")]
    InvalidStateTransition,

    #[msg("The other wallet has blocked you")]
    BlockedByPeer,

    #[msg("Supplied chat hash does not match the derived conversation hash")]
    InvalidHash,

    // =========================================================================
    // GROUP ERRORS
    // =========================================================================
    #[msg("Caller is not a member of this group")]
    NotMember,

    #[msg("Caller is not the group admin")]
    NotAdmin,

    #[msg("Wallet is already a member of this group")]
    AlreadyMember,

    #[msg("Group has reached its member limit")]
    MemberLimitExceeded,

    #[msg("The creator cannot leave the group, only close it")]
    CreatorCannotLeave,

    #[msg("No pending invite found")]
    InviteNotFound,

    #[msg("Invite is not in Pending status")]
    InviteNotPending,

    // =========================================================================
    // TOKEN GATE ERRORS
    // =========================================================================
    #[msg("Token account is not owned by the canonical token program")]
    TokenGateWrongOwnerProgram,

    #[msg("Token account mint does not match the group's gate")]
    TokenGateWrongMint,

    #[msg("Token account balance is below the group's minimum")]
    TokenGateInsufficientBalance,

    #[msg("A token account is required to accept this group invite")]
    TokenAccountRequired,

    #[msg("Token account owner does not match the signer")]
    TokenGateWrongAccountOwner,

    // =========================================================================
    // AUTHORITY / ACCOUNT ERRORS
    // =========================================================================
    #[msg("Account owner does not match the expected program")]
    AccountOwnerMismatch,

    #[msg("A required signer is missing")]
    MissingSigner,

    #[msg("An unexpected account was supplied")]
    UnexpectedAccount,

    // =========================================================================
    // INPUT VALIDATION ERRORS
    // =========================================================================
    #[msg("Input exceeds the maximum allowed length")]
    InputTooLong,

    #[msg("Input bytes could not be parsed")]
    InputMalformed,
}
