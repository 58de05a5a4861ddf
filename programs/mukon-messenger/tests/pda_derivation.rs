//! PDA derivation determinism tests.
//!
//! Confirms each account type's documented seed set derives the same
//! address on repeated calls and a different address for a different
//! owner/pair — no on-chain state required.

use anchor_lang::prelude::Pubkey;
use mukon_messenger::constants::{
    ACCOUNT_VERSION, CONVERSATION_SEED, GROUP_INVITE_SEED, GROUP_KEY_SHARE_SEED, GROUP_SEED,
    USER_PROFILE_SEED, WALLET_DESCRIPTOR_SEED,
};
use mukon_messenger::util::chat_hash;
use mukon_messenger::ID;

#[test]
fn user_profile_pda_is_deterministic() {
    let owner = Pubkey::new_unique();
    let seeds = &[USER_PROFILE_SEED, owner.as_ref(), ACCOUNT_VERSION.as_ref()];
    let (a, bump_a) = Pubkey::find_program_address(seeds, &ID);
    let (b, bump_b) = Pubkey::find_program_address(seeds, &ID);
    assert_eq!(a, b);
    assert_eq!(bump_a, bump_b);
}

#[test]
fn user_profile_pda_differs_per_owner() {
    let a = Pubkey::new_unique();
    let b = Pubkey::new_unique();
    let (pda_a, _) =
        Pubkey::find_program_address(&[USER_PROFILE_SEED, a.as_ref(), ACCOUNT_VERSION.as_ref()], &ID);
    let (pda_b, _) =
        Pubkey::find_program_address(&[USER_PROFILE_SEED, b.as_ref(), ACCOUNT_VERSION.as_ref()], &ID);
    assert_ne!(pda_a, pda_b);
}

#[test]
fn wallet_descriptor_pda_is_deterministic() {
    let owner = Pubkey::new_unique();
    let seeds = &[WALLET_DESCRIPTOR_SEED, owner.as_ref(), ACCOUNT_VERSION.as_ref()];
    let (a, _) = Pubkey::find_program_address(seeds, &ID);
    let (b, _) = Pubkey::find_program_address(seeds, &ID);
    assert_eq!(a, b);
}

#[test]
fn conversation_pda_is_symmetric_via_chat_hash() {
    // The Conversation PDA is keyed on chat_hash(a, b), which is already
    // symmetric; both parties must derive the same seed and thus the same
    // account.
    let a = Pubkey::new_unique();
    let b = Pubkey::new_unique();
    let hash_ab = chat_hash(&a, &b);
    let hash_ba = chat_hash(&b, &a);
    assert_eq!(hash_ab, hash_ba);

    let (pda_ab, _) =
        Pubkey::find_program_address(&[CONVERSATION_SEED, hash_ab.as_ref(), ACCOUNT_VERSION.as_ref()], &ID);
    let (pda_ba, _) =
        Pubkey::find_program_address(&[CONVERSATION_SEED, hash_ba.as_ref(), ACCOUNT_VERSION.as_ref()], &ID);
    assert_eq!(pda_ab, pda_ba);
}

#[test]
fn conversation_pda_differs_per_pair() {
    let a = Pubkey::new_unique();
    let b = Pubkey::new_unique();
    let c = Pubkey::new_unique();
    let hash_ab = chat_hash(&a, &b);
    let hash_ac = chat_hash(&a, &c);
    assert_ne!(hash_ab, hash_ac);

    let (pda_ab, _) =
        Pubkey::find_program_address(&[CONVERSATION_SEED, hash_ab.as_ref(), ACCOUNT_VERSION.as_ref()], &ID);
    let (pda_ac, _) =
        Pubkey::find_program_address(&[CONVERSATION_SEED, hash_ac.as_ref(), ACCOUNT_VERSION.as_ref()], &ID);
    assert_ne!(pda_ab, pda_ac);
}

#[test]
fn group_pda_is_deterministic() {
    let group_id = [7u8; 32];
    let seeds = &[GROUP_SEED, group_id.as_ref(), ACCOUNT_VERSION.as_ref()];
    let (a, _) = Pubkey::find_program_address(seeds, &ID);
    let (b, _) = Pubkey::find_program_address(seeds, &ID);
    assert_eq!(a, b);
}

#[test]
fn group_invite_pda_differs_per_invitee() {
    let group_id = [3u8; 32];
    let invitee_a = Pubkey::new_unique();
    let invitee_b = Pubkey::new_unique();
    let (pda_a, _) = Pubkey::find_program_address(
        &[GROUP_INVITE_SEED, group_id.as_ref(), invitee_a.as_ref(), ACCOUNT_VERSION.as_ref()],
        &ID,
    );
    let (pda_b, _) = Pubkey::find_program_address(
        &[GROUP_INVITE_SEED, group_id.as_ref(), invitee_b.as_ref(), ACCOUNT_VERSION.as_ref()],
        &ID,
    );
    assert_ne!(pda_a, pda_b);
}

#[test]
fn group_key_share_pda_differs_per_recipient() {
    let group_id = [9u8; 32];
    let recipient_a = Pubkey::new_unique();
    let recipient_b = Pubkey::new_unique();
    let (pda_a, _) = Pubkey::find_program_address(
        &[GROUP_KEY_SHARE_SEED, group_id.as_ref(), recipient_a.as_ref(), ACCOUNT_VERSION.as_ref()],
        &ID,
    );
    let (pda_b, _) = Pubkey::find_program_address(
        &[GROUP_KEY_SHARE_SEED, group_id.as_ref(), recipient_b.as_ref(), ACCOUNT_VERSION.as_ref()],
        &ID,
    );
    assert_ne!(pda_a, pda_b);
}
