//! Seeds, version bytes and size limits for the messenger program.

// =============================================================================
// PDA SEEDS
// =============================================================================

pub const USER_PROFILE_SEED: &[u8] = b"user_profile";
pub const WALLET_DESCRIPTOR_SEED: &[u8] = b"wallet_descriptor";
pub const CONVERSATION_SEED: &[u8] = b"conversation";
pub const GROUP_SEED: &[u8] = b"group";
pub const GROUP_INVITE_SEED: &[u8] = b"group_invite";
pub const GROUP_KEY_SHARE_SEED: &[u8] = b"group_key_share";

/// Trailing seed byte on every PDA, reserved for a future v2 account layout.
pub const ACCOUNT_VERSION: [u8; 1] = [1];

// =============================================================================
// SIZE LIMITS
// =============================================================================

pub const MAX_DISPLAY_NAME_LEN: usize = 64;
pub const MAX_AVATAR_LEN: usize = 256;
pub const MAX_GROUP_NAME_LEN: usize = 64;
pub const MAX_ENCRYPTED_KEY_LEN: usize = 256;
pub const GROUP_KEY_NONCE_LEN: usize = 24;

/// Hard cap on `WalletDescriptor.peers`. Keeps worst-case realloc and the
/// linear peer search well inside the per-transaction compute budget.
pub const MAX_PEERS: usize = 200;

/// Hard cap on `Group.members`, chosen so a single `AcceptGroupInvite`/
/// `KickMember` realloc always fits one transaction.
pub const MAX_GROUP_MEMBERS: usize = 100;
