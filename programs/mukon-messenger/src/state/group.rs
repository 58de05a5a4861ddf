use crate::constants::{MAX_GROUP_MEMBERS, MAX_GROUP_NAME_LEN};
use crate::errors::MessengerError;
use anchor_lang::prelude::*;

/// An optional token-holding admission gate on a group.
#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct TokenGate {
    pub mint: Pubkey,
    pub min_balance: u64,
}

impl TokenGate {
    pub const SPACE: usize = 32 + 8;
}

#[account]
pub struct Group {
    pub group_id: [u8; 32],
    pub admin: Pubkey,
    pub name: String,
    /// The admin's encryption public key, supplied at creation so the
    /// first member can receive a `StoreGroupKey` share without a
    /// separate lookup. Opaque to the program.
    pub admin_enc_pub: [u8; 32],
    pub created_at: i64,
    /// Insertion order; `members[0]` is always the creator while the
    /// group is open.
    pub members: Vec<Pubkey>,
    pub token_gate: Option<TokenGate>,
}

impl Group {
    pub const BASE_SPACE: usize = 8 // discriminator
        + 32 // group_id
        + 32 // admin
        + (4 + MAX_GROUP_NAME_LEN) // name
        + 32 // admin_enc_pub
        + 8 // created_at
        + 4 // members vec length prefix
        + (1 + TokenGate::SPACE); // token_gate (Option)

    pub fn space_for(member_count: usize) -> usize {
        Self::BASE_SPACE + member_count * 32
    }

    pub const MAX_SPACE: usize = Self::BASE_SPACE + MAX_GROUP_MEMBERS * 32;

    pub fn is_admin(&self, wallet: &Pubkey) -> bool {
        self.admin == *wallet
    }

    pub fn is_member(&self, wallet: &Pubkey) -> bool {
        self.members.contains(wallet)
    }

    /// Adds a member, enforcing uniqueness (no duplicates) and the
    /// configured member-count cap.
    pub fn add_member(&mut self, member: Pubkey) -> Result<()> {
        require!(!self.is_member(&member), MessengerError::AlreadyMember);
        require!(
            self.members.len() < MAX_GROUP_MEMBERS,
            MessengerError::MemberLimitExceeded
        );
        self.members.push(member);
        Ok(())
    }

    /// Removes a member. The creator/admin is never removable through
    /// this path; callers enforce `LeaveGroup`/`KickMember` policy before
    /// calling it.
    pub fn remove_member(&mut self, member: &Pubkey) {
        self.members.retain(|m| m != member);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(admin: Pubkey) -> Group {
        Group {
            group_id: [0u8; 32],
            admin,
            name: "test".to_string(),
            admin_enc_pub: [0u8; 32],
            created_at: 0,
            members: vec![admin],
            token_gate: None,
        }
    }

    #[test]
    fn add_member_rejects_duplicate() {
        let admin = Pubkey::new_unique();
        let mut g = group(admin);
        let bob = Pubkey::new_unique();

        g.add_member(bob).unwrap();
        assert!(g.add_member(bob).is_err());
        assert_eq!(g.members.iter().filter(|m| **m == bob).count(), 1);
    }

    #[test]
    fn add_member_enforces_cap() {
        let admin = Pubkey::new_unique();
        let mut g = group(admin);
        for _ in 1..MAX_GROUP_MEMBERS {
            g.add_member(Pubkey::new_unique()).unwrap();
        }
        assert_eq!(g.members.len(), MAX_GROUP_MEMBERS);
        assert!(g.add_member(Pubkey::new_unique()).is_err());
    }

    #[test]
    fn remove_member_keeps_admin_when_not_targeted() {
        let admin = Pubkey::new_unique();
        let mut g = group(admin);
        let bob = Pubkey::new_unique();
        g.add_member(bob).unwrap();

        g.remove_member(&bob);

        assert!(g.is_member(&admin));
        assert!(!g.is_member(&bob));
    }

    #[test]
    fn creator_present_until_removed() {
        let admin = Pubkey::new_unique();
        let g = group(admin);
        assert!(g.is_member(&admin));
        assert!(g.is_admin(&admin));
    }
}
