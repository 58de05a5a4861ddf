use anchor_lang::prelude::*;
use sha2::{Digest, Sha256};

/// Deterministic chat hash for the `Conversation` PDA: SHA-256 of the
/// sorted pair of wallets, so both directions agree on one canonical seed.
pub fn chat_hash(a: &Pubkey, b: &Pubkey) -> [u8; 32] {
    let (lo, hi) = if a.to_bytes() <= b.to_bytes() {
        (a, b)
    } else {
        (b, a)
    };

    let mut preimage = [0u8; 64];
    preimage[..32].copy_from_slice(&lo.to_bytes());
    preimage[32..].copy_from_slice(&hi.to_bytes());

    let mut hasher = Sha256::new();
    hasher.update(preimage);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_hash_is_symmetric() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        assert_eq!(chat_hash(&a, &b), chat_hash(&b, &a));
    }

    #[test]
    fn chat_hash_is_deterministic() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        assert_eq!(chat_hash(&a, &b), chat_hash(&a, &b));
    }

    #[test]
    fn chat_hash_differs_for_different_pairs() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let c = Pubkey::new_unique();
        assert_ne!(chat_hash(&a, &b), chat_hash(&a, &c));
    }
}
