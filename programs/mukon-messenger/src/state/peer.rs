use crate::constants::MAX_PEERS;
use crate::errors::MessengerError;
use anchor_lang::prelude::*;

/// The state a wallet's own descriptor records for one peer wallet.
/// See the pair-state transition table: a mutation always writes both
/// endpoints' entries in the same instruction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq)]
pub enum PeerState {
    Invited = 0,
    Requested = 1,
    Accepted = 2,
    Rejected = 3,
    Blocked = 4,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct Peer {
    pub wallet: Pubkey,
    pub state: PeerState,
}

impl Peer {
    pub const SPACE: usize = 32 + 1;
}

/// A wallet's own view of the peer graph: one entry per peer it has
/// ever invited, been invited by, accepted, rejected or blocked.
#[account]
pub struct WalletDescriptor {
    pub owner: Pubkey,
    pub peers: Vec<Peer>,
}

impl WalletDescriptor {
    pub const BASE_SPACE: usize = 8 // discriminator
        + 32 // owner
        + 4; // peers vec length prefix

    pub fn space_for(peer_count: usize) -> usize {
        Self::BASE_SPACE + peer_count * Peer::SPACE
    }

    pub const MAX_SPACE: usize = Self::BASE_SPACE + MAX_PEERS * Peer::SPACE;

    pub fn find(&self, wallet: &Pubkey) -> Option<&Peer> {
        self.peers.iter().find(|p| p.wallet == *wallet)
    }

    pub fn find_mut(&mut self, wallet: &Pubkey) -> Option<&mut Peer> {
        self.peers.iter_mut().find(|p| p.wallet == *wallet)
    }

    fn set_state(&mut self, wallet: Pubkey, state: PeerState) {
        match self.find_mut(&wallet) {
            Some(p) => p.state = state,
            None => self.peers.push(Peer { wallet, state }),
        }
    }
}

/// Pure pair-state transitions, independent of Anchor's `Context` wiring,
/// so the state machine in spec §4.2 can be exercised directly in tests.
pub mod transitions {
    use super::*;

    /// `A Invite B`. Requires both sides to be absent, or the inviter's
    /// side `Rejected` (re-invite). Fails with `BlockedByPeer` if the
    /// invitee has blocked the inviter, and `AlreadyInvited` for any other
    /// existing, non-`Rejected` entry.
    pub fn invite(inviter: &mut WalletDescriptor, invitee: &mut WalletDescriptor) -> Result<()> {
        let inviter_wallet = inviter.owner;
        let invitee_wallet = invitee.owner;

        require!(
            !matches!(invitee.find(&inviter_wallet), Some(p) if p.state == PeerState::Blocked),
            MessengerError::BlockedByPeer
        );

        match inviter.find_mut(&invitee_wallet) {
            Some(p) if p.state == PeerState::Rejected => p.state = PeerState::Invited,
            Some(_) => return Err(MessengerError::AlreadyInvited.into()),
            None => inviter.peers.push(Peer {
                wallet: invitee_wallet,
                state: PeerState::Invited,
            }),
        }

        match invitee.find_mut(&inviter_wallet) {
            Some(p) if p.state == PeerState::Rejected => p.state = PeerState::Requested,
            Some(_) => return Err(MessengerError::AlreadyInvited.into()),
            None => invitee.peers.push(Peer {
                wallet: inviter_wallet,
                state: PeerState::Requested,
            }),
        }

        Ok(())
    }

    /// `B Accept` an invite from `A`. Requires (Requested, Invited).
    pub fn accept(accepter: &mut WalletDescriptor, inviter: &mut WalletDescriptor) -> Result<()> {
        let accepter_wallet = accepter.owner;
        let inviter_wallet = inviter.owner;

        require!(
            matches!(accepter.find(&inviter_wallet), Some(p) if p.state == PeerState::Requested),
            MessengerError::NotInvited
        );
        require!(
            matches!(inviter.find(&accepter_wallet), Some(p) if p.state == PeerState::Invited),
            MessengerError::NotInvited
        );

        accepter.set_state(inviter_wallet, PeerState::Accepted);
        inviter.set_state(accepter_wallet, PeerState::Accepted);
        Ok(())
    }

    /// Either side `Reject`s the other. Valid from (Requested, Invited)
    /// or (Accepted, Accepted); also doubles as contact deletion.
    pub fn reject(me: &mut WalletDescriptor, other: &mut WalletDescriptor) -> Result<()> {
        let me_wallet = me.owner;
        let other_wallet = other.owner;

        let rejectable = |s: PeerState| {
            matches!(s, PeerState::Requested | PeerState::Invited | PeerState::Accepted)
        };

        require!(
            matches!(me.find(&other_wallet), Some(p) if rejectable(p.state)),
            MessengerError::NotInvited
        );
        require!(
            matches!(other.find(&me_wallet), Some(p) if rejectable(p.state)),
            MessengerError::NotInvited
        );

        me.set_state(other_wallet, PeerState::Rejected);
        other.set_state(me_wallet, PeerState::Rejected);
        Ok(())
    }

    /// Either side `Block`s the other from any pre-state (including no
    /// prior relationship). Sets (Blocked, Rejected).
    pub fn block(blocker: &mut WalletDescriptor, blocked: &mut WalletDescriptor) -> Result<()> {
        let blocker_wallet = blocker.owner;
        let blocked_wallet = blocked.owner;

        require!(
            !matches!(blocked.find(&blocker_wallet), Some(p) if p.state == PeerState::Blocked),
            MessengerError::BlockedByPeer
        );

        blocker.set_state(blocked_wallet, PeerState::Blocked);
        blocked.set_state(blocker_wallet, PeerState::Rejected);
        Ok(())
    }

    /// The blocker `Unblock`s the other side. Only legal from (Blocked,
    /// *); transitions to (Rejected, *) so a re-invite becomes possible.
    pub fn unblock(unblocker: &mut WalletDescriptor, unblocked_wallet: Pubkey) -> Result<()> {
        require!(
            matches!(unblocker.find(&unblocked_wallet), Some(p) if p.state == PeerState::Blocked),
            MessengerError::InvalidStateTransition
        );
        unblocker.set_state(unblocked_wallet, PeerState::Rejected);
        Ok(())
    }
}
