use anchor_lang::prelude::*;

use crate::constants::{END_COOLDOWN_SECONDS, MAX_ATTENDEES, VOTE_DELAY_SECONDS};
use crate::errors::EthentError;

/// One organized event: holds the attendee roster, the refund-vote tally,
/// and (as account lamports) the escrowed deposits.
#[account]
#[derive(InitSpace)]
pub struct Ethent {
    /// Organizer; sole authority to cancel or end the event.
    pub owner: Pubkey,

    /// Registry that created this ethent. Authorization back-reference only:
    /// termination must come through this registry, never directly.
    pub registry: Pubkey,

    /// Position inside the registry's tracking vector. Patched when a
    /// swap-and-pop removal moves this ethent into a vacated slot.
    pub registry_index: u32,

    /// Registry creation counter value, used as a PDA seed.
    pub nonce: u64,

    pub max_attendees: u32,

    /// Exact deposit each attendee must escrow, in lamports.
    pub deposit_lamports: u64,

    /// secp256k1 address whose signature over an attendee's key confirms
    /// attendance.
    pub verifier: [u8; 20],

    pub event_time: i64,

    #[max_len(MAX_ATTENDEES)]
    pub attendees: Vec<AttendeeSlot>,

    pub refund_votes: u32,

    /// Deposits held and not yet disbursed. Always equals
    /// `deposit_lamports * (registered - refunded)`.
    pub escrow_lamports: u64,

    /// Set by cancellation or registry termination; no mutation is permitted
    /// afterwards.
    pub terminated: bool,

    pub created_at: i64,
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, InitSpace)]
pub struct AttendeeSlot {
    pub key: Pubkey,
    pub signed_in: bool,
    pub voted_for_refund: bool,
    pub refunded: bool,
}

/// Lifecycle phase, recomputed from `(now, terminated)` at entry to every
/// call rather than stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EthentPhase {
    /// Before the event time; registration happens here.
    Open,
    /// Event has started, refund voting not yet unlocked.
    AwaitingVotes,
    /// One hour past the event time; refund votes may be cast.
    VotingWindow,
    /// Cancelled or ended; terminal.
    Terminated,
}

impl Ethent {
    /// Validates creation parameters against the current time.
    pub fn validate_config(
        max_attendees: u32,
        deposit_lamports: u64,
        event_time: i64,
        now: i64,
    ) -> Result<()> {
        require!(max_attendees > 0, EthentError::InvalidParameters);
        require!(
            max_attendees as usize <= MAX_ATTENDEES,
            EthentError::InvalidParameters
        );
        require!(deposit_lamports > 0, EthentError::InvalidParameters);
        require!(event_time > now, EthentError::InvalidParameters);
        Ok(())
    }

    pub fn phase(&self, now: i64) -> EthentPhase {
        if self.terminated {
            EthentPhase::Terminated
        } else if now < self.event_time {
            EthentPhase::Open
        } else if now < self.event_time.saturating_add(VOTE_DELAY_SECONDS) {
            EthentPhase::AwaitingVotes
        } else {
            EthentPhase::VotingWindow
        }
    }

    pub fn registered_count(&self) -> u32 {
        self.attendees.len() as u32
    }

    /// Minimum refund votes before any deposit can be claimed back:
    /// half of all registered attendees, rounded up.
    pub fn refund_quorum(&self) -> u32 {
        (self.registered_count() + 1) / 2
    }

    pub fn quorum_met(&self) -> bool {
        self.registered_count() > 0 && self.refund_votes >= self.refund_quorum()
    }

    pub fn is_registered(&self, key: &Pubkey) -> bool {
        self.slot(key).is_some()
    }

    fn slot(&self, key: &Pubkey) -> Option<&AttendeeSlot> {
        self.attendees.iter().find(|a| a.key == *key)
    }

    fn slot_mut(&mut self, key: &Pubkey) -> Option<&mut AttendeeSlot> {
        self.attendees.iter_mut().find(|a| a.key == *key)
    }

    fn ensure_live(&self) -> Result<()> {
        require!(!self.terminated, EthentError::Terminated);
        Ok(())
    }

    /// Takes an attendee slot in exchange for exactly `amount` lamports of
    /// deposit. The organizer may not claim a slot.
    pub fn register(&mut self, attendee: Pubkey, amount: u64) -> Result<()> {
        self.ensure_live()?;
        require!(attendee != self.owner, EthentError::Unauthorized);
        require!(
            self.registered_count() < self.max_attendees,
            EthentError::CapacityReached
        );
        require!(!self.is_registered(&attendee), EthentError::AlreadyRegistered);
        require!(
            amount == self.deposit_lamports,
            EthentError::WrongDepositAmount
        );

        self.attendees.push(AttendeeSlot {
            key: attendee,
            signed_in: false,
            voted_for_refund: false,
            refunded: false,
        });
        self.escrow_lamports = self
            .escrow_lamports
            .checked_add(amount)
            .ok_or(EthentError::EscrowAccounting)?;
        Ok(())
    }

    /// Guards shared by the check-in path, run before signature recovery so
    /// a garbage signature from a stranger still reads as `NotRegistered`.
    pub fn ensure_can_check_in(&self, attendee: &Pubkey) -> Result<()> {
        self.ensure_live()?;
        let slot = self.slot(attendee).ok_or(EthentError::NotRegistered)?;
        require!(!slot.signed_in, EthentError::AlreadySignedIn);
        Ok(())
    }

    /// Confirms attendance. One-way: a signed-in attendee's deposit is
    /// excluded from cancellation refunds (the bond's purpose is fulfilled,
    /// so it forfeits to the organizer on cancellation).
    pub fn check_in(&mut self, attendee: &Pubkey, recovered: [u8; 20]) -> Result<()> {
        self.ensure_can_check_in(attendee)?;
        require!(recovered == self.verifier, EthentError::InvalidSignature);
        let slot = self.slot_mut(attendee).ok_or(EthentError::NotRegistered)?;
        slot.signed_in = true;
        Ok(())
    }

    pub fn vote_for_refund(&mut self, attendee: &Pubkey, now: i64) -> Result<()> {
        self.ensure_live()?;
        require!(self.is_registered(attendee), EthentError::NotRegistered);
        require!(
            self.phase(now) == EthentPhase::VotingWindow,
            EthentError::TooEarly
        );
        let slot = self.slot_mut(attendee).ok_or(EthentError::NotRegistered)?;
        require!(!slot.voted_for_refund, EthentError::AlreadyVoted);
        slot.voted_for_refund = true;
        // Bounded by the roster cap, cannot overflow.
        self.refund_votes += 1;
        Ok(())
    }

    /// Marks the caller's deposit as refunded and returns the amount owed.
    /// The caller moves the lamports.
    pub fn claim_refund(&mut self, attendee: &Pubkey) -> Result<u64> {
        self.ensure_live()?;
        require!(self.is_registered(attendee), EthentError::NotRegistered);
        require!(self.quorum_met(), EthentError::QuorumNotMet);
        let deposit = self.deposit_lamports;
        let slot = self.slot_mut(attendee).ok_or(EthentError::NotRegistered)?;
        require!(!slot.refunded, EthentError::AlreadyRefunded);
        slot.refunded = true;
        self.escrow_lamports = self
            .escrow_lamports
            .checked_sub(deposit)
            .ok_or(EthentError::EscrowAccounting)?;
        Ok(deposit)
    }

    /// Terminates the event and returns the attendees owed a refund plus
    /// the total owed: every registered, non-signed-in, not-yet-refunded
    /// attendee, in registration order. Signed-in attendees receive
    /// nothing.
    pub fn cancel(&mut self, caller: &Pubkey) -> Result<(Vec<Pubkey>, u64)> {
        self.ensure_live()?;
        require!(*caller == self.owner, EthentError::Unauthorized);

        let mut refunds = Vec::new();
        let deposit = self.deposit_lamports;
        for slot in self.attendees.iter_mut() {
            if !slot.signed_in && !slot.refunded {
                slot.refunded = true;
                refunds.push(slot.key);
            }
        }
        let owed = deposit
            .checked_mul(refunds.len() as u64)
            .ok_or(EthentError::EscrowAccounting)?;
        self.escrow_lamports = self
            .escrow_lamports
            .checked_sub(owed)
            .ok_or(EthentError::EscrowAccounting)?;
        self.terminated = true;
        Ok((refunds, owed))
    }

    /// Whether the owner may end this ethent through the registry: only
    /// after the 24-hour cooling-off period so refund voting can run its
    /// course. A cancelled ethent may still be ended (to remove and close
    /// it); the time gate applies regardless.
    pub fn ensure_endable(&self, caller: &Pubkey, now: i64) -> Result<()> {
        require!(*caller == self.owner, EthentError::Unauthorized);
        require!(
            now >= self.event_time.saturating_add(END_COOLDOWN_SECONDS),
            EthentError::NotYetEligible
        );
        Ok(())
    }
}
