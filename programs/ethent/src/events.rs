use anchor_lang::prelude::*;

#[event]
pub struct EthentCreated {
    pub ethent: Pubkey,
    pub registry: Pubkey,
    pub owner: Pubkey,
    pub max_attendees: u32,
    pub deposit_lamports: u64,
    pub verifier: [u8; 20],
    pub event_time: i64,
}

#[event]
pub struct CreationPauseToggled {
    pub registry: Pubkey,
    pub paused: bool,
}

#[event]
pub struct AttendeeRegistered {
    pub ethent: Pubkey,
    pub attendee: Pubkey,
    pub deposit_lamports: u64,
    pub registered_count: u32,
}

#[event]
pub struct AttendeeSignedIn {
    pub ethent: Pubkey,
    pub attendee: Pubkey,
}

#[event]
pub struct RefundVoteCast {
    pub ethent: Pubkey,
    pub attendee: Pubkey,
    pub refund_votes: u32,
}

#[event]
pub struct RefundClaimed {
    pub ethent: Pubkey,
    pub attendee: Pubkey,
    pub amount: u64,
}

#[event]
pub struct EthentCancelled {
    pub ethent: Pubkey,
    pub owner: Pubkey,
    pub refunded_attendees: u32,
    pub refunded_lamports: u64,
}

#[event]
pub struct EthentEnded {
    pub ethent: Pubkey,
    pub registry: Pubkey,
    pub owner: Pubkey,
    pub forfeited_lamports: u64,
}
