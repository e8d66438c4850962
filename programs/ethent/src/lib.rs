use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod escrow;
pub mod events;
pub mod instructions;
pub mod signature;
pub mod state;

use instructions::*;

declare_id!("F4zYV8g6pwc9N2jKEJXwo54pvKBfL4uS9XW6ZLA9Bztm");

#[program]
pub mod ethent {
    use super::*;

    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        instructions::initialize_registry(ctx)
    }

    pub fn pause_creation(ctx: Context<PauseCreation>, paused: bool) -> Result<()> {
        instructions::pause_creation(ctx, paused)
    }

    pub fn create_ethent(
        ctx: Context<CreateEthent>,
        max_attendees: u32,
        deposit_lamports: u64,
        verifier: [u8; 20],
        event_time: i64,
    ) -> Result<()> {
        instructions::create_ethent(ctx, max_attendees, deposit_lamports, verifier, event_time)
    }

    pub fn register(ctx: Context<RegisterAttendee>, amount: u64) -> Result<()> {
        instructions::register(ctx, amount)
    }

    pub fn sign_in(ctx: Context<SignIn>, recovery_id: u8, signature: [u8; 64]) -> Result<()> {
        instructions::sign_in(ctx, recovery_id, signature)
    }

    pub fn vote_for_refund(ctx: Context<VoteForRefund>) -> Result<()> {
        instructions::vote_for_refund(ctx)
    }

    pub fn claim_refund(ctx: Context<ClaimRefund>) -> Result<()> {
        instructions::claim_refund(ctx)
    }

    pub fn cancel_ethent<'info>(
        ctx: Context<'_, '_, '_, 'info, CancelEthent<'info>>,
    ) -> Result<()> {
        instructions::cancel_ethent(ctx)
    }

    pub fn end_ethent(ctx: Context<EndEthent>) -> Result<()> {
        instructions::end_ethent(ctx)
    }
}
