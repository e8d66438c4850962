use anchor_lang::prelude::*;

use crate::constants::ETHENT_SEED;
use crate::escrow;
use crate::events::RefundClaimed;
use crate::state::Ethent;

#[derive(Accounts)]
pub struct ClaimRefund<'info> {
    #[account(mut)]
    pub attendee: Signer<'info>,

    #[account(
        mut,
        seeds = [ETHENT_SEED, ethent.registry.as_ref(), &ethent.nonce.to_le_bytes()],
        bump = ethent.bump,
    )]
    pub ethent: Account<'info, Ethent>,
}

/// Pays the caller's deposit back out of escrow once the refund quorum has
/// been reached. A slot is refunded at most once.
pub fn claim_refund(ctx: Context<ClaimRefund>) -> Result<()> {
    let attendee_key = ctx.accounts.attendee.key();
    let ethent = &mut ctx.accounts.ethent;

    let amount = ethent.claim_refund(&attendee_key)?;

    escrow::disburse(
        &ctx.accounts.ethent.to_account_info(),
        &ctx.accounts.attendee.to_account_info(),
        amount,
    )?;

    emit!(RefundClaimed {
        ethent: ctx.accounts.ethent.key(),
        attendee: attendee_key,
        amount,
    });

    Ok(())
}
