use anchor_lang::prelude::*;

use crate::constants::ETHENT_SEED;
use crate::events::RefundVoteCast;
use crate::state::Ethent;

#[derive(Accounts)]
pub struct VoteForRefund<'info> {
    pub attendee: Signer<'info>,

    #[account(
        mut,
        seeds = [ETHENT_SEED, ethent.registry.as_ref(), &ethent.nonce.to_le_bytes()],
        bump = ethent.bump,
    )]
    pub ethent: Account<'info, Ethent>,
}

pub fn vote_for_refund(ctx: Context<VoteForRefund>) -> Result<()> {
    let attendee_key = ctx.accounts.attendee.key();
    let now = Clock::get()?.unix_timestamp;
    let ethent = &mut ctx.accounts.ethent;

    ethent.vote_for_refund(&attendee_key, now)?;

    emit!(RefundVoteCast {
        ethent: ethent.key(),
        attendee: attendee_key,
        refund_votes: ethent.refund_votes,
    });

    Ok(())
}
