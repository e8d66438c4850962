use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::ETHENT_SEED;
use crate::events::AttendeeRegistered;
use crate::state::Ethent;

#[derive(Accounts)]
pub struct RegisterAttendee<'info> {
    #[account(mut)]
    pub attendee: Signer<'info>,

    #[account(
        mut,
        seeds = [ETHENT_SEED, ethent.registry.as_ref(), &ethent.nonce.to_le_bytes()],
        bump = ethent.bump,
    )]
    pub ethent: Account<'info, Ethent>,

    pub system_program: Program<'info, System>,
}

/// Takes an attendee slot against a deposit of exactly `amount` lamports,
/// escrowed in the ethent account until refund, cancellation, or forfeit.
pub fn register(ctx: Context<RegisterAttendee>, amount: u64) -> Result<()> {
    let attendee_key = ctx.accounts.attendee.key();
    let ethent = &mut ctx.accounts.ethent;

    ethent.register(attendee_key, amount)?;

    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.attendee.to_account_info(),
                to: ctx.accounts.ethent.to_account_info(),
            },
        ),
        amount,
    )?;

    let ethent = &ctx.accounts.ethent;
    emit!(AttendeeRegistered {
        ethent: ethent.key(),
        attendee: attendee_key,
        deposit_lamports: amount,
        registered_count: ethent.registered_count(),
    });

    Ok(())
}
