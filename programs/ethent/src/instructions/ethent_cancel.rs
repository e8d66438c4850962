use anchor_lang::prelude::*;

use crate::constants::ETHENT_SEED;
use crate::errors::EthentError;
use crate::escrow;
use crate::events::EthentCancelled;
use crate::state::Ethent;

#[derive(Accounts)]
pub struct CancelEthent<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [ETHENT_SEED, ethent.registry.as_ref(), &ethent.nonce.to_le_bytes()],
        bump = ethent.bump,
        has_one = owner @ EthentError::Unauthorized,
    )]
    pub ethent: Account<'info, Ethent>,
}

/// Owner cancellation: refunds every registered attendee who has not signed
/// in; signed-in attendees' deposits forfeit to the owner when the ethent is
/// later ended. Remaining accounts must carry a writable account for each
/// attendee owed a refund; a missing one aborts the whole call.
pub fn cancel_ethent<'info>(
    ctx: Context<'_, '_, '_, 'info, CancelEthent<'info>>,
) -> Result<()> {
    let owner_key = ctx.accounts.owner.key();
    let ethent = &mut ctx.accounts.ethent;

    let (refunds, owed) = ethent.cancel(&owner_key)?;
    let deposit = ethent.deposit_lamports;

    let ethent_info = ctx.accounts.ethent.to_account_info();
    for attendee in &refunds {
        let recipient = ctx
            .remaining_accounts
            .iter()
            .find(|a| a.key == attendee)
            .ok_or(EthentError::TransferFailed)?;
        escrow::disburse(&ethent_info, recipient, deposit)?;
    }

    let refunded = refunds.len() as u32;
    emit!(EthentCancelled {
        ethent: ctx.accounts.ethent.key(),
        owner: owner_key,
        refunded_attendees: refunded,
        refunded_lamports: owed,
    });

    msg!("Ethent cancelled, {} deposits refunded", refunded);

    Ok(())
}
