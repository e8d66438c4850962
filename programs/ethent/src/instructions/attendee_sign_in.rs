use anchor_lang::prelude::*;

use crate::constants::ETHENT_SEED;
use crate::events::AttendeeSignedIn;
use crate::signature::{check_in_message, recover_signer};
use crate::state::Ethent;

#[derive(Accounts)]
pub struct SignIn<'info> {
    pub attendee: Signer<'info>,

    #[account(
        mut,
        seeds = [ETHENT_SEED, ethent.registry.as_ref(), &ethent.nonce.to_le_bytes()],
        bump = ethent.bump,
    )]
    pub ethent: Account<'info, Ethent>,
}

/// Confirms attendance: the verifier key must have signed the attendee's
/// own account key off-chain. Irreversible once recorded.
pub fn sign_in(ctx: Context<SignIn>, recovery_id: u8, signature: [u8; 64]) -> Result<()> {
    let attendee_key = ctx.accounts.attendee.key();
    let ethent = &mut ctx.accounts.ethent;

    // Roster guards first so an unregistered caller with a garbage
    // signature is rejected as unregistered, not as a bad signature.
    ethent.ensure_can_check_in(&attendee_key)?;

    let message = check_in_message(&attendee_key);
    let recovered = recover_signer(&message, recovery_id, &signature)?;
    ethent.check_in(&attendee_key, recovered)?;

    emit!(AttendeeSignedIn {
        ethent: ethent.key(),
        attendee: attendee_key,
    });

    Ok(())
}
