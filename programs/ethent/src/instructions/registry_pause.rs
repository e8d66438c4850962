use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::errors::EthentError;
use crate::events::CreationPauseToggled;
use crate::state::Registry;

#[derive(Accounts)]
pub struct PauseCreation<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.authority.as_ref()],
        bump = registry.bump,
        has_one = authority @ EthentError::Unauthorized,
    )]
    pub registry: Account<'info, Registry>,
}

pub fn pause_creation(ctx: Context<PauseCreation>, paused: bool) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.creation_paused = paused;

    emit!(CreationPauseToggled {
        registry: registry.key(),
        paused,
    });

    Ok(())
}
