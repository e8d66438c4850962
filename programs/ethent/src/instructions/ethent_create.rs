use anchor_lang::prelude::*;

use crate::constants::{ETHENT_SEED, REGISTRY_SEED};
use crate::events::EthentCreated;
use crate::state::{Ethent, Registry};

#[derive(Accounts)]
pub struct CreateEthent<'info> {
    /// Organizer of the new event; becomes its owner.
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.authority.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        init,
        payer = owner,
        space = 8 + Ethent::INIT_SPACE,
        seeds = [ETHENT_SEED, registry.key().as_ref(), &registry.total_created.to_le_bytes()],
        bump
    )]
    pub ethent: Account<'info, Ethent>,

    pub system_program: Program<'info, System>,
}

pub fn create_ethent(
    ctx: Context<CreateEthent>,
    max_attendees: u32,
    deposit_lamports: u64,
    verifier: [u8; 20],
    event_time: i64,
) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.ensure_can_create()?;

    let now = Clock::get()?.unix_timestamp;
    Ethent::validate_config(max_attendees, deposit_lamports, event_time, now)?;

    let ethent = &mut ctx.accounts.ethent;
    ethent.owner = ctx.accounts.owner.key();
    ethent.registry = registry.key();
    ethent.nonce = registry.total_created;
    ethent.max_attendees = max_attendees;
    ethent.deposit_lamports = deposit_lamports;
    ethent.verifier = verifier;
    ethent.event_time = event_time;
    ethent.attendees = Vec::new();
    ethent.refund_votes = 0;
    ethent.escrow_lamports = 0;
    ethent.terminated = false;
    ethent.created_at = now;
    ethent.bump = ctx.bumps.ethent;

    ethent.registry_index = registry.track(ethent.key())?;

    emit!(EthentCreated {
        ethent: ethent.key(),
        registry: registry.key(),
        owner: ethent.owner,
        max_attendees,
        deposit_lamports,
        verifier,
        event_time,
    });

    Ok(())
}
