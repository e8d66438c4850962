//! Check-in signature boundary.
//!
//! The verifier key lives off-chain (a badge scanner or door staff device)
//! and signs the attendee's account key with a secp256k1 key. On-chain we
//! only recover the signer's Ethereum-style address and compare it to the
//! verifier address stored on the ethent. Keeping recovery here, behind a
//! plain-data interface, lets the state machine be tested with injected
//! addresses instead of real signatures.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;
use anchor_lang::solana_program::secp256k1_recover::secp256k1_recover;

use crate::errors::EthentError;

/// The message a verifier signs to attest attendance: the attendee's own
/// 32-byte account key, used directly as the recovery hash.
pub fn check_in_message(attendee: &Pubkey) -> [u8; 32] {
    attendee.to_bytes()
}

/// Recovers the 20-byte secp256k1 address that produced `signature` over
/// `message`: keccak256 of the uncompressed public key, truncated to its
/// last 20 bytes.
///
/// Accepts both raw recovery ids (0/1) and the 27/28 convention used by
/// common signing tooling.
pub fn recover_signer(
    message: &[u8; 32],
    recovery_id: u8,
    signature: &[u8; 64],
) -> Result<[u8; 20]> {
    let recovery_id = if recovery_id >= 27 {
        recovery_id - 27
    } else {
        recovery_id
    };

    let pubkey = secp256k1_recover(message, recovery_id, signature)
        .map_err(|_| EthentError::InvalidSignature)?;

    let digest = keccak::hash(&pubkey.to_bytes());
    let mut address = [0u8; 20];
    address.copy_from_slice(&digest.to_bytes()[12..]);
    Ok(address)
}
