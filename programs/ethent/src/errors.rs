use anchor_lang::prelude::*;

#[error_code]
pub enum EthentError {
    #[msg("Caller is not allowed to perform this action")]
    Unauthorized,

    #[msg("Caller is not a registered attendee")]
    NotRegistered,

    #[msg("Caller already holds an attendee slot")]
    AlreadyRegistered,

    #[msg("Maximum number of attendees reached")]
    CapacityReached,

    #[msg("Deposit must match the configured amount exactly")]
    WrongDepositAmount,

    #[msg("Signature does not recover to the verifier address")]
    InvalidSignature,

    #[msg("Attendee has already signed in")]
    AlreadySignedIn,

    #[msg("Attendee has already voted for a refund")]
    AlreadyVoted,

    #[msg("Deposit has already been refunded")]
    AlreadyRefunded,

    #[msg("Refund voting has not opened yet")]
    TooEarly,

    #[msg("Cooling-off period after the event has not elapsed")]
    NotYetEligible,

    #[msg("Fewer than half of the registered attendees voted for a refund")]
    QuorumNotMet,

    #[msg("Ethent creation is paused")]
    CreationPaused,

    #[msg("Invalid creation parameters")]
    InvalidParameters,

    #[msg("Registry cannot track any more ethents")]
    RegistryFull,

    #[msg("Ethent has been terminated")]
    Terminated,

    #[msg("Escrow disbursement failed")]
    TransferFailed,

    #[msg("Escrow balance or counter accounting overflowed")]
    EscrowAccounting,

    #[msg("Wrong or missing registry sibling account for swap removal")]
    InvalidRegistrySibling,
}
