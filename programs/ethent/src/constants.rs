pub const REGISTRY_SEED: &[u8] = b"registry";
pub const ETHENT_SEED: &[u8] = b"ethent";

/// Space cap on the attendee roster; `max_attendees` may be anything up to this.
pub const MAX_ATTENDEES: usize = 64;
/// Space cap on the number of ethents a registry tracks at once.
pub const MAX_TRACKED_ETHENTS: usize = 64;

/// Refund voting opens this long after the event time.
pub const VOTE_DELAY_SECONDS: i64 = 3600; // 1 hour
/// Cooling-off period before the registry may end an ethent.
pub const END_COOLDOWN_SECONDS: i64 = 86400; // 24 hours
