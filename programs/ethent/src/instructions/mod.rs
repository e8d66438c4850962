pub mod attendee_register;
pub mod attendee_sign_in;
pub mod ethent_cancel;
pub mod ethent_create;
pub mod ethent_end;
pub mod refund_claim;
pub mod refund_vote;
pub mod registry_initialize;
pub mod registry_pause;

pub use attendee_register::*;
pub use attendee_sign_in::*;
pub use ethent_cancel::*;
pub use ethent_create::*;
pub use ethent_end::*;
pub use refund_claim::*;
pub use refund_vote::*;
pub use registry_initialize::*;
pub use registry_pause::*;
