//! # Handler Chain
//!
//! Payload transforms applied to a message in configured order.
//!
//! Each handler rewrites the payload in place; the output of one handler is the
//! input of the next. There is no branching and no short-circuiting.

mod chain;
mod clock;
pub mod handlers;

pub use chain::HandlerChain;
pub use clock::{Clock, FixedClock, SystemClock};
pub use contracts::HandlerKind;
pub use handlers::{PAD_CHAR, PAD_MULTIPLE};
