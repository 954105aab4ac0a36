//! HandlerChain - applies configured handlers in order

use tracing::{instrument, trace};

use contracts::HandlerKind;

use crate::clock::{Clock, SystemClock};
use crate::handlers::{self, PAD_CHAR, PAD_MULTIPLE};

/// Applies a sequence of [`HandlerKind`]s to a payload.
///
/// Handlers are stateless; the chain only owns the clock used by
/// `addTimestamp`.
#[derive(Debug, Clone, Default)]
pub struct HandlerChain<C = SystemClock> {
    clock: C,
}

impl HandlerChain<SystemClock> {
    /// Chain reading the system clock
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> HandlerChain<C> {
    /// Chain reading time from `clock`
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Apply one handler
    pub fn apply_one(&self, handler: HandlerKind, payload: &mut String) {
        match handler {
            HandlerKind::Trim => handlers::trim(payload),
            HandlerKind::PadToMultiple => handlers::pad_to_multiple(payload, PAD_CHAR, PAD_MULTIPLE),
            HandlerKind::AddTimestamp => {
                handlers::add_timestamp(payload, self.clock.unix_seconds())
            }
        }
    }

    /// Apply `handlers` in order, each one seeing the previous one's output
    ///
    /// Returns the number of handlers applied.
    #[instrument(name = "handler_chain_apply", skip_all, fields(handlers = handlers.len()))]
    pub fn apply(&self, handlers: &[HandlerKind], payload: &mut String) -> usize {
        for &handler in handlers {
            self.apply_one(handler, payload);
            trace!(handler = %handler, payload = %payload, "handler applied");
        }
        handlers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use contracts::SensorProfile;

    fn run(names: &[&str], input: &str) -> String {
        let profile = SensorProfile::from_names("X", names, ["Console"]);
        let chain = HandlerChain::with_clock(FixedClock::new(1_700_000_000));
        let mut payload = input.to_string();
        chain.apply(&profile.handlers, &mut payload);
        payload
    }

    #[test]
    fn test_trim_then_pad() {
        assert_eq!(run(&["trim", "padToMultiple"], " ab "), "ab###");
    }

    #[test]
    fn test_pad_then_trim() {
        // " ab " -> " ab #" -> "ab #"
        assert_eq!(run(&["padToMultiple", "trim"], " ab "), "ab #");
    }

    #[test]
    fn test_order_matters() {
        assert_ne!(
            run(&["padToMultiple", "trim"], " ab "),
            run(&["trim", "padToMultiple"], " ab ")
        );
    }

    #[test]
    fn test_unknown_handler_is_skipped() {
        assert_eq!(run(&["reverse"], "  abc "), "  abc ");
        assert_eq!(run(&["reverse", "trim"], "  abc "), "abc");
        assert_eq!(run(&["trim", "reverse", "padToMultiple"], " abc "), "abc##");
    }

    #[test]
    fn test_add_timestamp_uses_clock() {
        assert_eq!(run(&["trim", "addTimestamp"], " v "), "v_1700000000");
    }

    #[test]
    fn test_timestamp_non_decreasing() {
        let clock = FixedClock::new(10);
        let chain = HandlerChain::with_clock(&clock);

        let mut first = String::from("p");
        chain.apply(&[HandlerKind::AddTimestamp], &mut first);
        clock.advance(3);
        let mut second = String::from("p");
        chain.apply(&[HandlerKind::AddTimestamp], &mut second);

        let stamp = |s: &str| s.rsplit_once('_').unwrap().1.parse::<i64>().unwrap();
        assert!(stamp(&second) >= stamp(&first));
    }

    #[test]
    fn test_system_clock_timestamp_shape() {
        let chain = HandlerChain::new();
        let mut payload = String::from("reading");
        chain.apply(&[HandlerKind::AddTimestamp], &mut payload);

        let (original, digits) = payload.rsplit_once('_').unwrap();
        assert_eq!(original, "reading");
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let chain = HandlerChain::new();
        let mut payload = String::from("  raw ");
        assert_eq!(chain.apply(&[], &mut payload), 0);
        assert_eq!(payload, "  raw ");
    }

    #[test]
    fn test_repeated_handlers() {
        assert_eq!(run(&["padToMultiple", "addTimestamp", "padToMultiple"], "ab"), "ab###_1700000000####");
    }
}
