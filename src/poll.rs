//! Bounded polling of hardware flags

use embedded_hal::delay::DelayNs;

use crate::Error;

/// How long to wait for a hardware flag
///
/// The flag is checked up to `attempts` times, `interval_us` microseconds
/// apart, before the wait gives up with [`Error::Timeout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollBudget {
    /// Maximum number of checks
    pub attempts: u32,
    /// Pause after each failed check
    pub interval_us: u32,
}

impl PollBudget {
    /// Creates a budget of `attempts` checks spaced `interval_us` apart.
    pub const fn new(attempts: u32, interval_us: u32) -> Self {
        Self {
            attempts,
            interval_us,
        }
    }
}

/// Calls `ready` until it returns `true` or the budget is spent.
pub(crate) fn wait_for<D, E, F>(delay: &mut D, budget: PollBudget, mut ready: F) -> Result<(), Error<E>>
where
    D: DelayNs,
    F: FnMut() -> Result<bool, Error<E>>,
{
    for _ in 0..budget.attempts {
        if ready()? {
            return Ok(());
        }
        delay.delay_us(budget.interval_us);
    }

    #[cfg(feature = "defmt")]
    defmt::warn!("no response after {=u32} polls", budget.attempts);
    Err(Error::Timeout)
}

#[cfg(test)]
mod test {
    use super::*;

    use embedded_hal_mock::eh1::delay::NoopDelay;

    #[test]
    fn stops_at_first_success() {
        let mut checks = 0;
        let result = wait_for::<_, (), _>(&mut NoopDelay::new(), PollBudget::new(5, 1), || {
            checks += 1;
            Ok(checks == 3)
        });

        assert_eq!(result, Ok(()));
        assert_eq!(checks, 3);
    }

    #[test]
    fn times_out_after_exactly_the_budget() {
        let mut checks = 0;
        let result = wait_for::<_, (), _>(&mut NoopDelay::new(), PollBudget::new(7, 1), || {
            checks += 1;
            Ok(false)
        });

        assert_eq!(result, Err(Error::Timeout));
        assert_eq!(checks, 7);
    }

    #[test]
    fn errors_abort_the_wait() {
        let mut checks = 0;
        let result = wait_for(&mut NoopDelay::new(), PollBudget::new(7, 1), || {
            checks += 1;
            Err(Error::Transport(42u8))
        });

        assert_eq!(result, Err(Error::Transport(42)));
        assert_eq!(checks, 1);
    }
}
