//! Driver error type
//!
//! Every fallible operation in this crate returns [`Error`], parameterised
//! over the error type of the [`Transport`](crate::Transport) in use.

use core::fmt::{self, Display, Formatter};

/// An error that can occur while talking to the RFM69
pub enum Error<E> {
    /// The bus transport failed to complete an exchange or a chip-select change
    Transport(E),

    /// Transmit power outside of the supported 2..=20 dBm window.
    ///
    /// Rejected before any bus activity.
    InvalidPower(u8),

    /// The payload does not fit into the radio FIFO
    PayloadTooLong {
        /// Length of the rejected payload
        len: usize,
    },

    /// RSSI sampling was requested while the radio is not in receive mode
    NotInReceiveMode,

    /// A hardware flag was not raised within its poll budget
    Timeout,

    /// The version register read back as zero; the radio is absent or unpowered
    DeviceNotFound,

    /// A register value could not be decoded
    Deserialization,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::Transport(error)
    }
}

impl<E> fmt::Debug for Error<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Error::Transport(error) => write!(f, "Transport({:?})", error),
            Error::InvalidPower(power) => write!(f, "InvalidPower({:?})", power),
            Error::PayloadTooLong { len } => write!(f, "PayloadTooLong {{ len: {:?} }}", len),
            Error::NotInReceiveMode => write!(f, "NotInReceiveMode"),
            Error::Timeout => write!(f, "Timeout"),
            Error::DeviceNotFound => write!(f, "DeviceNotFound"),
            Error::Deserialization => write!(f, "Deserialization"),
        }
    }
}

impl<E> Display for Error<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(error) => write!(f, "bus transport failed: {:?}", error),
            Error::InvalidPower(power) => {
                write!(f, "transmit power {} dBm outside of 2..=20 dBm", power)
            }
            Error::PayloadTooLong { len } => {
                write!(f, "payload of {} bytes does not fit the FIFO", len)
            }
            Error::NotInReceiveMode => write!(f, "radio is not in receive mode"),
            Error::Timeout => write!(f, "timed out waiting for the radio"),
            Error::DeviceNotFound => write!(f, "radio not found"),
            Error::Deserialization => write!(f, "invalid register value"),
        }
    }
}

impl<E> PartialEq for Error<E>
where
    E: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Error::Transport(a), Error::Transport(b)) => a == b,
            (Error::InvalidPower(a), Error::InvalidPower(b)) => a == b,
            (Error::PayloadTooLong { len: a }, Error::PayloadTooLong { len: b }) => a == b,
            (Error::NotInReceiveMode, Error::NotInReceiveMode)
            | (Error::Timeout, Error::Timeout)
            | (Error::DeviceNotFound, Error::DeviceNotFound)
            | (Error::Deserialization, Error::Deserialization) => true,
            _ => false,
        }
    }
}

#[cfg(feature = "std")]
impl<E> std::error::Error for Error<E> where E: fmt::Debug {}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for Error<E>
where
    E: defmt::Format,
{
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Transport(error) => defmt::write!(f, "Transport({:?})", error),
            Error::InvalidPower(power) => defmt::write!(f, "InvalidPower({:?})", power),
            Error::PayloadTooLong { len } => {
                defmt::write!(f, "PayloadTooLong {{ len: {:?} }}", len)
            }
            Error::NotInReceiveMode => defmt::write!(f, "NotInReceiveMode"),
            Error::Timeout => defmt::write!(f, "Timeout"),
            Error::DeviceNotFound => defmt::write!(f, "DeviceNotFound"),
            Error::Deserialization => defmt::write!(f, "Deserialization"),
        }
    }
}
