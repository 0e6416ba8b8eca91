//! Field checks shared by the build script and the library.
//!
//! Everything here only touches `core` so the build script can pull the
//! module in with `#[path]`, and the checks are `const fn` where possible
//! so the library can re-run them on the generated constant at compile time.

use core::fmt;
use core::num::{IntErrorKind, NonZeroU32};

use crate::constants::{
    DEVICE_ID_EXTRA_CHARS, DEVICE_ID_MAX_LEN, HOSTNAME_LABEL_MAX_LEN, HOSTNAME_MAX_LEN,
};

/// Configuration fields, named as they appear in the definitions file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    WifiSsid,
    WifiPassword,
    IotHubFqdn,
    DeviceId,
    DeviceKey,
    TelemetryIntervalMs,
}

impl Field {
    pub const fn name(self) -> &'static str {
        match self {
            Field::WifiSsid => "wifi_ssid",
            Field::WifiPassword => "wifi_password",
            Field::IotHubFqdn => "iot_hub_fqdn",
            Field::DeviceId => "device_id",
            Field::DeviceKey => "device_key",
            Field::TelemetryIntervalMs => "telemetry_interval_ms",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Empty(Field),
    InvalidHostname,
    InvalidDeviceId,
    InvalidDeviceKey,
    IntervalNotPositive,
    IntervalOutOfRange,
    IntervalNotInteger,
}

impl Error {
    /// The field that failed validation.
    pub const fn field(self) -> Field {
        match self {
            Error::Empty(field) => field,
            Error::InvalidHostname => Field::IotHubFqdn,
            Error::InvalidDeviceId => Field::DeviceId,
            Error::InvalidDeviceKey => Field::DeviceKey,
            Error::IntervalNotPositive
            | Error::IntervalOutOfRange
            | Error::IntervalNotInteger => Field::TelemetryIntervalMs,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Error::Empty(_) => "must not be empty",
            Error::InvalidHostname => "is not a valid DNS hostname",
            Error::InvalidDeviceId => "has a character not allowed in a device id or is too long",
            Error::InvalidDeviceKey => "is not valid base64",
            Error::IntervalNotPositive => "must be greater than zero",
            Error::IntervalOutOfRange => "does not fit in 32 bits",
            Error::IntervalNotInteger => "is not an integer",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field().name(), self.message())
    }
}

pub const fn validate_ssid(ssid: &str) -> Result<(), Error> {
    if ssid.is_empty() {
        return Err(Error::Empty(Field::WifiSsid));
    }
    Ok(())
}

/// Checks an RFC 1123 hostname: dot-separated labels of ASCII letters,
/// digits and hyphens, no label empty or starting/ending with a hyphen.
/// A trailing root dot is rejected.
pub const fn validate_hostname(host: &str) -> Result<(), Error> {
    let bytes = host.as_bytes();
    if bytes.is_empty() {
        return Err(Error::Empty(Field::IotHubFqdn));
    }
    if bytes.len() > HOSTNAME_MAX_LEN {
        return Err(Error::InvalidHostname);
    }

    let mut label_len = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'.' {
            if label_len == 0 || bytes[i - 1] == b'-' {
                return Err(Error::InvalidHostname);
            }
            label_len = 0;
        } else if b.is_ascii_alphanumeric() || b == b'-' {
            if label_len == 0 && b == b'-' {
                return Err(Error::InvalidHostname);
            }
            label_len += 1;
            if label_len > HOSTNAME_LABEL_MAX_LEN {
                return Err(Error::InvalidHostname);
            }
        } else {
            return Err(Error::InvalidHostname);
        }
        i += 1;
    }

    if label_len == 0 || bytes[bytes.len() - 1] == b'-' {
        return Err(Error::InvalidHostname);
    }
    Ok(())
}

pub const fn validate_device_id(id: &str) -> Result<(), Error> {
    let bytes = id.as_bytes();
    if bytes.is_empty() {
        return Err(Error::Empty(Field::DeviceId));
    }
    if bytes.len() > DEVICE_ID_MAX_LEN {
        return Err(Error::InvalidDeviceId);
    }

    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !b.is_ascii_alphanumeric() && !contains(DEVICE_ID_EXTRA_CHARS, b) {
            return Err(Error::InvalidDeviceId);
        }
        i += 1;
    }
    Ok(())
}

/// Only the non-empty part of the key check. The base64 decode needs the
/// `base64` crate and runs in the build script.
pub const fn validate_device_key(key: &str) -> Result<(), Error> {
    if key.is_empty() {
        return Err(Error::Empty(Field::DeviceKey));
    }
    Ok(())
}

/// Converts a raw integer from the definitions file into an interval.
pub const fn interval_from_integer(value: i64) -> Result<NonZeroU32, Error> {
    if value <= 0 {
        return Err(Error::IntervalNotPositive);
    }
    if value > u32::MAX as i64 {
        return Err(Error::IntervalOutOfRange);
    }
    match NonZeroU32::new(value as u32) {
        Some(interval) => Ok(interval),
        None => Err(Error::IntervalNotPositive),
    }
}

/// Converts an interval written as text. The text must be a plain decimal
/// integer (an optional sign, then digits); it is never rounded, trimmed or
/// defaulted.
pub fn interval_from_text(text: &str) -> Result<NonZeroU32, Error> {
    match text.parse::<i64>() {
        Ok(value) => interval_from_integer(value),
        Err(e) => match e.kind() {
            IntErrorKind::Empty => Err(Error::Empty(Field::TelemetryIntervalMs)),
            IntErrorKind::PosOverflow => Err(Error::IntervalOutOfRange),
            IntErrorKind::NegOverflow => Err(Error::IntervalNotPositive),
            _ => Err(Error::IntervalNotInteger),
        },
    }
}

const fn contains(set: &[u8], b: u8) -> bool {
    let mut i = 0;
    while i < set.len() {
        if set[i] == b {
            return true;
        }
        i += 1;
    }
    false
}
