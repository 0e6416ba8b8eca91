use core::fmt;

/// Credential baked into the firmware (Wi-Fi password, device key).
///
/// `Debug` never prints the value and there is no `Display`, so a secret
/// can't end up in a log line by accident. Use [`Secret::expose`] at the one
/// place the raw value is needed.
#[derive(Clone, Copy)]
pub struct Secret(&'static str);

impl Secret {
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    pub const fn expose(&self) -> &'static str {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}
