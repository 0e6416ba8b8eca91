/// Current firmware version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum length of a DNS hostname, in bytes
pub const HOSTNAME_MAX_LEN: usize = 253;
/// Maximum length of a single DNS label, in bytes
pub const HOSTNAME_LABEL_MAX_LEN: usize = 63;

/// Maximum length of an IoT Hub device identity
pub const DEVICE_ID_MAX_LEN: usize = 128;
/// Non-alphanumeric characters accepted in an IoT Hub device identity
pub const DEVICE_ID_EXTRA_CHARS: &[u8] = b"-.+%_#*?!(),:=@$'";

/// Definitions file read by the build script when `IOT_CONFIG_FILE` is unset
pub const DEFAULT_CONFIG_FILE: &str = "cfg.toml";

/// Build environment variable selecting another definitions file
pub const ENV_CONFIG_FILE: &str = "IOT_CONFIG_FILE";
/// Build environment variable overriding `wifi_password`
pub const ENV_WIFI_PASSWORD: &str = "IOT_CONFIG_WIFI_PASSWORD";
/// Build environment variable overriding `device_key`
pub const ENV_DEVICE_KEY: &str = "IOT_CONFIG_DEVICE_KEY";
