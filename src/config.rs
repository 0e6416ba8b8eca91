use core::num::NonZeroU32;
use core::time::Duration;

use log::info;

use crate::constants::VERSION;
use crate::secret::Secret;
use crate::validate::{
    self, validate_device_id, validate_device_key, validate_hostname, validate_ssid, Field,
};

#[derive(Debug, Clone, Copy)]
pub struct Config {
    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'static str,

    // Wi-Fi pre-shared key, empty for an open network
    pub wifi_password: Secret,

    // IoT Hub hostname, e.g. "myhub.azure-devices.net"
    pub iot_hub_fqdn: &'static str,

    // Device identity registered in the hub
    pub device_id: &'static str,

    // Base64 symmetric key of the device identity
    pub device_key: Secret,

    // Delay between two published telemetry messages, in milliseconds
    pub telemetry_interval_ms: NonZeroU32,
}

impl Config {
    /// Checks every field, in declaration order, and returns the first failure.
    pub const fn validate(&self) -> Result<(), validate::Error> {
        if let Err(e) = validate_ssid(self.wifi_ssid) {
            return Err(e);
        }
        if let Err(e) = validate_hostname(self.iot_hub_fqdn) {
            return Err(e);
        }
        if let Err(e) = validate_device_id(self.device_id) {
            return Err(e);
        }
        if let Err(e) = validate_device_key(self.device_key.expose()) {
            return Err(e);
        }
        Ok(())
    }

    /// Same as [`Config::validate`] but panics. Evaluated in a const item
    /// below, which turns a bad generated config into a compile error.
    pub const fn assert_valid(&self) {
        let e = match self.validate() {
            Ok(()) => return,
            Err(e) => e,
        };
        match e.field() {
            Field::WifiSsid => panic!("invalid configuration: wifi_ssid must not be empty"),
            Field::IotHubFqdn => {
                panic!("invalid configuration: iot_hub_fqdn is not a valid DNS hostname")
            }
            Field::DeviceId => panic!("invalid configuration: device_id is empty or malformed"),
            Field::DeviceKey => panic!("invalid configuration: device_key must not be empty"),
            Field::WifiPassword | Field::TelemetryIntervalMs => {
                panic!("invalid configuration")
            }
        }
    }

    pub const fn telemetry_interval(&self) -> Duration {
        Duration::from_millis(self.telemetry_interval_ms.get() as u64)
    }

    /// Logs the configuration the firmware was built with. Secrets are only
    /// printed in their redacted form.
    pub fn log_summary(&self) {
        info!("Firmware version: {}", VERSION);
        info!("Wi-Fi SSID: {}", self.wifi_ssid);
        info!("Wi-Fi password: {:?}", self.wifi_password);
        info!("IoT Hub: {}", self.iot_hub_fqdn);
        info!("Device ID: {}", self.device_id);
        info!("Device key: {:?}", self.device_key);
        info!("Telemetry interval: {} ms", self.telemetry_interval_ms);
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));

const _: () = CONFIG.assert_valid();
