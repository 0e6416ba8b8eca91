use std::{env, error::Error, fs, path::Path};

#[allow(dead_code)]
#[path = "src/constants.rs"]
mod constants;

#[allow(dead_code)]
#[path = "src/validate.rs"]
mod validate;

#[path = "src/definitions.rs"]
mod definitions;

use constants::{DEFAULT_CONFIG_FILE, ENV_CONFIG_FILE, ENV_DEVICE_KEY, ENV_WIFI_PASSWORD};
use definitions::RawConfig;

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if the definitions or any override change
    println!("cargo:rerun-if-env-changed={ENV_CONFIG_FILE}");
    println!("cargo:rerun-if-env-changed={ENV_WIFI_PASSWORD}");
    println!("cargo:rerun-if-env-changed={ENV_DEVICE_KEY}");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR")?;
    let file = env::var(ENV_CONFIG_FILE).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let path = Path::new(&manifest_dir).join(file);
    println!("cargo:rerun-if-changed={}", path.display());

    // Read, parse and validate
    let toml_str = fs::read_to_string(&path).map_err(|e| {
        format!(
            "cannot read {}: {e} (copy cfg.toml.example to cfg.toml and fill it in)",
            path.display()
        )
    })?;
    let invalid =
        |e: definitions::Error| format!("invalid configuration in {}: {e}", path.display());

    let mut raw = RawConfig::parse(&toml_str).map_err(invalid)?;
    raw.apply_overrides(env::var(ENV_WIFI_PASSWORD).ok(), env::var(ENV_DEVICE_KEY).ok());
    let resolved = raw.resolve().map_err(invalid)?;

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, resolved.render())?;
    Ok(())
}
