use std::env;
use std::fs;
use std::path::Path;

// Bakes KEY=VALUE pairs from .env into the build so `option_env!` in
// src/config.rs can see them. Variables already set in the environment win.
fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, using built-in defaults. Copy .env.example to .env to configure the API endpoint.");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    for key in [
        "API_BASE_URL_DEVELOPMENT",
        "API_BASE_URL_PRODUCTION",
        "ENVIRONMENT",
        "ENABLE_LOGGING",
        "RETRY_ATTEMPTS",
        "RETRY_BACKOFF_MS",
        "DEFAULT_PAGE_SIZE",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
