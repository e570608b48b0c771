//! Build script for tally-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml at compile time
//! - Generates `board_config.rs` constants from it

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Slowest steady refresh rate; keep in step with tally_core::config::MIN_REFRESH_HZ
const MIN_REFRESH_HZ: i64 = 30;

/// SPI2 clock ceiling (APB1 / 2)
const MAX_SPI_FREQUENCY_HZ: i64 = 21_000_000;

/// Values read from board.toml
struct BoardSettings {
    name: String,
    hold_ms: i64,
    refresh_interval_ms: i64,
    spi_frequency_hz: i64,
    spi_mode: i64,
}

fn main() {
    setup_linker();
    let settings = validate_config();
    generate_config(&settings);
}

/// Put memory.x on the linker search path
fn setup_linker() {
    let out_dir = out_dir();
    File::create(out_dir.join("memory.x"))
        .and_then(|mut f| f.write_all(include_bytes!("memory.x")))
        .unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

fn out_dir() -> PathBuf {
    PathBuf::from(env::var("OUT_DIR").unwrap())
}

/// Validate board.toml and extract its settings
fn validate_config() -> BoardSettings {
    println!("cargo:rerun-if-changed=board.toml");

    let config = load_config(Path::new("board.toml"));
    let mut errors = Vec::new();

    let name = match config.get("board").and_then(|b| b.get("name")) {
        Some(toml::Value::String(name)) if !name.is_empty() => name.clone(),
        _ => {
            errors.push("[board] missing 'name'".to_string());
            String::new()
        }
    };

    let hold_ms = integer(&config, "display", "hold_ms", &mut errors);
    let refresh_interval_ms = integer(&config, "display", "refresh_interval_ms", &mut errors);
    let spi_frequency_hz = integer(&config, "spi", "frequency_hz", &mut errors);
    let spi_mode = integer(&config, "spi", "mode", &mut errors);

    if hold_ms < 1 || hold_ms > 1000 {
        errors.push("[display] hold_ms must be 1-1000".to_string());
    }
    if refresh_interval_ms < 0 || refresh_interval_ms > 1000 {
        errors.push("[display] refresh_interval_ms must be 0-1000".to_string());
    }
    if errors.is_empty() {
        let period_ms = 3 * hold_ms + refresh_interval_ms;
        if 1000 / period_ms.max(1) < MIN_REFRESH_HZ {
            errors.push(format!(
                "[display] refresh period {} ms is below {} Hz",
                period_ms, MIN_REFRESH_HZ
            ));
        }
    }
    if spi_frequency_hz < 1 || spi_frequency_hz > MAX_SPI_FREQUENCY_HZ {
        errors.push(format!(
            "[spi] frequency_hz must be 1-{}",
            MAX_SPI_FREQUENCY_HZ
        ));
    }
    if !(0..=3).contains(&spi_mode) {
        errors.push("[spi] mode must be 0-3".to_string());
    }

    if !errors.is_empty() {
        fail(
            "Invalid board configuration",
            errors.iter().map(|e| format!("• {}", e)),
        );
    }

    println!("cargo:warning=board.toml validated successfully");

    BoardSettings {
        name,
        hold_ms,
        refresh_interval_ms,
        spi_frequency_hz,
        spi_mode,
    }
}

/// Read and parse board.toml
fn load_config(path: &Path) -> toml::Value {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => fail(
            "Failed to read board.toml",
            [
                e.to_string(),
                "Create one in the tally-firmware directory.".to_string(),
            ],
        ),
    };

    match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in board.toml",
            e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    }
}

/// Read `[section] key` as an integer, recording an error if absent
fn integer(config: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) -> i64 {
    match config.get(section).and_then(|s| s.get(key)) {
        Some(toml::Value::Integer(v)) => *v,
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            -1
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            -1
        }
    }
}

/// Write validated settings as Rust constants
fn generate_config(settings: &BoardSettings) {
    let mut f = File::create(out_dir().join("board_config.rs")).unwrap();

    writeln!(f, "// Generated from board.toml by build.rs").unwrap();
    writeln!(f, "pub const BOARD_NAME: &str = {:?};", settings.name).unwrap();
    writeln!(f, "pub const HOLD_MS: u32 = {};", settings.hold_ms).unwrap();
    writeln!(
        f,
        "pub const REFRESH_INTERVAL_MS: u32 = {};",
        settings.refresh_interval_ms
    )
    .unwrap();
    writeln!(
        f,
        "pub const SPI_FREQUENCY_HZ: u32 = {};",
        settings.spi_frequency_hz
    )
    .unwrap();
    writeln!(f, "pub const SPI_MODE: Mode = Mode::Mode{};", settings.spi_mode).unwrap();
}

/// Abort the build with a boxed message
fn fail(title: &str, lines: impl IntoIterator<Item = String>) -> ! {
    let body = lines
        .into_iter()
        .map(|line| {
            let line = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line
            };
            format!("║  {:<64} ║", line)
        })
        .collect::<Vec<_>>()
        .join("\n");
    let rule = "═".repeat(68);

    panic!(
        "\n╔{rule}╗\n║  ERROR: {:<58} ║\n╠{rule}╣\n{}\n╚{rule}╝\n",
        title, body
    );
}
