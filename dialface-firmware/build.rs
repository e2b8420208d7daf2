//! Build script for dialface-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates clock.toml and turns it into Rust constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use dialface_core::time::{MAX_HOURS, MAX_MINUTES, MAX_SECONDS};
use dialface_core::{Color, FaceConfig, FaceError};
use serde::Deserialize;

/// Panel size the firmware drives
const PANEL_WIDTH: u16 = 128;
const PANEL_HEIGHT: u16 = 128;

/// Layout of clock.toml
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClockFile {
    #[serde(default)]
    face: FaceConfig,
    #[serde(default)]
    clock: StartTime,
}

/// `[clock]` section
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StartTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

fn main() {
    setup_linker();
    let config = load_config();
    write_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read, parse and validate clock.toml
fn load_config() -> ClockFile {
    println!("cargo:rerun-if-changed=clock.toml");

    let path = Path::new("clock.toml");
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read clock.toml", &e.to_string()),
    };

    let config: ClockFile = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail("Invalid clock.toml", &e.to_string()),
    };

    validate_face(&config.face);
    validate_start_time(&config.clock);

    println!("cargo:warning=clock.toml validated successfully");
    config
}

fn validate_face(face: &FaceConfig) {
    match face.validate() {
        Ok(()) => {}
        Err(FaceError::RadiusTooSmall) => fail(
            "[face] radius too small",
            &format!("radius = {} leaves no room for the tick ring", face.radius),
        ),
        Err(FaceError::InvalidStyle) => fail(
            "[face] style reaches outside the dial",
            "hand lengths and mark factors must stay within the radius",
        ),
        Err(FaceError::CoordinateOutOfRange) => fail(
            "[face] dial outside coordinate range",
            &format!(
                "center ({}, {}) with radius {} has negative extent",
                face.center_x, face.center_y, face.radius
            ),
        ),
    }

    if !face.fits_panel(PANEL_WIDTH, PANEL_HEIGHT) {
        fail(
            "[face] dial does not fit the panel",
            &format!(
                "center ({}, {}) radius {} exceeds {}x{}",
                face.center_x, face.center_y, face.radius, PANEL_WIDTH, PANEL_HEIGHT
            ),
        );
    }
}

fn validate_start_time(time: &StartTime) {
    if time.hours > MAX_HOURS || time.minutes > MAX_MINUTES || time.seconds > MAX_SECONDS {
        fail(
            "[clock] start time out of range",
            &format!(
                "{:02}:{:02}:{:02} is not a valid time of day",
                time.hours, time.minutes, time.seconds
            ),
        );
    }
}

/// Emit the validated config as constants in OUT_DIR
fn write_config(config: &ClockFile) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let face = &config.face;
    let color = match face.color {
        Color::Black => "Color::Black",
        Color::White => "Color::White",
    };

    let source = format!(
        "/// Face placement from clock.toml\n\
         pub const FACE: FaceConfig = FaceConfig {{\n    \
             center_x: {},\n    \
             center_y: {},\n    \
             radius: {},\n    \
             color: {},\n\
         }};\n\n\
         /// Time shown at power-up\n\
         pub const START_TIME: ClockTime = ClockTime::new({}, {}, {}, 0);\n",
        face.center_x,
        face.center_y,
        face.radius,
        color,
        config.clock.hours,
        config.clock.minutes,
        config.clock.seconds,
    );

    fs::write(out_dir.join("clock_config.rs"), source).unwrap();
}

/// Abort the build with a readable message
fn fail(title: &str, detail: &str) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(detail)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
