//! Test harness utilities for writing config files and validating outputs.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A decoded PNG, enough of one to assert on.
#[derive(Debug)]
pub struct DecodedPng {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// A test harness holding a scratch directory for configs and outputs.
pub struct TestHarness {
    pub work_dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
        }
    }

    /// The scratch directory path.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Write a layer configuration file and return its path.
    pub fn write_config(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, contents).expect("Failed to write config");
        path
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Path to the checked-in demo configuration at the workspace root.
pub fn demo_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/space.toml")
}

/// Decode a PNG file, asserting it is 8-bit RGBA.
pub fn decode_png(path: &Path) -> DecodedPng {
    let file = fs::File::open(path).expect("Failed to open PNG");
    let decoder = png::Decoder::new(file);
    let mut reader = decoder.read_info().expect("Failed to read PNG header");

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("Failed to decode PNG");
    assert_eq!(info.color_type, png::ColorType::Rgba);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    buf.truncate(info.buffer_size());

    DecodedPng {
        width: info.width,
        height: info.height,
        rgba: buf,
    }
}
