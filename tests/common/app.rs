//! Scratch directory plus a handle on the built binary.

use std::path::PathBuf;
use std::process::Command;

use depth_dither::RgbaImage;
use tempfile::TempDir;

use bitdither::rendering::png_codec;

/// A temporary working directory the binary runs in.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `image` as a PNG named `name` inside the workspace.
    pub fn write_png(&self, name: &str, image: &RgbaImage) -> PathBuf {
        let path = self.path(name);
        png_codec::encode(&path, image).expect("Failed to write fixture PNG");
        path
    }

    /// Write arbitrary bytes to `name` inside the workspace.
    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("Failed to write fixture file");
        path
    }

    pub fn read_png(&self, name: &str) -> RgbaImage {
        png_codec::decode(&self.path(name)).expect("Failed to read output PNG")
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }

    /// Run the binary with `args`, using the workspace as its working
    /// directory so the default file names resolve inside it.
    pub fn run(&self, args: &[&str]) -> TestOutput {
        let output = Command::new(env!("CARGO_BIN_EXE_bitdither"))
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to spawn bitdither");

        TestOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Captured result of one binary invocation.
#[derive(Debug)]
pub struct TestOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}
