//! Image conversion through external tools.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

/// Produces a square PNG of a given size from an image file.
pub trait Converter {
    /// Render `source` into the PNG `dest` at `size`x`size` pixels.
    ///
    /// Returns true if `dest` was written.
    fn convert(&self, source: &Path, dest: &Path, size: u32) -> bool;
}

/// Converter backed by command-line tools.
///
/// SVG and SVGZ sources go through `rsvg-convert`; everything else through
/// ImageMagick's `convert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandConverter {
    svg_program: String,
    image_program: String,
}

impl Default for CommandConverter {
    fn default() -> Self {
        Self {
            svg_program: "rsvg-convert".to_string(),
            image_program: "convert".to_string(),
        }
    }
}

impl CommandConverter {
    /// Create a converter using `rsvg-convert` and `convert` from `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different program for SVG sources.
    pub fn with_svg_program(mut self, program: impl Into<String>) -> Self {
        self.svg_program = program.into();
        self
    }

    /// Use a different program for raster sources.
    pub fn with_image_program(mut self, program: impl Into<String>) -> Self {
        self.image_program = program.into();
        self
    }

    /// Build the command that converts `source` into `dest`.
    pub fn command(&self, source: &Path, dest: &Path, size: u32) -> Command {
        if is_svg(source) {
            let mut cmd = Command::new(&self.svg_program);
            cmd.arg(source)
                .arg("-o")
                .arg(dest)
                .arg(format!("--width={size}"))
                .arg(format!("--height={size}"));
            cmd
        } else {
            let mut cmd = Command::new(&self.image_program);
            cmd.arg(source)
                .arg("-thumbnail")
                .arg(format!("{size}x{size}"))
                .arg(dest);
            cmd
        }
    }
}

impl Converter for CommandConverter {
    fn convert(&self, source: &Path, dest: &Path, size: u32) -> bool {
        let mut cmd = self.command(source, dest, size);
        trace!(target: "ils_raster::converter", ?cmd, "converting");

        match cmd.stdout(Stdio::null()).stderr(Stdio::null()).status() {
            Ok(status) if status.success() => true,
            Ok(status) => {
                debug!(target: "ils_raster::converter", source = %source.display(), %status, "conversion failed");
                false
            }
            Err(e) => {
                debug!(target: "ils_raster::converter", source = %source.display(), "conversion tool unavailable: {e}");
                false
            }
        }
    }
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg") || e.eq_ignore_ascii_case("svgz"))
}
