use crate::error::{Result, SkylineError};
use crate::skyline::{to_scad, Solid};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Converts solids to mesh files through the OpenSCAD command line.
pub struct OpenScad {
    binary: PathBuf,
}

impl OpenScad {
    pub fn new<P: AsRef<Path>>(binary: P) -> Self {
        Self {
            binary: binary.as_ref().to_path_buf(),
        }
    }

    /// Writes `solid` to an intermediate `.scad` file next to `output` and
    /// asks the renderer to export it. The intermediate file is removed on
    /// every return path when it goes out of scope.
    pub fn render(&self, solid: &Solid, output: &Path) -> Result<()> {
        let dir = match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let stem = output
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "skyline".to_string());

        let mut scad = tempfile::Builder::new()
            .prefix(&format!("{stem}_"))
            .suffix(".scad")
            .tempfile_in(dir)?;
        scad.write_all(to_scad(solid).as_bytes())?;
        scad.flush()?;
        debug!(path = %scad.path().display(), "wrote intermediate scad file");

        info!(binary = %self.binary.display(), output = %output.display(), "running renderer");
        let result = Command::new(&self.binary)
            .arg("-o")
            .arg(output)
            .arg(scad.path())
            .output();

        let out = match result {
            Ok(out) => out,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SkylineError::RendererNotFound {
                    binary: self.binary.display().to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        if !out.status.success() {
            return Err(SkylineError::RenderFailed {
                status: out.status.to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            });
        }

        debug!("renderer finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scad_files(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| p.extension().is_some_and(|e| e == "scad"))
            .collect()
    }

    #[test]
    fn missing_renderer_is_reported_and_cleaned_up() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = OpenScad::new(dir.path().join("no-such-openscad"));
        let output = dir.path().join("git_alice_2021.stl");

        let err = renderer
            .render(&Solid::cube(1.0, 1.0, 1.0), &output)
            .unwrap_err();

        assert!(matches!(err, SkylineError::RendererNotFound { .. }));
        assert!(scad_files(dir.path()).is_empty());
        assert!(!output.exists());
    }

    #[test]
    fn missing_output_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = OpenScad::new("openscad");
        let output = dir.path().join("missing").join("out.stl");

        let err = renderer
            .render(&Solid::cube(1.0, 1.0, 1.0), &output)
            .unwrap_err();
        assert!(matches!(err, SkylineError::Io(_)));
    }
}
