use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::{ExistingTags, TagError, TagStore};

/// Tag store that shells out to a helper program.
///
/// Reading runs `<program> [script] <file> --read-tags` and expects lines of
/// the form `Track: 7`, `Album: MyBook`, `Title: Intro` on stdout. Writing
/// runs `<program> [script] <file> --track <n> --album <album>` and treats a
/// non-zero exit as failure. The helper is waited on without a timeout.
#[derive(Debug, Clone)]
pub struct CommandTagStore {
    program: String,
    script: Option<PathBuf>,
}

impl CommandTagStore {
    pub fn new(program: impl Into<String>, script: Option<PathBuf>) -> Self {
        Self {
            program: program.into(),
            script,
        }
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        if let Some(script) = &self.script {
            cmd.arg(script);
        }
        cmd.arg(path);
        cmd
    }
}

/// Parse the `Key: value` lines printed by the helper's `--read-tags` mode.
///
/// Unknown lines are ignored. A track of the form `3/12` yields `3`.
pub fn parse_tag_output(output: &str) -> ExistingTags {
    let mut tags = ExistingTags::default();

    for line in output.lines() {
        let line = line.trim();
        if let Some(v) = line.strip_prefix("Track:") {
            tags.track_number = v
                .split('/')
                .next()
                .and_then(|n| n.trim().parse().ok());
        } else if let Some(v) = line.strip_prefix("Album:") {
            let v = v.trim();
            if !v.is_empty() {
                tags.album = Some(v.to_string());
            }
        } else if let Some(v) = line.strip_prefix("Title:") {
            let v = v.trim();
            if !v.is_empty() {
                tags.title = Some(v.to_string());
            }
        }
    }

    tags
}

impl TagStore for CommandTagStore {
    fn read_tags(&self, path: &Path) -> ExistingTags {
        let output = match self.command(path).arg("--read-tags").output() {
            Ok(output) => output,
            Err(e) => {
                debug!("cannot run {} for {}: {}", self.program, path.display(), e);
                return ExistingTags::default();
            }
        };

        if !output.status.success() {
            debug!(
                "{} --read-tags exited with {} for {}",
                self.program,
                output.status,
                path.display()
            );
            return ExistingTags::default();
        }

        parse_tag_output(&String::from_utf8_lossy(&output.stdout))
    }

    fn write_tags(&self, path: &Path, track_number: u32, album: &str) -> Result<(), TagError> {
        let output = self
            .command(path)
            .arg("--track")
            .arg(track_number.to_string())
            .arg("--album")
            .arg(album)
            .output()
            .map_err(|source| TagError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        let mut detail = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if detail.is_empty() {
            detail = String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
        if detail.is_empty() {
            detail = format!("{} exited with {}", self.program, output.status);
        }
        Err(TagError::Command(detail))
    }
}
