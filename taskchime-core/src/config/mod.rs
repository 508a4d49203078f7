//! Host context and fixed constants for the taskchime-core library.
//!
//! There is no user-facing configuration. The values here are build-time
//! constants plus the [`HostContext`] that replaces reading the current OS and
//! executable location from ambient process state.

use crate::error::{CoreError, CoreResult};
use crate::platform::Platform;
use std::env;
use std::path::{Path, PathBuf};

// Default constants

/// File name of the bundled notification sound, shipped next to the binary.
pub const ASSET_FILE_NAME: &str = "TASK_COMPLETE_VOICE.wav";

/// Windows scripting shell used to drive `Media.SoundPlayer`.
pub const WINDOWS_SHELL: &str = "powershell";

/// macOS single-purpose audio player.
pub const MACOS_PLAYER: &str = "afplay";

/// Linux players tried in order. The first two take the file as their only
/// argument; ffplay additionally needs flags to run headless and exit.
pub const LINUX_PULSE_PLAYER: &str = "paplay";
pub const LINUX_ALSA_PLAYER: &str = "aplay";
pub const LINUX_MEDIA_PLAYER: &str = "ffplay";
pub const LINUX_MEDIA_PLAYER_FLAGS: [&str; 2] = ["-nodisp", "-autoexit"];

/// Everything the dispatcher needs to know about the machine it runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContext {
    /// Operating system family.
    pub platform: Platform,
    /// Directory containing the installed executable and its bundled asset.
    pub install_dir: PathBuf,
}

impl HostContext {
    /// Creates a context from explicit values.
    pub fn new(platform: Platform, install_dir: impl Into<PathBuf>) -> Self {
        Self {
            platform,
            install_dir: install_dir.into(),
        }
    }

    /// Reads the current platform and the directory of the running executable.
    pub fn detect() -> CoreResult<Self> {
        let exe = env::current_exe()?;
        let install_dir = exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            CoreError::OperationFailed(format!(
                "Could not determine parent directory of executable '{}'",
                exe.display()
            ))
        })?;

        let context = Self::new(Platform::current(), install_dir);
        log::debug!(
            "Detected platform '{}', install directory '{}'",
            context.platform,
            context.install_dir.display()
        );
        Ok(context)
    }

    /// Absolute path of the bundled asset.
    ///
    /// The path is built from the install directory only, so the working
    /// directory matters solely when `install_dir` itself is relative. The
    /// file is not required to exist.
    pub fn asset_path(&self) -> CoreResult<PathBuf> {
        resolve_asset_path(&self.install_dir)
    }
}

/// Joins `install_dir` with [`ASSET_FILE_NAME`] and makes the result absolute.
pub fn resolve_asset_path(install_dir: &Path) -> CoreResult<PathBuf> {
    Ok(std::path::absolute(install_dir.join(ASSET_FILE_NAME))?)
}
