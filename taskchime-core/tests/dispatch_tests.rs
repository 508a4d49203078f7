// taskchime-core/tests/dispatch_tests.rs

use taskchime_core::external::mocks::MockCommandRunner;
use taskchime_core::{ASSET_FILE_NAME, CoreError, HostContext, Platform, play_notification};
#[cfg(target_os = "linux")]
use taskchime_core::{CommandRunner, CoreResult, PlayerCommand};
#[cfg(target_os = "linux")]
use std::path::Path;
use std::ffi::OsString;
use tempfile::tempdir;

#[test]
fn test_darwin_plays_asset_with_afplay() -> Result<(), Box<dyn std::error::Error>> {
    let install_dir = tempdir()?;
    let context = HostContext::new(Platform::from_identifier("darwin"), install_dir.path());

    let runner = MockCommandRunner::new();
    runner.add_success();

    let outcome = play_notification(&context, &runner)?;

    let expected = format!(
        "afplay \"{}\"",
        install_dir.path().join(ASSET_FILE_NAME).display()
    );
    assert_eq!(outcome.command.to_string(), expected);
    assert_eq!(outcome.attempts, 1);
    assert_eq!(runner.get_received_calls(), vec![outcome.command]);

    Ok(())
}

#[test]
fn test_windows_runs_single_powershell_command() -> Result<(), Box<dyn std::error::Error>> {
    let install_dir = tempdir()?;
    let context = HostContext::new(Platform::Windows, install_dir.path());

    let runner = MockCommandRunner::new();
    runner.add_success();

    play_notification(&context, &runner)?;

    let calls = runner.get_received_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, "powershell");
    let script = calls[0].args[1].to_string_lossy();
    assert!(script.contains(ASSET_FILE_NAME));
    assert!(script.ends_with("').PlaySync()"));

    Ok(())
}

#[test]
fn test_linux_first_player_success_skips_fallbacks() -> Result<(), Box<dyn std::error::Error>> {
    let install_dir = tempdir()?;
    let context = HostContext::new(Platform::from_identifier("linux"), install_dir.path());

    let runner = MockCommandRunner::new();
    runner.add_success();

    let outcome = play_notification(&context, &runner)?;

    assert_eq!(outcome.command.program, "paplay");
    assert_eq!(runner.get_received_calls().len(), 1);

    Ok(())
}

#[test]
fn test_linux_falls_through_to_ffplay() -> Result<(), Box<dyn std::error::Error>> {
    let install_dir = tempdir()?;
    let context = HostContext::new(Platform::Linux, install_dir.path());

    let runner = MockCommandRunner::new();
    runner.add_not_found();
    runner.add_not_found();
    runner.add_success();

    let outcome = play_notification(&context, &runner)?;

    assert_eq!(outcome.attempts, 3);
    assert_eq!(outcome.command.program, "ffplay");
    assert_eq!(
        &outcome.command.args[..2],
        [OsString::from("-nodisp"), OsString::from("-autoexit")]
    );

    Ok(())
}

#[test]
fn test_linux_all_players_fail() -> Result<(), Box<dyn std::error::Error>> {
    let install_dir = tempdir()?;
    let context = HostContext::new(Platform::Linux, install_dir.path());

    let runner = MockCommandRunner::new();
    runner.add_exit_error(1, "Connection failure: Connection refused");
    runner.add_exit_error(1, "aplay: main:831: audio open error: No such file or directory");
    runner.add_exit_error(1, "TASK_COMPLETE_VOICE.wav: No such file or directory");

    let err = play_notification(&context, &runner).unwrap_err();

    assert!(matches!(err, CoreError::PlaybackFailed(_)));
    assert!(err.to_string().contains("TASK_COMPLETE_VOICE.wav: No such file or directory"));
    assert_eq!(runner.get_received_calls().len(), 3);

    Ok(())
}

#[test]
fn test_asset_path_is_absolute_under_install_dir() -> Result<(), Box<dyn std::error::Error>> {
    let install_dir = tempdir()?;
    let context = HostContext::new(Platform::MacOS, install_dir.path());

    let path = context.asset_path()?;

    assert!(path.is_absolute());
    assert_eq!(path.parent(), Some(install_dir.path()));

    Ok(())
}

// Player that only succeeds when the file named by its last argument exists.
// Linux only: APFS rejects file names that are not valid UTF-8.
#[cfg(target_os = "linux")]
struct ExistingFileRunner;

#[cfg(target_os = "linux")]
impl CommandRunner for ExistingFileRunner {
    fn run(&self, command: &PlayerCommand) -> CoreResult<()> {
        match command.args.last() {
            Some(arg) if Path::new(arg).exists() => Ok(()),
            _ => Err(CoreError::CommandFailed {
                command: command.to_string(),
                code: 1,
                stderr: "No such file or directory".to_string(),
            }),
        }
    }
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_install_dir_reaches_player_intact() -> Result<(), Box<dyn std::error::Error>> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let root = tempdir()?;
    let install_dir = root.path().join(OsStr::from_bytes(b"hooks\xff"));
    std::fs::create_dir(&install_dir)?;
    std::fs::write(install_dir.join(ASSET_FILE_NAME), b"RIFF")?;

    let context = HostContext::new(Platform::Linux, &install_dir);

    let outcome = play_notification(&context, &ExistingFileRunner)?;

    assert_eq!(outcome.command.program, "paplay");
    assert_eq!(outcome.attempts, 1);

    Ok(())
}
