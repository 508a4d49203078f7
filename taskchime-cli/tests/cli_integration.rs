use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;

// Helper function to get the path to the compiled binary
fn taskchime_cmd() -> Command {
    Command::cargo_bin("taskchime").expect("Failed to find taskchime binary")
}

// Running the binary without arguments would try the host's real players, so
// these tests stick to paths that clap answers before any playback.

#[test]
fn test_help_describes_the_program() -> Result<(), Box<dyn Error>> {
    taskchime_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("TASK_COMPLETE_VOICE.wav"));

    Ok(())
}

#[test]
fn test_version_flag() -> Result<(), Box<dyn Error>> {
    taskchime_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));

    Ok(())
}

#[test]
fn test_rejects_arguments() -> Result<(), Box<dyn Error>> {
    taskchime_cmd()
        .arg("other.wav")
        .assert()
        .failure()
        .stderr(contains("unexpected argument 'other.wav'"));

    Ok(())
}
