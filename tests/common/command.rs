use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const TEST_WIDTH: &str = "40";

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Runs the binary without pager, colors or environment overrides.
pub fn run_sidediff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("sidediff").expect("Failed to find sidediff binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("SIDEDIFF_THEME");
    cmd.env_remove("SIDEDIFF_WIDTH");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    cmd.args(["--color", "never"]);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_compare(dir: &Path, extra: &[&str]) -> Command {
    let mut args = vec!["compare", "old.txt", "new.txt", "--width", TEST_WIDTH];
    args.extend_from_slice(extra);
    run_sidediff_command(dir, &args)
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout is utf-8")
}
