use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteBin, PathChild};
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;
use common::command::{run_compare, run_sidediff_command, stdout_of, workspace_dir};
use common::file::write_pair;

const HEADER: &str = "old.txt            │ new.txt\n\
                      ───────────────────┼───────────────────\n";
const LEGEND: &str = "\n +  Added   -  Removed   ~  Modified\n";

#[rstest]
fn show_replaced_line_as_modified_pair(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(workspace_dir.path(), "a\nb\nc", "a\nx\nc");

    let actual = stdout_of(&mut run_compare(workspace_dir.path(), &[]));
    let expected = format!(
        "{HEADER}  1   a            │   1   a\n  \
                   2 ~ b            │   2 ~ x\n  \
                   3   c            │   3   c\n{LEGEND}"
    );

    assert_eq!(actual, expected);
    Ok(())
}

#[rstest]
fn show_appended_line_only_on_new_side(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(workspace_dir.path(), "a\nb", "a\nb\nc");

    let actual = stdout_of(&mut run_compare(workspace_dir.path(), &[]));
    let expected = format!(
        "{HEADER}  1   a            │   1   a\n  \
                   2   b            │   2   b\n                   \
                   │   3 + c\n{LEGEND}"
    );

    assert_eq!(actual, expected);
    Ok(())
}

#[rstest]
fn show_every_line_as_added_when_old_text_is_empty(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(workspace_dir.path(), "", "a\nb\n");

    let actual = stdout_of(&mut run_compare(workspace_dir.path(), &[]));
    let expected = format!(
        "{HEADER}                   │   1 + a\n                   \
                   │   2 + b\n{LEGEND}"
    );

    assert_eq!(actual, expected);
    Ok(())
}

#[rstest]
fn trailing_newline_does_not_show_as_change(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(workspace_dir.path(), "same\nlines\n", "same\nlines");

    let actual = stdout_of(&mut run_compare(workspace_dir.path(), &["--no-legend"]));
    let expected = format!(
        "{HEADER}  1   same         │   1   same\n  \
                   2   lines        │   2   lines\n"
    );

    assert_eq!(actual, expected);
    Ok(())
}

#[rstest]
fn show_only_header_when_both_texts_are_empty(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(workspace_dir.path(), "", "");

    let actual = stdout_of(&mut run_compare(workspace_dir.path(), &["--no-legend"]));

    assert_eq!(actual, HEADER);
    Ok(())
}

#[rstest]
fn read_old_text_from_stdin(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(workspace_dir.path(), "", "keep\nnew line\n");

    let mut cmd = run_sidediff_command(
        workspace_dir.path(),
        &["compare", "-", "new.txt", "--width", "40", "--no-legend"],
    );
    cmd.write_stdin("keep\nold line\n");

    let actual = stdout_of(&mut cmd);
    let expected = "(stdin)            │ new.txt\n\
                    ───────────────────┼───────────────────\n  \
                    1   keep         │   1   keep\n  \
                    2 ~ old line     │   2 ~ new line\n";

    assert_eq!(actual, expected);
    Ok(())
}

#[rstest]
fn scroll_aligned_view_to_the_bottom(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(workspace_dir.path(), "a\nb\nc\nd\ne\nf", "a\nc\nf\ng");

    let actual = stdout_of(&mut run_compare(
        workspace_dir.path(),
        &["--height", "2", "--scroll", "1", "--no-legend"],
    ));
    let expected = format!(
        "{HEADER}  6   f            │   3   f\n                   \
                   │   4 + g\n"
    );

    assert_eq!(actual, expected);
    Ok(())
}

#[rstest]
fn scroll_panels_keeps_both_sides_at_the_same_fraction(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(workspace_dir.path(), "a\nb\nc\nd\ne\nf", "a\nc\nf\ng");

    let actual = stdout_of(&mut run_compare(
        workspace_dir.path(),
        &["--layout", "panels", "--height", "2", "--scroll", "1", "--no-legend"],
    ));
    let expected = format!(
        "{HEADER}  5 - e            │   3   f\n  \
                   6   f            │   4 + g\n"
    );

    assert_eq!(actual, expected);
    Ok(())
}

#[rstest]
fn lcs_algorithm_renders_the_same_replacement(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(workspace_dir.path(), "a\nb\nc", "a\nx\nc");

    let myers = stdout_of(&mut run_compare(workspace_dir.path(), &[]));
    let lcs = stdout_of(&mut run_compare(workspace_dir.path(), &["--algorithm", "lcs"]));

    assert_eq!(lcs, myers);
    Ok(())
}

#[rstest]
fn dark_theme_from_environment_is_accepted(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(workspace_dir.path(), "a", "b");

    let mut cmd = run_compare(workspace_dir.path(), &["--no-legend"]);
    cmd.env("SIDEDIFF_THEME", "dark");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("  1 ~ a            │   1 ~ b"));
    Ok(())
}

#[rstest]
fn fail_when_a_file_is_missing(workspace_dir: TempDir) {
    run_sidediff_command(workspace_dir.path(), &["compare", "old.txt", "new.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read text from old.txt"));
}

#[rstest]
fn fail_when_stdin_is_used_twice(workspace_dir: TempDir) {
    run_sidediff_command(workspace_dir.path(), &["compare", "-", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "stdin can only be used for one side of the comparison",
        ));
}

#[rstest]
fn fail_on_binary_content(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(workspace_dir.path(), "", "text");
    workspace_dir.child("old.txt").write_binary(&[0xff, 0xfe, 0x00, 0x01])?;

    run_compare(workspace_dir.path(), &[])
        .assert()
        .failure()
        .stderr(predicate::str::contains("old.txt is not valid UTF-8 text"));
    Ok(())
}

#[rstest]
#[case::narrow(&["--width", "10"], "width must be at least 20 columns, got 10")]
#[case::too_wide(&["--width", "5000"], "width must be at most 1000 columns, got 5000")]
#[case::scroll_out_of_range(
    &["--height", "3", "--scroll", "2"],
    "scroll must be a fraction between 0 and 1, got 2"
)]
#[case::zero_height(&["--height", "0"], "height must be at least 1 line")]
fn fail_on_invalid_view_options(
    workspace_dir: TempDir,
    #[case] extra: &[&str],
    #[case] message: &str,
) {
    write_pair(workspace_dir.path(), "a", "b");

    let mut args = vec!["compare", "old.txt", "new.txt"];
    args.extend_from_slice(extra);

    run_sidediff_command(workspace_dir.path(), &args)
        .assert()
        .failure()
        .stderr(predicate::str::contains(message));
}
