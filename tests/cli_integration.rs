use assert_cmd::Command;
use predicates::prelude::*;

fn nk(dir: &std::path::Path, file: &str) -> Command {
    let mut cmd = Command::cargo_bin("nk").unwrap();
    cmd.current_dir(dir).arg("--file").arg(file);
    cmd
}

#[test]
fn list_on_missing_file_reports_no_notes() {
    let temp_dir = tempfile::tempdir().unwrap();

    nk(temp_dir.path(), "notes.json")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes stored"));
}

#[test]
fn add_then_list_shows_the_note() {
    let temp_dir = tempfile::tempdir().unwrap();

    nk(temp_dir.path(), "notes.json")
        .args(["add", "Code App", "--priority", "4", "--category", "Work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added:"));

    nk(temp_dir.path(), "notes.json")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("0: Code App"))
        .stdout(predicate::str::contains("priority 4"));
}

#[test]
fn add_rejects_priority_outside_range() {
    let temp_dir = tempfile::tempdir().unwrap();

    nk(temp_dir.path(), "notes.json")
        .args(["add", "Bad", "--priority", "9"])
        .assert()
        .failure();
}

#[test]
fn xml_format_persists_and_lists() {
    let temp_dir = tempfile::tempdir().unwrap();

    nk(temp_dir.path(), "notes.xml")
        .args(["--format", "xml", "add", "Swim - Pool", "--category", "Hobby"])
        .assert()
        .success();

    let on_disk = std::fs::read_to_string(temp_dir.path().join("notes.xml")).unwrap();
    assert!(on_disk.contains("<note>"), "not XML: {on_disk}");

    nk(temp_dir.path(), "notes.xml")
        .args(["--format", "xml", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Swim - Pool"));
}

#[test]
fn archive_moves_note_out_of_active_listing() {
    let temp_dir = tempfile::tempdir().unwrap();

    nk(temp_dir.path(), "notes.json")
        .args(["add", "Old Project"])
        .assert()
        .success();
    nk(temp_dir.path(), "notes.json")
        .args(["add", "Current Project"])
        .assert()
        .success();

    nk(temp_dir.path(), "notes.json")
        .args(["archive", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note archived"));

    nk(temp_dir.path(), "notes.json")
        .args(["list", "--active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Project"))
        .stdout(predicate::str::contains("Old Project").not());

    // Positions in filtered listings come from the full list.
    nk(temp_dir.path(), "notes.json")
        .args(["list", "--archived"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0: Old Project"));
}

#[test]
fn archiving_twice_fails_softly_without_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    nk(temp_dir.path(), "notes.json")
        .args(["add", "Once"])
        .assert()
        .success();
    nk(temp_dir.path(), "notes.json")
        .args(["archive", "0"])
        .assert()
        .success();

    nk(temp_dir.path(), "notes.json")
        .args(["archive", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already archived"));
}

#[test]
fn delete_out_of_bounds_exits_nonzero() {
    let temp_dir = tempfile::tempdir().unwrap();

    nk(temp_dir.path(), "notes.json")
        .args(["delete", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No note at index 3"));
}

#[test]
fn delete_shifts_later_positions_down() {
    let temp_dir = tempfile::tempdir().unwrap();

    for title in ["First", "Second", "Third"] {
        nk(temp_dir.path(), "notes.json")
            .args(["add", title])
            .assert()
            .success();
    }

    nk(temp_dir.path(), "notes.json")
        .args(["delete", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted: First"));

    nk(temp_dir.path(), "notes.json")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("0: Second"))
        .stdout(predicate::str::contains("1: Third"));
}

#[test]
fn update_keeps_omitted_fields() {
    let temp_dir = tempfile::tempdir().unwrap();

    nk(temp_dir.path(), "notes.json")
        .args(["add", "Draft", "--priority", "2", "--category", "Work"])
        .assert()
        .success();

    nk(temp_dir.path(), "notes.json")
        .args(["update", "0", "--title", "Final"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final"))
        .stdout(predicate::str::contains("priority 2"))
        .stdout(predicate::str::contains("Work"));
}

#[test]
fn search_is_case_insensitive_over_titles() {
    let temp_dir = tempfile::tempdir().unwrap();

    nk(temp_dir.path(), "notes.json")
        .args(["add", "Code App"])
        .assert()
        .success();
    nk(temp_dir.path(), "notes.json")
        .args(["add", "Test App"])
        .assert()
        .success();

    nk(temp_dir.path(), "notes.json")
        .args(["search", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Code App"))
        .stdout(predicate::str::contains("Test App"));

    nk(temp_dir.path(), "notes.json")
        .args(["search", "xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes match title: xyz"));
}

#[test]
fn count_honours_priority_distribution() {
    let temp_dir = tempfile::tempdir().unwrap();

    for (title, priority) in [("A", "5"), ("B", "1"), ("C", "4"), ("D", "4"), ("E", "3")] {
        nk(temp_dir.path(), "notes.json")
            .args(["add", title, "--priority", priority])
            .assert()
            .success();
    }

    nk(temp_dir.path(), "notes.json")
        .args(["count"])
        .assert()
        .success()
        .stdout(predicate::str::diff("5\n"));

    nk(temp_dir.path(), "notes.json")
        .args(["count", "--priority", "4"])
        .assert()
        .success()
        .stdout(predicate::str::diff("2\n"));

    nk(temp_dir.path(), "notes.json")
        .args(["count", "--priority", "2"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n"));
}

#[test]
fn malformed_file_fails_with_parse_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("notes.json"), "{ broken").unwrap();

    nk(temp_dir.path(), "notes.json")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed notes file"));
}
