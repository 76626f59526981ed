use std::io::Write;
use std::process::{Command, Output, Stdio};

fn groupie(tmp: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_groupie"));
    cmd.env("GROUPIE_HOME", tmp.join(".groupie"))
        .env_remove("GROUPIE_CONFIG")
        .env_remove("GROUPIE_SUGGESTIONS_FILE")
        .env_remove("GROUPIE_SUGGESTIONS_URL")
        .env_remove("GROUPIE_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn write_animals(tmp: &std::path::Path) -> std::path::PathBuf {
    let path = tmp.join("animals.json");
    std::fs::write(
        &path,
        r#"[
            {"suggestion": "category", "from": "words"},
            {"suggestion": "Cat", "from": "animals"},
            {"suggestion": "dog", "from": "animals"}
        ]"#,
    )
    .unwrap();
    path
}

fn json_labels(output: &Output) -> Vec<String> {
    serde_json::from_slice(&output.stdout).unwrap()
}

fn run_session(tmp: &std::path::Path, args: &[&str], script: &str) -> Output {
    let mut child = groupie(tmp)
        .arg("session")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

// --- suggest ---

#[test]
fn suggest_finds_seed_suggestions() {
    let tmp = tempfile::tempdir().unwrap();
    let output = groupie(tmp.path())
        .args(["suggest", "queen", "--seed"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("queen"));
    assert!(stdout.contains("artist/band"));
    assert!(stdout.contains("queensland-australia"));
}

#[test]
fn suggest_orders_exact_match_first() {
    let tmp = tempfile::tempdir().unwrap();
    let file = write_animals(tmp.path());
    let output = groupie(tmp.path())
        .args(["suggest", "cat", "--json", "--file"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        json_labels(&output),
        ["cat - animals", "category - words"]
    );
}

#[test]
fn suggest_case_insensitive() {
    let tmp = tempfile::tempdir().unwrap();
    let output = groupie(tmp.path())
        .args(["suggest", "PINK FLOYD", "--seed", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(json_labels(&output)[0], "pink floyd - artist/band");
}

#[test]
fn suggest_drops_duplicate_labels() {
    let tmp = tempfile::tempdir().unwrap();
    let output = groupie(tmp.path())
        .args(["suggest", "london", "--seed", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(json_labels(&output), ["london-uk - location"]);
}

#[test]
fn suggest_min_score_flag() {
    let tmp = tempfile::tempdir().unwrap();
    let output = groupie(tmp.path())
        .args(["suggest", "queen", "--seed", "--json", "--min-score", "100"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(json_labels(&output), ["queen - artist/band"]);
}

#[test]
fn suggest_shows_scores() {
    let tmp = tempfile::tempdir().unwrap();
    let output = groupie(tmp.path())
        .args(["suggest", "queen", "--seed", "--scores"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("113"));
    assert!(stdout.contains("12"));
}

#[test]
fn suggest_no_results() {
    let tmp = tempfile::tempdir().unwrap();
    let output = groupie(tmp.path())
        .args(["suggest", "nonexistent", "--seed"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No suggestions found"));
}

#[test]
fn suggest_empty_query_returns_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let output = groupie(tmp.path())
        .args(["suggest", "  ", "--seed", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(json_labels(&output).is_empty());
}

#[test]
fn suggest_missing_file_degrades_to_no_suggestions() {
    let tmp = tempfile::tempdir().unwrap();
    let output = groupie(tmp.path())
        .args(["suggest", "cat", "--file"])
        .arg(tmp.path().join("missing.json"))
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No suggestions found"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error fetching initial suggestions"));
}

#[test]
fn suggest_invalid_json_degrades_to_no_suggestions() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("broken.json");
    std::fs::write(&file, "<html>oops</html>").unwrap();
    let output = groupie(tmp.path())
        .args(["suggest", "cat", "--json", "--file"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(json_labels(&output).is_empty());
}

#[test]
fn suggest_reads_source_from_env() {
    let tmp = tempfile::tempdir().unwrap();
    let file = write_animals(tmp.path());
    let output = groupie(tmp.path())
        .args(["suggest", "dog", "--json"])
        .env("GROUPIE_SUGGESTIONS_FILE", &file)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(json_labels(&output), ["dog - animals"]);
}

#[test]
fn suggest_rejects_conflicting_sources() {
    let tmp = tempfile::tempdir().unwrap();
    let output = groupie(tmp.path())
        .args(["suggest", "cat", "--seed", "--url", "http://localhost:1"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

// --- config ---

#[test]
fn config_file_sets_source_and_threshold() {
    let tmp = tempfile::tempdir().unwrap();
    let file = write_animals(tmp.path());
    let home = tmp.path().join(".groupie");
    std::fs::create_dir_all(&home).unwrap();
    std::fs::write(
        home.join("config.toml"),
        format!(
            "min_score = 13\nsuggestions_file = {:?}\n",
            file.display().to_string()
        ),
    )
    .unwrap();

    let output = groupie(tmp.path())
        .args(["suggest", "cat", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(json_labels(&output), ["cat - animals"]);
}

#[test]
fn config_flag_must_exist() {
    let tmp = tempfile::tempdir().unwrap();
    let output = groupie(tmp.path())
        .args(["suggest", "cat", "--seed", "--config"])
        .arg(tmp.path().join("nope.toml"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed reading config"));
}

#[test]
fn malformed_config_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("config.toml");
    std::fs::write(&config, "debounce_ms = [1, 2]\n").unwrap();
    let output = groupie(tmp.path())
        .args(["config"])
        .env("GROUPIE_CONFIG", &config)
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid config"));
}

#[test]
fn config_shows_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let output = groupie(tmp.path()).args(["config"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("defaults (no config file)"));
    assert!(stdout.contains("debounce_ms = 100"));
    assert!(stdout.contains("min_score = 2"));
    assert!(stdout.contains("http://localhost:8080/search-suggestions?init=true"));
}

// --- session ---

#[test]
fn session_keyboard_selection_navigates() {
    let tmp = tempfile::tempdir().unwrap();
    let file = write_animals(tmp.path());
    let output = run_session(
        tmp.path(),
        &["--file", file.to_str().unwrap()],
        "c\nca\ncat\n:wait 400\n:down\n:down\n:enter\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("suggestions (").count(), 1);
    assert!(stdout.contains("suggestions (2):"));
    assert!(stdout.contains("[0] cat - animals"));
    assert!(stdout.contains("focus [1] category - words"));
    assert!(stdout.contains("navigate http://localhost:8080/?query=category"));
}

#[test]
fn session_click_uses_text_before_separator() {
    let tmp = tempfile::tempdir().unwrap();
    let output = run_session(
        tmp.path(),
        &["--seed"],
        "pink\n:wait 400\n:click 0\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("navigate http://localhost:8080/?query=pink%20floyd"));
}

#[test]
fn session_enter_without_focus_searches_input() {
    let tmp = tempfile::tempdir().unwrap();
    let output = run_session(tmp.path(), &["--seed"], "  a&b \n:enter\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("navigate http://localhost:8080/?query=a%26b"));
}

#[test]
fn session_empty_input_clears() {
    let tmp = tempfile::tempdir().unwrap();
    let output = run_session(tmp.path(), &["--seed"], "queen\n:wait 400\n\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[0] queen - artist/band"));
    assert!(stdout.trim_end().ends_with("cleared"));
}

#[test]
fn session_failed_fetch_shows_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let output = run_session(
        tmp.path(),
        &["--file", tmp.path().join("missing.json").to_str().unwrap()],
        ":wait 200\nqueen\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("suggestions (0):"));
}

// --- range ---

#[test]
fn range_reports_each_move() {
    let tmp = tempfile::tempdir().unwrap();
    let output = groupie(tmp.path())
        .args([
            "range",
            "--id",
            "creation-date",
            "--min",
            "1950",
            "--max",
            "2020",
            "--drag",
            "low:150",
            "--drag",
            "high:0",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "creation-date: 1950 - 2020",
            "creation-date: 1985 - 2020",
            "creation-date: 1985 - 1985",
        ]
    );
}

#[test]
fn range_json_lines() {
    let tmp = tempfile::tempdir().unwrap();
    let output = groupie(tmp.path())
        .args(["range", "--low", "25", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let change: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(change["sliderId"], "range");
    assert_eq!(change["low"], 25);
    assert_eq!(change["high"], 100);
}

#[test]
fn range_rejects_bad_drag() {
    let tmp = tempfile::tempdir().unwrap();
    let output = groupie(tmp.path())
        .args(["range", "--drag", "middle:10"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown handle"));
}

#[test]
fn range_rejects_low_above_high() {
    let tmp = tempfile::tempdir().unwrap();
    let output = groupie(tmp.path())
        .args(["range", "--min", "0", "--max", "100", "--low", "80", "--high", "20"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must not be above --high"));
}

#[test]
fn range_accepts_negative_bounds() {
    let tmp = tempfile::tempdir().unwrap();
    let output = groupie(tmp.path())
        .args(["range", "--min", "-10", "--max", "10", "--low", "-5"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "range: -5 - 10");
}

#[test]
fn range_initial_values_snap_to_track_pixels() {
    let tmp = tempfile::tempdir().unwrap();
    let output = groupie(tmp.path())
        .args(["range", "--max", "1000", "--low", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "range: 0 - 1000");
}
