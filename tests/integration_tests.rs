//! End-to-end tests: files on disk in, rendered report and exit code out.

use config_diff::cli::run_diff;
use config_diff::config::{DiffConfig, DiffPaths, OutputConfig};
use config_diff::pipeline::exit_codes;
use config_diff::{parse_config, DiffEngine, DiffOptions, ReportFormat};
use std::path::{Path, PathBuf};

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("failed to write fixture");
    path
}

fn config(before: PathBuf, after: PathBuf, format: ReportFormat) -> DiffConfig {
    DiffConfig {
        paths: DiffPaths { before, after },
        output: OutputConfig {
            format,
            file: None,
            no_color: true,
        },
        options: DiffOptions::default(),
        quiet: true,
    }
}

mod exit_code_tests {
    use super::*;

    #[test]
    fn test_identical_files_exit_zero() {
        let dir = tempfile::tempdir().unwrap();
        let before = write_file(dir.path(), "before.json", r#"{"port": 80}"#);
        let after = write_file(dir.path(), "after.json", r#"{"port": 80}"#);
        let code = run_diff(&config(before, after, ReportFormat::Text)).unwrap();
        assert_eq!(code, exit_codes::NO_CHANGES);
    }

    #[test]
    fn test_semantically_equal_files_exit_zero() {
        let dir = tempfile::tempdir().unwrap();
        // Different key order and whitespace, same content.
        let before = write_file(dir.path(), "before.json", "{\"a\": 1, \"b\": 2}");
        let after = write_file(dir.path(), "after.json", "{\n  \"b\": 2,\n  \"a\": 1\n}");
        let code = run_diff(&config(before, after, ReportFormat::Text)).unwrap();
        assert_eq!(code, exit_codes::NO_CHANGES);
    }

    #[test]
    fn test_differing_files_exit_one() {
        let dir = tempfile::tempdir().unwrap();
        let before = write_file(dir.path(), "before.json", r#"{"port": 80}"#);
        let after = write_file(dir.path(), "after.json", r#"{"port": 8080}"#);
        let code = run_diff(&config(before, after, ReportFormat::Json)).unwrap();
        assert_eq!(code, exit_codes::CHANGES_DETECTED);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let before = write_file(dir.path(), "before.json", r#"{"a": 1}"#);
        let after = dir.path().join("does-not-exist.json");
        assert!(run_diff(&config(before, after, ReportFormat::Text)).is_err());
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let before = write_file(dir.path(), "before.json", r#"{"a": 1}"#);
        let after = write_file(dir.path(), "after.json", "{broken");
        let err = run_diff(&config(before, after, ReportFormat::Text)).unwrap_err();
        assert!(err.to_string().contains("after.json"));
    }

    #[test]
    fn test_format_mismatch_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let before = write_file(dir.path(), "before.json", r#"{"a": 1}"#);
        let after = write_file(dir.path(), "after.yaml", "a: 1\n");
        let err = run_diff(&config(before, after, ReportFormat::Text)).unwrap_err();
        assert!(err.to_string().contains("format mismatch"));
    }

    #[test]
    fn test_depth_limit_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut nested = String::from("1");
        for _ in 0..20 {
            nested = format!("{{\"n\": {nested}}}");
        }
        let before = write_file(dir.path(), "before.json", &nested);
        let after = write_file(dir.path(), "after.json", &nested.replace(": 1", ": 2"));

        let mut cfg = config(before, after, ReportFormat::Text);
        cfg.options.max_depth = 5;
        let err = run_diff(&cfg).unwrap_err();
        assert!(err.to_string().contains("depth"));
    }
}

mod output_tests {
    use super::*;

    #[test]
    fn test_json_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let before = write_file(dir.path(), "before.yaml", "server:\n  port: 80\n");
        let after = write_file(
            dir.path(),
            "after.yaml",
            "server:\n  port: 8080\n  tls: true\n",
        );
        let out = dir.path().join("report.json");

        let mut cfg = config(before, after, ReportFormat::Json);
        cfg.output.file = Some(out.clone());
        let code = run_diff(&cfg).unwrap();
        assert_eq!(code, exit_codes::CHANGES_DETECTED);

        let report: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(report["total_changes"], 2);
        assert_eq!(report["changes"][0]["path"], "server.port");
        assert_eq!(report["changes"][0]["type"], "modified");
        assert_eq!(report["changes"][1]["path"], "server.tls");
        assert_eq!(report["changes"][1]["type"], "added");
        assert_eq!(report["metadata"]["format"], "yaml");
    }

    #[test]
    fn test_report_is_stable_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let before = write_file(dir.path(), "before.toml", "[db]\nhost = \"a\"\nport = 5432\n");
        let after = write_file(dir.path(), "after.toml", "[db]\nhost = \"b\"\nport = 5432\n");
        let first_out = dir.path().join("first.json");
        let second_out = dir.path().join("second.json");

        let mut cfg = config(before.clone(), after.clone(), ReportFormat::Json);
        cfg.output.file = Some(first_out.clone());
        run_diff(&cfg).unwrap();
        cfg.output.file = Some(second_out.clone());
        run_diff(&cfg).unwrap();

        assert_eq!(
            std::fs::read_to_string(first_out).unwrap(),
            std::fs::read_to_string(second_out).unwrap()
        );
    }
}

mod format_tests {
    use super::*;

    #[test]
    fn test_ini_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let before = write_file(dir.path(), "before.ini", "[server]\nport = 80\n");
        let after = write_file(dir.path(), "after.ini", "[server]\nport = 8080\n");
        let code = run_diff(&config(before, after, ReportFormat::Text)).unwrap();
        // INI values are strings, so this is a modified string, not an int.
        assert_eq!(code, exit_codes::CHANGES_DETECTED);
    }

    #[test]
    fn test_cross_format_parity() {
        // The same logical document parsed from JSON and YAML normalizes
        // to identical value trees.
        let dir = tempfile::tempdir().unwrap();
        let json = write_file(
            dir.path(),
            "a.json",
            r#"{"server": {"port": 8080, "hosts": ["x", "y"]}, "debug": false}"#,
        );
        let yaml = write_file(
            dir.path(),
            "a.yaml",
            "server:\n  port: 8080\n  hosts:\n    - x\n    - y\ndebug: false\n",
        );
        assert_eq!(parse_config(&json).unwrap(), parse_config(&yaml).unwrap());
    }

    #[test]
    fn test_ignore_order_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let before = write_file(dir.path(), "before.json", r#"{"hosts": ["a", "b", "c"]}"#);
        let after = write_file(dir.path(), "after.json", r#"{"hosts": ["c", "a", "b"]}"#);

        let mut cfg = config(before, after, ReportFormat::Text);
        cfg.options.ignore_order = true;
        assert_eq!(run_diff(&cfg).unwrap(), exit_codes::NO_CHANGES);
    }
}

#[test]
fn test_library_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let before_path = write_file(dir.path(), "before.yaml", "a: 1\nb: [1, 2]\n");
    let after_path = write_file(dir.path(), "after.yaml", "a: 1\nb: [1, 3]\n");

    let before = parse_config(&before_path).unwrap();
    let after = parse_config(&after_path).unwrap();
    let result = DiffEngine::new().compare(&before, &after).unwrap();

    assert_eq!(result.total_changes(), 1);
    assert_eq!(result.changes()[0].path.to_string(), "b[1]");
}
