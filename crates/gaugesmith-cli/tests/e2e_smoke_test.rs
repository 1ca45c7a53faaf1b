use std::{fs, path::PathBuf};

use tempfile::tempdir;

use gaugesmith::GaugesmithError;
use gaugesmith_cli::{Args, run};

/// Demo documents live at the workspace root, next to the crates.
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(input: &PathBuf, output_dir: &std::path::Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output_dir: output_dir.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let demos = collect_json_files(demos_path());
    assert!(!demos.is_empty(), "No demo documents found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &demos {
        let temp_dir = tempdir().expect("Failed to create temp directory");

        match run(&args(demo_path, temp_dir.path())) {
            Ok(report) => {
                for path in report.written() {
                    let content = fs::read_to_string(path).unwrap();
                    assert!(content.starts_with("<?xml"), "{}", path.display());
                }
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nDemos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo(s) failed unexpectedly", failed_demos.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let error_demos = collect_json_files(demos_path().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let temp_dir = tempdir().expect("Failed to create temp directory");

        if run(&args(demo_path, temp_dir.path())).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_speedometer_writes_one_file_per_layer() {
    let temp_dir = tempdir().unwrap();
    let input = demos_path().join("speedometer.json");

    let report = run(&args(&input, temp_dir.path())).unwrap();

    assert_eq!(report.total(), 2);
    assert!(temp_dir.path().join("speedometer-face.svg").is_file());
    assert!(temp_dir.path().join("speedometer-needle.svg").is_file());
}

#[test]
fn e2e_partial_failure_writes_valid_layers() {
    let temp_dir = tempdir().unwrap();
    let input = demos_path().join("errors").join("partial_failure.json");

    let err = run(&args(&input, temp_dir.path())).unwrap_err();

    assert!(matches!(
        err,
        GaugesmithError::LayersFailed {
            failed: 1,
            total: 2
        }
    ));
    assert_eq!(err.to_string(), "1 of 2 layers failed");
    assert!(temp_dir.path().join("ok.svg").is_file());
    assert!(!temp_dir.path().join("broken.svg").exists());
}

#[test]
fn e2e_missing_input_file() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("absent.json");

    let err = run(&args(&input, temp_dir.path())).unwrap_err();
    assert!(matches!(err, GaugesmithError::Io(_)));
}

#[test]
fn e2e_explicit_config_changes_defaults() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[canvas]\nwidth = 320\nheight = 200\n").unwrap();
    let input = temp_dir.path().join("gauge.json");
    fs::write(
        &input,
        r#"{ "layers": [ { "name": "small", "operations": [ { "type": "circle", "radius": 50 } ] } ] }"#,
    )
    .unwrap();
    let output_dir = temp_dir.path().join("out");

    let mut args = args(&input, &output_dir);
    args.config = Some(config_path.to_string_lossy().to_string());
    run(&args).unwrap();

    let content = fs::read_to_string(output_dir.join("small.svg")).unwrap();
    assert!(content.contains(r#"viewBox="0 0 320 200""#));
    assert!(content.contains(r#"cx="160""#));
}
