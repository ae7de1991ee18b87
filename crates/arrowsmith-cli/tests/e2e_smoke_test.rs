use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use arrowsmith_cli::{Args, OutputFormat, run};

/// Collects all .graphql files from a directory
fn collect_schema_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("graphql")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demo schemas live at the workspace root, not in the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Writes an empty config beside `output` so runs ignore local and user config files
fn empty_config(output: &Path) -> String {
    let path = output.with_file_name("empty_config.toml");
    fs::write(&path, "").expect("Failed to write empty config");
    path.to_string_lossy().to_string()
}

fn args(input: &PathBuf, output: PathBuf, format: OutputFormat) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        config: Some(empty_config(&output)),
        output: Some(output.to_string_lossy().to_string()),
        format,
        pretty: false,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_schema_files(demos_path());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_path = temp_dir.path().join(format!(
            "{}.json",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        if let Err(e) = run(&args(demo_path, output_path.clone(), OutputFormat::Json)) {
            failed_demos.push((demo_path.clone(), e.to_string()));
            continue;
        }

        let json = fs::read_to_string(&output_path).expect("output written");
        if !json.starts_with(r#"{"diagramName":"@neo4j/graphql","graph":{"nodes":["#) {
            failed_demos.push((demo_path.clone(), format!("unexpected output: {json}")));
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_schema_files(demos_path().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join(format!(
            "error_{}.json",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        if run(&args(demo_path, output_path.clone(), OutputFormat::Json)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
        assert!(
            !output_path.exists(),
            "{} left a partial output",
            demo_path.display()
        );
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

    println!(
        "✅ All {} error demos failed as expected",
        error_demos.len()
    );
}

#[test]
fn e2e_url_export() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("movies.url");

    run(&args(
        &demos_path().join("movies.graphql"),
        output_path.clone(),
        OutputFormat::Url,
    ))
    .expect("Failed to export movies demo");

    let url = fs::read_to_string(&output_path).expect("output written");
    assert!(url.starts_with("https://arrows.app/#/import/json="));
    assert!(!url.contains('\n'));
}

#[test]
fn e2e_explicit_config_is_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[identifiers]\nstrategy = \"sequential\"\nlength = 6\n\n[export]\ndiagram_name = \"movies\"\npretty = true\n",
    )
    .unwrap();
    let output_path = temp_dir.path().join("movies.json");

    let mut args = args(
        &demos_path().join("movies.graphql"),
        output_path.clone(),
        OutputFormat::Json,
    );
    args.config = Some(config_path.to_string_lossy().to_string());
    run(&args).expect("Failed to convert with config");

    let json = fs::read_to_string(&output_path).expect("output written");
    assert!(json.contains('\n'));
    assert!(json.contains(r#""diagramName": "movies""#));
    assert!(json.contains(r#""id": "AAAAAA""#));
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let result = run(&args(
        &temp_dir.path().join("absent.graphql"),
        temp_dir.path().join("out.json"),
        OutputFormat::Json,
    ));
    assert!(matches!(result, Err(arrowsmith::ArrowsmithError::Io(_))));
}
