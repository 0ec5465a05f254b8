use std::fs;
use std::io::Write;
use std::path::Path;

use notetree::config::{NotetreeConfig, StoreConfig};
use notetree::tooling::cli::{CliContext, Commands};
use tempfile::TempDir;
use zip::write::FileOptions;

fn write_zip(path: &Path, entries: &[(&str, &str)]) {
    let file = fs::File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    for (name, content) in entries {
        if name.ends_with('/') {
            writer.add_directory(*name, FileOptions::default()).unwrap();
        } else {
            writer.start_file(*name, FileOptions::default()).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
    }
    writer.finish().unwrap();
}

fn context(temp: &TempDir) -> CliContext {
    let snapshot = temp.path().join("state").join("records.json");
    CliContext::new(NotetreeConfig::default(), Some(snapshot)).unwrap()
}

fn import(cli: &CliContext, archive: &Path) -> serde_json::Value {
    let output = cli
        .execute(&Commands::Import {
            archive: archive.to_path_buf(),
            format: "json".to_string(),
        })
        .unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn import_then_browse() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("notes.zip");
    write_zip(
        &archive,
        &[
            ("notes/", ""),
            ("notes/todo.md", "- [ ] ship"),
            ("notes/todo.md/draft.md", "conflicts with the file above"),
            ("readme.md", "# Notes"),
        ],
    );
    let cli = context(&temp);

    let summary = import(&cli, &archive);
    assert_eq!(summary["records"].as_u64(), Some(3));
    assert_eq!(summary["nodes"].as_u64(), Some(3));
    let skipped = summary["skipped_records"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0]["path"], "notes/todo.md/draft.md");
    assert_eq!(skipped[0]["reason"]["kind"], "leaf_as_directory");
    assert_eq!(skipped[0]["reason"]["at"], "notes/todo.md");
    assert!(cli.store().path().exists());

    let tree = cli
        .execute(&Commands::Tree {
            format: "text".to_string(),
        })
        .unwrap();
    assert_eq!(tree, "├── notes/\n│   └── todo.md\n└── readme.md\n");

    let shown = cli
        .execute(&Commands::Show {
            route: "#notes/todo.md".to_string(),
        })
        .unwrap();
    assert_eq!(shown, "- [ ] ship\n");

    let missing = cli
        .execute(&Commands::Show {
            route: "#notes/absent.md".to_string(),
        })
        .unwrap();
    assert_eq!(missing, "Nothing selected.\n");

    let listing: serde_json::Value = serde_json::from_str(
        &cli.execute(&Commands::Ls {
            format: "json".to_string(),
        })
        .unwrap(),
    )
    .unwrap();
    assert_eq!(listing["total"].as_u64(), Some(3));
    let paths: Vec<&str> = listing["paths"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["notes", "notes/todo.md", "readme.md"]);
}

#[test]
fn tree_json_contract() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("a.zip");
    write_zip(&archive, &[("x/y/z.md", "C")]);
    let cli = context(&temp);
    import(&cli, &archive);

    let output = cli
        .execute(&Commands::Tree {
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([{
            "name": "x",
            "is_dir": true,
            "children": [{
                "name": "y",
                "is_dir": true,
                "children": [{"name": "z.md", "is_dir": false, "content": "C"}]
            }]
        }])
    );
}

#[test]
fn reimport_replaces_previous_records() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("first.zip");
    let second = temp.path().join("second.zip");
    write_zip(&first, &[("old.md", "old")]);
    write_zip(&second, &[("new.md", "new")]);
    let cli = context(&temp);

    import(&cli, &first);
    import(&cli, &second);

    let old = cli
        .execute(&Commands::Show {
            route: "old.md".to_string(),
        })
        .unwrap();
    assert_eq!(old, "Nothing selected.\n");
    let new = cli
        .execute(&Commands::Show {
            route: "new.md".to_string(),
        })
        .unwrap();
    assert_eq!(new, "new\n");
}

#[test]
fn clear_discards_records() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("a.zip");
    write_zip(&archive, &[("a.md", "A")]);
    let cli = context(&temp);
    import(&cli, &archive);

    cli.execute(&Commands::Clear).unwrap();
    assert!(!cli.store().path().exists());

    let tree = cli
        .execute(&Commands::Tree {
            format: "text".to_string(),
        })
        .unwrap();
    assert_eq!(tree, "No records loaded.\n");
    // Clearing twice is fine.
    cli.execute(&Commands::Clear).unwrap();
}

#[test]
fn invalid_format_is_an_error() {
    let temp = TempDir::new().unwrap();
    let cli = context(&temp);
    let result = cli.execute(&Commands::Ls {
        format: "yaml".to_string(),
    });
    assert!(result.is_err());
}

#[test]
fn missing_archive_is_an_error() {
    let temp = TempDir::new().unwrap();
    let cli = context(&temp);
    let result = cli.execute(&Commands::Import {
        archive: temp.path().join("absent.zip"),
        format: "text".to_string(),
    });
    assert!(result.is_err());
    assert!(!cli.store().path().exists());
}

#[test]
fn snapshot_flag_overrides_configured_path() {
    let temp = TempDir::new().unwrap();
    let configured = temp.path().join("configured.json");
    let config = NotetreeConfig {
        store: StoreConfig {
            snapshot_path: Some(configured.clone()),
        },
        ..NotetreeConfig::default()
    };

    let kept = CliContext::new(config.clone(), None).unwrap();
    assert_eq!(kept.store().path(), configured.as_path());

    let flag = temp.path().join("flag.json");
    let overridden = CliContext::new(config, Some(flag.clone())).unwrap();
    assert_eq!(overridden.store().path(), flag.as_path());
}

#[test]
fn show_resolves_encoded_directory_route() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("spaced.zip");
    write_zip(&archive, &[("my notes/a.md", "A"), ("my notes/b.md", "B")]);
    let cli = context(&temp);
    import(&cli, &archive);

    let dir = cli
        .execute(&Commands::Show {
            route: "#my%20notes".to_string(),
        })
        .unwrap();
    assert!(dir.contains("my notes"));
    assert!(dir.contains("  a.md\n"));
    assert!(dir.contains("  b.md\n"));

    let miss = cli
        .execute(&Commands::Show {
            route: "#my%20notes/c.md".to_string(),
        })
        .unwrap();
    assert_eq!(miss, "Nothing selected.\n");
}
