use std::fs;
use std::path::{Path, PathBuf};

use nbscrub::batch::{BatchOptions, Pass};
use serde_json::{json, Value};
use tempfile::TempDir;

// Helper to create a notebook file in a scratch directory
fn create_test_notebook(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).expect("Failed to write test notebook");
    path
}

fn options(dir: &TempDir, dry_run: bool) -> BatchOptions {
    BatchOptions {
        dir: dir.path().to_path_buf(),
        extension: "ipynb".to_string(),
        dry_run,
    }
}

fn notebook_with_code(source: Value) -> String {
    json!({
        "cells": [
            {
                "cell_type": "code",
                "execution_count": null,
                "metadata": {},
                "outputs": [],
                "source": source
            }
        ],
        "metadata": {},
        "nbformat": 4,
        "nbformat_minor": 5
    })
    .to_string()
}

fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path).expect("Could not read notebook");
    serde_json::from_str(&text).expect("Notebook should stay valid JSON")
}

#[cfg(test)]
mod batch_tests {
    use super::*;

    #[test]
    fn test_clean_pass_strips_code_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_test_notebook(
            dir.path(),
            "analysis.ipynb",
            &notebook_with_code(json!([
                "#!/usr/bin/env python3\n",
                "# Load libraries\n",
                "import numpy as np  # numerics\n",
                "\n",
                "\n",
                "label = \"churn #1\"\n"
            ])),
        );

        let report = nbscrub::batch::run_pass(&Pass::Clean, &options(&dir, false)).unwrap();
        assert_eq!(report.changed, vec![path.clone()]);

        let nb = read_json(&path);
        assert_eq!(
            nb["cells"][0]["source"],
            json!([
                "#!/usr/bin/env python3\n",
                "import numpy as np\n",
                "\n",
                "label = \"churn #1\"\n"
            ])
        );
        assert_eq!(nb["nbformat"], json!(4));
    }

    #[test]
    fn test_clean_pass_leaves_clean_notebook_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let content = notebook_with_code(json!(["x = 1\n"]));
        let path = create_test_notebook(dir.path(), "tidy.ipynb", &content);

        let report = nbscrub::batch::run_pass(&Pass::Clean, &options(&dir, false)).unwrap();
        assert_eq!(report.processed.len(), 1);
        assert!(report.changed.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let content = notebook_with_code(json!("# only a comment\nx = 2  # two"));
        let path = create_test_notebook(dir.path(), "draft.ipynb", &content);

        let report = nbscrub::batch::run_pass(&Pass::Clean, &options(&dir, true)).unwrap();
        assert_eq!(report.changed, vec![path.clone()]);
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_remove_emojis_pass() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_test_notebook(
            dir.path(),
            "report.ipynb",
            "{\"cells\": [{\"cell_type\": \"markdown\", \"source\": [\"✅ Done 🎉\"]}]}",
        );

        nbscrub::batch::run_pass(&Pass::RemoveEmojis, &options(&dir, false)).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\"cells\": [{\"cell_type\": \"markdown\", \"source\": [\"[OK] Done \"]}]}"
        );
    }

    #[test]
    fn test_tidy_pass_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_test_notebook(
            dir.path(),
            "train.ipynb",
            &notebook_with_code(json!([
                "print(\" Model trained\")\n",
                "print(\"Status: COMPLETE *\")"
            ])),
        );

        let subs = nbscrub::text::default_substitutions();
        let report = nbscrub::batch::run_pass(&Pass::Tidy(subs), &options(&dir, false)).unwrap();
        assert_eq!(report.changed.len(), 1);
        assert_eq!(
            read_json(&path)["cells"][0]["source"],
            json!(["print(\"Model trained\")\n", "print(\"Status: COMPLETE\")"])
        );
    }

    #[test]
    fn test_latin1_file_is_rewritten_as_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.ipynb");
        fs::write(&path, b"{\"title\": \"caf\xE9 *\"}").unwrap();

        let subs = vec![nbscrub::text::Substitution::new(" *", "").unwrap()];
        nbscrub::batch::run_pass(&Pass::Tidy(subs), &options(&dir, false)).unwrap();
        assert_eq!(read_json(&path)["title"], json!("café"));
    }
}

#[cfg(test)]
mod discovery_tests {
    use super::*;

    #[test]
    fn test_only_matching_files_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        create_test_notebook(dir.path(), "b.ipynb", "{}");
        create_test_notebook(dir.path(), "a.ipynb", "{}");
        create_test_notebook(dir.path(), "notes.txt", "{}");
        fs::create_dir(dir.path().join("c.ipynb")).unwrap();

        let files = nbscrub::batch::discover(dir.path(), "ipynb").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.ipynb", "b.ipynb"]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = nbscrub::batch::discover(&missing, "ipynb").unwrap_err();
        assert!(matches!(err, nbscrub::error::AppError::NotADirectory { .. }));
    }

    #[test]
    fn test_invalid_notebook_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_test_notebook(dir.path(), "broken.ipynb", "{ not json");

        let err = nbscrub::batch::run_pass(&Pass::Clean, &options(&dir, false)).unwrap_err();
        match err {
            nbscrub::error::AppError::Notebook { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
