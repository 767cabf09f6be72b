use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StrokeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        StrokeError::malformed("x")
            .to_string()
            .contains("malformed payload:")
    );
    assert!(StrokeError::fetch("x").to_string().contains("fetch error:"));
}

#[test]
fn source_not_found_names_repo_and_folder() {
    let err = StrokeError::SourceNotFound {
        repo: "chanind/hanzi-writer-data".to_string(),
        folder: "nonexistent".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("'nonexistent'"));
    assert!(msg.contains("chanind/hanzi-writer-data"));
}

#[test]
fn entries_reports_count_and_first_failure() {
    let err = StrokeError::Entries(vec![
        EntryFailure {
            entry: "一.json".to_string(),
            error: StrokeError::malformed("bad stroke"),
        },
        EntryFailure {
            entry: "丁.json".to_string(),
            error: StrokeError::malformed("bad median"),
        },
    ]);
    let msg = err.to_string();
    assert!(msg.starts_with("2 entries failed"));
    assert!(msg.contains("一.json: malformed payload: bad stroke"));

    let single = StrokeError::Entries(vec![EntryFailure {
        entry: "丁.json".to_string(),
        error: StrokeError::fetch("timeout"),
    }]);
    assert!(single.to_string().starts_with("1 entry failed"));
}

#[test]
fn io_keeps_path_and_source() {
    let err = StrokeError::io("out/all.json", std::io::Error::other("disk full"));
    let msg = err.to_string();
    assert!(msg.contains("out/all.json"));
    assert!(msg.contains("disk full"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StrokeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
