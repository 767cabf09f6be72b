use super::*;

#[test]
fn filter_keeps_single_character_json_names_in_order() {
    let entries = filter_entries(["丁.json", "all.json", "一.json", "multi2.json", "README.md"]);
    let ids: Vec<&str> = entries.iter().map(|e| e.identifier.as_str()).collect();
    assert_eq!(ids, vec!["丁", "一"]);
    assert_eq!(entries[0].name, "丁.json");
}

#[test]
fn local_paths_parse_as_local() {
    assert_eq!(
        Source::parse("./orig").unwrap(),
        Source::Local(PathBuf::from("./orig"))
    );
    assert_eq!(
        Source::parse("/data/hanzi").unwrap(),
        Source::Local(PathBuf::from("/data/hanzi"))
    );
    assert!(Source::parse("  ").is_err());
}

#[test]
fn repo_url_defaults_to_data_folder() {
    assert_eq!(
        Source::parse("https://github.com/chanind/hanzi-writer-data").unwrap(),
        Source::Remote(RemoteSpec {
            repo: "chanind/hanzi-writer-data".to_string(),
            folder: "data".to_string(),
            branch: None,
        })
    );
}

#[test]
fn repo_url_with_folder() {
    let Source::Remote(spec) =
        Source::parse("https://github.com/chanind/hanzi-writer-data-jp/data/kanji/").unwrap()
    else {
        panic!("expected remote");
    };
    assert_eq!(spec.repo, "chanind/hanzi-writer-data-jp");
    assert_eq!(spec.folder, "data/kanji");
    assert_eq!(spec.branch, None);
}

#[test]
fn browser_tree_url_pins_branch() {
    let Source::Remote(spec) =
        Source::parse("https://github.com/chanind/hanzi-writer-data.git/tree/master/data").unwrap()
    else {
        panic!("expected remote");
    };
    assert_eq!(spec.repo, "chanind/hanzi-writer-data");
    assert_eq!(spec.branch.as_deref(), Some("master"));
    assert_eq!(spec.folder, "data");
}

#[test]
fn repo_url_without_repo_name_is_rejected() {
    assert!(matches!(
        Source::parse("https://github.com/chanind"),
        Err(StrokeError::Validation(_))
    ));
}

#[test]
fn with_branch_only_touches_remote_sources() {
    let remote = Source::parse("https://github.com/a/b")
        .unwrap()
        .with_branch(Some("main".to_string()));
    let Source::Remote(spec) = remote else {
        panic!("expected remote");
    };
    assert_eq!(spec.branch.as_deref(), Some("main"));

    let local = Source::parse("orig").unwrap().with_branch(Some("main".to_string()));
    assert_eq!(local, Source::Local(PathBuf::from("orig")));
}

#[test]
fn opening_missing_local_directory_is_io_error() {
    let missing = std::env::temp_dir().join(format!("strokeprep_missing_{}", std::process::id()));
    let Err(err) = Source::Local(missing).open(&RemoteConfig::default()) else {
        panic!("expected a missing directory to fail");
    };
    assert!(matches!(err, StrokeError::Io { .. }));
}
