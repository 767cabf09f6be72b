use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "strokeprep_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn lists_direct_single_character_files_sorted() {
    let dir = temp_dir("local_list");
    std::fs::create_dir_all(dir.join("子.json")).unwrap();
    for name in ["丁.json", "一.json", "all.json", "multi2.json", "notes.txt"] {
        std::fs::write(dir.join(name), "{}").unwrap();
    }

    let source = LocalSource::open(&dir).unwrap();
    let names: Vec<String> = source
        .entries()
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["一.json".to_string(), "丁.json".to_string()]);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn fetch_reads_payload_text() {
    let dir = temp_dir("local_fetch");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("一.json"), r#"{"strokes":[],"medians":[]}"#).unwrap();

    let source = LocalSource::open(&dir).unwrap();
    let entry = Entry::from_name("一.json").unwrap();
    assert_eq!(
        source.fetch(&entry).unwrap(),
        r#"{"strokes":[],"medians":[]}"#
    );

    let missing = Entry::from_name("丁.json").unwrap();
    assert!(matches!(
        source.fetch(&missing),
        Err(StrokeError::Io { .. })
    ));

    assert_eq!(source.root(), dir.as_path());
    assert_eq!(source.describe(), dir.display().to_string());
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn open_rejects_files() {
    let dir = temp_dir("local_file");
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join("一.json");
    std::fs::write(&file, "{}").unwrap();

    assert!(matches!(
        LocalSource::open(&file),
        Err(StrokeError::Validation(_))
    ));
    std::fs::remove_dir_all(&dir).ok();
}
