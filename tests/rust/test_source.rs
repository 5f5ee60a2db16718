use super::*;

#[test]
fn test_extract_fragment_between_markers() {
    let text = "\u{1}\u{2}HEADER<materialInstance name=\"M\">\n<x/>\n</materialInstance>TRAILER";
    let fragment = extract_fragment(text).unwrap();
    assert!(fragment.starts_with("<materialInstance"));
    assert!(fragment.ends_with("</materialInstance>"));
    assert!(!fragment.contains("TRAILER"));
}

#[test]
fn test_extract_uses_last_end_marker() {
    let text = "<materialInstance>a</materialInstance>b</materialInstance>c";
    assert_eq!(
        extract_fragment(text).unwrap(),
        "<materialInstance>a</materialInstance>b</materialInstance>"
    );
}

#[test]
fn test_missing_start_marker() {
    let err = extract_fragment("no material here</materialInstance>").unwrap_err();
    assert!(matches!(
        err,
        VisualizerError::MarkerNotFound {
            marker: FRAGMENT_START
        }
    ));
}

#[test]
fn test_missing_end_marker() {
    let err = extract_fragment("<materialInstance name=\"M\">\n<x/>").unwrap_err();
    assert!(matches!(
        err,
        VisualizerError::MarkerNotFound {
            marker: FRAGMENT_END
        }
    ));
}

#[test]
fn test_output_path_replaces_extension() {
    assert_eq!(
        output_path(Path::new("assets/wood.MATERIAL"), "svg"),
        PathBuf::from("assets/wood.svg")
    );
    assert_eq!(
        output_path(Path::new("wood"), "json"),
        PathBuf::from("wood.json")
    );
}

#[test]
fn test_read_fragment_missing_file() {
    let err = read_fragment(Path::new("/definitely/not/here.MATERIAL")).unwrap_err();
    assert!(matches!(err, VisualizerError::Io { action: "read", .. }));
}
