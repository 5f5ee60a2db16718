use super::*;

#[test]
fn test_parse_node_declaration() {
    let t = parse_tag_line(
        4,
        r#"    <shaderNodeInstance name="Mix" uiPosX="-120" uiPosY="40">"#,
    )
    .unwrap();
    assert_eq!(t.line, 4);
    assert_eq!(t.name, "shaderNodeInstance");
    assert_eq!(t.get("name"), Some("Mix"));
    assert_eq!(t.get("uiPosX"), Some("-120"));
    assert_eq!(t.get("uiPosY"), Some("40"));
}

#[test]
fn test_self_closing_slash_is_stripped() {
    let t = parse_tag_line(1, r#"<userParam name="roughness" value="0.4"/>"#).unwrap();
    assert_eq!(t.name, "userParam");
    assert_eq!(t.get("value"), Some("0.4"));
    let t = parse_tag_line(1, r#"<userParam name="roughness" value="0.4" />"#).unwrap();
    assert_eq!(t.get("value"), Some("0.4"));
}

#[test]
fn test_value_with_spaces() {
    let t = parse_tag_line(1, r#"<userValue name="label" value="base color map">"#).unwrap();
    assert_eq!(t.get("value"), Some("base color map"));
}

#[test]
fn test_empty_value() {
    let t = parse_tag_line(1, r#"<userValue name="" value="x">"#).unwrap();
    assert_eq!(t.get("name"), Some(""));
    assert_eq!(t.get("value"), Some("x"));
}

#[test]
fn test_tag_without_attributes() {
    let t = parse_tag_line(1, "<shaderGraph>").unwrap();
    assert_eq!(t.name, "shaderGraph");
    assert!(t.attrs.is_empty());
}

#[test]
fn test_line_without_tag_is_unnamed() {
    let t = parse_tag_line(9, "   ").unwrap();
    assert!(t.name.is_empty());
    let t = parse_tag_line(9, "plain text").unwrap();
    assert!(t.name.is_empty());
}

#[test]
fn test_closing_tag_and_comment_have_no_attrs() {
    let t = parse_tag_line(1, "</shaderNodeInstance>").unwrap();
    assert_eq!(t.name, "/shaderNodeInstance");
    assert!(t.attrs.is_empty());
    let t = parse_tag_line(1, "<!-- exported by tool, do not edit -->").unwrap();
    assert!(t.attrs.is_empty());
}

#[test]
fn test_missing_equals_is_parse_error() {
    let err = parse_tag_line(12, r#"<link nodeFrom="A" socketFrom>"#).unwrap_err();
    match err {
        VisualizerError::Parse { line, content, .. } => {
            assert_eq!(line, 12);
            assert_eq!(content, r#"<link nodeFrom="A" socketFrom>"#);
        }
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn test_unquoted_value_is_parse_error() {
    let err = parse_tag_line(2, "<userParam name=roughness>").unwrap_err();
    assert!(matches!(err, VisualizerError::Parse { line: 2, .. }));
}

#[test]
fn test_unterminated_last_value_is_parse_error() {
    let err = parse_tag_line(3, r#"<userParam name="roughness" value="0.4/>"#).unwrap_err();
    match err {
        VisualizerError::Parse { line, reason, .. } => {
            assert_eq!(line, 3);
            assert_eq!(reason, "unbalanced quotes in attribute");
        }
        other => panic!("expected Parse, got {other:?}"),
    }
    let err = parse_tag_line(
        7,
        r#"<link nodeFrom="A" socketFrom="rgb" nodeTo="B" socketTo="in>"#,
    )
    .unwrap_err();
    assert!(matches!(err, VisualizerError::Parse { line: 7, .. }));
}

#[test]
fn test_lone_quote_value_is_parse_error() {
    let err = parse_tag_line(1, r#"<userValue name=">"#).unwrap_err();
    assert!(matches!(err, VisualizerError::Parse { line: 1, .. }));
}

#[test]
fn test_stray_quote_mid_line_is_parse_error() {
    let err = parse_tag_line(1, r#"<userValue name="a"" value="b">"#).unwrap_err();
    assert!(matches!(err, VisualizerError::Parse { line: 1, .. }));
}

#[test]
fn test_malformed_unused_tag_still_fails() {
    let err = parse_tag_line(2, r#"<shaderGraph version="3>"#).unwrap_err();
    assert!(matches!(err, VisualizerError::Parse { line: 2, .. }));
}

#[test]
fn test_entities_are_decoded() {
    let t = parse_tag_line(1, r#"<userValue name="expr" value="a &lt; b &amp;&amp; c">"#).unwrap();
    assert_eq!(t.get("value"), Some("a < b && c"));
}

#[test]
fn test_unescape_amp_last() {
    assert_eq!(unescape_entities("&amp;lt;"), "&lt;");
    assert_eq!(unescape_entities("plain"), "plain");
    assert_eq!(unescape_entities("&quot;q&quot;"), "\"q\"");
}
