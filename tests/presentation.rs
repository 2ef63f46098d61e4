use pptx_normalizer::{
    normalize_presentation, normalize_presentation_json, Element, NormalizeError,
};
use serde_json::{json, Value};

fn deck() -> Value {
    json!({
        "type": "presentation",
        "props": {
            "layout": "wide",
            "title": "Launch",
            "revision": "3",
            "children": [
                {
                    "type": "master-slide",
                    "props": {
                        "name": "BRAND",
                        "backgroundColor": "#ffffff",
                        "children": {
                            "type": "shape",
                            "props": {"type": "rect", "style": {"x": 0, "y": "90%", "w": "100%", "h": "10%", "backgroundColor": "navy"}}
                        }
                    }
                },
                {
                    "type": "slide",
                    "props": {
                        "masterName": "BRAND",
                        "notes": "Open with the numbers",
                        "children": [
                            {
                                "type": "text",
                                "props": {
                                    "style": {"x": 1, "y": 1, "w": 8, "h": 1, "fontSize": 32, "bold": true},
                                    "children": ["Revenue up ", 12.0, "%"]
                                }
                            },
                            false,
                            {
                                "type": "text",
                                "props": {
                                    "style": {"x": 1, "y": 2.5},
                                    "children": [
                                        {"type": "text-bullet", "props": {
                                            "style": {"color": "rgba(255, 0, 0, 0.5)"},
                                            "children": ["Read the ", {"type": "text-link", "props": {
                                                "url": "https://example.com/report",
                                                "tooltip": "Full report",
                                                "children": "report"
                                            }}]
                                        }},
                                        {"type": "text-bullet", "props": {
                                            "type": "number",
                                            "children": "Ask questions"
                                        }}
                                    ]
                                }
                            }
                        ]
                    }
                },
                {
                    "type": "slide",
                    "props": {"hidden": true, "backgroundColor": {"kind": "solid", "color": "black", "alpha": 10}}
                }
            ]
        }
    })
}

#[test]
fn test_full_deck_canonical_json() {
    let tree: Element = serde_json::from_value(deck()).unwrap();
    let presentation = normalize_presentation(&tree).unwrap();
    let value = serde_json::to_value(&presentation).unwrap();

    assert_eq!(value["layout"], json!("wide"));
    assert_eq!(value["title"], json!("Launch"));
    assert_eq!(value["revision"], json!("3"));
    assert!(value.get("author").is_none());

    assert_eq!(
        value["masterSlides"]["BRAND"],
        json!({
            "name": "BRAND",
            "backgroundColor": "FFFFFF",
            "objects": [{
                "kind": "shape",
                "type": "rect",
                "text": null,
                "style": {"x": 0.0, "y": "90%", "w": "100%", "h": "10%", "backgroundColor": "000080"}
            }]
        })
    );

    let first = &value["slides"][0];
    assert_eq!(first["masterName"], json!("BRAND"));
    assert_eq!(first["hidden"], json!(false));
    assert_eq!(first["notes"], json!("Open with the numbers"));
    assert_eq!(first["objects"].as_array().map(Vec::len), Some(2));

    assert_eq!(
        first["objects"][0],
        json!({
            "kind": "text",
            "text": [
                {"text": "Revenue up ", "style": {}},
                {"text": "12", "style": {}},
                {"text": "%", "style": {}}
            ],
            "style": {
                "x": 1.0, "y": 1.0, "w": 8.0, "h": 1.0,
                "fontFace": "Arial", "fontSize": 32.0, "bold": true
            }
        })
    );

    let half_red = json!({"kind": "solid", "color": "FF0000", "alpha": 50});
    assert_eq!(
        first["objects"][1]["text"],
        json!([
            {"text": "Read the ", "style": {"color": half_red}, "bullet": true, "breakLine": false},
            {
                "text": "report",
                "style": {"color": half_red},
                "link": {"url": "https://example.com/report", "tooltip": "Full report"},
                "breakLine": true
            },
            {"text": "Ask questions", "style": {}, "bullet": {"type": "number"}, "breakLine": true}
        ])
    );

    let second = &value["slides"][1];
    assert_eq!(
        second,
        &json!({
            "masterName": null,
            "objects": [],
            "backgroundColor": {"kind": "solid", "color": "000000", "alpha": 10},
            "hidden": true
        })
    );
}

#[test]
fn test_normalization_is_deterministic() {
    let input = deck().to_string();
    let first = normalize_presentation_json(&input).unwrap();
    let second = normalize_presentation_json(&input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_first_error_aborts_the_tree() {
    let mut tree = deck();
    tree["props"]["children"][1]["props"]["children"][0]["props"]["style"]["x"] = json!("1in");
    let tree: Element = serde_json::from_value(tree).unwrap();
    match normalize_presentation(&tree) {
        Err(NormalizeError::InvalidPosition(value)) => assert_eq!(value, "1in"),
        other => panic!("expected InvalidPosition, got {other:?}"),
    }
}

#[test]
fn test_unknown_element_tag_is_named() {
    let input = json!({
        "type": "presentation",
        "props": {"children": {"type": "slide", "props": {"children": [
            {"type": "text", "props": {"style": {}, "children": "ok"}},
            {"type": "video", "props": {"style": {}}}
        ]}}}
    })
    .to_string();
    match normalize_presentation_json(&input) {
        Err(NormalizeError::UnknownNodeKind(kind)) => assert_eq!(kind, "video"),
        other => panic!("expected UnknownNodeKind, got {other:?}"),
    }

    assert!(matches!(
        normalize_presentation_json(r#"{"type": "deck", "props": {}}"#),
        Err(NormalizeError::UnknownNodeKind(kind)) if kind == "deck"
    ));
}

#[test]
fn test_malformed_json_is_reported() {
    let err = normalize_presentation_json(r#"{"type": "presentation", "props": {"children": ["#)
        .unwrap_err();
    assert!(matches!(err, NormalizeError::Json(_)));
    assert!(err.to_string().starts_with("Failed to (de)serialize JSON"));
}
