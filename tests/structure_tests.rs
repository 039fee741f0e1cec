//! # Structure Tests
//!
//! Snapshot the exported structure of component trees as JSON.
//!
//! The structure is built without a provider, so these tests also cover
//! trees that were never configured.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tabula::components::{Barcode, Col, Component, ComponentExt, MatrixCode, QrCode, Row, Text};
use tabula::config::Config;
use tabula::props::{BorderType, CellStyle, Color, RectProps};
use tabula::structure::Node;

fn as_json(node: &Node) -> Value {
    serde_json::from_str(&node.to_json().unwrap()).unwrap()
}

#[test]
fn test_snapshot_row_with_mixed_columns() {
    let row = Row::new(40.0)
        .add(
            Col::new(4)
                .with_style(CellStyle {
                    border_type: BorderType::Full,
                    background_color: Some(Color::rgb(200, 200, 200)),
                    ..Default::default()
                })
                .add(QrCode::new("https://example.com")),
        )
        .add(Col::new(8).add(MatrixCode::new("abc").with_props(RectProps {
            percent: 50.0,
            center: true,
            ..Default::default()
        })))
        .add(Col::max());

    assert_eq!(
        as_json(&row.structure()),
        json!({
            "type": "row",
            "value": 40.0,
            "children": [
                {
                    "type": "col",
                    "value": 4,
                    "details": {
                        "prop_background_color": "RGB(200, 200, 200)",
                        "prop_border_type": "full"
                    },
                    "children": [
                        {
                            "type": "qrcode",
                            "value": "https://example.com",
                            "details": {"prop_percent": 100.0}
                        }
                    ]
                },
                {
                    "type": "col",
                    "value": 8,
                    "children": [
                        {
                            "type": "matrixcode",
                            "value": "abc",
                            "details": {"prop_percent": 50.0, "prop_center": true}
                        }
                    ]
                },
                {
                    "type": "col",
                    "value": 0,
                    "details": {"is_max": true}
                }
            ]
        })
    );
}

#[test]
fn test_structure_mirrors_construction_order() {
    for n in [0, 1, 2, 5, 13] {
        let col = Col::new(12).add_all((0..n).map(|i| Barcode::new(i.to_string())));
        let node = col.structure();

        assert_eq!(node.children.len(), n);
        for (i, child) in node.children.iter().enumerate() {
            assert_eq!(child.value, json!(i.to_string()));
        }
    }
}

#[test]
fn test_structure_is_idempotent() {
    let mut row = Row::new(10.0)
        .add(Col::new(6).add(Barcode::new("a")).add(Text::new("b")))
        .add(Col::max().add(QrCode::new("c")));

    let first = row.structure();
    assert_eq!(first, row.structure());

    // Configuring does not change the exported tree of fixed-size parts
    row.set_config(Arc::new(Config::default()));
    let configured = row.structure();
    assert_eq!(configured, row.structure());
    assert_eq!(configured.node_count(), first.node_count());
}

#[test]
fn test_structure_needs_no_config() {
    let row = Barcode::new_row(10.0, "123", None);
    let node = row.structure();

    assert_eq!(node.node_count(), 3);
    let kinds: Vec<_> = node.iter().map(|n| n.kind.as_str()).collect();
    assert_eq!(kinds, ["row", "col", "barcode"]);
}

#[test]
fn test_text_structure_follows_config_font() {
    let config = Arc::new(
        Config::builder()
            .default_font(tabula::props::Font {
                family: "helvetica".into(),
                ..Default::default()
            })
            .build(),
    );
    let col = Text::new_col(12, "hello", None).configured(config);

    let node = col.structure();
    assert_eq!(node.children[0].details["prop_font_family"], json!("helvetica"));
}
