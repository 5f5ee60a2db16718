use super::*;
use crate::config::RenderConfig;
use crate::layout::{MaterialGraph, Parameter, full_layout};

#[test]
fn test_tree_lists_node_details() {
    let mut g = MaterialGraph::new();
    let mix = g.add_node("Mix", 0, 0);
    let out = g.add_node("Out", 300, 0);
    g.digraph[mix].parameters.push(Parameter {
        name: "factor".to_string(),
        value: "0.5".to_string(),
    });
    g.add_link(mix, "rgb", out, "base");
    let layout = full_layout(g, &RenderConfig::default()).unwrap();

    let text = TreeRenderer.render(&layout).unwrap();
    let expected = "\
Mix
├── Coordinates: (150, 150)
├── Parameters
│   └── factor -> 0.5
├── Inputs
└── Outputs
    └── rgb -> (base Out)
Out
├── Coordinates: (450, 150)
├── Parameters
├── Inputs
│   └── base
└── Outputs
";
    assert_eq!(text, expected);
}
