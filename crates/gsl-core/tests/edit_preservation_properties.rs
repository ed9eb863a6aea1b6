//! Property-based tests for hand-edit preservation
//!
//! Property: for any set of edits made inside customizable regions, a
//! regeneration with changed boilerplate keeps every edited body verbatim
//! while the surrounding text follows the new template.

use std::collections::HashMap;

use gsl_core::{extract_regions, merge_lines, MergeWriter, Pass, RegionError, RegionMap};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    r"[a-z][a-z0-9_-]{0,8}".prop_map(|s| s.to_string())
}

fn body_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(r"[ a-zA-Z0-9;=+*]{0,20}".prop_map(|s| s.to_string()), 0..5)
}

/// Region names mapped to the body a human typed into them
fn edits_strategy() -> impl Strategy<Value = HashMap<String, Vec<String>>> {
    prop::collection::hash_map(name_strategy(), body_strategy(), 1..6)
}

fn generate(names: &[String], header: &str, placeholder: &str) -> Vec<String> {
    let mut lines = vec![header.to_string()];
    for name in names {
        lines.push(format!("    /* <default GSL customizable: {}> */", name));
        lines.push(format!("    {}", placeholder));
        lines.push(format!("    /* </GSL customizable: {}> */", name));
        lines.push(String::new());
    }
    lines.push(format!("{} end", header));
    lines
}

/// Replace each region body in `output` with the edited one
fn apply_edits(output: &[String], edits: &HashMap<String, Vec<String>>) -> Vec<String> {
    let mut edited = Vec::new();
    let mut inside: Option<&str> = None;
    for line in output {
        if let Some(name) = inside {
            if line.contains("</GSL customizable:") {
                edited.extend(edits[name].iter().cloned());
                edited.push(line.clone());
                inside = None;
            }
            continue;
        }
        edited.push(line.clone());
        if let Some(name) = edits.keys().find(|n| {
            line.ends_with(&format!("GSL customizable: {}> */", n)) && !line.contains("</GSL")
        }) {
            inside = Some(name.as_str());
        }
    }
    edited
}

proptest! {
    #[test]
    fn prop_edits_survive_regeneration(edits in edits_strategy()) {
        let mut names: Vec<String> = edits.keys().cloned().collect();
        names.sort();

        let first = merge_lines(RegionMap::new(), generate(&names, "v1", "TODO v1")).unwrap();
        let edited = apply_edits(&first.lines, &edits);

        let regions = extract_regions(&edited).unwrap();
        let second = merge_lines(regions, generate(&names, "v2", "TODO v2")).unwrap();

        prop_assert_eq!(second.lines.first().map(String::as_str), Some("v2"));
        prop_assert_eq!(second.lines.last().map(String::as_str), Some("v2 end"));
        prop_assert!(second.lines.iter().all(|l| !l.contains("TODO v2")));
        prop_assert_eq!(second.preserved.len(), names.len());

        let recovered = extract_regions(&second.lines).unwrap();
        for (name, body) in &edits {
            let record = recovered.get(name).unwrap();
            prop_assert_eq!(record, &gsl_core::RegionRecord::Preserved(body.clone()));
        }
    }

    /// Property: a prior region that is renamed in the template is dropped
    #[test]
    fn prop_renamed_regions_are_dropped(edits in edits_strategy()) {
        let names: Vec<String> = edits.keys().cloned().collect();
        let renamed: Vec<String> = names.iter().map(|n| format!("{}-Renamed", n)).collect();

        let first = merge_lines(RegionMap::new(), generate(&names, "v1", "TODO")).unwrap();
        let edited = apply_edits(&first.lines, &edits);
        let regions = extract_regions(&edited).unwrap();

        let second = merge_lines(regions, generate(&renamed, "v1", "TODO")).unwrap();

        prop_assert!(second.preserved.is_empty());
        prop_assert_eq!(second.fresh, renamed);
        prop_assert_eq!(second.dropped, names);
    }
}

#[test]
fn test_edit_preservation_scenario() {
    let prior = vec![
        "old header",
        "<default GSL customizable: body>",
        "CUSTOMIZED body",
        "</GSL customizable: body>",
        "old footer",
    ];
    let generated = vec![
        "new header",
        "<default GSL customizable: body>",
        "new generated body",
        "</GSL customizable: body>",
        "new footer",
    ];

    let regions = extract_regions(&prior).unwrap();
    let merged: Vec<String> = MergeWriter::new(regions, generated)
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(
        merged,
        vec![
            "new header",
            "<GSL customizable: body>",
            "CUSTOMIZED body",
            "</GSL customizable: body>",
            "new footer",
        ]
    );
}

#[test]
fn test_malformed_generator_output_reports_line() {
    let regions = RegionMap::new();
    let err = merge_lines(
        regions,
        vec![
            "a",
            "<default GSL customizable: x>",
            "</GSL customizable: x>",
            "<default GSL customizable: x />",
        ],
    )
    .unwrap_err();

    assert_eq!(err.pass(), Pass::Generated);
    assert_eq!(err.line(), 4);
    assert!(matches!(err, RegionError::DuplicateRegion { .. }));
}
