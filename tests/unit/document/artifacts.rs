use super::*;

const UI_GROUP: &str = r##"<g id="ui-root" style="cursor:pointer"><g id="ui-btn"><rect width="48" height="48" rx="8" opacity="0.2" fill="#112346"/><path id="ui-icon" d="M0 0L8 4L0 8Z" fill="#FFF"/></g><mask id='ui-mask' x="-150%" y="-150%" width="400%" height="400%"><path id="ui-mask-path" opacity="0.8" transform="matrix(0.3,0,0,0.3,10,10)" d="M0 0"/></mask></g>"##;

fn doc(body: &str) -> String {
    format!(r#"<svg id="e1"><g id="art"><circle r="3"/></g>{body}<script>x</script></svg>"#)
}

#[test]
fn removes_matching_group_and_collects_ids() {
    let input = doc(UI_GROUP);
    let out = strip_ui_artifacts(&input);
    assert_eq!(out.svg, doc(""));
    assert_eq!(out.removed_groups, 1);
    let ids: Vec<&str> = out.removed_ids.iter().map(String::as_str).collect();
    assert_eq!(
        ids,
        vec!["ui-btn", "ui-icon", "ui-mask", "ui-mask-path", "ui-root"]
    );
}

#[test]
fn attribute_order_and_quotes_do_not_matter() {
    let reordered = UI_GROUP
        .replace(r##"opacity="0.2" fill="#112346""##, r##"fill='#112346' opacity='0.20'"##);
    let out = strip_ui_artifacts(&doc(&reordered));
    assert_eq!(out.removed_groups, 1);
}

#[test]
fn any_missing_signal_keeps_the_group() {
    let variants = [
        UI_GROUP.replace("#112346", "#112347"),
        UI_GROUP.replace("fill=\"#FFF\"", "fill=\"#000\""),
        UI_GROUP.replace("x=\"-150%\"", "x=\"-10%\""),
        UI_GROUP.replace("matrix(0.3,0,0,0.3,10,10)", "matrix(0.5,0,0,0.5,10,10)"),
        UI_GROUP.replace("opacity=\"0.8\"", "opacity=\"0.7\""),
    ];
    for variant in variants {
        let input = doc(&variant);
        let out = strip_ui_artifacts(&input);
        assert_eq!(out.svg, input);
        assert!(out.removed_ids.is_empty());
        assert_eq!(out.removed_groups, 0);
    }
}

#[test]
fn documents_without_groups_pass_through() {
    let input = "<svg><rect/></svg>";
    assert_eq!(strip_ui_artifacts(input).svg, input);
}

#[test]
fn balanced_ranges_handle_nesting_and_self_closing() {
    let text = "<g a><g/><g><g></g></g></g><g b></g></g>";
    assert_eq!(balanced_group_ranges(text), vec![(0, 27), (27, 36)]);
}

#[test]
fn matrix_accepts_spaces_and_commas() {
    assert_eq!(
        parse_matrix("translate(1) matrix( 0.3 0, 0 0.3 5 6 )"),
        Some([0.3, 0.0, 0.0, 0.3, 5.0, 6.0])
    );
    assert_eq!(parse_matrix("matrix(1 0 0 1)"), None);
    assert_eq!(parse_matrix("matrix(1 0 0 1 a 0)"), None);
    assert_eq!(parse_matrix("rotate(3)"), None);
}

#[test]
fn leading_float_reads_a_numeric_prefix() {
    assert_eq!(leading_float(" 0.2px"), Some(0.2));
    assert_eq!(leading_float("1e-1;"), Some(0.1));
    assert_eq!(leading_float("abc"), None);
    assert_eq!(leading_float(""), None);
}
