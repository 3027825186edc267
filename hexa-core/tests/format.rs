use hexa_core::format_message;

#[test]
fn substitutes_params_in_order() {
    assert_eq!(format_message("Value {} and {}", &[&"a", &"b"]), "Value a and b");
}

#[test]
fn surplus_tokens_stay_literal() {
    assert_eq!(format_message("{} then {} then {}", &[&1]), "1 then {} then {}");
}

#[test]
fn surplus_params_are_ignored() {
    assert_eq!(format_message("only {}", &[&"one", &"two", &3]), "only one");
}

#[test]
fn no_params_leaves_template_untouched() {
    assert_eq!(format_message("nothing {} here", &[]), "nothing {} here");
}

#[test]
fn other_braces_are_literal() {
    assert_eq!(
        format_message("{0} {name} { } {}", &[&"x"]),
        "{0} {name} { } x"
    );
}

#[test]
fn params_render_through_display() {
    let id = 42u64;
    let ratio = 0.5f64;
    assert_eq!(format_message("id={} ratio={}", &[&id, &ratio]), "id=42 ratio=0.5");
}

#[test]
fn adjacent_tokens() {
    assert_eq!(format_message("{}{}", &[&"a", &"b"]), "ab");
}
