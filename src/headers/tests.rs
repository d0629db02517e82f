//! Unit tests for the ordered header list.

use rstest::{fixture, rstest};

use super::Headers;

#[fixture]
fn mixed_case() -> Headers {
    Headers::from_iter([
        ("Accept", "text/html"),
        ("X-Trace", "a"),
        ("accept", "application/json"),
    ])
}

#[rstest]
fn lookup_ignores_ascii_case(mixed_case: Headers) {
    assert_eq!(mixed_case.get("ACCEPT"), Some("text/html"));
    assert_eq!(
        mixed_case.get_all("Accept").collect::<Vec<_>>(),
        ["text/html", "application/json"]
    );
    assert!(mixed_case.contains("x-trace"));
    assert!(!mixed_case.contains("x-missing"));
}

#[rstest]
fn set_replaces_all_values_and_appends(mut mixed_case: Headers) {
    mixed_case.set("Accept", "*/*");
    let pairs: Vec<_> = mixed_case.iter().collect();
    assert_eq!(pairs, [("X-Trace", "a"), ("Accept", "*/*")]);
}

#[rstest]
fn remove_reports_whether_anything_was_dropped(mut mixed_case: Headers) {
    assert!(mixed_case.remove("accept"));
    assert!(!mixed_case.remove("accept"));
    assert_eq!(mixed_case.len(), 1);
}

#[rstest]
fn extend_preserves_duplicates_in_order(mut mixed_case: Headers) {
    mixed_case.extend(Headers::from_iter([("X-Trace", "b"), ("X-Trace", "c")]));
    assert_eq!(mixed_case.get_all("x-trace").collect::<Vec<_>>(), ["a", "b", "c"]);
}

#[test]
fn display_renders_one_line_per_pair() {
    let headers = Headers::from_iter([("Host", "example.com"), ("Accept", "*/*")]);
    assert_eq!(headers.to_string(), "Host: example.com\nAccept: */*\n");
}

#[rstest]
fn values_outlive_the_lookup_name(mixed_case: Headers) {
    let value = {
        let name = String::from("accept");
        mixed_case.get(&name)
    };
    let all: Vec<&str> = {
        let name = String::from("ACCEPT");
        mixed_case.get_all(&name).collect()
    };
    assert_eq!(value, Some("text/html"));
    assert_eq!(all, ["text/html", "application/json"]);
}
