use shell_core::PickerOutcome;
use shell_host::{dialog_filters, outcome_for_path};

fn accept(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn no_accept_means_no_filter() {
    assert!(dialog_filters(&[]).is_empty());
    assert!(dialog_filters(&accept(&["", " "])).is_empty());
}

#[test]
fn extensions_are_normalised_and_deduplicated() {
    let filters = dialog_filters(&accept(&[".PDF", ".pdf,.txt"]));
    assert_eq!(filters.len(), 1);
    assert_eq!(
        filters[0].extensions,
        vec!["pdf".to_string(), "txt".to_string()]
    );
}

#[test]
fn mime_types_expand_to_extensions() {
    let filters = dialog_filters(&accept(&["image/png"]));
    assert!(filters[0].extensions.contains(&"png".to_string()));

    let filters = dialog_filters(&accept(&["image/*"]));
    let extensions = &filters[0].extensions;
    assert!(extensions.contains(&"png".to_string()));
    assert!(extensions.contains(&"jpg".to_string()));
}

#[test]
fn unknown_mime_types_are_ignored() {
    assert!(dialog_filters(&accept(&["application/x-not-a-real-type"])).is_empty());
}

#[cfg(unix)]
#[test]
fn picked_path_becomes_file_url() {
    assert_eq!(
        outcome_for_path(std::path::Path::new("/tmp/photo 1.png")),
        PickerOutcome::Selected(shell_core::ResourceRef::new("file:///tmp/photo%201.png"))
    );
    assert_eq!(outcome_for_path(std::path::Path::new("relative.png")), PickerOutcome::Empty);
}
