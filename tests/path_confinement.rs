use ftp_binding::core_path::resolver::{is_within, resolve, resolve_directory_only};
use proptest::prelude::*;

const ROOT: &str = "/srv/ftp/data";

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("..".to_string()),
        Just(".".to_string()),
        Just(String::new()),
        "[a-zA-Z0-9_.-]{1,8}",
    ]
}

fn untrusted_path() -> impl Strategy<Value = String> {
    (
        prop::bool::ANY,
        prop::collection::vec(segment(), 0..8),
        prop::sample::select(vec!["/", "\\"]),
    )
        .prop_map(|(leading, segments, separator)| {
            let joined = segments.join(separator);
            if leading {
                format!("{}{}", separator, joined)
            } else {
                joined
            }
        })
}

proptest! {
    #[test]
    fn resolved_files_stay_below_root(input in untrusted_path()) {
        if let Ok(resolved) = resolve(ROOT, &input) {
            prop_assert!(is_within(ROOT, resolved.absolute_path()));
            prop_assert_ne!(resolved.absolute_path(), ROOT);
            prop_assert!(is_within(ROOT, resolved.directory()));
            prop_assert!(!resolved.base_name().contains('/'));
            prop_assert!(!resolved.base_name().contains('\\'));
            prop_assert_eq!(
                format!("{}/{}", resolved.directory(), resolved.base_name()),
                resolved.absolute_path()
            );
        }
    }

    #[test]
    fn traversal_prefix_is_neutralised(depth in 1usize..6, name in "[a-z]{1,8}") {
        let input = format!("{}{}", "../".repeat(depth), name);
        let resolved = resolve(ROOT, &input).unwrap();
        prop_assert_eq!(resolved.absolute_path(), format!("{}/{}", ROOT, name));
    }

    #[test]
    fn resolved_directories_stay_below_root(input in untrusted_path()) {
        let directory = resolve_directory_only(ROOT, &input).unwrap();
        prop_assert!(is_within(ROOT, directory.as_str()));
    }
}
