use fzeri_core::identity::{composite_key, content_key, natural_key, term_key};
use fzeri_core::vocab::base;
use proptest::prelude::*;

fn label() -> impl Strategy<Value = String> {
    // Short catalogue-like labels: letters, digits, spaces, a little punctuation.
    proptest::string::string_regex("[A-Za-zÀ-ÿ0-9 '.,/-]{1,40}").unwrap()
}

proptest! {
    #[test]
    fn content_key_is_deterministic(text in label()) {
        prop_assert_eq!(
            content_key(base::COLLECTION, &text),
            content_key(base::COLLECTION, &text)
        );
    }

    #[test]
    fn content_key_separates_distinct_labels(a in label(), b in label()) {
        prop_assume!(a != b);
        prop_assert_ne!(content_key(base::SERIE, &a), content_key(base::SERIE, &b));
    }

    #[test]
    fn composite_key_separates_box_from_issue(label in label(), number in "[0-9]{1,4}") {
        prop_assert_ne!(
            composite_key(base::BOX, &[&label, &number]),
            composite_key(base::ISSUE, &[&label, &number])
        );
    }

    #[test]
    fn natural_key_is_one_node_per_record(a in "[0-9]{1,6}", b in "[0-9]{1,6}") {
        prop_assume!(a != b);
        prop_assert_ne!(
            natural_key(base::ENTRY, &a, "/photo"),
            natural_key(base::ENTRY, &b, "/photo")
        );
    }

    #[test]
    fn term_key_stays_inside_its_base(text in label()) {
        let node = term_key(base::MATERIAL, &text);
        prop_assert!(node.as_str().starts_with(base::MATERIAL));
        prop_assert!(!node.as_str()[base::MATERIAL.len()..].contains('/'));
        prop_assert!(!node.as_str().contains(' '));
    }
}
