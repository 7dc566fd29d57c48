//! Property tests for the URL pre-filter.

use formatgrab::VideoQuery;
use proptest::prelude::*;

proptest! {
    #[test]
    fn short_strings_never_pass(s in "\\PC{0,10}") {
        prop_assert!(!VideoQuery::looks_valid(&s));
    }

    #[test]
    fn strings_without_scheme_separator_never_pass(s in "[a-zA-Z0-9./?=&_-]{0,80}") {
        prop_assume!(!s.contains("://"));
        prop_assert!(!VideoQuery::looks_valid(&s));
    }

    #[test]
    fn long_strings_with_separator_pass(prefix in "[a-z]{1,10}", rest in "[a-zA-Z0-9./?=&_-]{7,60}") {
        let url = format!("{}://{}", prefix, rest);
        prop_assert!(VideoQuery::looks_valid(&url));
    }
}
