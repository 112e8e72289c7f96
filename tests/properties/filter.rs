//! Property tests for search filtering.

use proptest::prelude::*;

use sshw::ui::picker::{filter, matches, Candidate};
use sshw::Node;

fn host_strategy() -> impl Strategy<Value = Node> {
    ("[a-z]{1,6}(-[a-z0-9]{1,4})?", "[a-z]{0,4}", "[0-9.]{0,9}").prop_map(|(name, user, host)| {
        Node::new(name).with_user(user).with_host(host)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: An empty search keeps every item, in order.
    #[test]
    fn property_empty_search_keeps_everything(
        hosts in proptest::collection::vec(host_strategy(), 0..20),
    ) {
        let indices = filter(&hosts, "");
        prop_assert_eq!(indices, (0..hosts.len()).collect::<Vec<_>>());
    }

    /// PROPERTY: Results are strictly increasing indices of matching items.
    #[test]
    fn property_results_are_ordered_matches(
        hosts in proptest::collection::vec(host_strategy(), 0..20),
        search in "[a-z0-9. -]{0,6}",
    ) {
        let indices = filter(&hosts, &search);
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        for (i, host) in hosts.iter().enumerate() {
            let expected = search.is_empty() || matches(&search, &host.search_text());
            prop_assert_eq!(indices.contains(&i), expected);
        }
    }

    /// PROPERTY: Adding a search term never widens the result.
    #[test]
    fn property_extra_term_only_narrows(
        hosts in proptest::collection::vec(host_strategy(), 0..20),
        first in "[a-z0-9.]{1,3}",
        second in "[a-z0-9.]{1,3}",
    ) {
        let narrow = filter(&hosts, &format!("{} {}", first, second));
        let wide = filter(&hosts, &first);
        prop_assert!(narrow.iter().all(|i| wide.contains(i)));
    }

    /// PROPERTY: Term order does not matter once the search has a space.
    #[test]
    fn property_term_order_is_irrelevant(
        text in "[a-z0-9 .]{0,24}",
        first in "[a-z]{1,3}",
        second in "[a-z]{1,3}",
    ) {
        prop_assert_eq!(
            matches(&format!("{} {}", first, second), &text),
            matches(&format!("{} {}", second, first), &text)
        );
    }
}
