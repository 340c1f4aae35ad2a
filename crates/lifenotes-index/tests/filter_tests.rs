use lifenotes_content::{Category, Topic};
use lifenotes_index::{CategoryFilter, FilterEngine, FilterMode, FilterState, TopicIndex};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Mind),
        Just(Category::Relation),
        Just(Category::Work),
        Just(Category::Habit),
        Just(Category::Future),
    ]
}

fn arb_topic() -> impl Strategy<Value = Topic> {
    (
        "[a-zA-Z ]{0,10}",
        "[a-zA-Z ]{0,16}",
        prop::collection::vec("[a-c]{1,2}", 0..3),
        arb_category(),
    )
        .prop_map(|(title, summary, tags, category)| {
            Topic {
                title,
                summary,
                tags,
                ..Topic::default()
            }
            .with_category(category)
        })
}

fn arb_index() -> impl Strategy<Value = TopicIndex> {
    prop::collection::vec(arb_topic(), 0..24).prop_map(TopicIndex::from_topics)
}

#[test]
fn test_unfiltered_sample_is_drawn_from_index() {
    let index: TopicIndex = (0..20)
        .map(|i| {
            Topic {
                title: format!("t{i}"),
                ..Topic::default()
            }
            .with_category(Category::Mind)
        })
        .collect();
    let mut rng = StdRng::seed_from_u64(42);

    let outcome = FilterEngine::default().filter(&index, &FilterState::new(), &mut rng);
    assert_eq!(outcome.mode, FilterMode::Discover);
    assert_eq!(outcome.len(), 6);
    for topic in &outcome.topics {
        assert!(index.topics().contains(topic));
    }
}

#[test]
fn test_filtered_results_keep_source_order() {
    let index: TopicIndex = ["b1", "a1", "b2", "a2"]
        .iter()
        .map(|title| {
            Topic {
                title: (*title).to_string(),
                ..Topic::default()
            }
            .with_category(Category::Work)
        })
        .collect();
    let mut rng = StdRng::seed_from_u64(0);

    let state = FilterState::new().with_search("b");
    let outcome = FilterEngine::default().filter(&index, &state, &mut rng);
    let titles: Vec<_> = outcome.topics.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["b1", "b2"]);
}

proptest! {
    #[test]
    fn prop_category_then_keyword_is_subset_of_category(
        index in arb_index(),
        category in arb_category(),
        keyword in "[a-zA-Z]{0,3}",
    ) {
        let engine = FilterEngine::default();
        let by_category = engine.apply(&index, &FilterState::new().with_category(category));
        let by_both = engine.apply(
            &index,
            &FilterState::new().with_category(category).with_search(keyword),
        );

        for topic in &by_both {
            prop_assert!(by_category.contains(topic));
        }
        prop_assert!(by_both.len() <= by_category.len());
    }

    #[test]
    fn prop_keyword_is_case_insensitive(
        index in arb_index(),
        keyword in "[a-zA-Z]{1,3}",
    ) {
        let engine = FilterEngine::default();
        let lower = engine.apply(&index, &FilterState::new().with_search(keyword.to_lowercase()));
        let upper = engine.apply(&index, &FilterState::new().with_search(keyword.to_uppercase()));
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn prop_every_result_matches_state(
        index in arb_index(),
        category in prop_oneof![Just(CategoryFilter::All), arb_category().prop_map(CategoryFilter::Only)],
        tag in prop::option::of("[a-c]{1,2}"),
        keyword in "[a-z]{0,2}",
        seed in any::<u64>(),
    ) {
        let mut state = FilterState::new().with_category(category).with_search(keyword);
        state.active_tag = tag;
        let mut rng = StdRng::seed_from_u64(seed);

        let outcome = FilterEngine::default().filter(&index, &state, &mut rng);
        match outcome.mode {
            FilterMode::Discover => {
                prop_assert!(state.is_unfiltered());
                prop_assert!(outcome.len() <= 6.min(index.len()));
            }
            FilterMode::Filtered => {
                for topic in &outcome.topics {
                    prop_assert!(state.matches(topic));
                }
            }
        }
    }

    #[test]
    fn prop_sample_has_no_duplicates(size in 0usize..10, seed in any::<u64>(), index in arb_index()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let sample = FilterEngine::new(size).sample(&index, &mut rng);
        prop_assert_eq!(sample.len(), size.min(index.len()));

        let mut seen = std::collections::HashSet::new();
        for topic in sample {
            prop_assert!(seen.insert(topic as *const Topic));
        }
    }
}
