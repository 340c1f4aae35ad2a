use lifenotes_content::{
    Category, ContentPaths, DirectorySource, JobRecord, LoadError, PatternRecord, StageRecord,
    Topic, TopicDocument,
};
use lifenotes_test_utils::{content_dir, loader_with, sample_site, StaticSource, MIND_DOCUMENT};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;

#[tokio::test]
async fn test_stage_is_fetched_once_per_session() {
    let (loader, source) = loader_with(sample_site());

    for _ in 0..3 {
        let stage: StageRecord = loader.load("data/high.json").await.unwrap();
        assert_eq!(stage.title, "high");
    }
    assert_eq!(source.fetch_count("data/high.json"), 1);
}

#[tokio::test]
async fn test_failed_load_is_retried() {
    let (loader, source) = loader_with(StaticSource::new().with_status("data/high.json", 500));

    let err = loader.load::<StageRecord>("data/high.json").await.unwrap_err();
    assert!(matches!(err, LoadError::Status { status: 500, .. }));

    let _ = loader.load::<StageRecord>("data/high.json").await;
    assert_eq!(source.fetch_count("data/high.json"), 2);
}

#[tokio::test]
async fn test_missing_document_reports_404() {
    let (loader, _) = loader_with(sample_site());

    let err = loader
        .load::<StageRecord>("data/elementary.json")
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), Some(404));
    assert_eq!(err.path(), "data/elementary.json");
}

#[tokio::test]
async fn test_parse_failure_carries_path() {
    let (loader, _) = loader_with(StaticSource::new().with("data/high.json", "{not json"));

    let err = loader.load::<StageRecord>("data/high.json").await.unwrap_err();
    assert!(matches!(err, LoadError::Parse { ref path, .. } if path == "data/high.json"));
}

#[tokio::test]
async fn test_all_categories_build_index_order() {
    let (loader, _) = loader_with(sample_site());

    let topics = loader
        .load_topics(&ContentPaths::default(), &Category::ALL)
        .await
        .unwrap();

    assert_eq!(topics.first().map(|t| t.title.as_str()), Some("A"));
    assert_eq!(topics.first().and_then(|t| t.category), Some(Category::Mind));
    assert_eq!(topics.last().and_then(|t| t.category), Some(Category::Future));
    assert_eq!(topics.len(), 7);
}

#[tokio::test]
async fn test_one_missing_pattern_aborts_batch() {
    let mut source = StaticSource::new();
    for n in 1..=5 {
        source = source.with_json(
            &format!("data/patterns/pattern{n}.json"),
            &lifenotes_test_utils::pattern_json(n),
        );
    }
    let (loader, _) = loader_with(source);

    let result = loader
        .load_all::<PatternRecord>(&ContentPaths::default().pattern_paths())
        .await;
    assert_eq!(result.unwrap_err().path(), "data/patterns/pattern6.json");
}

#[tokio::test]
async fn test_jobs_keep_file_order() {
    let (loader, _) = loader_with(sample_site());

    let jobs: Vec<JobRecord> = loader
        .load_all(&ContentPaths::default().job_paths())
        .await
        .unwrap();
    let ids: Vec<_> = jobs.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, vec!["job1", "job2", "job3", "job4", "job5", "job6"]);
}

#[tokio::test]
async fn test_directory_source_scenario_document() {
    let dir = content_dir(&[("data/shoseijutsu/mind.json", MIND_DOCUMENT)]);
    let loader = lifenotes_content::ContentLoader::new(Arc::new(DirectorySource::new(dir.path())));

    let doc: TopicDocument = loader.load("data/shoseijutsu/mind.json").await.unwrap();
    assert_eq!(doc.topics.len(), 1);
    assert_eq!(doc.topics[0].summary, "s");
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        ".{0,12}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z]{1,8}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_any_field_values_decode(
        title in arb_json(),
        tags in arb_json(),
        essence in arb_json(),
        insight in arb_json(),
    ) {
        let topic = json!({ "title": title, "tags": tags, "essence": essence });
        prop_assert!(serde_json::from_value::<Topic>(topic).is_ok());

        let pattern = json!({ "title": title, "branches": tags, "insight": insight });
        prop_assert!(serde_json::from_value::<PatternRecord>(pattern).is_ok());

        let stage = json!({ "title": title, "commonPaths": tags, "insights": essence });
        prop_assert!(serde_json::from_value::<StageRecord>(stage).is_ok());
    }

    #[test]
    fn prop_topic_document_never_fails(topics in arb_json()) {
        let doc = serde_json::from_value::<TopicDocument>(json!({ "topics": topics }));
        prop_assert!(doc.is_ok());
    }

    #[test]
    fn prop_string_lists_keep_only_strings(items in prop::collection::vec(arb_json(), 0..8)) {
        let expected = items.iter().filter(|v| v.is_string()).count();
        let topic: Topic = serde_json::from_value(json!({ "tags": items })).unwrap();
        prop_assert_eq!(topic.tags.len(), expected);
    }
}
