// tests/hot_service.rs
//
// Dispatch facade: cache hits, TTL expiry, failure caching, key modes.
// Upstream is a counting in-memory transport; no sockets.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Local, TimeZone};
use hots_aggregator::cache::{cache_key, spawn_sweeper, CacheKeyMode, HotCache};
use hots_aggregator::hot::transport::Transport;
use hots_aggregator::hot::types::{Method, RequestBody, RequestSpec};
use hots_aggregator::{HotError, HotService};
use parking_lot::Mutex;

/// Answers every request with a fixed body and remembers what it was asked.
struct Counting {
    body: Result<String, HotError>,
    calls: AtomicUsize,
    seen: Mutex<Vec<RequestSpec>>,
}

impl Counting {
    fn ok(body: &str) -> Arc<Self> {
        Arc::new(Self {
            body: Ok(body.to_string()),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn failing(err: HotError) -> Arc<Self> {
        Arc::new(Self {
            body: Err(err),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for Counting {
    async fn execute(&self, req: &RequestSpec) -> Result<String, HotError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().push(req.clone());
        self.body.clone()
    }
}

fn service(transport: Arc<Counting>, ttl_secs: u64, mode: CacheKeyMode) -> HotService {
    HotService::new(
        Arc::new(HotCache::new(Duration::from_secs(ttl_secs))),
        transport,
        mode,
    )
}

fn bilibili_body() -> String {
    std::fs::read_to_string("tests/fixtures/bilibili.json").expect("bilibili fixture")
}

#[tokio::test(start_paused = true)]
async fn second_call_within_ttl_is_served_from_cache() {
    let t = Counting::ok(&bilibili_body());
    let svc = service(t.clone(), 120, CacheKeyMode::Source);

    let a = svc.listing("bili", None).await.unwrap();
    let b = svc.listing("bili", None).await.unwrap();

    assert_eq!(t.calls(), 1);
    assert_eq!(a, b);
    assert!(a.is_ok());
    assert_eq!(a.data.len(), 4);
    assert!(svc.cache().get("hot_bilibili").is_some());
}

#[tokio::test(start_paused = true)]
async fn expired_entry_triggers_exactly_one_refetch() {
    let t = Counting::ok(&bilibili_body());
    let svc = service(t.clone(), 120, CacheKeyMode::Source);

    svc.listing("bili", None).await.unwrap();
    tokio::time::advance(Duration::from_secs(121)).await;
    svc.listing("bili", None).await.unwrap();
    svc.listing("bili", None).await.unwrap();

    assert_eq!(t.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn failures_are_cached_like_successes() {
    let t = Counting::failing(HotError::Transport("connect refused".into()));
    let svc = service(t.clone(), 120, CacheKeyMode::Source);

    let first = svc.listing("weibo", None).await.unwrap();
    assert_eq!(first.code, 1);
    assert_eq!(first.err, "failed to fetch");
    assert!(first.succ.is_empty());
    assert!(first.data.is_empty());

    let again = svc.listing("weibo", None).await.unwrap();
    assert_eq!(again, first);
    assert_eq!(t.calls(), 1);
}

#[tokio::test]
async fn html_body_for_json_source_is_decode_failure() {
    let t = Counting::ok("<html><body>502 Bad Gateway</body></html>");
    let svc = service(t, 120, CacheKeyMode::Source);

    let resp = svc.listing("toutiao", None).await.unwrap();
    assert_eq!(resp.code, 1);
    assert_eq!(resp.err, "failed to decode");
    assert!(resp.data.is_empty());

    let wire = serde_json::to_value(resp.as_ref()).unwrap();
    assert!(wire["data"].is_array());
}

#[tokio::test]
async fn unknown_source_never_reaches_upstream() {
    let t = Counting::ok("{}");
    let svc = service(t.clone(), 120, CacheKeyMode::Source);
    let err = svc.listing("geocities", None).await.unwrap_err();
    assert!(matches!(err, HotError::UnknownSource(ref s) if s == "geocities"));
    assert_eq!(t.calls(), 0);
}

#[tokio::test]
async fn endata_variants_are_separate_entries() {
    let t = Counting::ok(r#"{"data":{"table0":[]}}"#);
    let svc = service(t.clone(), 120, CacheKeyMode::Source);

    svc.listing("endata", None).await.unwrap();
    svc.listing("endata", Some("s")).await.unwrap();
    svc.listing("endata", Some("s")).await.unwrap();

    assert_eq!(t.calls(), 2);
    assert!(svc.cache().get("hot_endata_m").is_some());
    assert!(svc.cache().get("hot_endata_s").is_some());

    let seen = t.seen.lock();
    assert!(seen.iter().all(|r| r.method == Method::Post));
    assert!(seen[0].url.ends_with("getrank_mainland.do"));
    assert!(seen[1].url.ends_with("getrank_singleday.do"));
    assert!(matches!(seen[1].body, RequestBody::Form(_)));
}

#[tokio::test]
async fn minute_bucket_mode_stamps_keys() {
    let t = Counting::ok(&bilibili_body());
    let svc = service(t, 120, CacheKeyMode::MinuteBucket);
    svc.listing("bili", None).await.unwrap();

    assert_eq!(svc.cache().len(), 1);
    assert!(svc.cache().get("hot_bilibili").is_none());
}

#[test]
fn minute_bucket_keys_change_across_minutes() {
    let a = Local.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap();
    let b = Local.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
    let k1 = cache_key("douyin", CacheKeyMode::MinuteBucket, a);
    let k2 = cache_key("douyin", CacheKeyMode::MinuteBucket, b);
    assert_eq!(k1, "hot_douyin_202401312359");
    assert_eq!(k2, "hot_douyin_202402010000");
    assert_ne!(k1, k2);

    assert_eq!(
        cache_key("douyin", CacheKeyMode::Source, a),
        cache_key("douyin", CacheKeyMode::Source, b)
    );
}

#[tokio::test(start_paused = true)]
async fn sweeper_purges_without_lookups() {
    let t = Counting::ok(&bilibili_body());
    let svc = service(t, 10, CacheKeyMode::Source);
    svc.listing("bili", None).await.unwrap();
    assert_eq!(svc.cache().len(), 1);

    let sweeper = spawn_sweeper(Arc::clone(svc.cache()), Duration::from_secs(50));
    tokio::time::sleep(Duration::from_secs(51)).await;
    assert_eq!(svc.cache().len(), 0);
    sweeper.abort();
}

#[tokio::test]
async fn concurrent_callers_all_get_a_listing() {
    let t = Counting::ok(&bilibili_body());
    let svc = Arc::new(service(t.clone(), 120, CacheKeyMode::Source));

    let mut handles = Vec::new();
    for _ in 0..16 {
        let svc = Arc::clone(&svc);
        handles.push(tokio::spawn(async move {
            svc.listing("bili", None).await.unwrap()
        }));
    }
    for h in handles {
        assert_eq!(h.await.unwrap().data.len(), 4);
    }
    // no single-flight: duplicates are allowed, but never more than one per caller
    assert!(t.calls() >= 1 && t.calls() <= 16);
}
