//! Integration tests for domain and address matching

use routerule_core::matcher::{is_ipv4, DomainMatcher, FilterList, FilterRegions, LookupFailurePolicy, MatchReason};
use routerule_core::{CountryLookup, Error, NoLookup, Result, StaticLookup};
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

/// Lookup that counts calls and answers from a fixed table
struct CountingLookup {
    calls: AtomicUsize,
    inner: StaticLookup,
}

impl CountingLookup {
    fn new(inner: StaticLookup) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            inner,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CountryLookup for CountingLookup {
    fn country(&self, ip: Ipv4Addr) -> Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.country(ip)
    }
}

fn cn_lookup() -> StaticLookup {
    StaticLookup::new()
        .with_entry(Ipv4Addr::new(8, 8, 8, 8), "CN")
        .with_entry(Ipv4Addr::new(1, 1, 1, 1), "AU")
}

#[test]
fn test_ipv4_examples() {
    assert!(is_ipv4("1.2.3.4"));
    assert!(!is_ipv4("256.1.1.1"));
    assert!(!is_ipv4("1.2.3"));
    assert!(!is_ipv4("1.2.3.4.5"));
    assert!(!is_ipv4("999.1.1.1"));
    assert!(!is_ipv4("abc"));
}

#[test]
fn test_default_keyword_examples() {
    let matcher = DomainMatcher::default();

    assert!(matcher.match_domain("www.baidu.com"));
    assert!(!matcher.match_domain("example.com"));
    assert!(matcher.match_domain("ddys.pro.example.net"));
    assert!(!matcher.match_domain("QQ.com"));
    assert!(matcher.match_domain("bootstrap.libp2p.io"));
    assert!(matcher.match_domain("z2pyw.com"));
}

#[test]
fn test_region_depends_on_lookup() {
    let matcher = DomainMatcher::builder().lookup(cn_lookup()).build();
    assert!(matcher.match_domain("8.8.8.8"));
    assert!(!matcher.match_domain("1.1.1.1"));

    let matcher = DomainMatcher::builder().lookup(NoLookup).build();
    assert!(!matcher.match_domain("8.8.8.8"));
}

#[test]
fn test_lookup_only_for_addresses() {
    let lookup = Arc::new(CountingLookup::new(cn_lookup()));
    let matcher = DomainMatcher::new(FilterList::default(), FilterRegions::default(), lookup.clone());

    matcher.match_domain("www.baidu.com");
    matcher.match_domain("example.com");
    matcher.match_domain("300.1.1.1");
    assert_eq!(lookup.calls(), 0);

    matcher.match_domain("8.8.8.8");
    matcher.match_domain("1.1.1.1");
    assert_eq!(lookup.calls(), 2);
}

#[test]
fn test_repeated_calls_are_stable() {
    let matcher = DomainMatcher::builder().lookup(cn_lookup()).build();
    for _ in 0..3 {
        assert!(matcher.match_domain("8.8.8.8"));
        assert!(matcher.match_domain("sp1.shifen.com"));
        assert!(!matcher.match_domain("rust-lang.org"));
    }
}

#[test]
fn test_lookup_failure_policies() {
    let failing = |ip: Ipv4Addr| -> Result<Option<String>> { Err(Error::lookup(ip, "geoip database missing")) };

    let open = DomainMatcher::builder().lookup(failing).build();
    let verdict = open.evaluate("8.8.8.8");
    assert!(!verdict.filtered);
    assert_eq!(verdict.reason, MatchReason::LookupFailed);
    // Domains are unaffected by a broken lookup
    assert!(open.match_domain("www.baidu.com"));

    let closed = DomainMatcher::builder()
        .lookup(failing)
        .failure_policy(LookupFailurePolicy::Filter)
        .build();
    assert!(closed.match_domain("8.8.8.8"));
    assert!(!closed.match_domain("example.com"));

    assert!(matches!(open.try_evaluate("8.8.8.8"), Err(Error::Lookup { .. })));
}

#[test]
fn test_lowercase_region_code_does_not_match() {
    let lookup = StaticLookup::new().with_entry(Ipv4Addr::new(8, 8, 8, 8), "cn");
    let matcher = DomainMatcher::builder().lookup(lookup).build();
    assert!(!matcher.match_domain("8.8.8.8"));
}

#[test]
fn test_shared_across_threads() {
    let matcher = Arc::new(DomainMatcher::builder().lookup(cn_lookup()).build());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let matcher = Arc::clone(&matcher);
            thread::spawn(move || {
                (0..100).all(|_| {
                    matcher.match_domain("8.8.8.8")
                        && matcher.match_domain("blog.csdn.net")
                        && !matcher.match_domain("example.com")
                })
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
