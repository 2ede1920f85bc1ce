//! Tests for the pagination module

use super::*;
use crate::model::LinksMap;

#[test]
fn test_next_page_with_url() {
    let next = NextPage::with_url("http://api.example.com/page2");
    assert!(next.is_continue());
    assert!(!next.is_done());

    if let NextPage::Continue { url } = next {
        assert_eq!(url, "http://api.example.com/page2");
    } else {
        panic!("Expected Continue");
    }
}

#[test]
fn test_next_page_done() {
    let next = NextPage::Done;
    assert!(next.is_done());
    assert!(!next.is_continue());
}

#[test]
fn test_resolve_next_present() {
    let links = LinksMap::from([("next", "X"), ("self", "Y")]);
    assert_eq!(resolve_next(Some(&links)), NextPage::with_url("X"));
}

#[test]
fn test_resolve_next_absent_map() {
    assert_eq!(resolve_next(None), NextPage::Done);
}

#[test]
fn test_resolve_next_empty_map() {
    let links = LinksMap::default();
    assert_eq!(resolve_next(Some(&links)), NextPage::Done);
}

#[test]
fn test_resolve_next_missing_key() {
    let links = LinksMap::from([("self", "Y"), ("alternate", "Z")]);
    assert_eq!(resolve_next(Some(&links)), NextPage::Done);
}

#[test]
fn test_resolve_next_empty_value() {
    let links = LinksMap::from([("next", "")]);
    assert_eq!(resolve_next(Some(&links)), NextPage::Done);
}

#[test]
fn test_resolve_next_case_sensitive() {
    let links = LinksMap::from([("NEXT", "X")]);
    assert_eq!(resolve_next(Some(&links)), NextPage::Done);
}

#[test]
fn test_resolve_next_idempotent() {
    let links = LinksMap::from([("next", "http://x/2")]);
    let first = resolve_next(Some(&links));
    let second = resolve_next(Some(&links));
    assert_eq!(first, second);
    assert_eq!(first, NextPage::with_url("http://x/2"));
}
