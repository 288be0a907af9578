use super::latin1;
use super::*;

#[test]
fn test_load_simple() {
    let mut properties = Properties::new();
    properties.load(&b"a=1\nb=2\n"[..]).unwrap();
    assert_eq!(properties.get("a"), Some("1"));
    assert_eq!(properties.get("b"), Some("2"));
    assert_eq!(properties.len(), 2);
}

#[test]
fn test_load_last_duplicate_wins() {
    let mut properties = Properties::new();
    properties.load(&b"k=1\nk=2\n"[..]).unwrap();
    assert_eq!(properties.get("k"), Some("2"));
    assert_eq!(properties.len(), 1);
}

#[test]
fn test_load_overlays_existing() {
    let mut properties = Properties::new();
    properties.set("kept", "old");
    properties.set("replaced", "old");
    properties.load(&b"replaced=new\nadded=new\n"[..]).unwrap();
    assert_eq!(properties.get("kept"), Some("old"));
    assert_eq!(properties.get("replaced"), Some("new"));
    assert_eq!(properties.get("added"), Some("new"));
}

#[test]
fn test_load_latin1_bytes() {
    // 0xE9 is é in ISO-8859-1
    let mut properties = Properties::new();
    properties.load(&[b'k', b'=', 0xE9][..]).unwrap();
    assert_eq!(properties.get("k"), Some("é"));
}

#[test]
fn test_load_format_error() {
    let mut properties = Properties::new();
    let err = properties.load(&b"k=\\u12"[..]).unwrap_err();
    assert!(matches!(err, PropertiesError::Format(_)));
    assert!(properties.is_empty());
}

#[test]
fn test_from_bytes() {
    let properties = Properties::from_bytes(b"# config\nname=value\n").unwrap();
    assert_eq!(properties.get("name"), Some("value"));
    assert_eq!(properties.len(), 1);
}

#[test]
fn test_store_format() {
    let mut properties = Properties::new();
    properties.set("a", "1");
    properties.set("accent", "é");
    let mut out = Vec::new();
    properties.store(&mut out).unwrap();
    assert_eq!(out, b"a=1\naccent=\\u00e9\n".to_vec());
}

#[test]
fn test_store_preserves_insertion_order() {
    let mut properties = Properties::new();
    properties.set("z", "26");
    properties.set("a", "1");
    properties.set("m", "13");
    let mut out = Vec::new();
    properties.store(&mut out).unwrap();
    assert_eq!(out, b"z=26\na=1\nm=13\n".to_vec());
}

#[test]
fn test_set_keeps_position_on_overwrite() {
    let mut properties = Properties::new();
    properties.set("first", "1");
    properties.set("second", "2");
    assert_eq!(properties.set("first", "updated"), Some("1".to_string()));
    let keys: Vec<&str> = properties.keys().collect();
    assert_eq!(keys, ["first", "second"]);
}

#[test]
fn test_remove_preserves_order() {
    let mut properties: Properties = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
    assert_eq!(properties.remove("b"), Some("2".to_string()));
    assert_eq!(properties.remove("b"), None);
    let keys: Vec<&str> = properties.keys().collect();
    assert_eq!(keys, ["a", "c"]);
}

#[test]
fn test_with_defaults_copies() {
    let mut defaults = Properties::new();
    defaults.set("color", "blue");

    let mut properties = Properties::with_defaults(&defaults);
    properties.set("color", "red");
    properties.set("size", "large");

    assert_eq!(defaults.get("color"), Some("blue"));
    assert!(!defaults.contains_key("size"));
    assert_eq!(properties.get("color"), Some("red"));
}

#[test]
fn test_from_iterator() {
    let properties: Properties = [("a", "1"), ("b", "2")].into_iter().collect();
    assert_eq!(properties.get("a"), Some("1"));
    assert_eq!(properties.get("b"), Some("2"));
    assert_eq!(properties.len(), 2);
}

#[test]
fn test_into_iterator_order() {
    let properties: Properties = [("b", "2"), ("a", "1")].into_iter().collect();
    let pairs: Vec<(String, String)> = properties.into_iter().collect();
    assert_eq!(
        pairs,
        vec![
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ]
    );
}

#[test]
fn test_latin1_decode() {
    assert_eq!(latin1::decode(b"abc"), "abc");
    assert_eq!(latin1::decode(&[0xE9, 0xFF, 0x41]), "\u{E9}\u{FF}A");
    assert_eq!(latin1::decode(&[]), "");
}

#[test]
fn test_roundtrip_through_file() {
    let mut original = Properties::new();
    original.set("host", "localhost");
    original.set("greeting", "hello world");
    original.set("motd", "héllo\nwörld");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.properties");
    original
        .store(std::fs::File::create(&path).unwrap())
        .unwrap();

    let mut reloaded = Properties::new();
    reloaded.load(std::fs::File::open(&path).unwrap()).unwrap();
    assert_eq!(reloaded, original);
}
