use crate::headers::standard::{CONTENT_TYPE, TRANSFER_ENCODING};
use crate::headers::{HeaderError, HeaderMap, HeaderName, HeaderValue};

const fn is_send_sync<T: Send + Sync>() { }
const _: () = {
    is_send_sync::<HeaderMap>();
    is_send_sync::<HeaderName>();
    is_send_sync::<HeaderValue>();
};

fn value(s: &str) -> HeaderValue {
    HeaderValue::from_slice(s).unwrap()
}

fn name(s: &str) -> HeaderName {
    HeaderName::from_slice(s).unwrap()
}

#[test]
fn header_map() {
    let mut map = HeaderMap::new();
    assert!(map.is_empty());
    assert!(map.get("content-type").is_none());

    assert!(map.insert(CONTENT_TYPE, value("FOO")).is_none());
    assert!(map.contains_key("content-type"));
    assert!(map.contains_key("CONTENT-TYPE"));
    assert!(map.contains_key(&CONTENT_TYPE));

    assert!(map.insert(name("Accept"), value("BAR")).is_none());
    assert!(map.insert(name("Host"), value("example.com")).is_none());
    assert_eq!(map.len(), 3);

    // Insert Replace

    let prev = map.insert(name("content-TYPE"), value("BAZ"));
    assert_eq!(prev.unwrap(), "FOO");
    assert_eq!(map.len(), 3);
    assert_eq!(map.get(CONTENT_TYPE).unwrap(), "BAZ");

    // Insert Multi

    map.append(name("Set-Cookie"), value("a=1"));
    map.append(name("set-cookie"), value("b=2"));
    assert_eq!(map.len(), 5);

    let mut all = map.get_all("SET-COOKIE");
    assert_eq!(all.next().unwrap(), "a=1");
    assert_eq!(all.next().unwrap(), "b=2");
    assert!(all.next().is_none());

    assert_eq!(map.get("set-cookie").unwrap(), "a=1");

    // Insert replaces every duplicate

    map.insert(name("Set-Cookie"), value("c=3"));
    assert_eq!(map.get_all("set-cookie").count(), 1);
    assert_eq!(map.get("set-cookie").unwrap(), "c=3");

    // Remove

    assert_eq!(map.remove("accept").unwrap(), "BAR");
    assert!(!map.contains_key("accept"));
    assert!(map.remove("accept").is_none());

    // Clear

    map.clear();
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert!(!map.contains_key("content-type"));
    assert!(!map.contains_key("host"));
}

#[test]
fn header_map_insert_keeps_position() {
    let mut map = HeaderMap::new();
    map.append(name("A"), value("1"));
    map.append(name("B"), value("2"));
    map.append(name("a"), value("3"));
    map.append(name("C"), value("4"));

    map.insert(name("A"), value("5"));

    let names: Vec<_> = map.iter().map(|(n, v)| (n.as_str(), v.to_str().unwrap())).collect();
    assert_eq!(names, [("A", "5"), ("B", "2"), ("C", "4")]);
}

#[test]
fn header_map_parse_lines() {
    let lines: [&[u8]; 10] = [
        b"Content-Type: text/plain",
        b"X-Custom:   padded value  ",
        b"no colon here",
        b"",
        b"Bad Name: value",
        b"Set-Cookie: a=1",
        b"set-cookie: b=2",
        b"Empty:",
        b": no name",
        b"X-\xff: not utf-8",
    ];

    let mut map = HeaderMap::new();
    map.parse_lines(lines);

    assert_eq!(map.len(), 6);
    assert_eq!(map.get("content-type").unwrap(), "text/plain");
    assert_eq!(map.get_str("x-custom"), Some("padded value"));
    assert_eq!(map.get_str("bad name"), Some("value"));
    assert_eq!(map.get_all("Set-Cookie").count(), 2);
    assert!(map.get("empty").unwrap().is_empty());
    assert!(!map.contains_key("no colon here"));

    let names: Vec<_> = map.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(
        names,
        ["Content-Type", "X-Custom", "Bad Name", "Set-Cookie", "set-cookie", "Empty"]
    );
}

#[test]
fn header_map_parse_lines_as_received() {
    let long = format!("X-Long: {}", "a".repeat(9000));
    let lines: [&[u8]; 3] = [long.as_bytes(), b"X-Ctl: a\x01b", b"Bad Name: v"];

    let mut map = HeaderMap::new();
    map.parse_lines(lines);

    assert_eq!(map.len(), 3);
    assert_eq!(map.get("x-long").unwrap().as_bytes().len(), 9000);
    assert_eq!(map.get("x-ctl").unwrap().as_bytes(), b"a\x01b");
    assert_eq!(map.get_str("Bad Name"), Some("v"));
    assert_eq!(map.render(), format!("{long}\r\nX-Ctl: a\x01b\r\nBad Name: v"));

    // strict constructors still reject them
    assert_eq!(HeaderValue::from_slice("a".repeat(9000)).unwrap_err(), HeaderError::TooLong);
    assert_eq!(HeaderValue::from_slice(b"a\x01b").unwrap_err(), HeaderError::Invalid);
    assert_eq!(HeaderName::from_slice("Bad Name").unwrap_err(), HeaderError::Invalid);
}

#[test]
fn header_map_render() {
    let mut map = HeaderMap::new();
    map.parse_lines([&b"Content-Type: text/plain"[..], &b"transfer-encoding: chunked"[..]]);

    assert_eq!(map.render(), "Content-Type: text/plain\r\ntransfer-encoding: chunked");
    assert_eq!(map.get(TRANSFER_ENCODING).unwrap(), "chunked");

    let mut buf = Vec::new();
    map.write_to(&mut buf);
    assert_eq!(buf, b"Content-Type: text/plain\r\ntransfer-encoding: chunked\r\n");

    assert_eq!(HeaderMap::new().render(), "");
}

#[test]
fn header_map_obs_text() {
    let mut map = HeaderMap::new();
    map.parse_lines([&b"X-Latin: caf\xe9"[..]]);

    let value = map.get("x-latin").unwrap();
    assert_eq!(value.as_bytes(), b"caf\xe9");
    assert_eq!(value.to_str(), Err(HeaderError::NotUtf8));
    assert!(map.get_str("x-latin").is_none());
}

#[test]
fn header_validation() {
    assert_eq!(HeaderName::from_slice("").unwrap_err(), HeaderError::Empty);
    assert_eq!(HeaderName::from_slice("a b").unwrap_err(), HeaderError::Invalid);
    assert_eq!(HeaderName::from_slice("a:b").unwrap_err(), HeaderError::Invalid);
    assert_eq!(HeaderName::from_slice("x".repeat(2048)).unwrap_err(), HeaderError::TooLong);

    assert_eq!(HeaderValue::from_slice(" lead").unwrap_err(), HeaderError::Invalid);
    assert_eq!(HeaderValue::from_slice("trail\t").unwrap_err(), HeaderError::Invalid);
    assert_eq!(HeaderValue::from_slice("new\nline").unwrap_err(), HeaderError::Invalid);
    assert!(HeaderValue::from_slice("").is_ok());

    assert_eq!(name("Content-Type"), name("content-type"));
    assert_eq!(CONTENT_TYPE, "CONTENT-TYPE");
}

#[test]
fn header_map_try_insert() {
    let mut map = HeaderMap::new();
    assert_eq!(map.try_insert("X-Id", "1"), Ok(None));
    assert_eq!(map.try_insert("x-id", "2"), Ok(Some(value("1"))));
    assert_eq!(map.try_insert("bad name", "3"), Err(HeaderError::Invalid));
    assert_eq!(map.try_insert("X-Other", "bad\r\n"), Err(HeaderError::Invalid));
    assert_eq!(map.len(), 1);
    assert_eq!(map.get_str("X-ID"), Some("2"));
}
