use bytes::Bytes;

use crate::h1::parser::{parse, parse_status_line};

#[test]
fn test_parse_status_line() {
    macro_rules! test {
        (#[error] $input:literal) => {
            assert_eq!(parse_status_line($input), None, "input: {:?}", $input);
        };
        ($input:literal => $version:literal, $code:literal, $reason:literal) => {
            let line = parse_status_line($input).unwrap();
            assert_eq!(line.version, $version, "input: {:?}", $input);
            assert_eq!(line.code, $code, "input: {:?}", $input);
            assert_eq!(line.reason, $reason, "input: {:?}", $input);
        };
    }

    test!(b"HTTP/1.1 200 OK" => "1.1", 200, "OK");
    test!(b"HTTP/1.0 404 Not Found" => "1.0", 404, "Not Found");
    test!(b"http/1.1 301 Moved Permanently" => "1.1", 301, "Moved Permanently");
    test!(b"HTTP/1.1 200 " => "1.1", 200, "");
    test!(b"HTTP/2.0 204\t" => "2.0", 204, "");
    test!(b"  HTTP/1.1\t500\tInternal Server Error" => "1.1", 500, "Internal Server Error");
    test!(b"HTTP/10.11 999 Whatever" => "10.11", 999, "Whatever");
    test!(b"HTTP/1.1 0200 OK" => "1.1", 200, "OK");
    // reason phrase is not checked
    test!(b"HTTP/1.1 200 Totally Fine" => "1.1", 200, "Totally Fine");
    // code is not checked against known codes
    test!(b"HTTP/1.1 70000 Too Big" => "1.1", 70000, "Too Big");
    test!(b"HTTP/1.1 4294967295 Max" => "1.1", 4_294_967_295, "Max");

    test!(#[error] b"");
    test!(#[error] b"HTTP/1.1");
    test!(#[error] b"HTTP/1 200 OK");
    test!(#[error] b"HTTP/1. 200 OK");
    test!(#[error] b"HTTP/1.1200 OK");
    test!(#[error] b"HTTP/1.1 OK");
    test!(#[error] b"HTTP/1.1 200OK");
    test!(#[error] b"HTTP/1.1 200");
    test!(#[error] b"HTTP/2.0 204");
    test!(#[error] b"HTTP/1.1 4294967296 Overflow");
    test!(#[error] b"HTTP/1.1 99999999999 Overflow");
    test!(#[error] b"HTTPS/1.1 200 OK");
    test!(#[error] b"Content-Type: text/html");
}

#[test]
fn test_parse() {
    let message = parse(Bytes::from_static(
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nX-Dup: a\r\nx-dup: b\r\n\r\n hello ",
    ));
    let status = message.status.unwrap();
    assert_eq!(status.protocol(), "HTTP/1.1");
    assert_eq!(status.code, 200);
    assert_eq!(status.reason, "OK");
    assert_eq!(message.headers.len(), 3);
    assert_eq!(message.headers.get_str("content-type"), Some("text/plain"));
    assert_eq!(message.headers.get_all("X-DUP").collect::<Vec<_>>(), ["a", "b"]);
    // body is kept verbatim when the status line is parsed
    assert_eq!(message.body, " hello ");
}

#[test]
fn test_parse_body_only() {
    macro_rules! test {
        ($input:literal => $body:literal) => {
            let message = parse(Bytes::from_static($input));
            assert_eq!(message.status, None, "input: {:?}", $input);
            assert!(message.headers.is_empty(), "input: {:?}", $input);
            assert_eq!(message.body, &$body[..], "input: {:?}", $input);
        };
    }

    test!(b"just text" => b"just text");
    test!(b"  padded\r\n" => b"padded");
    test!(b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n" => b"HTTP/1.1 200 OK\r\nContent-Type: text/plain");
    test!(b"\r\n\r\n body " => b"body");
    test!(b"  \r\n\r\n\r\nbody" => b"body");
    test!(b"" => b"");
}

#[test]
fn test_parse_malformed_status() {
    let message = parse(Bytes::from_static(
        b"HTCPCP/1.0 418 Teapot\r\nX-Brew: yes\r\nno colon here\r\n\r\n  short and stout  ",
    ));
    assert_eq!(message.status, None);
    // the first line is never a header
    assert_eq!(message.headers.len(), 1);
    assert_eq!(message.headers.get_str("x-brew"), Some("yes"));
    assert_eq!(message.body, "short and stout");
}

#[test]
fn test_parse_line_endings() {
    let message = parse(Bytes::from_static(
        b"HTTP/1.0 302 Found\nLocation: /next\r\nX-Odd: a\rb\r\n\r\nbody\r\n\r\nmore",
    ));
    let status = message.status.unwrap();
    assert_eq!(status.protocol(), "HTTP/1.0");
    assert_eq!(status.code, 302);
    assert_eq!(message.headers.get_str("location"), Some("/next"));
    assert_eq!(message.headers.get_str("x-odd"), Some("ab"));
    // only the first empty line separates the head
    assert_eq!(message.body, "body\r\n\r\nmore");
}
