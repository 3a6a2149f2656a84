use bytes::{Bytes, BytesMut};
use serde_json::json;

use crate::body::{Body, ChunkedDecoder, ChunkedError, decode_chunked, is_chunked};

#[test]
fn test_decode_chunked() {
    macro_rules! test {
        ($input:literal, $te:literal => $expected:literal) => {
            let body = Bytes::from_static($input);
            assert_eq!(decode_chunked(body, $te), &$expected[..], "input: {:?}", $input);
        };
    }

    test!(b"4\r\nWiki\r\n5\r\npedia\r\n0\r\n\r\n", "chunked" => b"Wikipedia");
    test!(b"4\r\nWiki\r\n5\r\npedia\r\n0\r\n\r\n", "Chunked" => b"Wikipedia");
    test!(b"4\r\nWiki\r\n5\r\npedia\r\n0\r\n\r\n", "gzip, CHUNKED" => b"Wikipedia");
    test!(b"4\nWiki\n5\npedia\n0\n\n", "chunked" => b"Wikipedia");
    test!(b"a\r\n0123456789\r\n0\r\n\r\n", "chunked" => b"0123456789");
    test!(b"A\r\n0123456789\r\n0\r\n\r\n", "chunked" => b"0123456789");
    test!(b"004\r\nWiki\r\n000\r\n\r\n", "chunked" => b"Wiki");
    // extension
    test!(b"4;name=value\r\nWiki\r\n0\r\n\r\n", "chunked" => b"Wiki");
    test!(b"4 \r\nWiki\r\n0\r\n\r\n", "chunked" => b"Wiki");
    // trailer fields
    test!(b"4\r\nWiki\r\n0\r\nExpires: never\r\n\r\n", "chunked" => b"Wiki");
    // missing final CRLF
    test!(b"4\r\nWiki\r\n0\r\n", "chunked" => b"Wiki");
    // anything after the trailer section is ignored
    test!(b"4\r\nWiki\r\n0\r\n\r\ngarbage", "chunked" => b"Wiki");
    // result is trimmed
    test!(b"6\r\n  ab  \r\n3\r\n\r\n\n\r\n0\r\n\r\n", "chunked" => b"ab");
    // not chunked, unchanged
    test!(b"4\r\nWiki\r\n0\r\n\r\n", "gzip" => b"4\r\nWiki\r\n0\r\n\r\n");
    test!(b"  raw  ", "identity" => b"  raw  ");
}

#[test]
fn test_decode_chunked_malformed() {
    macro_rules! test {
        ($input:literal => $expected:literal, $err:ident, $rest:literal) => {
            let mut output = BytesMut::new();
            let mut body = &$input[..];
            let result = ChunkedDecoder::new().decode(&mut body, &mut output);
            assert_eq!(result, Err(ChunkedError::$err), "input: {:?}", $input);
            assert_eq!(&output[..], &$expected[..], "input: {:?}", $input);
            assert_eq!(body, &$rest[..], "input: {:?}", $input);

            // same input, same result
            let again = decode_chunked(Bytes::from_static($input), "chunked");
            assert_eq!(again, decode_chunked(Bytes::from_static($input), "chunked"));
        };
    }

    test!(b"zz\r\nWiki\r\n0\r\n\r\n" => b"", InvalidLength, b"zz\r\nWiki\r\n0\r\n\r\n");
    test!(b"\r\nWiki\r\n0\r\n\r\n" => b"", InvalidLength, b"\r\nWiki\r\n0\r\n\r\n");
    test!(b"4x\r\nWiki\r\n0\r\n\r\n" => b"", InvalidLength, b"4x\r\nWiki\r\n0\r\n\r\n");
    test!(b"hello world" => b"", InvalidLength, b"hello world");
    test!(b"4\r\nWiki\r\n5\r\nped" => b"Wikiped", Truncated, b"");
    test!(b"4\r\nWiki\r\n5" => b"Wiki", Truncated, b"");
    test!(b"4\r\nWiki\r\n5\r" => b"Wiki", Truncated, b"5\r");
    test!(b"4\r\nWiki" => b"Wiki", Truncated, b"");
    test!(b"4\r\nWiki\r" => b"Wiki", Truncated, b"\r");
    test!(b"4\r\nWikipedia\r\n0\r\n\r\n" => b"Wiki", InvalidSeparator, b"pedia\r\n0\r\n\r\n");
    test!(b"4\r\nWiki\r\nzz\r\n" => b"Wiki", InvalidLength, b"zz\r\n");
    test!(b"11111111111111111\r\n" => b"", ChunkTooLarge, b"11111111111111111\r\n");
    test!(b"" => b"", Truncated, b"");
}

#[test]
fn test_decode_chunked_partial() {
    assert_eq!(decode_chunked(Bytes::from_static(b"4\r\nWiki\r\n5\r\nped"), "chunked"), "Wikiped");
    assert_eq!(decode_chunked(Bytes::from_static(b"4\r\nWiki\r\n5"), "chunked"), "Wiki");

    // input that is not chunk framed is kept as received
    assert_eq!(decode_chunked(Bytes::from_static(b"hello world"), "chunked"), "hello world");
    assert_eq!(
        decode_chunked(Bytes::from_static(b"not chunked at all"), "chunked"),
        "not chunked at all"
    );
    assert_eq!(
        decode_chunked(Bytes::from_static(b"4\r\nWiki\r\nzz\r\nrest of data"), "chunked"),
        "Wikizz\r\nrest of data"
    );
    assert_eq!(
        decode_chunked(Bytes::from_static(b"4\r\nWikipedia\r\n0\r\n\r\n"), "chunked"),
        "Wikipedia\r\n0"
    );
}

#[test]
fn test_chunked_decoder_done() {
    let mut decoder = ChunkedDecoder::new();
    let mut output = BytesMut::new();
    assert!(!decoder.is_done());
    let mut body = &b"3\r\nabc\r\n0\r\n\r\nnext"[..];
    assert_eq!(decoder.decode(&mut body, &mut output), Ok(()));
    assert!(decoder.is_done());
    assert_eq!(&output[..], b"abc");
    assert_eq!(body, b"next");

    // no further input is consumed
    let mut body = &b"3\r\ndef\r\n"[..];
    assert_eq!(decoder.decode(&mut body, &mut output), Ok(()));
    assert_eq!(&output[..], b"abc");
    assert_eq!(body, b"3\r\ndef\r\n");
}

#[test]
fn test_is_chunked() {
    assert!(is_chunked("chunked"));
    assert!(is_chunked("gzip, chunked"));
    assert!(is_chunked("CHUNKED"));
    assert!(!is_chunked("gzip"));
    assert!(!is_chunked(""));
}

#[test]
fn test_body() {
    let body = Body::from("hello");
    assert_eq!(body.as_bytes(), Some(&b"hello"[..]));
    assert_eq!(body.as_str(), Some("hello"));
    assert!(body.as_decoded().is_none());
    assert!(body.is_raw());
    assert!(!body.is_empty());

    let body = Body::from(json!({"a": 1}));
    assert!(body.as_bytes().is_none());
    assert!(body.as_str().is_none());
    assert_eq!(body.as_decoded(), Some(&json!({"a": 1})));
    assert!(!body.is_raw());

    assert!(Body::default().is_empty());
    assert!(Body::from(serde_json::Value::Null).is_empty());
    assert!(Body::from(vec![0xff, 0xfe]).as_str().is_none());
}
