use crate::auth::{AuthCodec, Challenge, DigestAuth};

#[test]
fn test_digest_auth() {
    macro_rules! test {
        ($input:literal => $scheme:expr, [$($key:literal: $value:literal),* $(,)?]) => {
            let challenge = DigestAuth.decode($input);
            assert_eq!(challenge.scheme(), $scheme, "input: {:?}", $input);
            let params: Vec<(&str, &str)> = challenge.iter().collect();
            let expected: Vec<(&str, &str)> = vec![$(($key, $value)),*];
            assert_eq!(params, expected, "input: {:?}", $input);
        };
    }

    test! {
        r#"Digest realm="testrealm@host.com", qop="auth,auth-int", nonce="dcd98b", opaque="5ccc""#
        => Some("Digest"), [
            "realm": "testrealm@host.com",
            "qop": "auth,auth-int",
            "nonce": "dcd98b",
            "opaque": "5ccc",
        ]
    }
    test!(r#"Basic realm="WallyWorld""# => Some("Basic"), ["realm": "WallyWorld"]);
    test!("Digest" => Some("Digest"), []);
    test!("realm=api, stale=false" => None, ["realm": "api", "stale": "false"]);
    test!("Digest realm = \"a b\"  algorithm=MD5" => Some("Digest"), ["realm": "a b", "algorithm": "MD5"]);
    test!(r#"Digest realm="say \"hi\"""# => Some("Digest"), ["realm": "say \"hi\""]);
    // later duplicate wins, position kept
    test!("Digest a=1, b=2, A=3" => Some("Digest"), ["a": "3", "b": "2"]);
    // malformed tail is ignored
    test!(r#"Digest realm="api", nonce"# => Some("Digest"), ["realm": "api"]);
    test!(r#"Digest realm="api", nonce="open"# => Some("Digest"), ["realm": "api"]);
    test!(r#"Digest realm="api", =oops, stale=true"# => Some("Digest"), ["realm": "api"]);
    test!("" => None, []);
}

#[test]
fn test_challenge() {
    let challenge = DigestAuth.decode(r#"Digest Realm="api""#);
    assert_eq!(challenge.get("realm"), Some("api"));
    assert_eq!(challenge.get("REALM"), Some("api"));
    assert_eq!(challenge.get("nonce"), None);
    assert_eq!(challenge.len(), 1);
    assert!(!challenge.is_empty());

    assert!(Challenge::new().is_empty());
    assert!(DigestAuth.decode("").is_empty());

    let mut challenge: Challenge = [("realm", "x"), ("nonce", "y")].into_iter().collect();
    challenge.set_scheme("Digest");
    assert_eq!(challenge.scheme(), Some("Digest"));
    assert_eq!(challenge.len(), 2);
}

#[test]
fn test_closure_codec() {
    let codec = |header: &str| -> Challenge { [("raw", header)].into_iter().collect() };
    assert_eq!(codec.decode("anything").get("raw"), Some("anything"));
}
