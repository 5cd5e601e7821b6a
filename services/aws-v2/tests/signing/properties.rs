use super::{example_credential, example_locator, init_signing_test, query_value, NOW};
use anyhow::Result;
use pretty_assertions::assert_eq;
use s3presign_aws_v2::{sign_at, Credential, ObjectLocator};
use test_case::test_case;

#[test]
fn test_sign_is_deterministic() -> Result<()> {
    let signer = init_signing_test();

    let first = signer.sign(&example_locator(), 3600, &example_credential())?;
    let second = signer.sign(&example_locator(), 3600, &example_credential())?;
    assert_eq!(first, second);
    assert_eq!(
        first,
        sign_at(&example_locator(), 3600, &example_credential(), NOW)?
    );
    Ok(())
}

#[test_case("devops", "share/share.zip"; "nested key")]
#[test_case("devops", ""; "empty key")]
#[test_case("my.bucket", "a b/c+d=e&f?.txt"; "reserved characters")]
#[test_case("devops", "目录/文件.zip"; "unicode key")]
fn test_round_trip_locator(bucket: &str, key: &str) -> Result<()> {
    let locator = ObjectLocator::new(bucket, key);
    let signed = sign_at(&locator, 60, &example_credential(), NOW)?;

    let parsed = ObjectLocator::from_uri(&signed.to_uri()?)?;
    assert_eq!(parsed, locator);
    Ok(())
}

#[test_case(3600; "one hour")]
#[test_case(0; "zero")]
#[test_case(-3600; "negative")]
#[test_case(i64::MAX - NOW; "largest representable")]
fn test_expires_is_now_plus_duration(expire_seconds: i64) -> Result<()> {
    let signed = sign_at(&example_locator(), expire_seconds, &example_credential(), NOW)?;

    let expected = NOW + expire_seconds;
    assert_eq!(signed.expires(), expected);
    assert_eq!(
        query_value(signed.as_str(), "Expires"),
        Some(expected.to_string().as_str())
    );
    Ok(())
}

#[test]
fn test_signature_is_fully_escaped() -> Result<()> {
    let cred = example_credential();
    for expire_seconds in -50..50 {
        for key in ["share/share.zip", "a", "deep/er/key.bin"] {
            let locator = ObjectLocator::new("devops", key);
            let signed = sign_at(&locator, expire_seconds, &cred, NOW)?;

            let signature = query_value(signed.as_str(), "Signature").expect("must exist");
            assert_eq!(signature, signed.signature());
            assert!(
                !signature.contains(&['+', '/', '='][..]),
                "signature {signature} is not escaped"
            );
        }
    }
    Ok(())
}

#[test]
fn test_different_secrets_give_different_signatures() -> Result<()> {
    let a = sign_at(&example_locator(), 60, &Credential::new("AKID", "one"), NOW)?;
    let b = sign_at(&example_locator(), 60, &Credential::new("AKID", "two"), NOW)?;
    assert_ne!(a.signature(), b.signature());
    Ok(())
}
