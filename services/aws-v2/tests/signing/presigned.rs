use super::{example_credential, example_locator, init_signing_test, query_value};
use anyhow::Result;
use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use log::debug;
use pretty_assertions::assert_eq;
use s3presign_aws_v2::{EnvCredentialProvider, ObjectLocator};
use s3presign_core::{Context, ProvideCredential, StaticEnv};
use sha1::Sha1;
use std::collections::HashMap;

fn expected_signature(secret: &str, string_to_sign: &str) -> String {
    let mut h = Hmac::<Sha1>::new_from_slice(secret.as_bytes()).expect("any key length works");
    h.update(string_to_sign.as_bytes());
    let b64 = BASE64_STANDARD.encode(h.finalize().into_bytes());
    form_urlencoded_like(&b64)
}

// Base64 only emits `+`, `/` and `=` outside the alphanumerics.
fn form_urlencoded_like(b64: &str) -> String {
    b64.replace('+', "%2B")
        .replace('/', "%2F")
        .replace('=', "%3D")
}

#[test]
fn test_presigned_url_scenario() -> Result<()> {
    let signer = init_signing_test();

    let signed = signer.sign(&example_locator(), 60, &example_credential())?;
    debug!("signed url: {signed}");

    let url = signed.as_str();
    assert_eq!(query_value(url, "Expires"), Some("1000000060"));
    assert_eq!(query_value(url, "AWSAccessKeyId"), Some("AKIDEXAMPLE"));
    assert_eq!(
        query_value(url, "Signature"),
        Some(
            expected_signature("secret", "GET\n\n\n1000000060\n/devops/share/share.zip").as_str()
        )
    );
    Ok(())
}

#[test]
fn test_presigned_url_from_full_url_and_env() -> Result<()> {
    let signer = init_signing_test();
    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from([
            ("AWS_ACCESS_KEY_ID".to_string(), "AKIDEXAMPLE".to_string()),
            ("AWS_SECRET_ACCESS_KEY".to_string(), "secret".to_string()),
        ]),
    });

    let locator =
        ObjectLocator::parse("https://s3-ap-southeast-1.amazonaws.com/devops/share/share.zip")?;
    let cred = EnvCredentialProvider::new().provide_credential(&ctx)?;
    let signed = signer.sign(&locator, 60, &cred)?;

    assert_eq!(
        signed.as_str(),
        "http://devops.s3.amazonaws.com/share/share.zip?AWSAccessKeyId=AKIDEXAMPLE&Expires=1000000060&Signature=ylaqfuwBHEZGCKfsymOVH4yFH%2BE%3D"
    );
    Ok(())
}
