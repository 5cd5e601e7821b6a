use super::{example_credential, NOW};
use anyhow::Result;
use pretty_assertions::assert_eq;
use s3presign_aws_v2::{sign_at, string_to_sign, ObjectLocator};

#[test]
fn test_key_is_encoded_in_path_but_raw_in_string_to_sign() -> Result<()> {
    let locator = ObjectLocator::new("devops", "!@#$%^&*()_+-=;:'><,/?.txt");
    let signed = sign_at(&locator, 60, &example_credential(), NOW)?;

    assert!(signed.as_str().starts_with(
        "http://devops.s3.amazonaws.com/%21%40%23%24%25%5E%26%2A%28%29_%2B-%3D%3B%3A%27%3E%3C%2C/%3F.txt?"
    ));
    assert_eq!(
        string_to_sign(NOW + 60, locator.bucket(), locator.key()),
        b"GET\n\n\n1000000060\n/devops/!@#$%^&*()_+-=;:'><,/?.txt".to_vec()
    );
    Ok(())
}

#[test]
fn test_key_keeps_slashes() -> Result<()> {
    let locator = ObjectLocator::new("devops", "a/b/c/");
    let signed = sign_at(&locator, 60, &example_credential(), NOW)?;
    assert!(signed
        .as_str()
        .starts_with("http://devops.s3.amazonaws.com/a/b/c/?"));
    Ok(())
}
