mod presigned;
mod properties;
mod special_chars;

use s3presign_aws_v2::{Credential, ObjectLocator, RequestSigner};
use s3presign_core::time::from_unix_timestamp;

pub const NOW: i64 = 1000000000;

/// Initialize test logging and return a signer pinned at [`NOW`].
pub fn init_signing_test() -> RequestSigner {
    let _ = env_logger::builder().is_test(true).try_init();

    RequestSigner::new().with_time(from_unix_timestamp(NOW).expect("NOW must be valid"))
}

pub fn example_credential() -> Credential {
    Credential::new("AKIDEXAMPLE", "secret")
}

pub fn example_locator() -> ObjectLocator {
    ObjectLocator::new("devops", "share/share.zip")
}

/// Extract a raw query value from a url.
pub fn query_value<'a>(url: &'a str, name: &str) -> Option<&'a str> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v)
}
