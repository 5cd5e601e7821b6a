//! AWS legacy query string authentication.
use std::fmt::{Display, Formatter, Write};

use http::{Method, Uri};
use log::debug;
use percent_encoding::utf8_percent_encode;
use s3presign_core::hash::base64_hmac_sha1;
use s3presign_core::time::{now, unix_timestamp, DateTime};
use s3presign_core::{Error, Result};

use crate::constants::*;
use crate::credential::Credential;
use crate::locator::ObjectLocator;

/// RequestSigner that builds pre-signed GET urls with the AWS legacy
/// (signature version 2) query string authentication.
///
/// - [Authenticating Requests: Query String Authentication](https://docs.aws.amazon.com/AmazonS3/latest/userguide/RESTAuthentication.html#RESTAuthenticationQueryStringAuth)
#[derive(Debug, Default, Clone)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer that reads the wall clock for every url.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sign a GET url for `locator` that stays valid for `expire_seconds`
    /// from now.
    ///
    /// Zero and negative durations are accepted and produce urls that are
    /// already expired; the storage service is the one enforcing validity.
    pub fn sign(
        &self,
        locator: &ObjectLocator,
        expire_seconds: i64,
        cred: &Credential,
    ) -> Result<SignedUrl> {
        let signing_time = unix_timestamp(self.time.unwrap_or_else(now));
        sign_at(locator, expire_seconds, cred, signing_time)
    }
}

/// Sign a GET url for `locator` at the given unix time.
///
/// This is a pure function: the same inputs always produce the same url.
pub fn sign_at(
    locator: &ObjectLocator,
    expire_seconds: i64,
    cred: &Credential,
    now: i64,
) -> Result<SignedUrl> {
    if cred.access_key_id.is_empty() {
        return Err(Error::missing_credentials("access key id is empty"));
    }
    if cred.secret_access_key.is_empty() {
        return Err(Error::missing_credentials("secret access key is empty"));
    }
    if locator.bucket().is_empty() {
        return Err(Error::invalid_input(format!(
            "bucket is empty in object locator {locator:?}"
        )));
    }

    let expires = now.checked_add(expire_seconds).ok_or_else(|| {
        Error::invalid_input(format!(
            "expiry {now} + {expire_seconds} overflows a unix timestamp"
        ))
    })?;

    let req = SigningRequest::new(locator, expires);
    let string_to_sign = req.string_to_sign();
    let signature = base64_hmac_sha1(cred.secret_access_key.as_bytes(), &string_to_sign);
    let signature: String =
        form_urlencoded::byte_serialize(signature.trim_end().as_bytes()).collect();

    let mut url = String::new();
    write!(
        url,
        "http://{}.{S3_ENDPOINT}/{}",
        locator.bucket(),
        utf8_percent_encode(locator.key(), &AWS_URI_ENCODE_SET)
    )?;
    write!(
        url,
        "?{AWS_ACCESS_KEY_ID_PARAM}={}",
        form_urlencoded::byte_serialize(cred.access_key_id.as_bytes()).collect::<String>()
    )?;
    write!(url, "&{EXPIRES_PARAM}={expires}")?;
    write!(url, "&{SIGNATURE_PARAM}={signature}")?;

    debug!("signed url for {locator}: {url}");
    Ok(SignedUrl {
        url,
        locator: locator.clone(),
        expires,
        signature,
    })
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// HTTP-Verb + "\n" +
/// Content-MD5 + "\n" +
/// Content-Type + "\n" +
/// Expires + "\n" +
/// CanonicalizedResource;
/// ```
///
/// Content-MD5 and Content-Type are always empty for a plain GET, so the
/// result is `GET\n\n\n{expires}\n/{bucket}/{key}`.
pub fn string_to_sign(expires: i64, bucket: &str, key: &str) -> Vec<u8> {
    let s = format!("{}\n\n\n{expires}\n/{bucket}/{key}", Method::GET);

    debug!("string to sign: {:?}", &s);
    s.into_bytes()
}

/// SigningRequest is everything that goes into the signature of one url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningRequest {
    method: Method,
    expires: i64,
    bucket: String,
    key: String,
}

impl SigningRequest {
    /// Build a GET signing request that expires at the given unix time.
    pub fn new(locator: &ObjectLocator, expires: i64) -> Self {
        Self {
            method: Method::GET,
            expires,
            bucket: locator.bucket().to_string(),
            key: locator.key().to_string(),
        }
    }

    /// HTTP method, always `GET`.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Absolute expiry in seconds since the unix epoch.
    pub fn expires(&self) -> i64 {
        self.expires
    }

    /// Canonical resource: `/{bucket}/{key}`.
    pub fn canonical_resource(&self) -> String {
        format!("/{}/{}", self.bucket, self.key)
    }

    /// The exact bytes that get signed.
    pub fn string_to_sign(&self) -> Vec<u8> {
        string_to_sign(self.expires, &self.bucket, &self.key)
    }
}

/// SignedUrl is a pre-signed url ready to be handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUrl {
    url: String,
    locator: ObjectLocator,
    expires: i64,
    signature: String,
}

impl SignedUrl {
    /// The full url.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// The locator this url was signed for.
    pub fn locator(&self) -> &ObjectLocator {
        &self.locator
    }

    /// Bucket name.
    pub fn bucket(&self) -> &str {
        self.locator.bucket()
    }

    /// Object key, not encoded.
    pub fn key(&self) -> &str {
        self.locator.key()
    }

    /// Absolute expiry in seconds since the unix epoch.
    pub fn expires(&self) -> i64 {
        self.expires
    }

    /// Percent-encoded signature as it appears in the query.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Parse the url into a [`http::Uri`].
    pub fn to_uri(&self) -> Result<Uri> {
        Ok(self.url.parse::<Uri>()?)
    }
}

impl Display for SignedUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}

impl From<SignedUrl> for String {
    fn from(v: SignedUrl) -> Self {
        v.url
    }
}
