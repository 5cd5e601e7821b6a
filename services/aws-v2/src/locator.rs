use std::fmt::{Display, Formatter};
use std::str::FromStr;

use http::Uri;
use log::debug;
use percent_encoding::percent_decode_str;
use s3presign_core::{Error, Result};

use crate::constants::*;

/// ObjectLocator points at an object inside a bucket.
///
/// `bucket` never contains a slash, `key` may. Joining them with `/` gives
/// back the normalized path the locator was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectLocator {
    bucket: String,
    key: String,
}

impl ObjectLocator {
    /// Create a locator from already split parts.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Parse a relative path like `bucket/key` or a full url like
    /// `https://s3-ap-southeast-1.amazonaws.com/bucket/key`.
    ///
    /// Bucket and key are not validated: malformed input yields a malformed
    /// locator. Use [`ObjectLocator::parse_strict`] to reject them instead.
    pub fn parse(input: &str) -> Result<Self> {
        let path = normalize(input)?;
        let locator = match path.split_once('/') {
            Some((bucket, key)) => Self::new(bucket, key),
            None => Self::new(path, ""),
        };

        debug!("parsed object locator from {input:?}: {locator:?}");
        Ok(locator)
    }

    /// Same as [`ObjectLocator::parse`], then check the bucket against the S3
    /// bucket naming rules and require a non-empty key.
    pub fn parse_strict(input: &str) -> Result<Self> {
        let locator = Self::parse(input)?;
        validate_bucket(&locator.bucket)?;
        validate_key(&locator.key)?;
        Ok(locator)
    }

    /// Extract the locator back out of a signed url.
    ///
    /// Both virtual hosted style (`http://bucket.s3.amazonaws.com/key`) and
    /// path style (`https://s3.amazonaws.com/bucket/key`) are understood. The
    /// key is percent-decoded.
    pub fn from_uri(uri: &Uri) -> Result<Self> {
        let host = uri
            .host()
            .ok_or_else(|| Error::invalid_input(format!("url {uri} has no host")))?;
        let path = percent_decode_str(uri.path())
            .decode_utf8()
            .map_err(|e| {
                Error::invalid_input(format!("url path of {uri} is not valid utf-8"))
                    .with_source(e)
            })?;
        let path = path.strip_prefix('/').unwrap_or(&path);

        match host
            .strip_suffix(S3_ENDPOINT)
            .and_then(|v| v.strip_suffix('.'))
        {
            Some(bucket) => Ok(Self::new(bucket, path)),
            None => match path.split_once('/') {
                Some((bucket, key)) => Ok(Self::new(bucket, key)),
                None => Ok(Self::new(path, "")),
            },
        }
    }

    /// Bucket name.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Object key, empty if the locator only names a bucket.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Display for ObjectLocator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.bucket, self.key)
    }
}

impl FromStr for ObjectLocator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Trim the input, cut everything up to the first `.com/` and drop a single
/// leading slash.
fn normalize(input: &str) -> Result<&str> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::invalid_input("object locator is empty"));
    }

    let path = match input.find(URL_PATH_MARKER) {
        Some(idx) => &input[idx + URL_PATH_MARKER.len()..],
        None => input,
    };
    Ok(path.strip_prefix('/').unwrap_or(path))
}

/// ## Reference
///
/// - [Bucket naming rules](https://docs.aws.amazon.com/AmazonS3/latest/userguide/bucketnamingrules.html)
fn validate_bucket(bucket: &str) -> Result<()> {
    if !(MIN_BUCKET_NAME_LENGTH..=MAX_BUCKET_NAME_LENGTH).contains(&bucket.len()) {
        return Err(Error::invalid_input(format!(
            "bucket name {bucket:?} must be between {MIN_BUCKET_NAME_LENGTH} and {MAX_BUCKET_NAME_LENGTH} characters long"
        )));
    }
    if let Some(c) = bucket
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '.' || *c == '-'))
    {
        return Err(Error::invalid_input(format!(
            "bucket name {bucket:?} contains invalid character {c:?}"
        )));
    }

    let is_edge =
        |c: Option<char>| c.is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    if !is_edge(bucket.chars().next()) || !is_edge(bucket.chars().last()) {
        return Err(Error::invalid_input(format!(
            "bucket name {bucket:?} must begin and end with a letter or number"
        )));
    }
    if bucket.contains("..") {
        return Err(Error::invalid_input(format!(
            "bucket name {bucket:?} must not contain two adjacent periods"
        )));
    }

    Ok(())
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::invalid_input("object key is empty"));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(Error::invalid_input(format!(
            "object key is {} bytes long, the limit is {MAX_KEY_LENGTH}",
            key.len()
        )));
    }

    Ok(())
}
