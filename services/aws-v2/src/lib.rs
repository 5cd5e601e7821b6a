//! Pre-signed url support for AWS S3 with the legacy (signature version 2)
//! query string authentication.
//!
//! ## Example
//!
//! ```
//! use s3presign_aws_v2::{sign_at, Credential, ObjectLocator};
//!
//! let locator = ObjectLocator::parse("https://s3.amazonaws.com/devops/share/share.zip")?;
//! let cred = Credential::new("AKIDEXAMPLE", "secret");
//! let signed = sign_at(&locator, 60, &cred, 1000000000)?;
//!
//! assert_eq!(signed.expires(), 1000000060);
//! assert!(signed.as_str().starts_with("http://devops.s3.amazonaws.com/share/share.zip?"));
//! # Ok::<(), s3presign_core::Error>(())
//! ```

mod constants;
pub use constants::{AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, DEFAULT_EXPIRE_SECONDS};

mod credential;
pub use credential::Credential;

mod locator;
pub use locator::ObjectLocator;

mod provide_credential;
pub use provide_credential::{EnvCredentialProvider, StaticCredentialProvider};

mod sign_request;
pub use sign_request::{sign_at, string_to_sign, RequestSigner, SignedUrl, SigningRequest};
