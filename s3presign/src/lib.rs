//! Generate pre-signed, time limited S3 urls.
//!
//! The library half of the `s3-signed-url` binary: the core types are
//! re-exported at the crate root, the signer lives in [`aws`] and the
//! command line glue in [`cli`].

pub use s3presign_core::*;

pub mod aws {
    //! AWS S3 legacy query string signing.
    pub use s3presign_aws_v2::*;
}

pub mod cli;
