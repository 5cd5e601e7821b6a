//! Command line surface of `s3-signed-url`.

use std::io::Write;

use clap::{CommandFactory, Parser};
use log::debug;
use s3presign_aws_v2::{
    EnvCredentialProvider, ObjectLocator, RequestSigner, SignedUrl, DEFAULT_EXPIRE_SECONDS,
};
use s3presign_core::{Context, Error, ErrorKind, ProvideCredential, Result};

const AFTER_HELP: &str = "\
USE CASES:
   Generate signed S3 urls to share them in a short time to someone.

EXAMPLES:
    If the link of your s3 object is:
    https://s3-ap-southeast-1.amazonaws.com/devops/share/share.zip
    And we want to share in 1 min:
    ------------------------------------------------------------
    s3-signed-url -u devops/share/share.zip -t 60
    s3-signed-url -u https://s3-ap-southeast-1.amazonaws.com/devops/share/share.zip -t 60
    ------------------------------------------------------------

NOTE:
    You must set AWS credentials in environment variables
    export AWS_ACCESS_KEY_ID=xxx
    export AWS_SECRET_ACCESS_KEY=xxx";

/// Generate a signed S3 url
#[derive(Debug, Parser)]
#[command(name = "s3-signed-url", bin_name = "s3-signed-url", version)]
#[command(after_help = AFTER_HELP)]
pub struct Args {
    /// The path of the s3 object (include S3 Bucket) or its full url
    #[arg(short = 'u', long = "url", visible_alias = "path", visible_short_alias = 'p')]
    pub url: Option<String>,

    /// Expiry time in seconds. Default: 1 hour
    #[arg(short = 't', long = "time", allow_hyphen_values = true)]
    pub time: Option<String>,

    /// Reject bucket names that break the S3 naming rules and empty keys
    #[arg(long)]
    pub strict: bool,

    /// Print the signed url only
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Expiry duration in seconds, falling back to one hour.
    pub fn expire_seconds(&self) -> Result<i64> {
        match self.time.as_deref().map(str::trim) {
            None => Ok(DEFAULT_EXPIRE_SECONDS),
            Some(v) => v.parse::<i64>().map_err(|e| {
                Error::invalid_input(format!(
                    "expiry time {v:?} is not an integer number of seconds"
                ))
                .with_source(e)
            }),
        }
    }

    /// The object locator, or the usage text if none was given.
    pub fn locator(&self) -> Result<ObjectLocator> {
        let Some(url) = self.url.as_deref() else {
            return Err(Error::usage(Self::command().render_help().to_string()));
        };

        if self.strict {
            ObjectLocator::parse_strict(url)
        } else {
            ObjectLocator::parse(url)
        }
    }
}

/// Parse the arguments, load the credential, sign and print.
///
/// Nothing is written to `out` unless signing succeeded.
pub fn run(
    args: &Args,
    ctx: &Context,
    signer: &RequestSigner,
    out: &mut impl Write,
) -> Result<SignedUrl> {
    let locator = args.locator()?;
    let expire_seconds = args.expire_seconds()?;
    let cred = EnvCredentialProvider::new().provide_credential(ctx)?;
    debug!("signing {locator} for {expire_seconds}s with {cred:?}");

    let signed = signer.sign(&locator, expire_seconds, &cred)?;

    write_output(args, &signed, out)
        .map_err(|e| Error::unexpected("failed to write signed url").with_source(e))?;
    Ok(signed)
}

fn write_output(args: &Args, signed: &SignedUrl, out: &mut impl Write) -> std::io::Result<()> {
    if !args.quiet {
        writeln!(out, "Bucket: {}", signed.bucket())?;
        writeln!(out, "Object: {}", signed.key())?;
        writeln!(out, "Signed url: -------------------------->")?;
    }
    writeln!(out, "{signed}")?;
    out.flush()
}

/// Exit status for a failed run: 2 for usage errors, 1 otherwise.
pub fn exit_code(err: &Error) -> u8 {
    match err.kind() {
        ErrorKind::Usage => 2,
        _ => 1,
    }
}

/// Render the one line diagnostic for a failed run.
///
/// Usage errors carry the full help text instead.
pub fn diagnostic(err: &Error) -> String {
    match err.kind() {
        ErrorKind::Usage => err.to_string(),
        kind => format!("ERROR! {kind}: {err}"),
    }
}
