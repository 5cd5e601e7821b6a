use std::io;
use std::process::ExitCode;

use clap::Parser;
use s3presign::aws::RequestSigner;
use s3presign::cli::{diagnostic, exit_code, run, Args};
use s3presign::{Context, ErrorKind, OsEnv};

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let ctx = Context::new().with_env(OsEnv);
    let signer = RequestSigner::new();

    match run(&args, &ctx, &signer, &mut io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            if err.kind() == ErrorKind::Usage {
                println!("{}", diagnostic(&err));
            } else {
                eprintln!("{}", diagnostic(&err));
            }
            ExitCode::from(exit_code(&err))
        }
    }
}
