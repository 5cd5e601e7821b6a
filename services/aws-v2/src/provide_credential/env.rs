// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::{constants::*, Credential};
use log::debug;
use s3presign_core::{Context, Error, ProvideCredential, Result};

/// EnvCredentialProvider loads AWS credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `AWS_ACCESS_KEY_ID`: The AWS access key ID
/// - `AWS_SECRET_ACCESS_KEY`: The AWS secret access key
///
/// Both are required. An unset or empty variable is reported as
/// [`ErrorKind::MissingCredentials`](s3presign_core::ErrorKind::MissingCredentials)
/// naming the variable.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Self::Credential> {
        let access_key_id = required_env_var(ctx, AWS_ACCESS_KEY_ID)?;
        let secret_access_key = required_env_var(ctx, AWS_SECRET_ACCESS_KEY)?;

        let cred = Credential::new(access_key_id, secret_access_key);
        debug!("loaded credential from env: {cred:?}");
        Ok(cred)
    }
}

fn required_env_var(ctx: &Context, key: &str) -> Result<String> {
    ctx.env_var_non_empty(key).ok_or_else(|| {
        Error::missing_credentials(format!(
            "no env_var: {key}, set it with `export {key}=...` before running"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use s3presign_core::{ErrorKind, StaticEnv};
    use std::collections::HashMap;

    fn context(envs: &[(&str, &str)]) -> Context {
        Context::new().with_env(StaticEnv {
            envs: envs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        })
    }

    #[test]
    fn test_env_credential_provider() -> anyhow::Result<()> {
        let ctx = context(&[
            (AWS_ACCESS_KEY_ID, "test_access_key"),
            (AWS_SECRET_ACCESS_KEY, "test_secret_key"),
        ]);

        let cred = EnvCredentialProvider::new().provide_credential(&ctx)?;
        assert_eq!(cred.access_key_id, "test_access_key");
        assert_eq!(cred.secret_access_key, "test_secret_key");

        Ok(())
    }

    #[test]
    fn test_env_credential_provider_missing_secret() {
        let ctx = context(&[(AWS_ACCESS_KEY_ID, "test_access_key")]);

        let err = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingCredentials);
        assert!(err.to_string().contains(AWS_SECRET_ACCESS_KEY));
    }

    #[test]
    fn test_env_credential_provider_missing_access_key() {
        let ctx = context(&[(AWS_SECRET_ACCESS_KEY, "test_secret_key")]);

        let err = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingCredentials);
        assert!(err.to_string().contains(AWS_ACCESS_KEY_ID));
    }

    #[test]
    fn test_env_credential_provider_empty_value() {
        let ctx = context(&[
            (AWS_ACCESS_KEY_ID, "test_access_key"),
            (AWS_SECRET_ACCESS_KEY, ""),
        ]);

        let err = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingCredentials);
    }
}
