use crate::{Context, Result};
use std::fmt::Debug;

/// SigningCredential is the trait used by signers as the signing key.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is usable for signing.
    fn is_valid(&self) -> bool;
}

/// ProvideCredential is the trait used to load a credential from the context.
///
/// Implementations must report an absent credential as an error of kind
/// [`ErrorKind::MissingCredentials`](crate::ErrorKind::MissingCredentials)
/// whose message names what was missing, since there is nothing a caller
/// can sign without one.
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: SigningCredential;

    /// Load the credential from the given context.
    fn provide_credential(&self, ctx: &Context) -> Result<Self::Credential>;
}
