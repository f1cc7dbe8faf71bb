/*
[INPUT]:  Application secret and message bytes
[OUTPUT]: Base64-encoded HMAC-SHA256 signatures
[POS]:    Auth layer - cryptographic signing for request authentication
[UPDATE]: When changing signing algorithm or encoding
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 signer keyed with the application secret
#[derive(Clone)]
pub struct HmacSigner {
    secret: Vec<u8>,
}

impl HmacSigner {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    /// Raw HMAC-SHA256 digest of `message`
    pub fn digest(&self, message: &[u8]) -> [u8; 32] {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC can take key of any size");
        mac.update(message);

        let mut digest = [0u8; 32];
        digest.copy_from_slice(&mac.finalize().into_bytes());
        digest
    }

    /// Base64 (standard alphabet, padded) of the digest
    pub fn sign(&self, message: &[u8]) -> String {
        BASE64.encode(self.digest(message))
    }
}

impl std::fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSigner").finish_non_exhaustive()
    }
}
