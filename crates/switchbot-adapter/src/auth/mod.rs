/*
[INPUT]:  Application token and secret
[OUTPUT]: Credentials and HMAC signatures
[POS]:    Auth layer - handles SwitchBot API authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod credentials;
pub mod signer;

pub use credentials::Credentials;
pub use signer::HmacSigner;
