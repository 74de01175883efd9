/// Install ring as the process-wide rustls crypto provider.
///
/// rustls 0.23+ needs a default provider before any client is built. Safe
/// to call repeatedly; only the first call has an effect.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}
