use std::collections::HashSet;

use once_cell::sync::Lazy;
use ring::{
    digest,
    signature::{self, VerificationAlgorithm},
};

use super::{
    resolver::{HashAlgorithm, SignatureAlgorithm, SupportedAlgorithm},
    CoseAlgorithmIdentifier,
};

impl HashAlgorithm {
    /// The ring digest implementing this hash
    pub fn digest_algorithm(self) -> &'static digest::Algorithm {
        match self {
            HashAlgorithm::Sha256 => &digest::SHA256,
        }
    }
}

impl SignatureAlgorithm {
    /// The ring verification algorithm implementing this signature scheme.
    ///
    /// ECDSA signatures are expected in ASN.1 DER form, as found in the
    /// `sig` field of WebAuthn attestation statements and assertions.
    pub fn verification_algorithm(self) -> &'static dyn VerificationAlgorithm {
        match self {
            SignatureAlgorithm::Ecdsa(HashAlgorithm::Sha256) => &signature::ECDSA_P256_SHA256_ASN1,
        }
    }
}

static SUPPORTED_ALGO_IDENTIFIERS: Lazy<HashSet<CoseAlgorithmIdentifier>> = Lazy::new(|| {
    SupportedAlgorithm::ALL
        .iter()
        .map(|alg| alg.identifier())
        .collect()
});

/// Identifiers for which [`super::resolve`] yields an algorithm pair
pub fn supported_algorithms() -> &'static HashSet<CoseAlgorithmIdentifier> {
    &SUPPORTED_ALGO_IDENTIFIERS
}

pub fn is_supported_alg(alg: CoseAlgorithmIdentifier) -> bool {
    SUPPORTED_ALGO_IDENTIFIERS.contains(&alg)
}
