use coset::iana::{self, EnumI64};
use ring::digest;
use thiserror::Error;
use tracing::{instrument, warn};

use super::registry::{name_for, AlgorithmName, CoseAlgorithmIdentifier};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmError {
    /// The identifier isn't part of the COSE algorithm registry
    #[error("COSE Identifier {0} is unknown")]
    UnknownAlgorithm(CoseAlgorithmIdentifier),

    /// The identifier is registered, but there's no implementation for it
    #[error("COSE Identifier {alg} ({name}) is unsupported")]
    UnsupportedAlgorithm {
        alg: CoseAlgorithmIdentifier,
        name: AlgorithmName,
    },
}

/// A hash primitive
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha256,
}

/// A signature primitive, parameterized by the hash it signs over
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithm {
    Ecdsa(HashAlgorithm),
}

/// A resolved hash and signature algorithm, ready to verify a signature
/// produced under a COSE algorithm identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoseAlgorithmPair {
    pub hash: HashAlgorithm,
    pub signature: SignatureAlgorithm,
}

impl CoseAlgorithmPair {
    /// Hashes `data` with the pair's hash primitive
    pub fn digest(&self, data: &[u8]) -> digest::Digest {
        digest::digest(self.hash.digest_algorithm(), data)
    }

    pub fn verification_algorithm(&self) -> &'static dyn ring::signature::VerificationAlgorithm {
        self.signature.verification_algorithm()
    }
}

/// The algorithms this crate has primitives for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SupportedAlgorithm {
    /// ECDSA w/ SHA-256
    Es256,
}

impl SupportedAlgorithm {
    pub const ALL: &'static [SupportedAlgorithm] = &[
        SupportedAlgorithm::Es256, // NIST P-256 scheme
    ];

    fn from_iana(alg: iana::Algorithm) -> Option<Self> {
        Self::ALL.iter().copied().find(|supported| supported.to_iana() == alg)
    }

    fn to_iana(self) -> iana::Algorithm {
        match self {
            SupportedAlgorithm::Es256 => iana::Algorithm::ES256,
        }
    }

    pub fn identifier(self) -> CoseAlgorithmIdentifier {
        self.to_iana().into()
    }

    pub fn name(self) -> Option<AlgorithmName> {
        name_for(self.identifier())
    }

    pub fn pair(self) -> CoseAlgorithmPair {
        match self {
            SupportedAlgorithm::Es256 => CoseAlgorithmPair {
                hash: HashAlgorithm::Sha256,
                signature: SignatureAlgorithm::Ecdsa(HashAlgorithm::Sha256),
            },
        }
    }
}

/// Resolves a COSE algorithm identifier to the hash and signature
/// algorithm pair used to verify signatures made with it.
///
/// Fails with [`AlgorithmError::UnknownAlgorithm`] if the identifier isn't
/// registered, and [`AlgorithmError::UnsupportedAlgorithm`] if it is, but
/// isn't implemented.
#[instrument(level = "debug")]
pub fn resolve(alg: CoseAlgorithmIdentifier) -> Result<CoseAlgorithmPair, AlgorithmError> {
    let name = match name_for(alg) {
        Some(name) => name,
        None => {
            warn!(?alg, "Unknown COSE algorithm");
            return Err(AlgorithmError::UnknownAlgorithm(alg));
        }
    };
    iana::Algorithm::from_i64(alg.0)
        .and_then(SupportedAlgorithm::from_iana)
        .map(SupportedAlgorithm::pair)
        .ok_or_else(|| {
            warn!(?alg, %name, "COSE algorithm is not implemented");
            AlgorithmError::UnsupportedAlgorithm { alg, name }
        })
}
