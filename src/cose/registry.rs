use std::{collections::HashMap, fmt};

use coset::iana::{self, EnumI64};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Identifies a cryptographic algorithm.
///
/// Values come from untrusted input (e.g. the `alg` field of an attestation
/// statement), so any `i64` is representable, registered or not.
///
/// [See more](https://w3c.github.io/webauthn/#typedefdef-cosealgorithmidentifier)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoseAlgorithmIdentifier(pub i64);

impl From<i64> for CoseAlgorithmIdentifier {
    fn from(value: i64) -> Self {
        CoseAlgorithmIdentifier(value)
    }
}

impl From<iana::Algorithm> for CoseAlgorithmIdentifier {
    fn from(alg: iana::Algorithm) -> Self {
        CoseAlgorithmIdentifier(alg.to_i64())
    }
}

impl fmt::Display for CoseAlgorithmIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The registered name of a COSE algorithm, e.g. `ES256`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AlgorithmName(&'static str);

impl AlgorithmName {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for AlgorithmName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The IANA "COSE Algorithms" registry.
/// [See more](https://www.iana.org/assignments/cose/cose.xhtml#algorithms)
pub const COSE_ALGORITHMS: &[(i64, &str)] = &[
    (-65535, "RS1"),
    (-260, "WalnutDSA"),
    (-259, "RS512"),
    (-258, "RS384"),
    (-257, "RS256"),
    (-47, "ES256K"),
    (-46, "HSS-LMS"),
    (-45, "SHAKE256"),
    (-44, "SHA-512"),
    (-43, "SHA-384"),
    (-42, "RSAES-OAEP w/ SHA-512"),
    (-41, "RSAES-OAEP w/ SHA-256"),
    (-40, "RSAES-OAEP w/ RFC 8017 default parameters"),
    (-39, "PS512"),
    (-38, "PS384"),
    (-37, "PS256"),
    (-36, "ES512"),
    (-35, "ES384"),
    (-34, "ECDH-SS + A256KW"),
    (-33, "ECDH-SS + A192KW"),
    (-32, "ECDH-SS + A128KW"),
    (-31, "ECDH-ES + A256KW"),
    (-30, "ECDH-ES + A192KW"),
    (-29, "ECDH-ES + A128KW"),
    (-28, "ECDH-SS + HKDF-512"),
    (-27, "ECDH-SS + HKDF-256"),
    (-26, "ECDH-ES + HKDF-512"),
    (-25, "ECDH-ES + HKDF-256"),
    (-18, "SHAKE128"),
    (-17, "SHA-512/256"),
    (-16, "SHA-256"),
    (-15, "SHA-256/64"),
    (-14, "SHA-1"),
    (-13, "direct+HKDF-AES-256"),
    (-12, "direct+HKDF-AES-128"),
    (-11, "direct+HKDF-SHA-512"),
    (-10, "direct+HKDF-SHA-256"),
    (-8, "EdDSA"),
    (-7, "ES256"),
    (-6, "direct"),
    (-5, "A256KW"),
    (-4, "A192KW"),
    (-3, "A128KW"),
    (0, "Reserved"),
    (1, "A128GCM"),
    (2, "A192GCM"),
    (3, "A256GCM"),
    (4, "HMAC 256/64"),
    (5, "HMAC 256/256"),
    (6, "HMAC 384/384"),
    (7, "HMAC 512/512"),
    (10, "AES-CCM-16-64-128"),
    (11, "AES-CCM-16-64-256"),
    (12, "AES-CCM-64-64-128"),
    (13, "AES-CCM-64-64-256"),
    (14, "AES-MAC 128/64"),
    (15, "AES-MAC 256/64"),
    (24, "ChaCha20/Poly1305"),
    (25, "AES-MAC 128/128"),
    (26, "AES-MAC 256/128"),
    (30, "AES-CCM-16-128-128"),
    (31, "AES-CCM-16-128-256"),
    (32, "AES-CCM-64-128-128"),
    (33, "AES-CCM-64-128-256"),
    (34, "IV-GENERATION"),
];

static REGISTRY: Lazy<HashMap<CoseAlgorithmIdentifier, AlgorithmName>> = Lazy::new(|| {
    COSE_ALGORITHMS
        .iter()
        .map(|&(id, name)| (CoseAlgorithmIdentifier(id), AlgorithmName(name)))
        .collect()
});

/// Looks up the registered name of an algorithm, `None` if the identifier
/// isn't assigned.
pub fn name_for(alg: CoseAlgorithmIdentifier) -> Option<AlgorithmName> {
    REGISTRY.get(&alg).copied()
}

/// All registered algorithms, in registry order
pub fn entries() -> impl Iterator<Item = (CoseAlgorithmIdentifier, AlgorithmName)> {
    COSE_ALGORITHMS
        .iter()
        .map(|&(id, name)| (CoseAlgorithmIdentifier(id), AlgorithmName(name)))
}
