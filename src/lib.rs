//! Helpers for verifying WebAuthn attestations: resolution of COSE algorithm
//! identifiers to signature primitives, and decoding of attestation
//! certificates.

pub mod cert;
pub mod cose;
pub mod error;
pub mod statement;

#[cfg(test)]
mod test_fixtures;

pub use cert::{decode, decode_der, CertificateDecodeError, DecodedCertificate};
pub use cose::{name_for, resolve, AlgorithmError, CoseAlgorithmIdentifier, CoseAlgorithmPair};
pub use error::{Error, Result};
pub use statement::PackedAttestationStatement;
