use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    cert::{decode_der, CertificateDecodeError, DecodedCertificate},
    cose::{resolve, AlgorithmError, CoseAlgorithmIdentifier, CoseAlgorithmPair},
    error::{Error, Result},
};

/// The `attStmt` of a `packed` attestation.
///
/// `x5c` is absent for self attestation.
/// [See more](https://www.w3.org/TR/webauthn/#sctn-packed-attestation)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackedAttestationStatement {
    pub alg: CoseAlgorithmIdentifier,
    #[serde(with = "serde_bytes")]
    pub sig: Vec<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub x5c: Vec<X5cElement>,
}

/// A DER encoded certificate. The first element is the attestation
/// certificate, followed by its CA chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct X5cElement(#[serde(with = "serde_bytes")] pub Vec<u8>);

impl PackedAttestationStatement {
    pub fn from_cbor(data: &[u8]) -> Result<Self> {
        ciborium::de::from_reader(data).map_err(|err| {
            debug!(?err, "Couldn't decode attestation statement");
            Error::from(err)
        })
    }

    /// The algorithm pair `sig` was produced with
    pub fn algorithm(&self) -> std::result::Result<CoseAlgorithmPair, AlgorithmError> {
        resolve(self.alg)
    }

    /// Decodes the `x5c` chain, attestation certificate first
    pub fn certificates(
        &self,
    ) -> std::result::Result<Vec<DecodedCertificate>, CertificateDecodeError> {
        self.x5c
            .iter()
            .enumerate()
            .map(|(index, X5cElement(der))| {
                decode_der(der).map_err(|source| CertificateDecodeError::AtIndex {
                    index,
                    source: Box::new(source),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use ciborium::value::Value;

    use super::*;
    use crate::{
        cert::decode,
        cose::{HashAlgorithm, SignatureAlgorithm},
        test_fixtures::APPLE_WEBAUTHN_ROOT_CA,
    };

    fn to_cbor(alg: i64, x5c: Vec<Vec<u8>>) -> Vec<u8> {
        let mut entries = vec![
            (Value::Text("alg".into()), Value::Integer(alg.into())),
            (Value::Text("sig".into()), Value::Bytes(vec![0x30, 0x06, 1, 3, 3, 7, 0, 0])),
        ];
        if !x5c.is_empty() {
            entries.push((
                Value::Text("x5c".into()),
                Value::Array(x5c.into_iter().map(Value::Bytes).collect()),
            ));
        }
        let mut buf = Vec::new();
        ciborium::ser::into_writer(&Value::Map(entries), &mut buf).unwrap();
        buf
    }

    #[test]
    fn test_packed_statement() {
        let der = decode(APPLE_WEBAUTHN_ROOT_CA).unwrap().der;
        let stmt = PackedAttestationStatement::from_cbor(&to_cbor(-7, vec![der])).unwrap();

        assert_eq!(stmt.alg, CoseAlgorithmIdentifier(-7));
        assert_eq!(stmt.sig, vec![0x30, 0x06, 1, 3, 3, 7, 0, 0]);

        let pair = stmt.algorithm().unwrap();
        assert_eq!(pair.hash, HashAlgorithm::Sha256);
        assert_eq!(pair.signature, SignatureAlgorithm::Ecdsa(HashAlgorithm::Sha256));

        let certs = stmt.certificates().unwrap();
        assert_eq!(certs.len(), 1);
        assert_eq!(certs[0].subject.common_name(), Some("Apple WebAuthn Root CA"));
    }

    #[test]
    fn test_self_attestation_has_no_certificates() {
        let stmt = PackedAttestationStatement::from_cbor(&to_cbor(-7, vec![])).unwrap();
        assert!(stmt.x5c.is_empty());
        assert!(stmt.certificates().unwrap().is_empty());
    }

    #[test]
    fn test_unsupported_statement_algorithm() {
        let stmt = PackedAttestationStatement::from_cbor(&to_cbor(-257, vec![])).unwrap();
        assert!(matches!(
            stmt.algorithm(),
            Err(AlgorithmError::UnsupportedAlgorithm { .. })
        ));
        let err: Error = stmt.algorithm().unwrap_err().into();
        assert!(matches!(err, Error::Algorithm(_)));
    }

    #[test]
    fn test_invalid_certificate_in_chain() {
        let der = decode(APPLE_WEBAUTHN_ROOT_CA).unwrap().der;
        let stmt =
            PackedAttestationStatement::from_cbor(&to_cbor(-7, vec![der, vec![1, 2, 3]])).unwrap();
        let err = stmt.certificates().unwrap_err();
        assert!(matches!(err, CertificateDecodeError::AtIndex { index: 1, .. }));
    }

    #[test]
    fn test_malformed_cbor() {
        let err = PackedAttestationStatement::from_cbor(&[0xa1, 0x63]).unwrap_err();
        assert!(matches!(err, Error::Cbor(_)));
        // the decoder's error is kept as the cause
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.downcast_ref::<ciborium::de::Error<std::io::Error>>().is_some());
        // alg missing
        let mut buf = Vec::new();
        ciborium::ser::into_writer(&Value::Map(vec![]), &mut buf).unwrap();
        assert!(PackedAttestationStatement::from_cbor(&buf).is_err());
    }
}
