use thiserror::Error;

use crate::{cert::CertificateDecodeError, cose::AlgorithmError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),

    #[error(transparent)]
    Certificate(#[from] CertificateDecodeError),

    #[error("Invalid CBOR attestation statement: {0}")]
    Cbor(#[from] ciborium::de::Error<std::io::Error>),
}

pub type Result<T> = std::result::Result<T, Error>;
