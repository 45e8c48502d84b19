/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Binary Blob Type
///
/// Blobs represent protocol-agnostic binary content. Certificate bodies, chains and private
/// keys are carried as blobs up to the transport boundary, never as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Blob {
    inner: Vec<u8>,
}

impl Blob {
    /// Creates a new blob from the given `input`.
    pub fn new<T: Into<Vec<u8>>>(input: T) -> Self {
        Blob {
            inner: input.into(),
        }
    }

    /// Consumes the `Blob` and returns a `Vec<u8>` with its contents.
    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }

    /// Returns the number of bytes in the blob.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the blob holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl From<Vec<u8>> for Blob {
    fn from(value: Vec<u8>) -> Self {
        Blob::new(value)
    }
}

impl From<&[u8]> for Blob {
    fn from(value: &[u8]) -> Self {
        Blob::new(value)
    }
}

impl From<&str> for Blob {
    fn from(value: &str) -> Self {
        Blob::new(value.as_bytes())
    }
}

#[cfg(test)]
mod test {
    use super::Blob;

    #[test]
    fn blob_exposes_raw_bytes() {
        let blob = Blob::new("-----BEGIN CERTIFICATE-----");
        assert_eq!(blob.len(), 27);
        assert_eq!(&blob.as_ref()[..5], b"-----");
        assert_eq!(blob.clone().into_inner(), b"-----BEGIN CERTIFICATE-----".to_vec());
        assert!(Blob::default().is_empty());
    }

    #[test]
    fn conversions_agree() {
        assert_eq!(Blob::from("abc"), Blob::from(&b"abc"[..]));
        assert_eq!(Blob::from(vec![1, 2, 3]), Blob::new([1u8, 2, 3].to_vec()));
    }
}
