use crate::domain::ports::HashService;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use md5::{Digest, Md5};
use sha1::Sha1;

/// MD5 digest of the UTF-8 bytes, base64-encoded with padding (24 chars).
#[derive(Debug, Default, Clone, Copy)]
pub struct Md5HashService;

impl Md5HashService {
    pub fn new() -> Self {
        Self
    }
}

impl HashService for Md5HashService {
    fn compute_hash(&self, data: &str) -> String {
        STANDARD.encode(Md5::digest(data.as_bytes()))
    }
}

/// SHA-1 digest of the UTF-8 bytes, base64-encoded with padding (28 chars).
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha1HashService;

impl Sha1HashService {
    pub fn new() -> Self {
        Self
    }
}

impl HashService for Sha1HashService {
    fn compute_hash(&self, data: &str) -> String {
        STANDARD.encode(Sha1::digest(data.as_bytes()))
    }
}
