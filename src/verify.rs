use sha2::{Digest, Sha512};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

pub const HASH_LEN: usize = 64;
pub type HashResult = [u8; HASH_LEN];

pub struct StreamHasher<R: Read> {
    hasher: Sha512,
    input: R,
}

impl<R: Read> StreamHasher<R> {
    pub fn new(input: R) -> Self {
        StreamHasher {
            hasher: Sha512::default(),
            input,
        }
    }

    pub fn get_result(self) -> HashResult {
        let mut result = [0; HASH_LEN];
        result.copy_from_slice(self.hasher.finalize().as_slice());
        result
    }
}

impl<R: Read> Read for StreamHasher<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let size = self.input.read(buf)?;
        self.hasher.update(&buf[..size]);
        Ok(size)
    }
}

pub fn hash_file(path: &Path) -> io::Result<HashResult> {
    let mut hasher = StreamHasher::new(File::open(path)?);
    io::copy(&mut hasher, &mut io::sink())?;
    Ok(hasher.get_result())
}

/// Whether two files hold the same bytes, compared by fingerprint.
pub fn same_content(a: &Path, b: &Path) -> io::Result<bool> {
    Ok(hash_file(a)?[..] == hash_file(b)?[..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_stream_hasher_passes_through() {
        let mut hasher = StreamHasher::new(&b"Sent: 4/5/2018"[..]);
        let mut content = String::new();
        hasher.read_to_string(&mut content).unwrap();
        assert_eq!(content, "Sent: 4/5/2018");
        assert_eq!(hasher.get_result()[..], Sha512::digest(b"Sent: 4/5/2018")[..]);
    }

    #[test]
    fn test_same_content() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        let c = dir.path().join("c.txt");
        fs::write(&a, "To: John Smith\n").unwrap();
        fs::write(&b, "To: John Smith\n").unwrap();
        fs::write(&c, "To: Jane Doe\n").unwrap();
        assert!(same_content(&a, &b).unwrap());
        assert!(!same_content(&a, &c).unwrap());
        assert!(same_content(&a, &dir.path().join("missing.txt")).is_err());
    }
}
