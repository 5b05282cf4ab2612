//! Password buffer that is wiped from memory on drop

use std::fmt;

use zeroize::Zeroizing;

/// An editable secret string
///
/// Backed by [`Zeroizing`], so the contents are zeroed when the buffer is
/// dropped. Debug and Display never print the contents.
#[derive(Default, Clone)]
pub struct SecretBuffer {
    inner: Zeroizing<String>,
}

impl SecretBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        self.inner.push(c);
    }

    pub fn pop(&mut self) {
        self.inner.pop();
    }

    pub fn len(&self) -> usize {
        self.inner.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// One bullet per character
    pub fn masked(&self) -> String {
        "•".repeat(self.len())
    }
}

impl fmt::Debug for SecretBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretBuffer")
            .field("len", &self.inner.len())
            .finish()
    }
}

impl fmt::Display for SecretBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.inner.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_and_mask() {
        let mut secret = SecretBuffer::new();
        for c in "pässword".chars() {
            secret.push(c);
        }
        secret.pop();
        assert_eq!(secret.len(), 7);
        assert_eq!(secret.masked(), "•••••••");
    }

    #[test]
    fn test_never_printed() {
        let mut secret = SecretBuffer::new();
        secret.push('x');
        assert!(!format!("{:?}", secret).contains('x'));
        assert_eq!(secret.to_string(), "[REDACTED 1 bytes]");
    }
}
