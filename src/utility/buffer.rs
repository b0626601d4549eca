/*!
 * Buffer Helpers
 *
 * Content comparison and conversion for `bytes::Buf` implementations,
 * independent of how the data is split into chunks.
 */

use bytes::Buf;

/// Compare two buffers byte for byte
///
/// Chunk boundaries do not matter. Neither buffer is consumed.
pub fn buffers_equal<A, B>(lhs: &A, rhs: &B) -> bool
where
    A: Buf + Clone,
    B: Buf + Clone,
{
    if lhs.remaining() != rhs.remaining() {
        return false;
    }

    let mut lhs = lhs.clone();
    let mut rhs = rhs.clone();
    while lhs.has_remaining() {
        let (l, r) = (lhs.chunk(), rhs.chunk());
        let n = l.len().min(r.len());
        if l[..n] != r[..n] {
            return false;
        }
        lhs.advance(n);
        rhs.advance(n);
    }

    true
}

/// Copy a buffer's contents into a `String`
///
/// Invalid UTF-8 is replaced with U+FFFD. The buffer is not consumed.
pub fn buffer_to_string<B>(buffer: &B) -> String
where
    B: Buf + Clone,
{
    let mut buffer = buffer.clone();
    let bytes = buffer.copy_to_bytes(buffer.remaining());
    String::from_utf8_lossy(&bytes).into_owned()
}
