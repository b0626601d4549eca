/*!
 * Proto Equality
 *
 * Two messages are equal when their fully-qualified type names match and
 * their encodings are byte-identical. Messages containing map fields encode
 * in hash order, so compare those field by field instead.
 */

use prost::{Message, Name};

/// Compare two messages by type name and encoded bytes
pub fn proto_equal<L, R>(lhs: &L, rhs: &R) -> bool
where
    L: Message + Name,
    R: Message + Name,
{
    L::full_name() == R::full_name() && lhs.encode_to_vec() == rhs.encode_to_vec()
}

/// Pairwise `proto_equal` over two repeated fields
pub fn repeated_proto_equal<L, R>(lhs: &[L], rhs: &[R]) -> bool
where
    L: Message + Name,
    R: Message + Name,
{
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(l, r)| proto_equal(l, r))
}
