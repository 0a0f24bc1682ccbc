//! Literal text rewriting primitives.
//!
//! All matching is by exact substring: the fragments being matched come
//! verbatim from a code generator, so there is no regex syntax and no
//! escaping. Every function is pure and returns a new buffer; callers decide
//! whether the result differs enough to be persisted.

/// Whether `buf` contains `literal`.
pub fn contains_literal(buf: &str, literal: &str) -> bool {
    buf.contains(literal)
}

/// Replace the first occurrence of `literal`; unchanged copy if absent.
pub fn replace_first(buf: &str, literal: &str, replacement: &str) -> String {
    buf.replacen(literal, replacement, 1)
}

/// Replace every occurrence of `literal`.
pub fn replace_all(buf: &str, literal: &str, replacement: &str) -> String {
    buf.replace(literal, replacement)
}

/// Offset of the last occurrence of `literal` starting strictly before `before`.
pub fn last_index_before(buf: &str, literal: &str, before: usize) -> Option<usize> {
    if literal.is_empty() {
        return None;
    }
    buf.match_indices(literal)
        .map(|(index, _)| index)
        .take_while(|&index| index < before)
        .last()
}

/// Insert `text` at byte `offset`.
///
/// Offsets always come from a prior match, so they sit on a char boundary.
pub fn insert_at(buf: &str, offset: usize, text: &str) -> String {
    let mut out = String::with_capacity(buf.len() + text.len());
    out.push_str(&buf[..offset]);
    out.push_str(text);
    out.push_str(&buf[offset..]);
    out
}

/// Insert `prefix` before each occurrence of `literal` not already preceded by it.
///
/// Running this twice with the same arguments yields the same buffer as
/// running it once.
pub fn insert_before_each(buf: &str, literal: &str, prefix: &str) -> String {
    if literal.is_empty() {
        return buf.to_string();
    }
    let mut out = String::with_capacity(buf.len());
    let mut copied = 0;
    for (index, _) in buf.match_indices(literal) {
        out.push_str(&buf[copied..index]);
        if !buf[..index].ends_with(prefix) {
            out.push_str(prefix);
        }
        copied = index;
    }
    out.push_str(&buf[copied..]);
    out
}

/// Renumber every `placeholder`, last occurrence first, starting at zero.
///
/// Each occurrence is replaced by `render(n)`, where `n` counts up as the
/// scan walks backwards from the end of the buffer. Returns the new buffer
/// and the number of occurrences rewritten.
pub fn number_from_last<F>(buf: &str, placeholder: &str, render: F) -> (String, usize)
where
    F: Fn(usize) -> String,
{
    let mut out = buf.to_string();
    let mut count = 0;
    let mut cursor = out.len() + 1;
    while let Some(index) = last_index_before(&out, placeholder, cursor) {
        let replacement = render(count);
        out.replace_range(index..index + placeholder.len(), &replacement);
        count += 1;
        cursor = index;
    }
    (out, count)
}

/// A nested interface declaration found by [`SubInterfaceScan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubInterfaceDecl<'a> {
    /// Simple name of the nested interface.
    pub name: &'a str,
    /// Offset of the matched declaration literal.
    pub offset: usize,
}

/// Backward scan for nested declarations, highest offset first.
///
/// Yields every occurrence of `literal` whose offset is strictly greater than
/// `floor`, together with the name that follows it (up to the next space).
/// Occurrences with no terminating space are skipped.
pub struct SubInterfaceScan<'a> {
    buf: &'a str,
    literal: &'a str,
    floor: usize,
    cursor: usize,
}

impl<'a> SubInterfaceScan<'a> {
    pub fn new(buf: &'a str, literal: &'a str, floor: usize) -> Self {
        Self {
            buf,
            literal,
            floor,
            cursor: buf.len() + 1,
        }
    }
}

impl<'a> Iterator for SubInterfaceScan<'a> {
    type Item = SubInterfaceDecl<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let offset = last_index_before(self.buf, self.literal, self.cursor)?;
            if offset <= self.floor {
                self.cursor = 0;
                return None;
            }
            self.cursor = offset;

            let name_start = offset + self.literal.len();
            let Some(name_len) = self.buf[name_start..].find(' ') else {
                tracing::warn!(offset, "nested interface declaration has no terminating space");
                continue;
            };
            let name = &self.buf[name_start..name_start + name_len];
            if name.is_empty() {
                continue;
            }
            return Some(SubInterfaceDecl { name, offset });
        }
    }
}
