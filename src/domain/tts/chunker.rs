/// Google Text-to-Speech rejects inputs over 5000 bytes; keep some headroom
pub const DEFAULT_MAX_CHUNK_BYTES: usize = 4800;

/// Split SSML into ordered chunks of at most `max_bytes` UTF-8 bytes.
///
/// Chunks always end on a character boundary and concatenate back to the
/// original text. A boundary that would land inside a markup tag is moved to
/// just before the tag's `<`, unless the tag alone is larger than the budget.
/// A single character wider than `max_bytes` gets an oversized chunk of its own.
pub fn split_into_chunks(text: &str, max_bytes: usize) -> Vec<&str> {
    if text.len() <= max_bytes {
        return vec![text];
    }

    let mut chunks = Vec::new();
    let mut chunk_start = 0;
    // Offset of the `<` of the tag we are currently inside
    let mut open_tag: Option<usize> = None;

    for (index, ch) in text.char_indices() {
        let end = index + ch.len_utf8();

        while end - chunk_start > max_bytes && index > chunk_start {
            let cut = match open_tag {
                Some(tag_start) if tag_start > chunk_start => tag_start,
                _ => index,
            };
            chunks.push(&text[chunk_start..cut]);
            chunk_start = cut;
        }

        match ch {
            '<' => open_tag = Some(index),
            '>' => open_tag = None,
            _ => {}
        }
    }

    chunks.push(&text[chunk_start..]);
    chunks
}
