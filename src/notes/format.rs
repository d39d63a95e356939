//! Release notes line formatting.

/// Instruction sent with every feature and bug-fix message.
pub const SUMMARY_INSTRUCTION: &str = "Summarize this Git commit message:";

/// Number of revision id characters shown per entry.
pub const SHORT_HASH_LEN: usize = 7;

/// First seven characters of a revision id, or the whole id if shorter.
pub fn short_hash(hash: &str) -> &str {
    match hash.char_indices().nth(SHORT_HASH_LEN) {
        Some((end, _)) => &hash[..end],
        None => hash,
    }
}

/// Render one bullet: `- <text> (Commit: <short-hash>)`.
pub fn format_entry(text: &str, hash: &str) -> String {
    format!("- {} (Commit: {})\n", text, short_hash(hash))
}
