/// The most titles the MediaWiki bulk query accepts in one request.
pub const BATCH_SIZE: usize = 50;

/// Split titles into in-order batches of at most `batch_size`. Kept separate
/// from the pipeline so deeper traversal hops can reuse it.
pub fn partition_titles(titles: &[String], batch_size: usize) -> Vec<Vec<String>> {
    assert!(batch_size > 0, "batch size must be non-zero");
    titles
        .chunks(batch_size)
        .map(|chunk| chunk.to_vec())
        .collect()
}
