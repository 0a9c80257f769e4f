// chunk_partitioner.rs
// 分块计算器，负责把数组索引区间均匀划分为若干连续分块。
// 所有函数都是纯函数，调用方需保证 n_chunks 大于等于1。
use std::ops::Range;

/// 计算每个分块的默认大小（元素数除以分块数，向上取整）
pub fn chunk_size(n_chunks: usize, n_elements: usize) -> usize {
    // 整数向上取整
    (n_elements + n_chunks - 1) / n_chunks
}

/// 计算指定分块的起始索引（包含）。
/// 起始索引被截断到 n_elements，保证尾部空分块满足 start <= end。
pub fn chunk_start(chunk: usize, n_chunks: usize, n_elements: usize) -> usize {
    let size = chunk_size(n_chunks, n_elements);
    std::cmp::min(chunk * size, n_elements)
}

/// 计算指定分块的结束索引（不包含）
pub fn chunk_end(chunk: usize, n_chunks: usize, n_elements: usize) -> usize {
    let size = chunk_size(n_chunks, n_elements);
    std::cmp::min((chunk + 1) * size, n_elements)
}

/// 生成全部分块区间。相邻分块首尾相接，互不重叠，
/// 并集恰好覆盖 [0, n_elements)；n_chunks 超过元素数时尾部分块为空。
pub fn chunk_ranges(n_chunks: usize, n_elements: usize) -> Vec<Range<usize>> {
    (0..n_chunks)
        .map(|chunk| chunk_start(chunk, n_chunks, n_elements)..chunk_end(chunk, n_chunks, n_elements))
        .collect()
}
