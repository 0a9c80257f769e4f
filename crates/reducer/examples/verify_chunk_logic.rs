// 验证分块边界计算：打印各（分块数, 元素数）组合下的分块区间并检查覆盖性。
use reducer::chunk_partitioner::{chunk_ranges, chunk_size};

fn main() {
    let cases = [(2usize, 10usize), (3, 5), (4, 4), (3, 10), (8, 5), (4, 0)];

    for (n_chunks, n_elements) in cases {
        println!("\n--- {} 个分块, {} 个元素 ---", n_chunks, n_elements);
        println!("分块大小: {}", chunk_size(n_chunks, n_elements));

        let ranges = chunk_ranges(n_chunks, n_elements);
        let mut covered = 0;
        for (i, range) in ranges.iter().enumerate() {
            println!(
                "  分块 #{}: [{}, {}){}",
                i,
                range.start,
                range.end,
                if range.is_empty() { "（空）" } else { "" }
            );
            covered += range.end - range.start;
        }

        if covered == n_elements {
            println!("覆盖检查通过：并集恰好为 [0, {})", n_elements);
        } else {
            eprintln!("❌ 覆盖检查失败：共覆盖 {} 个元素", covered);
        }
    }
}
