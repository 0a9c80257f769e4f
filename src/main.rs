// main.rs
// 演示入口：对比顺序求和与各并行策略的结果和耗时。
use anyhow::Result;
use prettytable::{row, Table};
use rand::Rng;
use reducer::config::ReducerConfig;
use reducer::reducer::{sum_parallel_n, sum_sequential, Reducer};
use reducer::task_splitter::SplitStrategy;
use std::time::Instant;

fn main() -> Result<()> {
    println!("=== 倒数和归约演示 ===");

    let input = generate_input(1_000_000);
    println!("生成输入数组，长度: {}", input.len());

    let start = Instant::now();
    let sequential = sum_sequential(&input);
    println!(
        "顺序基准结果: {:.12}，耗时 {:?}",
        sequential,
        start.elapsed()
    );

    let mut table = Table::new();
    table.add_row(row!["策略", "任务数", "结果", "与基准偏差", "耗时"]);

    for task_count in [1usize, 2, 4, 8, 32] {
        let start = Instant::now();
        let value = sum_parallel_n(&input, task_count)?;
        table.add_row(row![
            "平铺拆分",
            task_count,
            format!("{:.12}", value),
            format!("{:.3e}", (value - sequential).abs()),
            format!("{:?}", start.elapsed()),
        ]);
    }

    let config = ReducerConfig {
        strategy: SplitStrategy::Recursive,
        sequential_cutoff: 65536,
        ..ReducerConfig::default()
    };
    let recursive = Reducer::new(config)?;
    for task_count in [2usize, 4, 8] {
        let start = Instant::now();
        let value = recursive.sum(&input, task_count)?;
        table.add_row(row![
            "递归拆分",
            task_count,
            format!("{:.12}", value),
            format!("{:.3e}", (value - sequential).abs()),
            format!("{:?}", start.elapsed()),
        ]);
    }

    table.printstd();
    Ok(())
}

/// 生成取值在 [1, 10) 的随机输入数组
fn generate_input(len: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(1.0..10.0)).collect()
}
