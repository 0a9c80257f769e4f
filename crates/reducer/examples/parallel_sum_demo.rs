// 并行求和演示：拆分任务、执行各归约入口并打印任务详情。
use reducer::config::ReducerConfig;
use reducer::reducer::{sum_parallel, sum_parallel_n, sum_sequential};
use reducer::task_splitter::{SplitStrategy, TaskSplitter};
use uuid::Uuid;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ---- 1. 构造输入数组 ----
    let input = vec![1.0, 2.0, 4.0, 8.0, 16.0, 32.0];
    println!("输入数组: {:?}", input);

    // ---- 2. 演示任务拆分 ----
    let strategy = SplitStrategy::Flat;
    println!("\n使用策略: {}", strategy.description());
    let splitter = TaskSplitter::new(strategy);
    let config = ReducerConfig::default();
    let parent_task_id = format!("demo_{}", Uuid::new_v4());
    let tasks = splitter.split_root(input.len(), 3, config.sequential_cutoff, &parent_task_id)?;

    for (i, task) in tasks.iter().enumerate() {
        println!("\n--- 子任务 #{} ---", i + 1);
        println!("  任务 ID: {}", task.task_id);
        println!("  父任务 ID: {:?}", task.parent_task_id);
        println!("  区间: [{}, {})", task.start_index, task.end_index);
        println!("  状态: {:?}", task.status);
    }
    println!("\n任务JSON:\n{}", serde_json::to_string_pretty(&tasks)?);

    // ---- 3. 执行各归约入口 ----
    println!("\n顺序求和: {}", sum_sequential(&input));
    println!("二路并行: {}", sum_parallel(&input)?);
    for task_count in [1, 2, 3, 8] {
        println!(
            "{} 路并行: {}",
            task_count,
            sum_parallel_n(&input, task_count)?
        );
    }

    // ---- 4. 无效参数被拒绝 ----
    match sum_parallel_n(&input, 0) {
        Ok(_) => eprintln!("❌ 任务数为0时应当失败"),
        Err(e) => println!("\n任务数为0被拒绝: {}", e),
    }

    Ok(())
}
