// result_merger.rs
// 结果合并器，负责按固定顺序合并各子任务的部分结果。
use crate::task::ReduceTask;
use std::collections::HashMap;

/// 按提交顺序（子区间升序）累加已完成任务的部分和
pub fn merge_task_results(tasks: &[ReduceTask]) -> f64 {
    let mut value = 0.0;
    for task in tasks {
        value += task.value();
    }
    value
}

/// 按分块升序累加部分和
pub fn merge_partial_sums(partials: &[f64]) -> f64 {
    let mut value = 0.0;
    for &partial in partials {
        value += partial;
    }
    value
}

/// 合并 (和, 个数) 形式的部分聚合，用于计算平均值
pub fn merge_average_partials(partials: &[(f64, u64)]) -> (f64, u64) {
    let mut sum = 0.0;
    let mut count = 0;
    for &(partial_sum, partial_count) in partials {
        sum += partial_sum;
        count += partial_count;
    }
    (sum, count)
}

/// 合并各分块的名字计数表
pub fn merge_name_counts(partials: Vec<HashMap<String, usize>>) -> HashMap<String, usize> {
    let mut merged: HashMap<String, usize> = HashMap::new();
    for partial in partials {
        for (name, count) in partial {
            *merged.entry(name).or_insert(0) += count;
        }
    }
    merged
}

/// 取计数最高的名字；计数相同时取字典序较小者，保证结果可复现
pub fn most_common_name(counts: &HashMap<String, usize>) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for (name, &count) in counts {
        let better = match best {
            None => true,
            Some((best_name, best_count)) => {
                count > best_count || (count == best_count && name.as_str() < best_name)
            }
        };
        if better {
            best = Some((name.as_str(), count));
        }
    }
    best.map(|(name, _)| name.to_string())
}
