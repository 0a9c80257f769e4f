// task_executor.rs
// 任务执行器，负责叶子任务的顺序累加与内部任务的fan-out拆分合并。
use crate::result_merger;
use crate::scheduler::SchedulerCore;
use crate::task::{ReduceTask, TaskKind, TaskStatus};
use crate::task_splitter::TaskSplitter;
use std::sync::Arc;

/// 任务执行器，持有顺序累加阈值
#[derive(Debug, Clone, Copy)]
pub struct TaskExecutor {
    /// 区间长度不超过该阈值时不再拆分，直接顺序累加
    pub sequential_cutoff: usize,
}

impl TaskExecutor {
    /// 创建新的任务执行器
    pub fn new(sequential_cutoff: usize) -> Self {
        Self { sequential_cutoff }
    }

    /// 执行一个归约任务直至完成，返回持有结果的任务。
    /// 叶子任务按升序索引顺序累加；内部任务把子任务全部提交后
    /// 按子区间升序合并，固定拆分下结果可复现。
    pub fn execute<'scope>(
        &self,
        mut task: ReduceTask,
        input: &'scope [f64],
        core: &Arc<SchedulerCore<'scope, ReduceTask>>,
    ) -> ReduceTask {
        task.status = TaskStatus::Running;
        let value = match task.kind {
            TaskKind::Leaf => leaf_sum(input, task.start_index, task.end_index),
            TaskKind::Internal { fan_out } => self.fan_out_sum(&task, fan_out, input, core),
        };
        task.result = Some(value);
        task.status = TaskStatus::Completed;
        task
    }

    /// 内部任务：拆分出子任务并发执行，再按提交顺序合并部分和
    fn fan_out_sum<'scope>(
        &self,
        task: &ReduceTask,
        fan_out: usize,
        input: &'scope [f64],
        core: &Arc<SchedulerCore<'scope, ReduceTask>>,
    ) -> f64 {
        let children = TaskSplitter::sub_tasks(task, fan_out, self.sequential_cutoff);
        let executor = *self;
        let jobs: Vec<_> = children
            .into_iter()
            .map(|child| {
                let core = Arc::clone(core);
                move || executor.execute(child, input, &core)
            })
            .collect();
        let completed = core.invoke_all(jobs);
        result_merger::merge_task_results(&completed)
    }
}

/// 在 [start, end) 上按升序索引顺序累加倒数
pub fn leaf_sum(input: &[f64], start: usize, end: usize) -> f64 {
    let mut value = 0.0;
    for &element in &input[start..end] {
        value += 1.0 / element;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::TaskScheduler;
    use std::thread;

    fn run_task(task: ReduceTask, input: &[f64], cutoff: usize, workers: usize) -> ReduceTask {
        thread::scope(|scope| {
            let scheduler = TaskScheduler::start(scope, workers);
            TaskExecutor::new(cutoff).execute(task, input, &scheduler.core())
        })
    }

    #[test]
    fn test_leaf_sum_over_reference_array() {
        let input = [1.0, 2.0, 4.0, 8.0];
        assert_eq!(leaf_sum(&input, 0, 4), 1.875);
        assert_eq!(leaf_sum(&input, 1, 3), 0.75);
        assert_eq!(leaf_sum(&input, 2, 2), 0.0);
    }

    #[test]
    fn test_leaf_task_matches_sequential() {
        let input: Vec<f64> = (1..=64).map(|i| i as f64).collect();
        let task = ReduceTask::new("t".to_string(), 0, input.len(), TaskKind::Leaf, None);
        let done = run_task(task, &input, 4096, 2);
        assert!(matches!(done.status, TaskStatus::Completed));
        assert_eq!(done.value(), leaf_sum(&input, 0, input.len()));
    }

    #[test]
    fn test_internal_task_matches_sequential_within_tolerance() {
        let input: Vec<f64> = (1..=100).map(|i| i as f64).collect();
        let task = ReduceTask::new(
            "t".to_string(),
            0,
            input.len(),
            TaskKind::Internal { fan_out: 4 },
            None,
        );
        let done = run_task(task, &input, 8, 4);
        let expected = leaf_sum(&input, 0, input.len());
        assert!((done.value() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_fan_out_one_is_exactly_sequential() {
        let input: Vec<f64> = (1..=37).map(|i| i as f64 * 3.0).collect();
        let task = ReduceTask::new(
            "t".to_string(),
            0,
            input.len(),
            TaskKind::Internal { fan_out: 1 },
            None,
        );
        let done = run_task(task, &input, 4, 2);
        // 扇出为1时唯一的子任务退化为叶子任务，结果与顺序累加完全一致
        assert_eq!(done.value(), leaf_sum(&input, 0, input.len()));
    }

    #[test]
    fn test_recursive_tree_completes_with_single_worker() {
        let input: Vec<f64> = (1..=200).map(|i| i as f64).collect();
        let task = ReduceTask::new(
            "t".to_string(),
            0,
            input.len(),
            TaskKind::Internal { fan_out: 2 },
            None,
        );
        let done = run_task(task, &input, 16, 1);
        let expected = leaf_sum(&input, 0, input.len());
        assert!((done.value() - expected).abs() < 1e-9);
    }
}
