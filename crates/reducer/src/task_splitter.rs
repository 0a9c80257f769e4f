// task_splitter.rs
// 任务拆分器，负责把数组索引区间按策略拆分为叶子任务或递归任务树的根。
use crate::chunk_partitioner::{chunk_end, chunk_start};
use crate::error::{Error, Result};
use crate::task::{ReduceTask, TaskKind};
use serde::{Deserialize, Serialize};

/// 归约任务拆分策略
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SplitStrategy {
    /// 平铺拆分：顶层一次性拆出 task_count 个叶子任务，全部提交后按序合并
    Flat,
    /// 递归拆分：构造 fan-out 任务树，每层按 task_count 继续拆分，
    /// 区间长度低于顺序阈值后退化为叶子任务
    Recursive,
}

impl SplitStrategy {
    /// 策略的文字描述
    pub fn description(&self) -> &'static str {
        match self {
            SplitStrategy::Flat => "平铺拆分（单层叶子任务）",
            SplitStrategy::Recursive => "递归拆分（fan-out任务树）",
        }
    }
}

/// 任务拆分器，持有拆分策略
pub struct TaskSplitter {
    /// 拆分策略
    pub strategy: SplitStrategy,
}

impl TaskSplitter {
    /// 创建新的任务拆分器
    pub fn new(strategy: SplitStrategy) -> Self {
        Self { strategy }
    }

    /// 按策略拆分顶层任务。task_count 必须大于等于1，
    /// 校验失败时立即返回错误，不会创建任何任务。
    pub fn split_root(
        &self,
        n_elements: usize,
        task_count: usize,
        sequential_cutoff: usize,
        parent_task_id: &str,
    ) -> Result<Vec<ReduceTask>> {
        if task_count == 0 {
            return Err(Error::InvalidArgument("任务数必须大于等于1".to_string()));
        }

        let tasks = match self.strategy {
            SplitStrategy::Flat => self.split_flat(n_elements, task_count, parent_task_id),
            SplitStrategy::Recursive => {
                self.split_recursive(n_elements, task_count, sequential_cutoff, parent_task_id)
            }
        };
        println!("拆分为 {} 个顶层任务", tasks.len());
        Ok(tasks)
    }

    /// 平铺拆分：每个非空分块一个叶子任务
    fn split_flat(
        &self,
        n_elements: usize,
        task_count: usize,
        parent_task_id: &str,
    ) -> Vec<ReduceTask> {
        let mut tasks = Vec::new();
        for chunk in 0..task_count {
            let start = chunk_start(chunk, task_count, n_elements);
            let end = chunk_end(chunk, task_count, n_elements);
            // 尾部空分块贡献为0，直接略去
            if start >= end {
                continue;
            }
            tasks.push(ReduceTask::new(
                generate_task_id(parent_task_id, "chunk", chunk),
                start,
                end,
                TaskKind::Leaf,
                Some(parent_task_id.to_string()),
            ));
        }
        tasks
    }

    /// 递归拆分：返回覆盖整个区间的根任务，task_count 作为每层扇出
    fn split_recursive(
        &self,
        n_elements: usize,
        task_count: usize,
        sequential_cutoff: usize,
        parent_task_id: &str,
    ) -> Vec<ReduceTask> {
        vec![ReduceTask::new(
            generate_task_id(parent_task_id, "root", 0),
            0,
            n_elements,
            internal_or_leaf(n_elements, task_count, sequential_cutoff),
            Some(parent_task_id.to_string()),
        )]
    }

    /// 把内部任务的区间拆分为子任务，每个非空子区间一个任务。
    /// 子区间长度仍超过阈值时继续生成内部任务，否则为叶子任务。
    pub fn sub_tasks(
        parent: &ReduceTask,
        fan_out: usize,
        sequential_cutoff: usize,
    ) -> Vec<ReduceTask> {
        let n = parent.len();
        let mut tasks = Vec::with_capacity(fan_out);
        for chunk in 0..fan_out {
            let start = parent.start_index + chunk_start(chunk, fan_out, n);
            let end = parent.start_index + chunk_end(chunk, fan_out, n);
            if start >= end {
                continue;
            }
            tasks.push(ReduceTask::new(
                generate_task_id(&parent.task_id, "chunk", chunk),
                start,
                end,
                internal_or_leaf(end - start, fan_out, sequential_cutoff),
                Some(parent.task_id.clone()),
            ));
        }
        tasks
    }
}

/// 区间长度超过阈值且扇出大于1时继续拆分，否则退化为顺序累加的叶子任务。
/// 阈值按至少为1处理，长度为1的区间不会再拆分。
fn internal_or_leaf(len: usize, fan_out: usize, sequential_cutoff: usize) -> TaskKind {
    if fan_out >= 2 && len > sequential_cutoff.max(1) {
        TaskKind::Internal { fan_out }
    } else {
        TaskKind::Leaf
    }
}

/// 生成任务ID
fn generate_task_id(parent_id: &str, prefix: &str, id: usize) -> String {
    format!("{}_{}_{}", parent_id, prefix, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_split_creates_one_task_per_chunk() {
        let splitter = TaskSplitter::new(SplitStrategy::Flat);
        let tasks = splitter.split_root(5, 3, 4096, "p").unwrap();
        assert_eq!(tasks.len(), 3);
        assert_eq!(
            tasks
                .iter()
                .map(|t| (t.start_index, t.end_index))
                .collect::<Vec<_>>(),
            vec![(0, 2), (2, 4), (4, 5)]
        );
        for task in &tasks {
            assert!(matches!(task.kind, TaskKind::Leaf));
            assert_eq!(task.parent_task_id.as_deref(), Some("p"));
        }
    }

    #[test]
    fn test_flat_split_elides_empty_chunks() {
        let splitter = TaskSplitter::new(SplitStrategy::Flat);
        let tasks = splitter.split_root(5, 8, 4096, "p").unwrap();
        assert_eq!(tasks.len(), 5);
        for task in &tasks {
            assert!(!task.is_empty());
        }
    }

    #[test]
    fn test_flat_split_of_empty_input_creates_no_tasks() {
        let splitter = TaskSplitter::new(SplitStrategy::Flat);
        let tasks = splitter.split_root(0, 4, 4096, "p").unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_zero_task_count_is_rejected() {
        let splitter = TaskSplitter::new(SplitStrategy::Flat);
        let err = splitter.split_root(10, 0, 4096, "p").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_recursive_root_below_cutoff_is_leaf() {
        let splitter = TaskSplitter::new(SplitStrategy::Recursive);
        let tasks = splitter.split_root(10, 2, 4096, "p").unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!((tasks[0].start_index, tasks[0].end_index), (0, 10));
        assert!(matches!(tasks[0].kind, TaskKind::Leaf));
    }

    #[test]
    fn test_recursive_root_above_cutoff_is_internal() {
        let splitter = TaskSplitter::new(SplitStrategy::Recursive);
        let tasks = splitter.split_root(10, 2, 4, "p").unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(matches!(tasks[0].kind, TaskKind::Internal { fan_out: 2 }));
    }

    #[test]
    fn test_sub_tasks_partition_parent_range() {
        let parent = ReduceTask::new(
            "p_root_0".to_string(),
            10,
            20,
            TaskKind::Internal { fan_out: 3 },
            None,
        );
        let children = TaskSplitter::sub_tasks(&parent, 3, 4);
        assert_eq!(
            children
                .iter()
                .map(|t| (t.start_index, t.end_index))
                .collect::<Vec<_>>(),
            vec![(10, 14), (14, 18), (18, 20)]
        );
        for child in &children {
            assert!(matches!(child.kind, TaskKind::Leaf));
            assert_eq!(child.parent_task_id.as_deref(), Some("p_root_0"));
        }
    }

    #[test]
    fn test_sub_tasks_recurse_while_above_cutoff() {
        let parent = ReduceTask::new(
            "p_root_0".to_string(),
            0,
            100,
            TaskKind::Internal { fan_out: 2 },
            None,
        );
        let children = TaskSplitter::sub_tasks(&parent, 2, 10);
        assert_eq!(children.len(), 2);
        for child in &children {
            assert!(matches!(child.kind, TaskKind::Internal { fan_out: 2 }));
        }
    }

    #[test]
    fn test_task_id_format() {
        let splitter = TaskSplitter::new(SplitStrategy::Flat);
        let tasks = splitter.split_root(4, 2, 4096, "job").unwrap();
        assert_eq!(tasks[0].task_id, "job_chunk_0");
        assert_eq!(tasks[1].task_id, "job_chunk_1");
    }
}
