// task.rs
// 归约任务结构体，描述一段连续索引区间上的求和工作单元。
use serde::{Deserialize, Serialize};

/// 任务状态枚举，描述任务的生命周期
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TaskStatus {
    /// 等待执行
    Pending,
    /// 正在执行
    Running,
    /// 已完成
    Completed,
}

/// 任务种类：叶子任务直接累加，内部任务拆分出子任务再合并
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TaskKind {
    /// 叶子任务：在区间上按升序索引顺序累加倒数
    Leaf,
    /// 内部任务：按 fan_out 拆分为子任务，并发执行后合并
    Internal { fan_out: usize },
}

/// 归约任务，持有半开区间 [start_index, end_index) 和计算结果。
/// 结果只在任务完成时写入一次，父任务读取后整个任务即被丢弃。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReduceTask {
    /// 任务唯一ID
    pub task_id: String,
    /// 区间起始索引（包含）
    pub start_index: usize,
    /// 区间结束索引（不包含）
    pub end_index: usize,
    /// 任务种类
    pub kind: TaskKind,
    /// 当前任务状态
    pub status: TaskStatus,
    /// 部分和，仅在Completed时有值
    pub result: Option<f64>,
    /// 父任务ID，顶层任务没有父任务
    pub parent_task_id: Option<String>,
}

impl ReduceTask {
    /// 创建一个待执行的任务
    pub fn new(
        task_id: String,
        start_index: usize,
        end_index: usize,
        kind: TaskKind,
        parent_task_id: Option<String>,
    ) -> Self {
        Self {
            task_id,
            start_index,
            end_index,
            kind,
            status: TaskStatus::Pending,
            result: None,
            parent_task_id,
        }
    }

    /// 区间内的元素个数
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    /// 区间是否为空。空分块对总和的贡献为0。
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    /// 读取任务的部分和，未完成时为0
    pub fn value(&self) -> f64 {
        self.result.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_pending() {
        let task = ReduceTask::new(
            "t_chunk_0".to_string(),
            0,
            4,
            TaskKind::Leaf,
            Some("t".to_string()),
        );
        assert!(matches!(task.status, TaskStatus::Pending));
        assert!(task.result.is_none());
        assert_eq!(task.len(), 4);
        assert!(!task.is_empty());
    }

    #[test]
    fn test_value_defaults_to_zero() {
        let mut task = ReduceTask::new("t".to_string(), 2, 2, TaskKind::Leaf, None);
        assert!(task.is_empty());
        assert_eq!(task.value(), 0.0);
        task.result = Some(1.5);
        assert_eq!(task.value(), 1.5);
    }
}
