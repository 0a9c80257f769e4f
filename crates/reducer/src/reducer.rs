// reducer.rs
// 归约入口：顺序基准、二路并行、N路并行求倒数和，以及通用的并行分块折叠。
use crate::chunk_partitioner::chunk_ranges;
use crate::config::ReducerConfig;
use crate::error::{Error, Result};
use crate::result_merger;
use crate::scheduler::TaskScheduler;
use crate::task_executor::{leaf_sum, TaskExecutor};
use crate::task_splitter::TaskSplitter;
use std::thread;
use uuid::Uuid;

/// 归约器门面：按配置的策略执行求和
pub struct Reducer {
    /// 归约配置
    pub config: ReducerConfig,
    /// 任务拆分器
    pub splitter: TaskSplitter,
}

impl Reducer {
    /// 按配置创建归约器，配置不合法时返回错误
    pub fn new(config: ReducerConfig) -> Result<Self> {
        config.validate()?;
        let splitter = TaskSplitter::new(config.strategy.clone());
        Ok(Self { config, splitter })
    }

    /// 计算倒数和。task_count 控制顶层拆分数，递归策略下同时作为每层扇出。
    /// 输入数组只被只读借用，调用返回前所有任务都已 join、线程都已退出。
    pub fn sum(&self, input: &[f64], task_count: usize) -> Result<f64> {
        let parent_task_id = Uuid::new_v4().to_string();
        let tasks = self.splitter.split_root(
            input.len(),
            task_count,
            self.config.sequential_cutoff,
            &parent_task_id,
        )?;
        let executor = TaskExecutor::new(self.config.sequential_cutoff);
        let workers = self.config.worker_count();

        Ok(thread::scope(|scope| {
            let scheduler = TaskScheduler::start(scope, workers);
            let jobs: Vec<_> = tasks
                .into_iter()
                .map(|task| {
                    let core = scheduler.core();
                    move || executor.execute(task, input, &core)
                })
                .collect();
            let completed = scheduler.invoke_all(jobs);
            result_merger::merge_task_results(&completed)
        }))
    }
}

/// 顺序基准：按升序索引依次累加倒数
pub fn sum_sequential(input: &[f64]) -> f64 {
    leaf_sum(input, 0, input.len())
}

/// 二路并行求和。奇数长度按通用分块公式处理，前半块多一个元素。
pub fn sum_parallel(input: &[f64]) -> Result<f64> {
    sum_parallel_n(input, 2)
}

/// N路并行求和：拆分为 task_count 个平铺叶子任务并发执行。
/// task_count 为0时返回无效参数错误，不会调度任何任务。
pub fn sum_parallel_n(input: &[f64], task_count: usize) -> Result<f64> {
    Reducer::new(ReducerConfig::default())?.sum(input, task_count)
}

/// 通用并行分块折叠：把切片划分为 task_count 个分块，
/// 并发地对每个非空分块执行 fold，按分块升序返回部分结果。
/// 学生统计等聚合操作都建立在这一设施之上。
pub fn parallel_fold<T, R, F>(items: &[T], task_count: usize, fold: F) -> Result<Vec<R>>
where
    T: Sync,
    R: Send,
    F: Fn(&[T]) -> R + Sync,
{
    if task_count == 0 {
        return Err(Error::InvalidArgument("任务数必须大于等于1".to_string()));
    }
    let workers = ReducerConfig::default().worker_count();
    let ranges = chunk_ranges(task_count, items.len());

    Ok(thread::scope(|scope| {
        let scheduler = TaskScheduler::start(scope, workers);
        let jobs: Vec<_> = ranges
            .into_iter()
            .filter(|range| !range.is_empty())
            .map(|range| {
                let chunk = &items[range];
                let fold = &fold;
                move || fold(chunk)
            })
            .collect();
        scheduler.invoke_all(jobs)
    }))
}
