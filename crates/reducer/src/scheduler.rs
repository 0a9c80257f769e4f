// scheduler.rs
// 任务调度器：有界工作线程池，提供 fork/join/invoke_all 语义。
// 线程数独立于任务数，超额任务在队列中排队等待空闲线程。
use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};
use std::thread;

/// 提交到调度器的工作单元
type Job<'scope, T> = Box<dyn FnOnce() -> T + Send + 'scope>;

/// 任务完成槽：执行方写入一次结果，join 方在此等待并取走
struct TaskSlot<T> {
    value: Mutex<Option<T>>,
    done: Condvar,
}

impl<T> TaskSlot<T> {
    fn new() -> Self {
        Self {
            value: Mutex::new(None),
            done: Condvar::new(),
        }
    }

    /// 写入结果并唤醒等待者
    fn complete(&self, value: T) {
        let mut slot = self.value.lock().unwrap();
        *slot = Some(value);
        self.done.notify_all();
    }

    fn try_take(&self) -> Option<T> {
        self.value.lock().unwrap().take()
    }

    /// 阻塞直到结果就绪并取走
    fn wait_take(&self) -> T {
        let mut slot = self.value.lock().unwrap();
        loop {
            match slot.take() {
                Some(value) => return value,
                None => slot = self.done.wait(slot).unwrap(),
            }
        }
    }
}

/// fork 返回的任务句柄。join 按值消费句柄，
/// 因此每个任务的结果最多只能被取走一次，重复 join 无法通过编译。
pub struct TaskHandle<T> {
    slot: Arc<TaskSlot<T>>,
}

/// 队列状态：待执行任务与关闭标志共用一把锁
struct QueueState<'scope, T> {
    jobs: VecDeque<(Job<'scope, T>, Arc<TaskSlot<T>>)>,
    shutdown: bool,
}

/// 调度器核心：任务队列加唤醒条件，工作线程与任务闭包共享
pub struct SchedulerCore<'scope, T> {
    state: Mutex<QueueState<'scope, T>>,
    job_ready: Condvar,
}

impl<'scope, T: Send + 'scope> SchedulerCore<'scope, T> {
    fn new() -> Self {
        Self {
            state: Mutex::new(QueueState {
                jobs: VecDeque::new(),
                shutdown: false,
            }),
            job_ready: Condvar::new(),
        }
    }

    /// 提交一个任务进入队列，不阻塞调用方
    pub fn fork<F>(&self, job: F) -> TaskHandle<T>
    where
        F: FnOnce() -> T + Send + 'scope,
    {
        let slot = Arc::new(TaskSlot::new());
        let mut state = self.state.lock().unwrap();
        state.jobs.push_back((Box::new(job), Arc::clone(&slot)));
        self.job_ready.notify_one();
        TaskHandle { slot }
    }

    /// 阻塞直到指定任务完成并取回结果。
    /// 等待期间会代为执行队列中的其他任务，
    /// 保证任务数超过线程数或递归 join 时也不会死锁。
    pub fn join(&self, handle: TaskHandle<T>) -> T {
        loop {
            if let Some(value) = handle.slot.try_take() {
                return value;
            }
            if !self.run_one_pending() {
                // 队列已空，目标任务必然正在其他线程上执行
                return handle.slot.wait_take();
            }
        }
    }

    /// 先全部提交再按提交顺序逐个 join。
    /// 返回时所有任务都已完成，任何任务都观察不到未完成的兄弟任务。
    pub fn invoke_all<F>(&self, jobs: Vec<F>) -> Vec<T>
    where
        F: FnOnce() -> T + Send + 'scope,
    {
        let handles: Vec<TaskHandle<T>> = jobs.into_iter().map(|job| self.fork(job)).collect();
        handles.into_iter().map(|handle| self.join(handle)).collect()
    }

    /// 取出并执行一个排队任务，队列为空时返回false
    fn run_one_pending(&self) -> bool {
        let entry = self.state.lock().unwrap().jobs.pop_front();
        match entry {
            Some((job, slot)) => {
                slot.complete(job());
                true
            }
            None => false,
        }
    }

    /// 通知所有工作线程退出。已排队的任务仍会被执行完。
    fn shutdown(&self) {
        let mut state = self.state.lock().unwrap();
        state.shutdown = true;
        self.job_ready.notify_all();
    }

    /// 工作线程主循环：取任务、执行、写回结果，收到关闭且队列为空时退出
    fn worker_loop(&self) {
        loop {
            let entry = {
                let mut state = self.state.lock().unwrap();
                loop {
                    if let Some(entry) = state.jobs.pop_front() {
                        break Some(entry);
                    }
                    if state.shutdown {
                        break None;
                    }
                    state = self.job_ready.wait(state).unwrap();
                }
            };
            match entry {
                Some((job, slot)) => slot.complete(job()),
                None => return,
            }
        }
    }
}

/// 有界工作线程池调度器。
/// 生命周期限定在一次归约调用内：随作用域创建，drop 时通知线程退出，
/// 作用域结束前所有工作线程都会被回收，不会跨调用泄漏线程。
pub struct TaskScheduler<'scope, T: Send + 'scope> {
    core: Arc<SchedulerCore<'scope, T>>,
    /// 工作线程数
    pub worker_count: usize,
}

impl<'scope, T: Send + 'scope> TaskScheduler<'scope, T> {
    /// 在指定作用域内启动调度器并派生工作线程
    pub fn start<'env>(scope: &'scope thread::Scope<'scope, 'env>, workers: usize) -> Self {
        let core = Arc::new(SchedulerCore::new());
        let worker_count = workers.max(1);
        for _ in 0..worker_count {
            let core = Arc::clone(&core);
            scope.spawn(move || core.worker_loop());
        }
        Self { core, worker_count }
    }

    /// 克隆一份核心引用，供任务闭包内部继续 fork/join
    pub fn core(&self) -> Arc<SchedulerCore<'scope, T>> {
        Arc::clone(&self.core)
    }

    /// 提交一个任务，立即返回句柄
    pub fn fork<F>(&self, job: F) -> TaskHandle<T>
    where
        F: FnOnce() -> T + Send + 'scope,
    {
        self.core.fork(job)
    }

    /// 等待指定任务完成并取回结果
    pub fn join(&self, handle: TaskHandle<T>) -> T {
        self.core.join(handle)
    }

    /// 提交一组任务并按提交顺序收集全部结果
    pub fn invoke_all<F>(&self, jobs: Vec<F>) -> Vec<T>
    where
        F: FnOnce() -> T + Send + 'scope,
    {
        self.core.invoke_all(jobs)
    }
}

impl<'scope, T: Send + 'scope> Drop for TaskScheduler<'scope, T> {
    fn drop(&mut self) {
        self.core.shutdown();
    }
}
