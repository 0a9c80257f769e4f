// error.rs
// 定义项目通用的错误类型（IO、配置加载、参数校验）和Result类型。
use std::fmt;
use std::io;

/// 项目通用错误类型，涵盖IO、配置加载、参数校验等错误
#[derive(Debug)]
pub enum Error {
    /// IO错误
    Io(io::Error),
    /// 配置加载或校验错误
    ConfigError(String),
    /// 调用参数无效（如任务数为0）
    InvalidArgument(String),
}

/// 通用结果类型
pub type Result<T> = std::result::Result<T, Error>;

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "IO错误: {}", e),
            Error::ConfigError(msg) => write!(f, "配置错误: {}", msg),
            Error::InvalidArgument(msg) => write!(f, "无效参数: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
