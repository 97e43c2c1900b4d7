// 日志工具模块
//
// 封装 flexi_logger 的初始化和关闭操作，确保异步日志正确 flush

use crate::config::Config;
use crate::core::error::{TraversalError, TraversalResult};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::LevelFilter;
use std::sync::Mutex;

/// 日志系统状态
///
/// flexi_logger 只能向 `log` 门面注册一次，关闭后不能再次初始化
enum LoggerState {
    Uninitialized,
    Running(LoggerHandle),
    Shutdown,
}

/// 全局日志状态，用于程序退出时 flush
static LOGGER_STATE: Mutex<LoggerState> = Mutex::new(LoggerState::Uninitialized);

/// 初始化日志系统
///
/// 每个进程只能初始化一次：运行中重复调用直接返回成功，
/// `shutdown` 之后再调用返回 `TraversalError::Config`
///
/// # Examples
/// ```no_run
/// use graphdb_traversal::config::Config;
/// use graphdb_traversal::utils::logging;
///
/// let config = Config::default();
/// logging::init(&config).expect("日志初始化失败");
/// ```
pub fn init(config: &Config) -> TraversalResult<()> {
    let mut state = LOGGER_STATE
        .lock()
        .map_err(|e| TraversalError::Config(format!("日志状态锁已中毒: {}", e)))?;
    match *state {
        LoggerState::Running(_) => return Ok(()),
        LoggerState::Shutdown => {
            return Err(TraversalError::Config(
                "日志系统已关闭，每个进程只能初始化一次".to_string(),
            ))
        }
        LoggerState::Uninitialized => {}
    }

    let handle = Logger::try_with_str(&config.log.level)
        .map_err(|e| TraversalError::Config(format!("无效的日志级别 {}: {}", config.log.level, e)))?
        .log_to_file(
            FileSpec::default()
                .basename(&config.log.file)
                .directory(&config.log.dir),
        )
        .rotate(
            Criterion::Size(config.log.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.log.max_files),
        )
        .write_mode(WriteMode::Async)
        .append()
        .start()
        .map_err(|e| TraversalError::Config(format!("日志系统启动失败: {}", e)))?;

    *state = LoggerState::Running(handle);

    log::info!("日志系统初始化完成: {}/{}", config.log.dir, config.log.file);
    Ok(())
}

/// 刷新并关闭日志系统
///
/// 在程序退出前调用，确保所有异步日志都已写入文件。
/// 关闭后 `log` 门面的级别被置为 Off，之后的日志调用直接丢弃
pub fn shutdown() {
    if let Ok(mut state) = LOGGER_STATE.lock() {
        match std::mem::replace(&mut *state, LoggerState::Shutdown) {
            LoggerState::Running(handle) => {
                handle.flush();
                log::set_max_level(LevelFilter::Off);
                // 等待异步写线程退出
                handle.shutdown();
            }
            // 未运行时保持原状态
            previous => *state = previous,
        }
    }
}

/// 检查日志系统是否正在运行
pub fn is_initialized() -> bool {
    LOGGER_STATE
        .lock()
        .map(|state| matches!(*state, LoggerState::Running(_)))
        .unwrap_or(false)
}
