//! 日志输出实现
//!
//! 编译期由 feature 决定日志级别，消息经 `heapless` 缓冲格式化后
//! 交给嵌入方注册的输出函数；`semihosting` feature 打开时未注册
//! 输出函数的消息走半主机 stdio。

use core::fmt::{self, Write};
use core::sync::atomic::{AtomicPtr, Ordering};

// 日志级别定义
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Emergency = 0,
    Common = 1,
    Error = 2,
    Warning = 3,
    Info = 4,
    Debug = 5,
}

// 编译时日志级别配置，多个feature同时打开时取最严格的一个
pub const PRINT_LEVEL: LogLevel = if cfg!(feature = "log-emergency") {
    LogLevel::Emergency
} else if cfg!(feature = "log-common") {
    LogLevel::Common
} else if cfg!(feature = "log-error") {
    LogLevel::Error
} else if cfg!(feature = "log-warning") {
    LogLevel::Warning
} else if cfg!(feature = "log-info") {
    LogLevel::Info
} else if cfg!(feature = "log-debug") {
    LogLevel::Debug
} else {
    // 默认级别（没有指定任何feature时）
    LogLevel::Error
};

// 日志级别前缀
const LOG_PREFIXES: &[&str] = &["[EMG] ", "", "[ERR] ", "[WARN] ", "[INFO] ", "[DEBUG] "];

/// 日志输出函数类型，由嵌入方注册
pub type OutputFn = fn(&str);

static OUTPUT_FN: AtomicPtr<()> = AtomicPtr::new(core::ptr::null_mut());

/// 注册日志输出函数
pub fn set_output(output: OutputFn) {
    OUTPUT_FN.store(output as *mut (), Ordering::Relaxed);
}

fn emit(message: &str) {
    let raw = OUTPUT_FN.load(Ordering::Relaxed);
    if !raw.is_null() {
        let output = unsafe { core::mem::transmute::<*mut (), OutputFn>(raw) };
        output(message);
        return;
    }

    #[cfg(feature = "semihosting")]
    semihosting::print!("{}", message);
}

#[doc(hidden)]
pub fn _print_internal(prefix: &str, args: fmt::Arguments) {
    // 使用heapless::String避免堆分配
    let mut message = heapless::String::<512>::new();
    if write!(message, "{}{}", prefix, args).is_ok() {
        emit(message.as_str());
    } else {
        // 格式化失败，输出错误消息
        emit("Log message too long or format error\n");
    }
}

// 带前缀的日志打印函数
pub fn log_with_prefix(level: LogLevel, args: fmt::Arguments) {
    if level <= PRINT_LEVEL {
        let prefix = LOG_PREFIXES[level as usize];
        _print_internal(prefix, args);
    }
}

// 公共宏定义
#[macro_export]
macro_rules! print_emergency {
    ($($arg:tt)*) => {
        $crate::utils::log::log_with_prefix(
            $crate::utils::log::LogLevel::Emergency,
            format_args!($($arg)*)
        );
    };
}

#[macro_export]
macro_rules! print_common {
    ($($arg:tt)*) => {
        $crate::utils::log::log_with_prefix(
            $crate::utils::log::LogLevel::Common,
            format_args!($($arg)*)
        );
    };
}

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {
        $crate::utils::log::log_with_prefix(
            $crate::utils::log::LogLevel::Error,
            format_args!($($arg)*)
        );
    };
}

#[macro_export]
macro_rules! print_warning {
    ($($arg:tt)*) => {
        $crate::utils::log::log_with_prefix(
            $crate::utils::log::LogLevel::Warning,
            format_args!($($arg)*)
        );
    };
}

#[macro_export]
macro_rules! print_info {
    ($($arg:tt)*) => {
        $crate::utils::log::log_with_prefix(
            $crate::utils::log::LogLevel::Info,
            format_args!($($arg)*)
        );
    };
}

#[macro_export]
macro_rules! print_debug {
    ($($arg:tt)*) => {
        $crate::utils::log::log_with_prefix(
            $crate::utils::log::LogLevel::Debug,
            format_args!($($arg)*)
        );
    };
}

#[macro_export]
macro_rules! println_emergency {
    () => {
        $crate::utils::log::log_with_prefix(
            $crate::utils::log::LogLevel::Emergency,
            format_args!("\n")
        );
    };
    ($($arg:tt)*) => {
        $crate::utils::log::log_with_prefix(
            $crate::utils::log::LogLevel::Emergency,
            format_args!("{}\n", format_args!($($arg)*))
        );
    };
}

#[macro_export]
macro_rules! println_common {
    () => {
        $crate::utils::log::log_with_prefix(
            $crate::utils::log::LogLevel::Common,
            format_args!("\n")
        );
    };
    ($($arg:tt)*) => {
        $crate::utils::log::log_with_prefix(
            $crate::utils::log::LogLevel::Common,
            format_args!("{}\n", format_args!($($arg)*))
        );
    };
}

#[macro_export]
macro_rules! println_error {
    () => {
        $crate::utils::log::log_with_prefix(
            $crate::utils::log::LogLevel::Error,
            format_args!("\n")
        );
    };
    ($($arg:tt)*) => {
        $crate::utils::log::log_with_prefix(
            $crate::utils::log::LogLevel::Error,
            format_args!("{}\n", format_args!($($arg)*))
        );
    };
}

#[macro_export]
macro_rules! println_warning {
    () => {
        $crate::utils::log::log_with_prefix(
            $crate::utils::log::LogLevel::Warning,
            format_args!("\n")
        );
    };
    ($($arg:tt)*) => {
        $crate::utils::log::log_with_prefix(
            $crate::utils::log::LogLevel::Warning,
            format_args!("{}\n", format_args!($($arg)*))
        );
    };
}

#[macro_export]
macro_rules! println_info {
    () => {
        $crate::utils::log::log_with_prefix(
            $crate::utils::log::LogLevel::Info,
            format_args!("\n")
        );
    };
    ($($arg:tt)*) => {
        $crate::utils::log::log_with_prefix(
            $crate::utils::log::LogLevel::Info,
            format_args!("{}\n", format_args!($($arg)*))
        );
    };
}

#[macro_export]
macro_rules! println_debug {
    () => {
        $crate::utils::log::log_with_prefix(
            $crate::utils::log::LogLevel::Debug,
            format_args!("\n")
        );
    };
    ($($arg:tt)*) => {
        $crate::utils::log::log_with_prefix(
            $crate::utils::log::LogLevel::Debug,
            format_args!("{}\n", format_args!($($arg)*))
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::String;
    use std::sync::Mutex;

    static CAPTURED: Mutex<String> = Mutex::new(String::new());

    fn capture_sink(message: &str) {
        CAPTURED.lock().unwrap().push_str(message);
    }

    #[test]
    fn leveled_output_reaches_registered_sink() {
        set_output(capture_sink);
        crate::println_error!("ring {} broken", 3);
        crate::println_debug!("never shown");

        let captured = CAPTURED.lock().unwrap();
        assert!(captured.contains("[ERR] ring 3 broken\n"));
        // 默认级别为 Error，Debug 消息被丢弃
        assert!(!captured.contains("never shown"));
    }

    #[test]
    fn level_order_matches_severity() {
        assert!(LogLevel::Emergency < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Debug);
        assert_eq!(LOG_PREFIXES.len(), 6);
    }
}
