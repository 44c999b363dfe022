//! # Debugger Hook / 调试器钩子
//!
//! On a framework-fatal error the driver gives an attached debugger the chance
//! to stop before the summary is printed. Detecting and breaking into a
//! debugger is platform specific, so the harness only defines the seam.
//!
//! 发生框架级致命错误时，驱动程序会在打印摘要之前让已附加的调试器有机会中断。

/// Collaborator used by [`crate::core::suite::TestSuite`] on fatal errors.
pub trait DebuggerHook {
    fn is_debugger_attached(&self) -> bool;
    fn break_into_debugger(&self);
}

/// The default hook: no debugger is ever attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDebugger;

impl DebuggerHook for NoDebugger {
    fn is_debugger_attached(&self) -> bool {
        false
    }

    fn break_into_debugger(&self) {}
}
