//! Ctrl-C handling
//!
//! The tool runs one blocking prompt and a handful of short commands,
//! so interrupt handling is deliberately simple: print a farewell line
//! and leave with the conventional interrupt exit code.

const INTERRUPT_NOTICE: &str = "\n⚠️  Interrupted by user\n";
const INTERRUPT_EXIT_CODE: i32 = 130;

pub fn install() {
    #[cfg(unix)]
    setup_unix_handler();

    #[cfg(windows)]
    setup_windows_handler();
}

#[cfg(unix)]
fn setup_unix_handler() {
    use std::sync::Once;

    static INIT: Once = Once::new();

    INIT.call_once(|| unsafe {
        register_sigint_handler();
    });
}

#[cfg(unix)]
unsafe fn register_sigint_handler() {
    extern "C" fn handler(_signum: libc::c_int) {
        // Only async-signal-safe calls from here.
        let bytes = INTERRUPT_NOTICE.as_bytes();
        unsafe {
            let _ = libc::write(libc::STDERR_FILENO, bytes.as_ptr().cast(), bytes.len());
            libc::_exit(INTERRUPT_EXIT_CODE);
        }
    }

    unsafe {
        let mut action: libc::sigaction = std::mem::zeroed();
        action.sa_sigaction = handler as usize;

        let mut empty_set: libc::sigset_t = std::mem::zeroed();
        libc::sigemptyset(&mut empty_set as *mut libc::sigset_t);
        action.sa_mask = empty_set;

        libc::sigaction(libc::SIGINT, &action, std::ptr::null_mut());
    }
}

#[cfg(windows)]
fn setup_windows_handler() {
    use windows::Win32::Foundation::BOOL;
    use windows::Win32::System::Console::{SetConsoleCtrlHandler, CTRL_BREAK_EVENT, CTRL_C_EVENT};

    unsafe extern "system" fn handler(ctrl_type: u32) -> BOOL {
        match ctrl_type {
            CTRL_C_EVENT | CTRL_BREAK_EVENT => {
                eprint!("{INTERRUPT_NOTICE}");
                std::process::exit(INTERRUPT_EXIT_CODE);
            }
            _ => BOOL(0),
        }
    }

    unsafe {
        let _ = SetConsoleCtrlHandler(Some(handler), true);
    }
}
