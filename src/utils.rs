use cfg_if::cfg_if;

cfg_if! {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    if #[cfg(feature = "console_error_panic_hook")] {
        pub use console_error_panic_hook::set_once as set_panic_hook;
    } else {
        #[inline]
        pub fn set_panic_hook() {}
    }
}

cfg_if! {
    // The browser console only exists on wasm. Native builds (unit tests)
    // log to stderr instead.
    if #[cfg(target_arch = "wasm32")] {
        pub fn log(msg: &str) {
            web_sys::console::log_1(&msg.into());
        }

        pub fn log_error(msg: &str) {
            web_sys::console::error_1(&msg.into());
        }
    } else {
        pub fn log(msg: &str) {
            eprintln!("{}", msg);
        }

        pub fn log_error(msg: &str) {
            eprintln!("error: {}", msg);
        }
    }
}

/// `println!`-style logging to the browser console.
#[macro_export]
macro_rules! console_logf {
    ($($t:tt)*) => ($crate::utils::log(&format!($($t)*)))
}

/// Like [`console_logf!`], but writes to `console.error`.
#[macro_export]
macro_rules! console_errorf {
    ($($t:tt)*) => ($crate::utils::log_error(&format!($($t)*)))
}
