#![allow(missing_docs)]

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();

        if let Err(err) = console_log::init_with_level(log::Level::Info) {
            sprig::web_sys::console::error_1(&format!("logger unavailable: {err}").into());
        }

        if let Err(err) = clicks::start() {
            log::error!("failed to start: {err}");
        }
    }
}
