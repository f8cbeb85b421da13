use kaspa_archival_core::error;
use std::{panic, process, thread};

/// Configures the panic hook to log the panic and exit the process
pub fn configure_panic() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let (file, line, column) = match panic_info.location() {
            Some(location) => (location.file(), location.line(), location.column()),
            None => ("unknown", 0, 0),
        };

        let message = panic_info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| panic_info.payload().downcast_ref::<String>().map(|s| s.as_str()))
            .unwrap_or("Box<dyn Any>");

        let current_thread = thread::current();
        let thread_name = current_thread.name().unwrap_or("<unnamed>");
        error!("thread '{}' panicked at {}:{}:{}: {}", thread_name, file, line, column, message);
        default_hook(panic_info);
        println!("Exiting...");
        process::exit(1);
    }));
}
