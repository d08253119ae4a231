use std::sync::Once;

use env_logger::Env;

static INIT: Once = Once::new();

/// Installs the global logger at `info`, unless `RUST_LOG` says otherwise.
/// Later calls are ignored.
pub fn init_logging() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(Env::default().default_filter_or("info"))
            .format_timestamp(None)
            .init();

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initializing_twice_is_harmless() {
        init_logging();
        init_logging();
        log::info!("still logging");
    }
}
