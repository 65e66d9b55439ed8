use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    Config,
};

const CONFIG_FILE: &str = "log4rs.yaml";
const FALLBACK_APPENDER: &str = "stderr";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(CONFIG_FILE, Default::default()).is_ok() {
        return;
    }
    if let Ok(config) = fallback_config() {
        // another logger may already be installed by the host process
        let _ = log4rs::init_config(config);
    }
}

fn fallback_config() -> Result<Config, log4rs::config::runtime::ConfigErrors> {
    let console = ConsoleAppender::builder().target(Target::Stderr).build();
    Config::builder()
        .appender(Appender::builder().build(FALLBACK_APPENDER, Box::new(console)))
        .build(
            Root::builder()
                .appender(FALLBACK_APPENDER)
                .build(LevelFilter::Warn),
        )
}
