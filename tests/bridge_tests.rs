use lazy_static::lazy_static;
use leveled_log::{LeveledLogger, LogBridge, Severity, SharedBuffer};
use log::{Level, Log, Record};

lazy_static! {
    /// Captures everything written through the globally installed bridge.
    static ref CAPTURE: SharedBuffer = SharedBuffer::new();
}

fn record(level: Level, bridge: &LogBridge<SharedBuffer>, msg: &str) {
    bridge.log(&Record::builder().level(level).args(format_args!("{msg}")).build());
}

#[test]
fn test_bridge_maps_levels() {
    let out = SharedBuffer::new();
    let bridge = LogBridge::new(LeveledLogger::with_writer(out.clone()));

    record(Level::Error, &bridge, "e");
    record(Level::Warn, &bridge, "w");
    record(Level::Info, &bridge, "i");
    record(Level::Debug, &bridge, "d");
    record(Level::Trace, &bridge, "t");

    assert_eq!(
        out.lines(),
        vec!["[ERROR]: e", "[WARNING]: w", "[INFO]: i", "[INFO]: d", "[INFO]: t"]
    );
}

#[test]
fn test_bridge_threshold_filters() {
    let out = SharedBuffer::new();
    let bridge = LogBridge::new(LeveledLogger::with_writer(out.clone()));
    bridge.set_level(Severity::Error);
    assert_eq!(bridge.level(), Severity::Error);

    let warn_meta = log::Metadata::builder().level(Level::Warn).build();
    let error_meta = log::Metadata::builder().level(Level::Error).build();
    assert!(!bridge.enabled(&warn_meta));
    assert!(bridge.enabled(&error_meta));

    record(Level::Warn, &bridge, "dropped");
    record(Level::Error, &bridge, "kept");
    assert_eq!(out.contents(), "[ERROR]: kept\n");

    let logger = bridge.into_inner();
    assert_eq!(logger.level(), Severity::Error);
}

#[test]
fn test_installed_bridge_receives_facade_macros() {
    let mut logger = LeveledLogger::with_writer(CAPTURE.clone());
    logger.set_level(Severity::Warning);
    LogBridge::new(logger).install().unwrap();
    assert_eq!(log::max_level(), log::LevelFilter::Trace);

    log::error!("disk {}", "full");
    log::warn!("disk low");
    log::info!("cache hit");
    log::debug!("noise");
    log::logger().flush();

    assert_eq!(CAPTURE.lines(), vec!["[ERROR]: disk full", "[WARNING]: disk low"]);

    let second = LogBridge::new(LeveledLogger::with_writer(SharedBuffer::new()));
    assert!(second.install().is_err(), "only one global logger may be installed");
}
