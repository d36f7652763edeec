use cg2_bootstrap::adapter_utils::AdapterDescriptor;
use cg2_bootstrap::adapter_utils::AdapterSource;
use cg2_bootstrap::bootstrap::bootstrap_graphics;
use cg2_bootstrap::config::BootstrapConfig;
use cg2_bootstrap::create_device::DeviceFactory;
use cg2_bootstrap::feature_level::FeatureLevel;
use cg2_bootstrap::log_stream::LogStream;
use cg2_bootstrap::windy_error::BootstrapError;
use cg2_bootstrap::windy_error::MyResult;
use chrono::Local;
use chrono::TimeZone;

struct ListedAdapters(Vec<(&'static str, bool)>);

impl AdapterSource for ListedAdapters {
    type Adapter = &'static str;

    fn adapter_by_preference(
        &self,
        index: u32,
    ) -> MyResult<Option<AdapterDescriptor<&'static str>>> {
        Ok(self
            .0
            .get(index as usize)
            .map(|&(name, is_software)| AdapterDescriptor {
                adapter: name,
                name: name.to_string(),
                is_software,
            }))
    }
}

/// Accepts `accepts` on the adapter called `adapter`, rejects everything else.
struct Driver {
    adapter: &'static str,
    accepts: &'static [FeatureLevel],
}

impl DeviceFactory<&'static str> for Driver {
    type Device = String;

    fn create_device(&self, adapter: &&'static str, feature_level: FeatureLevel) -> MyResult<String> {
        if *adapter == self.adapter && self.accepts.contains(&feature_level) {
            Ok(format!("{adapter}@{feature_level}"))
        } else {
            Err(eyre::eyre!("{adapter} rejected {feature_level}").into())
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[test]
fn skips_software_adapter_and_negotiates_highest_accepted_level() {
    init_tracing();
    let temp = tempfile::tempdir().unwrap();
    let log_dir = temp.path().join("logs");
    let now = Local.with_ymd_and_hms(2024, 4, 1, 9, 30, 0).unwrap();
    let mut log = LogStream::open_in(&log_dir, &now).unwrap();

    let adapters = ListedAdapters(vec![("SoftGPU", true), ("RealGPU", false)]);
    let driver = Driver {
        adapter: "RealGPU",
        accepts: &[FeatureLevel::Level12_1, FeatureLevel::Level12_0],
    };

    let graphics = bootstrap_graphics(
        &mut log,
        &adapters,
        &driver,
        BootstrapConfig::default().feature_levels,
    )
    .unwrap();
    drop(log);

    assert_eq!(graphics.adapter_name, "RealGPU");
    assert_eq!(graphics.device.feature_level, FeatureLevel::Level12_1);
    assert_eq!(graphics.device.device, "RealGPU@12.1");

    let written = std::fs::read_to_string(log_dir.join("20240401_093000.log")).unwrap();
    assert!(written.lines().any(|line| line.contains("RealGPU")));
    assert!(!written.contains("SoftGPU"));
    assert!(written.contains("12.1"));
    assert!(!written.contains("12.2"));
    assert!(!written.contains("12.0"));
}

#[test]
fn no_device_on_selected_adapter_fails_after_logging_the_adapter() {
    init_tracing();
    let mut log = LogStream::from_writer(Vec::new());
    let adapters = ListedAdapters(vec![("RealGPU", false), ("OtherGPU", false)]);
    let driver = Driver {
        adapter: "OtherGPU",
        accepts: &FeatureLevel::DESCENDING,
    };

    let report = bootstrap_graphics(&mut log, &adapters, &driver, &FeatureLevel::DESCENDING)
        .unwrap_err();

    assert!(matches!(
        report.downcast_ref::<BootstrapError>(),
        Some(BootstrapError::NoSupportedFeatureLevel { .. })
    ));
    let text = String::from_utf8(log.into_inner()).unwrap();
    assert_eq!(text, "Use Adapter:RealGPU\n");
}

#[test]
fn software_only_host_never_reaches_device_creation() {
    init_tracing();
    let mut log = LogStream::from_writer(Vec::new());
    let adapters = ListedAdapters(vec![("Microsoft Basic Render Driver", true)]);
    let driver = Driver {
        adapter: "Microsoft Basic Render Driver",
        accepts: &FeatureLevel::DESCENDING,
    };

    let report = bootstrap_graphics(&mut log, &adapters, &driver, &FeatureLevel::DESCENDING)
        .unwrap_err();

    assert_eq!(
        report.downcast_ref::<BootstrapError>(),
        Some(&BootstrapError::NoHardwareAdapter { inspected: 1 })
    );
    assert!(log.into_inner().is_empty());
}
