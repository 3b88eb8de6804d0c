// SPDX-License-Identifier: GPL-3.0-or-later
use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};

use crate::host::{DeviceRecord, DeviceRegistry, Entity, EntityDescription, StateNotifier};
use crate::sample::Sample;
use crate::settings::ProbeSettings;
use crate::DOMAIN;

use super::sensor::{ProbeSensor, SensorKind};

const MANUFACTURER: &str = "Hackworth";
const MODEL: &str = "PROBE";
const MODEL_ID: &str = "PROBE-01";
const SW_VERSION: &str = "0.1";
const HW_VERSION: &str = "0.1";

/// Last-known probe readings, shared read-only with the sensors.
#[derive(Debug, Default)]
pub(super) struct Readings {
    pub(super) temperature: Option<f64>,
    pub(super) moisture: Option<f64>,
}

/// One physical probe, presented to the host as a device owning two sensor
/// entities.
///
/// The host collaborators are handed in at construction; the device never
/// reaches for ambient services. Both sensors are created here and stay
/// owned by the device for its whole lifetime.
pub struct ProbeDevice {
    unique_id: String,
    name: String,
    readings: Rc<RefCell<Readings>>,
    sensors: Vec<Rc<ProbeSensor>>,
    registry: Rc<dyn DeviceRegistry>,
}

impl ProbeDevice {
    pub fn new(
        settings: &ProbeSettings,
        registry: Rc<dyn DeviceRegistry>,
        notifier: Rc<dyn StateNotifier>,
    ) -> Self {
        let unique_id = settings.id().to_string();
        let readings = Rc::new(RefCell::new(Readings::default()));
        let sensors = vec![
            Rc::new(ProbeSensor::new(
                SensorKind::Moisture,
                &unique_id,
                Rc::clone(&readings),
                Rc::clone(&notifier),
            )),
            Rc::new(ProbeSensor::new(
                SensorKind::Temperature,
                &unique_id,
                Rc::clone(&readings),
                notifier,
            )),
        ];
        Self {
            unique_id,
            name: settings.name().to_string(),
            readings,
            sensors,
            registry,
        }
    }

    /// The sensor entities owned by this device, in creation order.
    pub fn sensors(&self) -> &[Rc<ProbeSensor>] {
        &self.sensors
    }

    /// Replace the cached readings with a new sample and push a refresh for
    /// every owned sensor.
    ///
    /// The sample values are stored verbatim, and the refreshes fire whether
    /// or not the values changed.
    pub async fn update_state(&self, sample: Sample) {
        debug!(
            temperature = sample.temperature,
            moisture = sample.moisture,
            "caching new sample"
        );
        {
            let mut readings = self.readings.borrow_mut();
            readings.temperature = Some(sample.temperature);
            readings.moisture = Some(sample.moisture);
        }
        for sensor in &self.sensors {
            sensor.write_state();
        }
    }

    /// Create this device's entry in the host registry under `entry_id`, or
    /// fetch the existing one.
    ///
    /// Calling this again for the same probe submits an identical record;
    /// the registry's keying by identifier keeps the entry unique.
    pub async fn register(&self, entry_id: &str) -> anyhow::Result<()> {
        info!(unique_id = %self.unique_id, entry_id, "registering device");
        self.registry.get_or_create(entry_id, self.record()).await
    }

    fn record(&self) -> DeviceRecord {
        DeviceRecord {
            identifiers: vec![(DOMAIN.to_string(), self.unique_id.clone())],
            name: self.name.clone(),
            manufacturer: MANUFACTURER.to_string(),
            model: MODEL.to_string(),
            model_id: MODEL_ID.to_string(),
            serial_number: self.unique_id.clone(),
            sw_version: SW_VERSION.to_string(),
            hw_version: HW_VERSION.to_string(),
        }
    }
}

impl Entity for ProbeDevice {
    fn unique_id(&self) -> &str {
        &self.unique_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> EntityDescription {
        EntityDescription {
            name: "Hackware Device",
            device_class: None,
            unit: None,
            display_precision: None,
            icon: "mdi:hub-outline",
        }
    }

    fn state_json(&self) -> serde_json::Value {
        serde_json::Value::from("online")
    }
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;
    use std::rc::Rc;

    use async_trait::async_trait;
    use float_cmp::{approx_eq, F64Margin};
    use serde_json::json;

    use crate::host::{DeviceRecord, DeviceRegistry, Entity, StateNotifier};
    use crate::probe::SensorKind;
    use crate::sample::Sample;
    use crate::settings::ProbeSettings;
    use crate::DOMAIN;

    use super::ProbeDevice;

    #[derive(Default)]
    struct RecordingRegistry {
        calls: RefCell<Vec<(String, DeviceRecord)>>,
    }

    #[async_trait(?Send)]
    impl DeviceRegistry for RecordingRegistry {
        async fn get_or_create(&self, entry_id: &str, record: DeviceRecord) -> anyhow::Result<()> {
            self.calls.borrow_mut().push((entry_id.to_string(), record));
            Ok(())
        }
    }

    struct FailingRegistry;

    #[async_trait(?Send)]
    impl DeviceRegistry for FailingRegistry {
        async fn get_or_create(&self, _entry_id: &str, _record: DeviceRecord) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("device registry unreachable"))
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        updated: RefCell<Vec<String>>,
    }

    impl StateNotifier for RecordingNotifier {
        fn entity_updated(&self, unique_id: &str) {
            self.updated.borrow_mut().push(unique_id.to_string());
        }
    }

    fn probe(id: &str) -> (ProbeDevice, Rc<RecordingRegistry>, Rc<RecordingNotifier>) {
        let registry = Rc::new(RecordingRegistry::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let device = ProbeDevice::new(
            &ProbeSettings::new(id),
            Rc::clone(&registry) as Rc<dyn DeviceRegistry>,
            Rc::clone(&notifier) as Rc<dyn StateNotifier>,
        );
        (device, registry, notifier)
    }

    fn value_of(device: &ProbeDevice, kind: SensorKind) -> Option<f64> {
        device
            .sensors()
            .iter()
            .find(|sensor| sensor.kind() == kind)
            .expect("the device to own a sensor of every kind")
            .current_value()
    }

    #[test]
    fn sensors_start_unset() {
        let (device, _registry, _notifier) = probe("probe-0");
        assert_eq!(device.sensors().len(), 2);
        for sensor in device.sensors() {
            assert_eq!(sensor.current_value(), None);
        }
    }

    #[tokio::test]
    async fn update_state_caches_sample_values() {
        let (device, _registry, _notifier) = probe("probe-1");
        device.update_state(Sample::new(21.5, 38.2)).await;
        let moisture = value_of(&device, SensorKind::Moisture).unwrap();
        let temperature = value_of(&device, SensorKind::Temperature).unwrap();
        assert!(approx_eq!(f64, moisture, 38.2, F64Margin::default()));
        assert!(approx_eq!(f64, temperature, 21.5, F64Margin::default()));
    }

    #[tokio::test]
    async fn update_state_notifies_each_sensor_once_in_creation_order() {
        let (device, _registry, notifier) = probe("probe-1");
        device.update_state(Sample::new(21.5, 38.2)).await;
        assert_eq!(
            *notifier.updated.borrow(),
            vec![
                "probe-1_moisture".to_string(),
                "probe-1_temperature".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn unchanged_values_still_notify() {
        let (device, _registry, notifier) = probe("probe-1");
        let sample = Sample::new(21.5, 38.2);
        device.update_state(sample).await;
        device.update_state(sample).await;
        assert_eq!(notifier.updated.borrow().len(), 4);
    }

    #[tokio::test]
    async fn later_samples_replace_earlier_ones() {
        let (device, _registry, _notifier) = probe("probe-1");
        device.update_state(Sample::new(21.5, 38.2)).await;
        device.update_state(Sample::new(-3.0, 99.9)).await;
        let moisture = value_of(&device, SensorKind::Moisture).unwrap();
        let temperature = value_of(&device, SensorKind::Temperature).unwrap();
        assert!(approx_eq!(f64, moisture, 99.9, F64Margin::default()));
        assert!(approx_eq!(f64, temperature, -3.0, F64Margin::default()));
    }

    #[tokio::test]
    async fn registration_submits_the_fixed_device_record() {
        let (device, registry, _notifier) = probe("probe-1");
        device.register("entry-1").await.unwrap();
        let calls = registry.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (entry_id, record) = &calls[0];
        assert_eq!(entry_id, "entry-1");
        assert_eq!(
            record.identifiers,
            vec![(DOMAIN.to_string(), "probe-1".to_string())]
        );
        assert_eq!(record.name, "Brian moisture probe");
        assert_eq!(record.manufacturer, "Hackworth");
        assert_eq!(record.model, "PROBE");
        assert_eq!(record.model_id, "PROBE-01");
        assert_eq!(record.serial_number, "probe-1");
        assert_eq!(record.sw_version, "0.1");
        assert_eq!(record.hw_version, "0.1");
    }

    #[tokio::test]
    async fn repeated_registration_uses_identical_arguments() {
        let (device, registry, _notifier) = probe("probe-1");
        device.register("entry-1").await.unwrap();
        device.register("entry-1").await.unwrap();
        let calls = registry.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }

    #[tokio::test]
    async fn registry_errors_propagate() {
        let notifier = Rc::new(RecordingNotifier::default());
        let device = ProbeDevice::new(
            &ProbeSettings::new("probe-1"),
            Rc::new(FailingRegistry),
            notifier,
        );
        assert!(device.register("entry-1").await.is_err());
    }

    #[test]
    fn device_is_an_online_entity() {
        let (device, _registry, _notifier) = probe("probe-1");
        assert_eq!(device.unique_id(), "probe-1");
        assert_eq!(device.name(), "Brian moisture probe");
        assert_eq!(device.description().icon, "mdi:hub-outline");
        assert_eq!(device.state_json(), json!("online"));
        assert!(device.available());
    }
}
