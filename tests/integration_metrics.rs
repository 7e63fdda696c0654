mod common;

use common::{demo, demo_shell};
use metrics::{
    Counter, CounterFn, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit,
    with_local_recorder,
};
use rawda_i18n::Language;
use rawda_models::View;
use std::sync::{Arc, Mutex};

/// One counter increment: name, sorted labels, amount.
type Increment = (String, Vec<(String, String)>, u64);

#[derive(Default)]
struct CapturingRecorder {
    increments: Arc<Mutex<Vec<Increment>>>,
}

struct CapturedCounter {
    name: String,
    labels: Vec<(String, String)>,
    sink: Arc<Mutex<Vec<Increment>>>,
}

impl CounterFn for CapturedCounter {
    fn increment(&self, value: u64) {
        self.sink
            .lock()
            .unwrap()
            .push((self.name.clone(), self.labels.clone(), value));
    }

    fn absolute(&self, _value: u64) {}
}

impl Recorder for CapturingRecorder {
    fn describe_counter(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {}
    fn describe_gauge(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {}
    fn describe_histogram(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {}

    fn register_counter(&self, key: &Key, _metadata: &Metadata<'_>) -> Counter {
        let mut labels: Vec<(String, String)> = key
            .labels()
            .map(|label| (label.key().to_string(), label.value().to_string()))
            .collect();
        labels.sort();
        Counter::from_arc(Arc::new(CapturedCounter {
            name: key.name().to_string(),
            labels,
            sink: Arc::clone(&self.increments),
        }))
    }

    fn register_gauge(&self, _key: &Key, _metadata: &Metadata<'_>) -> Gauge {
        Gauge::noop()
    }

    fn register_histogram(&self, _key: &Key, _metadata: &Metadata<'_>) -> Histogram {
        Histogram::noop()
    }
}

impl CapturingRecorder {
    fn take(&self) -> Vec<Increment> {
        std::mem::take(&mut *self.increments.lock().unwrap())
    }
}

fn labels(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut labels: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    labels.sort();
    labels
}

#[test]
fn test_login_success_counted_with_role() {
    let recorder = CapturingRecorder::default();
    with_local_recorder(&recorder, || {
        let mut shell = demo_shell(Language::En);
        shell.submit_login(demo::TEACHER.0, demo::TEACHER.1).unwrap();
    });
    assert_eq!(
        recorder.take(),
        vec![(
            "shell_logins_total".to_string(),
            labels(&[("role", "teacher"), ("status", "success")]),
            1
        )]
    );
}

#[test]
fn test_login_failure_counted_with_reason() {
    let recorder = CapturingRecorder::default();
    with_local_recorder(&recorder, || {
        let mut shell = demo_shell(Language::En);
        let _ = shell.submit_login(demo::ADMIN.0, "wrong");
    });
    assert_eq!(
        recorder.take(),
        vec![(
            "shell_logins_total".to_string(),
            labels(&[
                ("role", "unknown"),
                ("status", "failure"),
                ("reason", "invalid_credentials"),
            ]),
            1
        )]
    );
}

#[test]
fn test_view_selection_counted_only_when_accepted() {
    let recorder = CapturingRecorder::default();
    let mut shell = demo_shell(Language::En);
    shell.submit_login(demo::TEACHER.0, demo::TEACHER.1).unwrap();

    with_local_recorder(&recorder, || {
        shell.select_view(View::Attendance).unwrap();
        assert!(shell.select_view(View::Classes).is_err());
        shell.open_profile().unwrap();
    });
    assert_eq!(
        recorder.take(),
        vec![
            (
                "shell_view_selections_total".to_string(),
                labels(&[("view", "attendance")]),
                1
            ),
            (
                "shell_view_selections_total".to_string(),
                labels(&[("view", "profile")]),
                1
            ),
        ]
    );
}

#[test]
fn test_language_toggle_counted_with_new_language() {
    let recorder = CapturingRecorder::default();
    let mut shell = demo_shell(Language::En);
    with_local_recorder(&recorder, || {
        shell.toggle_language();
        shell.toggle_language();
    });
    assert_eq!(
        recorder.take(),
        vec![
            (
                "shell_language_toggles_total".to_string(),
                labels(&[("language", "ar")]),
                1
            ),
            (
                "shell_language_toggles_total".to_string(),
                labels(&[("language", "en")]),
                1
            ),
        ]
    );
}

#[test]
fn test_logout_counted_once_per_session() {
    let recorder = CapturingRecorder::default();
    let mut shell = demo_shell(Language::En);
    shell.submit_login(demo::PARENT.0, demo::PARENT.1).unwrap();
    with_local_recorder(&recorder, || {
        shell.logout();
        shell.logout();
    });
    assert_eq!(
        recorder.take(),
        vec![(
            "shell_logouts_total".to_string(),
            labels(&[("role", "parent")]),
            1
        )]
    );
}
