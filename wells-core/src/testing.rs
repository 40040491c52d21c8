//! In-memory `StatsSource` and `ChartSurface` used by the unit tests, and a
//! logger that keeps records per test thread.

use crate::chart_config::ChartConfig;
use crate::error::{DashError, Result};
use crate::metric::Metric;
use crate::refresh::{ChartSurface, StatsSource};
use crate::registry::ChartHandle;
use crate::slot::Slot;
use serde_json::{json, Map, Value};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::sync::{Mutex, Once};
use std::thread::{self, ThreadId};

/// A grouped response with `rows` labels and ascending values.
pub fn grouped_body(slot: Slot, metric: Metric, rows: usize) -> Value {
    let labels: Vec<Value> = (0..rows)
        .map(|i| match slot {
            Slot::Year => json!(2015 + i as i64),
            _ => json!(format!("{}-{}", slot, i)),
        })
        .collect();
    let values: Vec<f64> = (0..rows).map(|i| 10.0 + i as f64).collect();
    let mut body = Map::new();
    body.insert(slot.label_field().to_string(), Value::from(labels));
    body.insert(metric.series_field().to_string(), Value::from(values));
    Value::Object(body)
}

#[derive(Default)]
pub struct MockSource {
    bodies: HashMap<String, Value>,
    failing: HashSet<String>,
    requests: RefCell<Vec<String>>,
}

impl MockSource {
    pub fn insert(&mut self, endpoint: String, body: Value) {
        self.bodies.insert(endpoint, body);
    }

    /// Make `endpoint` fail as if the connection was refused.
    pub fn fail(&mut self, endpoint: String) {
        self.failing.insert(endpoint);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl StatsSource for MockSource {
    async fn fetch_json(&self, endpoint: &str) -> Result<Value> {
        self.requests.borrow_mut().push(endpoint.to_string());
        if self.failing.contains(endpoint) {
            return Err(DashError::Request {
                endpoint: endpoint.to_string(),
                reason: "connection refused".to_string(),
            });
        }
        self.bodies
            .get(endpoint)
            .cloned()
            .ok_or_else(|| DashError::Status {
                endpoint: endpoint.to_string(),
                status: 404,
                message: "Not found".to_string(),
            })
    }
}

pub struct RecordedChart {
    live: Rc<Cell<i32>>,
}

impl ChartHandle for RecordedChart {
    fn dispose(self) {
        self.live.set(self.live.get() - 1);
    }
}

/// Records every chart drawn and counts the ones not yet disposed.
#[derive(Default)]
pub struct RecordingSurface {
    missing: HashSet<String>,
    drawn: RefCell<Vec<(String, ChartConfig)>>,
    live: Rc<Cell<i32>>,
}

impl RecordingSurface {
    pub fn without_canvas(canvas_id: &str) -> Self {
        Self {
            missing: HashSet::from([canvas_id.to_string()]),
            ..Self::default()
        }
    }

    pub fn drawn(&self) -> Vec<(String, ChartConfig)> {
        self.drawn.borrow().clone()
    }

    pub fn live(&self) -> i32 {
        self.live.get()
    }
}

impl ChartSurface for RecordingSurface {
    type Canvas = String;
    type Handle = RecordedChart;

    fn canvas(&self, canvas_id: &str) -> Result<String> {
        if self.missing.contains(canvas_id) {
            return Err(DashError::MissingCanvas(canvas_id.to_string()));
        }
        Ok(canvas_id.to_string())
    }

    fn draw(&self, canvas: &String, config: &ChartConfig) -> Result<RecordedChart> {
        self.drawn.borrow_mut().push((canvas.clone(), config.clone()));
        self.live.set(self.live.get() + 1);
        Ok(RecordedChart {
            live: self.live.clone(),
        })
    }
}

struct CaptureLogger {
    records: Mutex<Vec<(ThreadId, log::Level, String)>>,
}

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((thread::current().id(), record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

/// Install the capturing logger. Safe to call from every test.
pub fn capture_logs() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
    });
}

/// Messages logged at `level` from the calling test's thread.
pub fn logged(level: log::Level) -> Vec<String> {
    let me = thread::current().id();
    LOGGER
        .records
        .lock()
        .map(|records| {
            records
                .iter()
                .filter(|(id, l, _)| *id == me && *l == level)
                .map(|(_, _, message)| message.clone())
                .collect()
        })
        .unwrap_or_default()
}
