//! Replay scripts.
//!
//! A script is a YAML list of input steps applied to one widget on a virtual
//! clock. Every repaint the widget requests becomes a [`Record::Frame`];
//! long presses reach the registered listener and become
//! [`Record::LongTouch`].
//!
//! ```yaml
//! size: { width: 480, height: 800 }
//! simulate: { result: failure, delay_ms: 200 }
//! steps:
//!   - tap: { x: 240, y: 400 }
//!   - wait: 1000
//!   - down: { x: 100, y: 100 }
//!   - wait: 600
//!   - up: { x: 100, y: 100 }
//! ```

use crate::error::CliError;
use focal_core::{Event, Point, Rect, Size, TouchId, Widget};
use focal_widgets::{Circle, FocusConfig, FocusIndicator, FocusStarted, FocusState};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

const FINGER: TouchId = TouchId(0);

fn default_size() -> Size {
    Size::new(480.0, 800.0)
}

const fn default_hold_ms() -> u64 {
    50
}

const fn default_delay_ms() -> u64 {
    200
}

const fn default_result() -> Outcome {
    Outcome::Failure
}

/// A parsed replay script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Script {
    /// Widget size
    #[serde(default = "default_size")]
    pub(crate) size: Size,
    /// Report a result automatically after every tap
    #[serde(default)]
    pub(crate) simulate: Option<Simulate>,
    /// Inputs, applied in order
    #[serde(default, with = "serde_yaml_ng::with::singleton_map_recursive")]
    pub(crate) steps: Vec<Step>,
}

impl Script {
    /// Parse a script from YAML.
    pub(crate) fn from_yaml(input: &str) -> Result<Self, CliError> {
        Ok(serde_yaml_ng::from_str(input)?)
    }
}

/// Simulated autofocus: reports `result` `delay_ms` after each tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Simulate {
    #[serde(default = "default_result")]
    pub(crate) result: Outcome,
    #[serde(default = "default_delay_ms")]
    pub(crate) delay_ms: u64,
}

/// Autofocus result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Outcome {
    Success,
    Failure,
}

/// A screen position.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct At {
    pub(crate) x: f32,
    pub(crate) y: f32,
}

impl From<At> for Point {
    fn from(at: At) -> Self {
        Self::new(at.x, at.y)
    }
}

/// Down, hold and up at one position.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Tap {
    pub(crate) x: f32,
    pub(crate) y: f32,
    #[serde(default = "default_hold_ms")]
    pub(crate) hold_ms: u64,
}

/// One script step.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Step {
    Down(At),
    Move(At),
    Up(At),
    Cancel,
    Tap(Tap),
    Wait(u64),
    Report(Outcome),
    Enable(bool),
    AutoDismiss(bool),
    Reset,
}

/// One line of replay output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum Record {
    /// The widget asked to be repainted.
    Frame {
        t_ms: u64,
        state: FocusState,
        circle: Option<Circle>,
    },
    /// The long-press listener fired.
    LongTouch { t_ms: u64 },
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frame {
                t_ms,
                state,
                circle: Some(c),
            } => {
                let state = format!("{state:?}");
                write!(
                    f,
                    "{t_ms:>6}ms  {state:<8}  ring ({:.1}, {:.1}) r={} {}",
                    c.center.x, c.center.y, c.radius, c.color
                )
            }
            Self::Frame {
                t_ms,
                state,
                circle: None,
            } => write!(f, "{t_ms:>6}ms  {state:?}"),
            Self::LongTouch { t_ms } => write!(f, "{t_ms:>6}ms  long touch"),
        }
    }
}

/// Drives one widget through a script.
pub(crate) struct Replay {
    widget: FocusIndicator,
    simulate: Option<Simulate>,
    pending_report: Option<(u64, Outcome)>,
    records: Rc<RefCell<Vec<Record>>>,
}

impl Replay {
    /// Build a widget for `script` with `config`.
    pub(crate) fn new(script: &Script, config: FocusConfig) -> Result<Self, CliError> {
        let mut widget = FocusIndicator::with_config(config)?;
        widget.layout(Rect::from_size(script.size));

        let records = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&records);
        widget.set_on_long_touch(move |w| {
            log.borrow_mut().push(Record::LongTouch { t_ms: w.now_ms() });
        });

        Ok(Self {
            widget,
            simulate: script.simulate,
            pending_report: None,
            records,
        })
    }

    /// Apply every step, then let pending timers run out.
    pub(crate) fn run(mut self, steps: &[Step]) -> Vec<Record> {
        for step in steps {
            self.step(*step);
        }
        self.settle();
        std::mem::take(&mut *self.records.borrow_mut())
    }

    fn step(&mut self, step: Step) {
        debug!(?step, t_ms = self.widget.now_ms(), "replay step");
        match step {
            Step::Down(at) => self.dispatch(&Event::TouchStart {
                id: FINGER,
                position: at.into(),
                pressure: 1.0,
            }),
            Step::Move(at) => self.dispatch(&Event::TouchMove {
                id: FINGER,
                position: at.into(),
                pressure: 1.0,
            }),
            Step::Up(at) => self.dispatch(&Event::TouchEnd {
                id: FINGER,
                position: at.into(),
            }),
            Step::Cancel => self.dispatch(&Event::TouchCancel { id: FINGER }),
            Step::Tap(tap) => {
                let position = Point::new(tap.x, tap.y);
                self.dispatch(&Event::TouchStart {
                    id: FINGER,
                    position,
                    pressure: 1.0,
                });
                self.wait(tap.hold_ms);
                self.dispatch(&Event::TouchEnd {
                    id: FINGER,
                    position,
                });
            }
            Step::Wait(ms) => self.wait(ms),
            Step::Report(outcome) => self.report(outcome),
            Step::Enable(on) => self.widget.set_enabled(on),
            Step::AutoDismiss(on) => self.widget.set_auto_dismiss(on),
            Step::Reset => self.widget.reset(),
        }
        self.flush_frame();
    }

    fn dispatch(&mut self, event: &Event) {
        let outcome = self.widget.event(event);
        if let (Some(started), Some(sim)) = (outcome.message::<FocusStarted>(), self.simulate) {
            let due = self.widget.now_ms().saturating_add(sim.delay_ms);
            debug!(center = ?started.center, due, "simulated result scheduled");
            self.pending_report = Some((due, sim.result));
        }
        self.flush_frame();
    }

    fn report(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Success => self.widget.report_success(),
            Outcome::Failure => self.widget.report_failure(),
        }
    }

    fn wait(&mut self, ms: u64) {
        let target = self.widget.now_ms().saturating_add(ms);
        while let Some(next) = self.next_due().filter(|&t| t <= target) {
            self.run_until(next);
        }
        self.widget.advance_to(target);
        self.flush_frame();
    }

    fn settle(&mut self) {
        while let Some(next) = self.next_due() {
            self.run_until(next);
        }
    }

    fn next_due(&self) -> Option<u64> {
        let report = self.pending_report.map(|(due, _)| due);
        match (self.widget.next_deadline(), report) {
            (Some(timer), Some(report)) => Some(timer.min(report)),
            (timer, report) => timer.or(report),
        }
    }

    // Widget timers due at `t_ms` fire before a simulated report at `t_ms`.
    fn run_until(&mut self, t_ms: u64) {
        self.widget.advance_to(t_ms);
        if let Some((due, outcome)) = self.pending_report {
            if due <= t_ms {
                self.pending_report = None;
                self.report(outcome);
            }
        }
        self.flush_frame();
    }

    fn flush_frame(&mut self) {
        if self.widget.take_repaint() {
            self.records.borrow_mut().push(Record::Frame {
                t_ms: self.widget.now_ms(),
                state: self.widget.state(),
                circle: self.widget.circle(),
            });
        }
    }
}
