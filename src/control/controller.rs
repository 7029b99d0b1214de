//! Top-level control loop.

use core::convert::Infallible;

use crate::config::{validate_config, SystemConfig, TravelConstraints};
use crate::error::Result;
use crate::hal::{
    EncoderSource, ExitButton, KeySource, LimitSwitch, MotionPrimitive, NonVolatileStorage,
    Notice, StatusSink,
};
use crate::input::Key;
use crate::motion::{MotionExecutor, StepOutcome};
use crate::sequence::SequenceStore;

use super::arbiter::ManualArbiter;
use super::interpreter::{CommandInterpreter, InterpreterState};
use super::panel::OperatorPanel;

/// What happened during one [`Controller::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollSummary {
    /// Knob step issued or refused, if the knob moved.
    pub step: Option<StepOutcome>,
    /// Key handled, if one was pending.
    pub key: Option<Key>,
    /// Whether the travel-end lamp should be lit.
    pub at_travel_end: bool,
}

/// Single-axis nozzle controller.
///
/// Owns every collaborator. Each [`poll`](Self::poll) gives the knob one
/// chance to step, then hands at most one pending key to the interpreter.
/// A key that opens a session keeps the poll suspended until the session
/// is over.
///
/// # Example
///
/// ```ignore
/// let mut controller = Controller::new(&config, driver, eeprom, knob, switch, panel)?;
/// loop {
///     let summary = controller.poll().await?;
///     lamp.update(summary.at_travel_end)?;
/// }
/// ```
pub struct Controller<M, S, E, L, K, B, N> {
    axis: MotionExecutor<M>,
    store: SequenceStore<S>,
    interpreter: CommandInterpreter,
    arbiter: ManualArbiter,
    encoder: E,
    limit: L,
    panel: OperatorPanel<K, B, N>,
}

impl<M, S, E, L, K, B, N> Controller<M, S, E, L, K, B, N>
where
    M: MotionPrimitive,
    S: NonVolatileStorage,
    E: EncoderSource,
    L: LimitSwitch,
    K: KeySource,
    B: ExitButton,
    N: StatusSink,
{
    /// Validate `config` and assemble a controller for a homed axis.
    pub fn new(
        config: &SystemConfig,
        motor: M,
        storage: S,
        encoder: E,
        limit: L,
        mut panel: OperatorPanel<K, B, N>,
    ) -> Result<Self> {
        validate_config(config)?;

        let constraints = TravelConstraints::from_config(config);
        let mut axis = MotionExecutor::new(motor, constraints);
        axis.set_period(config.speed.motor_period);
        let store = SequenceStore::new(storage, config.sequences.block_limit)?;

        info!(
            "controller ready: step limit {}, {} keys of {} slots",
            constraints.step_limit,
            store.max_keys(),
            store.block_limit()
        );
        panel.notify(Notice::Ready);

        Ok(Self {
            axis,
            store,
            interpreter: CommandInterpreter::new(config),
            arbiter: ManualArbiter::new(),
            encoder,
            limit,
            panel,
        })
    }

    /// Run one control cycle.
    pub async fn poll(&mut self) -> Result<PollSummary> {
        let step = self
            .arbiter
            .poll(&mut self.axis, &mut self.encoder, &mut self.limit)?;
        if let Some(StepOutcome::Moved(position)) = step {
            self.panel.notify(Notice::Position(position));
        }

        let key = self.panel.keys.poll_key();
        if let Some(key) = key {
            self.interpreter
                .handle_key(key, &mut self.axis, &mut self.store, &mut self.panel)
                .await?;
        }

        Ok(PollSummary {
            step,
            key,
            at_travel_end: self.axis.at_travel_end(),
        })
    }

    /// Poll forever. Returns only on a device failure.
    pub async fn run(&mut self) -> Result<Infallible> {
        loop {
            self.poll().await?;
        }
    }

    /// Tear down the controller and hand back its collaborators.
    pub fn release(self) -> (M, S, E, L, OperatorPanel<K, B, N>) {
        (
            self.axis.release(),
            self.store.release(),
            self.encoder,
            self.limit,
            self.panel,
        )
    }

    /// Motion executor.
    #[inline]
    pub fn axis(&self) -> &MotionExecutor<M> {
        &self.axis
    }

    /// Mutable motion executor, e.g. to seed the position after homing.
    #[inline]
    pub fn axis_mut(&mut self) -> &mut MotionExecutor<M> {
        &mut self.axis
    }

    /// Sequence store.
    #[inline]
    pub fn store(&self) -> &SequenceStore<S> {
        &self.store
    }

    /// Mutable sequence store.
    #[inline]
    pub fn store_mut(&mut self) -> &mut SequenceStore<S> {
        &mut self.store
    }

    /// Operator panel.
    #[inline]
    pub fn panel(&self) -> &OperatorPanel<K, B, N> {
        &self.panel
    }

    /// Mutable operator panel.
    #[inline]
    pub fn panel_mut(&mut self) -> &mut OperatorPanel<K, B, N> {
        &mut self.panel
    }

    /// Interpreter state between polls.
    #[inline]
    pub fn state(&self) -> InterpreterState {
        self.interpreter.state()
    }

    /// Whether the limit switch was engaged on the last poll.
    #[inline]
    pub fn switch_engaged(&self) -> bool {
        self.arbiter.switch_engaged()
    }
}
