//! Keypad command interpreter.
//!
//! All keypad traffic funnels through here: direct numeric moves from the
//! menu, and the save, load and cycle sessions. Sessions await keys and
//! keep the rest of the controller suspended until they return to `Idle`.

use crate::config::units::StepPeriod;
use crate::config::{SystemConfig, TravelConstraints};
use crate::error::{InputError, Result};
use crate::hal::{ExitButton, KeySource, MotionPrimitive, NonVolatileStorage, Notice, StatusSink};
use crate::input::{DigitBuffer, Key, NumericCollector, NumericResult};
use crate::motion::MotionExecutor;
use crate::sequence::{SequenceStore, Slot, MAX_TARGET};

use super::panel::OperatorPanel;

/// Interpreter states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterpreterState {
    /// Main menu, no pending input
    #[default]
    Idle,
    /// Digits typed at the main menu, waiting for `*`
    CollectingForDirectMove,
    /// Save session in progress
    Saving,
    /// Load session in progress
    Loading,
    /// Cycle session in progress
    Cycling,
}

/// Keypad state machine.
#[derive(Debug, Clone)]
pub struct CommandInterpreter {
    state: InterpreterState,
    pending: DigitBuffer,
    step_delay: bool,
    motor_period: StepPeriod,
    cycle_period: StepPeriod,
}

impl CommandInterpreter {
    /// Create an idle interpreter.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            state: InterpreterState::Idle,
            pending: DigitBuffer::new(),
            step_delay: config.sequences.step_delay,
            motor_period: config.speed.motor_period,
            cycle_period: config.speed.cycle_period,
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> InterpreterState {
        self.state
    }

    /// Digits typed at the main menu.
    #[inline]
    pub fn pending(&self) -> &DigitBuffer {
        &self.pending
    }

    /// Process one key press from the main menu.
    ///
    /// Operator mistakes, refused moves and missing sequences are reported
    /// on the status display and never returned; only hardware and storage
    /// device failures propagate.
    pub async fn handle_key<M, S, K, B, N>(
        &mut self,
        key: Key,
        axis: &mut MotionExecutor<M>,
        store: &mut SequenceStore<S>,
        panel: &mut OperatorPanel<K, B, N>,
    ) -> Result<()>
    where
        M: MotionPrimitive,
        S: NonVolatileStorage,
        K: KeySource,
        B: ExitButton,
        N: StatusSink,
    {
        match key {
            Key::Digit(d) => {
                if self.pending.push(d) {
                    panel.notify(Notice::Digit(d));
                }
                self.state = InterpreterState::CollectingForDirectMove;
                return Ok(());
            }
            Key::Cancel => {
                self.pending.clear();
                panel.notify(Notice::InputReset);
            }
            Key::Submit => {
                if let Some(target) = self.pending.take() {
                    info!("direct move to {}", target);
                    absolute_move(axis, target, &mut panel.status)?;
                }
            }
            command if !self.pending.is_empty() => {
                warn!("command {} with pending digits", command);
                self.pending.clear();
                panel.notify(Notice::Refused(InputError::NotANumber.into()));
            }
            Key::Save => {
                self.state = InterpreterState::Saving;
                let result = self.save_session(axis, store, panel).await;
                self.finish(result, panel)?;
            }
            Key::Load => {
                self.state = InterpreterState::Loading;
                let result = self.load_session(axis, store, panel).await;
                self.finish(result, panel)?;
            }
            Key::Cycle => {
                self.state = InterpreterState::Cycling;
                let result = self.cycle_session(axis, panel).await;
                self.finish(result, panel)?;
            }
            Key::UseCurrent => {}
        }

        self.state = InterpreterState::Idle;
        panel.notify(Notice::Ready);
        Ok(())
    }

    fn finish<K, B, N>(&mut self, result: Result<()>, panel: &mut OperatorPanel<K, B, N>) -> Result<()>
    where
        K: KeySource,
        B: ExitButton,
        N: StatusSink,
    {
        self.state = InterpreterState::Idle;
        recover(result, &mut panel.status)
    }

    async fn save_session<M, S, K, B, N>(
        &mut self,
        axis: &mut MotionExecutor<M>,
        store: &mut SequenceStore<S>,
        panel: &mut OperatorPanel<K, B, N>,
    ) -> Result<()>
    where
        M: MotionPrimitive,
        S: NonVolatileStorage,
        K: KeySource,
        B: ExitButton,
        N: StatusSink,
    {
        panel.notify(Notice::SaveKeyPrompt);
        let key = match NumericCollector::new()
            .collect(&mut panel.keys, &mut panel.status)
            .await
        {
            NumericResult::Value(key) => key,
            _ => return Ok(()),
        };

        let mut writer = store.begin_save(key)?;
        let mut collector = NumericCollector::with_current_position();
        while writer.remaining() > 0 {
            panel.notify(Notice::SaveStepPrompt {
                remaining: writer.remaining(),
            });
            let slot = match collector.collect(&mut panel.keys, &mut panel.status).await {
                NumericResult::Value(target) => Slot::Target(target),
                NumericResult::CurrentPosition => {
                    let here = axis.position().value().clamp(0, i32::from(MAX_TARGET));
                    Slot::Target(here as u16)
                }
                NumericResult::Cancelled => {
                    let start = writer.offset();
                    writer.fill_empty()?;
                    for offset in start..writer.block_limit() {
                        panel.notify(Notice::SlotSaved { offset, target: None });
                    }
                    break;
                }
            };

            let offset = writer.offset();
            writer.push(slot)?;
            panel.notify(Notice::SlotSaved {
                offset,
                target: slot.target(),
            });
        }

        info!("saved sequence on key {}", key);
        panel.notify(Notice::SaveFinished { key });
        Ok(())
    }

    async fn load_session<M, S, K, B, N>(
        &mut self,
        axis: &mut MotionExecutor<M>,
        store: &mut SequenceStore<S>,
        panel: &mut OperatorPanel<K, B, N>,
    ) -> Result<()>
    where
        M: MotionPrimitive,
        S: NonVolatileStorage,
        K: KeySource,
        B: ExitButton,
        N: StatusSink,
    {
        panel.notify(Notice::LoadKeyPrompt);
        let key = match NumericCollector::new()
            .collect(&mut panel.keys, &mut panel.status)
            .await
        {
            NumericResult::Value(key) => key,
            _ => return Ok(()),
        };

        info!("replaying key {}", key);
        for target in store.load(key)? {
            absolute_move(axis, target?, &mut panel.status)?;
            if self.step_delay {
                let _ = panel.keys.next_key().await;
            }
        }
        Ok(())
    }

    async fn cycle_session<M, K, B, N>(
        &mut self,
        axis: &mut MotionExecutor<M>,
        panel: &mut OperatorPanel<K, B, N>,
    ) -> Result<()>
    where
        M: MotionPrimitive,
        K: KeySource,
        B: ExitButton,
        N: StatusSink,
    {
        let mut collector = NumericCollector::new();
        let (first, second) = loop {
            panel.notify(Notice::CyclePrompt { second: false });
            let NumericResult::Value(first) =
                collector.collect(&mut panel.keys, &mut panel.status).await
            else {
                continue;
            };

            panel.notify(Notice::CyclePrompt { second: true });
            let NumericResult::Value(second) =
                collector.collect(&mut panel.keys, &mut panel.status).await
            else {
                continue;
            };

            match validate_cycle(first, second, axis.constraints()) {
                Ok(()) => break (first, second),
                Err(e) => {
                    warn!("cycle targets rejected: {}", e);
                    panel.notify(Notice::Refused(e.into()));
                }
            }
        };

        info!("cycling between {} and {}", first, second);
        panel.notify(Notice::CycleStarted { first, second });

        axis.set_period(self.motor_period);
        absolute_move(axis, first, &mut panel.status)?;

        axis.set_period(self.cycle_period);
        let result = alternate(axis, first, second, panel);
        axis.set_period(self.motor_period);
        result?;

        panel.notify(Notice::CycleStopped);
        Ok(())
    }
}

/// Check a pair of cycle endpoints.
pub fn validate_cycle(
    first: u16,
    second: u16,
    constraints: &TravelConstraints,
) -> core::result::Result<(), InputError> {
    if first == second {
        return Err(InputError::DuplicateCycleTargets { target: first });
    }
    let limit = constraints.step_limit.value().clamp(0, i32::from(u16::MAX)) as u16;
    if constraints.soft_limit {
        if let Some(&target) = [first, second].iter().find(|&&t| t > limit) {
            return Err(InputError::CycleTargetOverLimit { target, limit });
        }
    }
    Ok(())
}

// Runs until the exit button is seen; each move completes before the check.
fn alternate<M, K, B, N>(
    axis: &mut MotionExecutor<M>,
    first: u16,
    second: u16,
    panel: &mut OperatorPanel<K, B, N>,
) -> Result<()>
where
    M: MotionPrimitive,
    K: KeySource,
    B: ExitButton,
    N: StatusSink,
{
    let mut toward_second = true;
    while !panel.exit.is_pressed()? {
        let target = if toward_second { second } else { first };
        absolute_move(axis, target, &mut panel.status)?;
        toward_second = !toward_second;
    }
    Ok(())
}

fn absolute_move<M, N>(axis: &mut MotionExecutor<M>, target: u16, status: &mut N) -> Result<()>
where
    M: MotionPrimitive,
    N: StatusSink,
{
    recover(
        axis.move_to_absolute(target)
            .map(|position| status.notify(Notice::Position(position))),
        status,
    )
}

/// Report operator-facing failures and swallow them; pass the rest through.
fn recover<N: StatusSink>(result: Result<()>, status: &mut N) -> Result<()> {
    match result {
        Err(e) if e.is_recoverable() => {
            warn!("refused: {}", e);
            status.notify(Notice::Refused(e));
            Ok(())
        }
        other => other,
    }
}
