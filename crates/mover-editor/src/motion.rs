//! Continuous arrow-key motion.
//!
//! Each held arrow key drives one `MotionTask` per selected element. A task
//! owns a `CancelToken`; releasing the key (or unregistering the element)
//! cancels it. The host advances a single clock through
//! [`MotionScheduler::due_steps`], which reports every step that fell due
//! since the previous call.

use mover_core::id::ElementId;
use mover_core::model::Direction;
use std::cell::Cell;
use std::rc::Rc;

/// Shared cancellation flag for one motion task.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// A repeating one-step motion of one element in one direction.
#[derive(Debug, Clone)]
pub struct MotionTask {
    pub element: ElementId,
    pub direction: Direction,
    token: CancelToken,
    next_due_ms: f64,
}

#[derive(Debug)]
pub struct MotionScheduler {
    tasks: Vec<MotionTask>,
    interval_ms: f64,
    max_catch_up: u32,
}

impl MotionScheduler {
    pub fn new(interval_ms: f64, max_catch_up: u32) -> Self {
        Self {
            tasks: Vec::new(),
            // A zero or negative interval would never stop stepping.
            interval_ms: interval_ms.max(1.0),
            max_catch_up: max_catch_up.max(1),
        }
    }

    /// Start a task whose first scheduled step falls one interval after `now_ms`.
    /// The caller performs the immediate step itself.
    pub fn spawn(&mut self, element: ElementId, direction: Direction, now_ms: f64) -> CancelToken {
        let token = CancelToken::new();
        self.tasks.push(MotionTask {
            element,
            direction,
            token: token.clone(),
            next_due_ms: now_ms + self.interval_ms,
        });
        log::trace!("motion start {element} {direction:?}");
        token
    }

    /// Cancel every task moving in `direction`. Returns how many were live.
    pub fn cancel_direction(&mut self, direction: Direction) -> usize {
        self.cancel_where(|t| t.direction == direction)
    }

    /// Cancel every task moving `element`. Returns how many were live.
    pub fn cancel_element(&mut self, element: ElementId) -> usize {
        self.cancel_where(|t| t.element == element)
    }

    fn cancel_where(&mut self, pred: impl Fn(&MotionTask) -> bool) -> usize {
        let mut n = 0;
        for task in self.tasks.iter().filter(|t| pred(t)) {
            if !task.token.is_cancelled() {
                task.token.cancel();
                n += 1;
            }
        }
        n
    }

    /// Live (uncancelled) tasks.
    pub fn active(&self) -> impl Iterator<Item = &MotionTask> {
        self.tasks.iter().filter(|t| !t.token.is_cancelled())
    }

    pub fn is_idle(&self) -> bool {
        self.active().next().is_none()
    }

    /// Collect every step that is due at `now_ms`, advancing each task's
    /// schedule. Cancelled tasks are pruned here.
    pub fn due_steps(&mut self, now_ms: f64) -> Vec<(ElementId, Direction)> {
        self.tasks.retain(|t| !t.token.is_cancelled());

        let mut steps = Vec::new();
        for task in &mut self.tasks {
            let mut n = 0;
            while task.next_due_ms <= now_ms && n < self.max_catch_up {
                steps.push((task.element, task.direction));
                task.next_due_ms += self.interval_ms;
                n += 1;
            }
            if task.next_due_ms <= now_ms {
                // Host stalled; drop the backlog instead of teleporting.
                task.next_due_ms = now_ms + self.interval_ms;
            }
        }
        steps
    }
}
