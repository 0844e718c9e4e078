//! The task store: single owner and mutator of the task collection.
//!
//! Every mutation is synchronous and total. Operations on an id that is
//! not in the collection are silently ignored. Observers registered with
//! [`TaskStore::subscribe`] are notified in registration order after each
//! effective mutation, on the calling thread.

use crate::tlog_debug;

use super::task::{Task, TaskId};

/// A change applied to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Added(TaskId),
    Toggled(TaskId),
    Edited(TaskId),
    Deleted(TaskId),
}

impl StoreEvent {
    pub fn task_id(&self) -> TaskId {
        match self {
            StoreEvent::Added(id)
            | StoreEvent::Toggled(id)
            | StoreEvent::Edited(id)
            | StoreEvent::Deleted(id) => *id,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StoreEvent::Added(_) => "added",
            StoreEvent::Toggled(_) => "toggled",
            StoreEvent::Edited(_) => "edited",
            StoreEvent::Deleted(_) => "deleted",
        }
    }
}

/// Receives change notifications from a [`TaskStore`].
///
/// `tasks` is the collection as it stands after the change.
pub trait StoreObserver: Send {
    fn on_change(&mut self, event: &StoreEvent, tasks: &[Task]);
}

/// Writes every store event to the debug log.
#[derive(Debug, Default)]
pub struct LogObserver;

impl StoreObserver for LogObserver {
    fn on_change(&mut self, event: &StoreEvent, tasks: &[Task]) {
        tlog_debug!(
            "TaskStore {} id={} total={}",
            event.label(),
            event.task_id().short(),
            tasks.len()
        );
    }
}

/// Ordered, insertion-preserving collection of tasks.
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    observers: Vec<Box<dyn StoreObserver>>,
    revision: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. It sees every later mutation.
    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of effective mutations since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append a new task with the trimmed title.
    ///
    /// Blank or whitespace-only titles leave the collection unchanged.
    pub fn add(&mut self, title: &str) -> Option<TaskId> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let task = Task::new(title);
        let id = task.id;
        self.tasks.push(task);
        self.notify(StoreEvent::Added(id));
        Some(id)
    }

    /// Flip the completion flag of `id`. Returns whether anything changed.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.toggle();
        self.notify(StoreEvent::Toggled(id));
        true
    }

    /// Replace the title of `id` as given. Id and completion flag are kept.
    pub fn edit(&mut self, id: TaskId, new_title: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.title = new_title.to_string();
        self.notify(StoreEvent::Edited(id));
        true
    }

    /// Remove `id` from the collection. Returns whether it was present.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };
        self.tasks.remove(pos);
        self.notify(StoreEvent::Deleted(id));
        true
    }

    fn notify(&mut self, event: StoreEvent) {
        self.revision += 1;
        for observer in self.observers.iter_mut() {
            observer.on_change(&event, &self.tasks);
        }
    }
}
