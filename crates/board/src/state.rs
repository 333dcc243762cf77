//! Plain board data and the local mutations the [`Board`](crate::Board)
//! applies around each request.

use std::collections::HashMap;

use kanban_core::task::{validate_title, TaskStatus};
use kanban_core::types::DbId;
use kanban_db::models::category::Category;
use kanban_db::models::task::{CreateTask, Task};

use crate::error::ClientError;

/// The "Add New Task" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub category: Option<DbId>,
    pub status: TaskStatus,
}

impl TaskForm {
    /// Check title and category are filled in and build the request body.
    pub fn to_request(&self) -> Result<CreateTask, ClientError> {
        let missing = || ClientError::Validation("Please fill in both title and category".to_string());
        let title = validate_title(&self.title).map_err(|_| missing())?;
        let category = self.category.ok_or_else(missing)?;
        Ok(CreateTask {
            title,
            category: Some(category),
            status: Some(self.status.as_str().to_string()),
        })
    }
}

/// One board column.
#[derive(Debug)]
pub struct Column<'a> {
    pub status: TaskStatus,
    pub tasks: Vec<&'a Task>,
}

/// Everything the board renders.
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    pub tasks: Vec<Task>,
    pub categories: Vec<Category>,
    /// Inline error banner, cleared on the next load or by the user.
    pub error: Option<String>,
    /// The initial task fetch is in flight.
    pub loading_tasks: bool,
    /// A create request is in flight.
    pub creating: bool,
    pub form: TaskForm,
    /// Last move sequence number issued, across all tasks.
    move_counter: u64,
    /// Move bookkeeping for tasks with unsettled moves.
    pending_moves: HashMap<DbId, PendingMoves>,
}

/// Moves of one task that the server has not fully answered yet.
#[derive(Debug, Clone)]
struct PendingMoves {
    /// Sequence number of the newest move issued.
    latest: u64,
    /// Requests still awaiting a response.
    in_flight: usize,
    /// The newest move has been answered.
    latest_settled: bool,
    /// The status the server last reported for this task.
    confirmed: TaskStatus,
}

impl BoardState {
    pub fn task(&self, id: DbId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks grouped by status in column order, keeping list order within
    /// each column.
    pub fn columns(&self) -> Vec<Column<'_>> {
        TaskStatus::ALL
            .iter()
            .map(|&status| Column {
                status,
                tasks: self.tasks.iter().filter(|t| t.status == status).collect(),
            })
            .collect()
    }

    /// Categories offered by the task form's select.
    pub fn category_options(&self) -> &[Category] {
        &self.categories
    }

    /// Whether a move of this task is still awaiting the server.
    pub fn has_pending_move(&self, id: DbId) -> bool {
        self.pending_moves
            .get(&id)
            .is_some_and(|pending| pending.in_flight > 0)
    }

    /// Set a task's status, returning the status it had before.
    pub(crate) fn set_status(&mut self, id: DbId, status: TaskStatus) -> Option<TaskStatus> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        Some(std::mem::replace(&mut task.status, status))
    }

    /// Record a new move of `id` and return its sequence number.
    ///
    /// `previous` is the status before this move. It is taken as the
    /// server's status only when no other move of the task is unsettled.
    pub(crate) fn begin_move(&mut self, id: DbId, previous: TaskStatus) -> u64 {
        self.move_counter += 1;
        let pending = self.pending_moves.entry(id).or_insert(PendingMoves {
            latest: 0,
            in_flight: 0,
            latest_settled: false,
            confirmed: previous,
        });
        pending.latest = self.move_counter;
        pending.in_flight += 1;
        pending.latest_settled = false;
        self.move_counter
    }

    /// Resolve move `seq` of `id`. `confirmed` is the status the server
    /// returned, or `None` if the request failed.
    ///
    /// Once the newest move has been answered the card shows the server's
    /// last reported status, and the status applied is returned. While a
    /// newer move is unanswered the card keeps its optimistic status and
    /// `None` is returned.
    pub(crate) fn finish_move(
        &mut self,
        id: DbId,
        seq: u64,
        confirmed: Option<TaskStatus>,
    ) -> Option<TaskStatus> {
        let pending = self.pending_moves.get_mut(&id)?;
        pending.in_flight = pending.in_flight.saturating_sub(1);
        if let Some(status) = confirmed {
            pending.confirmed = status;
        }
        if pending.latest == seq {
            pending.latest_settled = true;
        }
        if !pending.latest_settled {
            return None;
        }

        let status = pending.confirmed;
        let done = pending.in_flight == 0;
        let on_board = self.set_status(id, status).is_some();
        // A card that is mid-delete keeps its entry so a failed delete can
        // restore the confirmed status.
        if done && on_board {
            self.pending_moves.remove(&id);
        }
        Some(status)
    }

    /// Overwrite the local copy of a task with the server's, if present.
    pub(crate) fn replace_task(&mut self, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
    }

    /// Remove a task, returning its position and value for a later restore.
    pub(crate) fn remove_task(&mut self, id: DbId) -> Option<(usize, Task)> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        Some((index, self.tasks.remove(index)))
    }

    /// Put a removed task back where it was (or at the end if the list shrank).
    ///
    /// If its moves were answered while it was off the board, the card comes
    /// back with the server's status.
    pub(crate) fn restore_task(&mut self, index: usize, mut task: Task) {
        if let Some(pending) = self.pending_moves.get(&task.id) {
            if pending.latest_settled {
                task.status = pending.confirmed;
            }
            if pending.in_flight == 0 {
                self.pending_moves.remove(&task.id);
            }
        }
        let index = index.min(self.tasks.len());
        self.tasks.insert(index, task);
    }

    /// Drop move bookkeeping for a task the server has deleted.
    pub(crate) fn forget_task(&mut self, id: DbId) {
        self.pending_moves.remove(&id);
    }
}
