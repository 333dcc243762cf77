//! Optimistic synchronisation between the local board and the API.
//!
//! The state mutex is never held across an `.await`: each operation
//! mutates local state, releases the lock, awaits the request, then
//! re-locks to reconcile. Moves and deletions are applied before their
//! request is sent and rolled back if it fails. Creation is not
//! optimistic; the card appears only once the server returns it.
//!
//! Requests may complete in any order. While the newest move of a task is
//! unanswered the card shows that move's target. Once it is answered the
//! card shows the status the server last reported, which is also where a
//! failed move rolls back to.

use std::sync::{Mutex, MutexGuard, PoisonError};

use kanban_core::task::TaskStatus;
use kanban_core::types::DbId;
use kanban_db::models::category::Category;
use kanban_db::models::task::Task;

use crate::api::BoardApi;
use crate::error::{ClientError, ClientResult};
use crate::state::{BoardState, TaskForm};

const FETCH_CATEGORIES_FAILED: &str = "Error fetching categories. Please try again.";
const FETCH_TASKS_FAILED: &str = "Error fetching tasks. Please try again.";
const CREATE_FAILED: &str = "Failed to create task. Please try again.";
const CREATE_CATEGORY_FAILED: &str = "Failed to create category. Please try again.";
const MOVE_FAILED: &str = "Failed to update task status. Please try again.";
const DELETE_FAILED: &str = "Failed to delete task. Please try again.";

/// A kanban board bound to an API.
pub struct Board<A> {
    api: A,
    state: Mutex<BoardState>,
}

impl<A: BoardApi> Board<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: Mutex::new(BoardState::default()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn state(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A copy of the current state for rendering.
    pub fn snapshot(&self) -> BoardState {
        self.state().clone()
    }

    /// Run `f` against the current state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&BoardState) -> R) -> R {
        f(&self.state())
    }

    pub fn clear_error(&self) {
        self.state().error = None;
    }

    /// Edit the task form.
    pub fn update_form(&self, f: impl FnOnce(&mut TaskForm)) {
        f(&mut self.state().form);
    }

    // -----------------------------------------------------------------------
    // Load
    // -----------------------------------------------------------------------

    /// Fetch categories and tasks concurrently.
    ///
    /// Each result is applied as soon as it arrives; a failure of one leaves
    /// the other's data in place and sets a retryable error. Returns the
    /// first failure, if any.
    pub async fn load(&self) -> ClientResult<()> {
        {
            let mut state = self.state();
            state.loading_tasks = true;
            state.error = None;
        }

        let categories = async {
            let result = self.api.list_categories().await;
            let mut state = self.state();
            match result {
                Ok(categories) => {
                    state.categories = categories;
                    Ok(())
                }
                Err(err) => {
                    tracing::error!(error = %err, "Error fetching categories");
                    state.error = Some(FETCH_CATEGORIES_FAILED.to_string());
                    Err(err)
                }
            }
        };

        let tasks = async {
            let result = self.api.list_tasks().await;
            let mut state = self.state();
            state.loading_tasks = false;
            match result {
                Ok(tasks) => {
                    state.tasks = tasks;
                    Ok(())
                }
                Err(err) => {
                    tracing::error!(error = %err, "Error fetching tasks");
                    state.error = Some(FETCH_TASKS_FAILED.to_string());
                    Err(err)
                }
            }
        };

        let (categories, tasks) = tokio::join!(categories, tasks);
        categories.and(tasks)
    }

    // -----------------------------------------------------------------------
    // Create
    // -----------------------------------------------------------------------

    /// Submit the task form.
    ///
    /// Nothing is sent if the title or category is missing. On success the
    /// server's task is appended and the form reset; on failure the form is
    /// kept for a retry.
    pub async fn create_task(&self) -> ClientResult<Task> {
        let request = {
            let mut state = self.state();
            match state.form.to_request() {
                Ok(request) => {
                    state.creating = true;
                    request
                }
                Err(err) => {
                    state.error = Some(err.to_string());
                    return Err(err);
                }
            }
        };

        let result = self.api.create_task(&request).await;

        let mut state = self.state();
        state.creating = false;
        match result {
            Ok(task) => {
                state.tasks.push(task.clone());
                state.form = TaskForm::default();
                Ok(task)
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to create task");
                state.error = Some(CREATE_FAILED.to_string());
                Err(err)
            }
        }
    }

    /// Create a category and add it to the form's options.
    pub async fn create_category(&self, name: &str) -> ClientResult<Category> {
        let result = self.api.create_category(name).await;

        let mut state = self.state();
        match result {
            Ok(category) => {
                state.categories.push(category.clone());
                Ok(category)
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to create category");
                state.error = Some(CREATE_CATEGORY_FAILED.to_string());
                Err(err)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Move
    // -----------------------------------------------------------------------

    /// Handle the end of a drag. Dropping outside any column does nothing.
    pub async fn handle_drag_end(&self, task_id: DbId, over: Option<TaskStatus>) -> ClientResult<()> {
        match over {
            Some(status) => self.move_task(task_id, status).await,
            None => Ok(()),
        }
    }

    /// Move a task to `status`.
    ///
    /// The local copy changes before the request is sent. Once the newest
    /// move of the task has been answered, the card shows the status the
    /// server last confirmed, so a failed move rolls back to server state
    /// even when earlier moves were still optimistic.
    pub async fn move_task(&self, id: DbId, status: TaskStatus) -> ClientResult<()> {
        let seq = {
            let mut state = self.state();
            let previous = state
                .set_status(id, status)
                .ok_or(ClientError::UnknownTask(id))?;
            if previous == status && !state.has_pending_move(id) {
                return Ok(());
            }
            state.begin_move(id, previous)
        };

        let result = self.api.update_task_status(id, status).await;

        let mut state = self.state();
        match result {
            Ok(task) => {
                if state.finish_move(id, seq, Some(task.status)) == Some(task.status) {
                    state.replace_task(task);
                }
                Ok(())
            }
            Err(err) => {
                if let Some(restored) = state.finish_move(id, seq, None) {
                    tracing::warn!(
                        task_id = id,
                        from = %status,
                        to = %restored,
                        error = %err,
                        "Rolled back task move",
                    );
                }
                state.error = Some(MOVE_FAILED.to_string());
                Err(err)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Delete
    // -----------------------------------------------------------------------

    /// Delete a task.
    ///
    /// The card disappears at once. If the request fails it is put back in
    /// its old position; a 404 counts as success since the task is gone.
    pub async fn delete_task(&self, id: DbId) -> ClientResult<()> {
        let (index, task) = self
            .state()
            .remove_task(id)
            .ok_or(ClientError::UnknownTask(id))?;

        match self.api.delete_task(id).await {
            Ok(()) => {
                self.state().forget_task(id);
                Ok(())
            }
            Err(err) if err.is_not_found() => {
                tracing::debug!(task_id = id, "Task already deleted on server");
                self.state().forget_task(id);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(task_id = id, error = %err, "Restoring task after failed delete");
                let mut state = self.state();
                state.restore_task(index, task);
                state.error = Some(DELETE_FAILED.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::sync::Arc;

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use kanban_db::models::task::{CategorySummary, CreateTask, TaskCategory};
    use tokio::sync::Notify;

    use super::*;

    /// Pauses one request until the test releases it.
    #[derive(Default)]
    struct Gate {
        entered: Notify,
        release: Notify,
    }

    impl Gate {
        async fn pass(&self) {
            self.entered.notify_one();
            self.release.notified().await;
        }
    }

    /// In-process API with switchable failures.
    #[derive(Default)]
    struct FakeApi {
        categories: Mutex<Vec<Category>>,
        tasks: Mutex<Vec<Task>>,
        failing: Mutex<HashSet<&'static str>>,
        gates: Mutex<HashMap<&'static str, Arc<Gate>>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeApi {
        fn with_tasks(tasks: Vec<Task>) -> Self {
            Self {
                categories: Mutex::new(vec![category(1, "Work")]),
                tasks: Mutex::new(tasks),
                ..Self::default()
            }
        }

        /// Hold the next `op` request at `gate`.
        fn gated(self, op: &'static str, gate: Arc<Gate>) -> Self {
            self.gates.lock().unwrap().insert(op, gate);
            self
        }

        fn fail(&self, op: &'static str) {
            self.failing.lock().unwrap().insert(op);
        }

        fn recover(&self, op: &'static str) {
            self.failing.lock().unwrap().remove(op);
        }

        fn stored_status(&self, id: DbId) -> TaskStatus {
            self.tasks.lock().unwrap().iter().find(|t| t.id == id).unwrap().status
        }

        fn check(&self, op: &'static str) -> ClientResult<()> {
            self.calls.lock().unwrap().push(op.to_string());
            if self.failing.lock().unwrap().contains(op) {
                return Err(ClientError::Api {
                    status: 500,
                    message: "An internal error occurred".to_string(),
                });
            }
            Ok(())
        }

        async fn wait_gate(&self, op: &'static str) {
            let gate = self.gates.lock().unwrap().remove(op);
            if let Some(gate) = gate {
                gate.pass().await;
            }
        }

        fn call_count(&self, op: &str) -> usize {
            self.calls.lock().unwrap().iter().filter(|c| *c == op).count()
        }
    }

    #[async_trait]
    impl BoardApi for FakeApi {
        async fn list_categories(&self) -> ClientResult<Vec<Category>> {
            self.check("list_categories")?;
            Ok(self.categories.lock().unwrap().clone())
        }

        async fn create_category(&self, name: &str) -> ClientResult<Category> {
            self.check("create_category")?;
            let mut categories = self.categories.lock().unwrap();
            let created = category(categories.len() as DbId + 1, name);
            categories.push(created.clone());
            Ok(created)
        }

        async fn list_tasks(&self) -> ClientResult<Vec<Task>> {
            self.check("list_tasks")?;
            Ok(self.tasks.lock().unwrap().clone())
        }

        async fn create_task(&self, input: &CreateTask) -> ClientResult<Task> {
            self.check("create_task")?;
            let mut tasks = self.tasks.lock().unwrap();
            let status = input.status.as_deref().unwrap_or("to-do").parse().unwrap();
            let mut created = task(100 + tasks.len() as DbId, status);
            created.title = input.title.clone();
            tasks.push(created.clone());
            Ok(created)
        }

        async fn update_task_status(&self, id: DbId, status: TaskStatus) -> ClientResult<Task> {
            self.wait_gate("update_task_status").await;
            self.check("update_task_status")?;
            let mut tasks = self.tasks.lock().unwrap();
            let task = tasks.iter_mut().find(|t| t.id == id).ok_or(ClientError::Api {
                status: 404,
                message: format!("Task with id {id} not found"),
            })?;
            task.status = status;
            Ok(task.clone())
        }

        async fn delete_task(&self, id: DbId) -> ClientResult<()> {
            self.wait_gate("delete_task").await;
            self.check("delete_task")?;
            let mut tasks = self.tasks.lock().unwrap();
            let before = tasks.len();
            tasks.retain(|t| t.id != id);
            if tasks.len() == before {
                return Err(ClientError::Api {
                    status: 404,
                    message: format!("Task with id {id} not found"),
                });
            }
            Ok(())
        }
    }

    fn category(id: DbId, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    fn task(id: DbId, status: TaskStatus) -> Task {
        Task {
            id,
            title: format!("Task {id}"),
            category: TaskCategory::Populated(CategorySummary {
                id: 1,
                name: "Work".to_string(),
            }),
            status,
            created_at: chrono::Utc::now(),
        }
    }

    async fn loaded_board(api: FakeApi) -> Board<FakeApi> {
        let board = Board::new(api);
        board.load().await.unwrap();
        board
    }

    fn status_of(board: &Board<FakeApi>, id: DbId) -> TaskStatus {
        board.with_state(|s| s.task(id).unwrap().status)
    }

    // -- load ---------------------------------------------------------------

    #[tokio::test]
    async fn load_fills_categories_and_tasks() {
        let board = loaded_board(FakeApi::with_tasks(vec![task(1, TaskStatus::ToDo)])).await;
        let state = board.snapshot();
        assert_eq!(state.categories.len(), 1);
        assert_eq!(state.tasks.len(), 1);
        assert!(!state.loading_tasks);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn failed_category_fetch_keeps_tasks() {
        let api = FakeApi::with_tasks(vec![task(1, TaskStatus::ToDo)]);
        api.fail("list_categories");
        let board = Board::new(api);

        assert!(board.load().await.is_err());

        let state = board.snapshot();
        assert_eq!(state.tasks.len(), 1);
        assert!(state.categories.is_empty());
        assert_eq!(state.error.as_deref(), Some(FETCH_CATEGORIES_FAILED));
        assert!(!state.loading_tasks);
    }

    #[tokio::test]
    async fn failed_task_fetch_clears_loading_and_keeps_categories() {
        let api = FakeApi::with_tasks(vec![task(1, TaskStatus::ToDo)]);
        api.fail("list_tasks");
        let board = Board::new(api);

        assert!(board.load().await.is_err());

        let state = board.snapshot();
        assert_eq!(state.categories.len(), 1);
        assert!(state.tasks.is_empty());
        assert!(!state.loading_tasks);
        assert_eq!(state.error.as_deref(), Some(FETCH_TASKS_FAILED));
    }

    // -- create -------------------------------------------------------------

    #[tokio::test]
    async fn create_with_incomplete_form_sends_nothing() {
        let board = loaded_board(FakeApi::with_tasks(vec![])).await;
        board.update_form(|f| f.title = "Buy milk".to_string());

        assert_matches!(board.create_task().await, Err(ClientError::Validation(_)));
        assert_eq!(board.api().call_count("create_task"), 0);
        assert_eq!(board.snapshot().form.title, "Buy milk");
    }

    #[tokio::test]
    async fn create_appends_server_task_and_resets_form() {
        let board = loaded_board(FakeApi::with_tasks(vec![])).await;
        board.update_form(|f| {
            f.title = "Buy milk".to_string();
            f.category = Some(1);
            f.status = TaskStatus::InProgress;
        });

        let created = board.create_task().await.unwrap();

        let state = board.snapshot();
        assert_eq!(state.tasks, vec![created.clone()]);
        assert_eq!(created.status, TaskStatus::InProgress);
        assert_eq!(state.form, TaskForm::default());
        assert!(!state.creating);
    }

    #[tokio::test]
    async fn failed_create_keeps_form_and_list() {
        let api = FakeApi::with_tasks(vec![]);
        api.fail("create_task");
        let board = loaded_board(api).await;
        board.update_form(|f| {
            f.title = "Buy milk".to_string();
            f.category = Some(1);
        });

        assert!(board.create_task().await.is_err());

        let state = board.snapshot();
        assert!(state.tasks.is_empty());
        assert_eq!(state.form.title, "Buy milk");
        assert!(!state.creating);
        assert_eq!(state.error.as_deref(), Some(CREATE_FAILED));
    }

    #[tokio::test]
    async fn created_category_becomes_a_form_option() {
        let board = loaded_board(FakeApi::with_tasks(vec![])).await;
        let created = board.create_category("Home").await.unwrap();
        let names: Vec<_> = board.with_state(|s| {
            s.category_options().iter().map(|c| c.name.clone()).collect()
        });
        assert_eq!(names, ["Work", "Home"]);
        assert_eq!(created.name, "Home");
    }

    // -- move ---------------------------------------------------------------

    #[tokio::test]
    async fn move_is_visible_before_the_request_resolves() {
        let gate = Arc::new(Gate::default());
        let api = FakeApi::with_tasks(vec![task(1, TaskStatus::ToDo)])
            .gated("update_task_status", gate.clone());
        let board = loaded_board(api).await;

        let observe = async {
            gate.entered.notified().await;
            let during = status_of(&board, 1);
            gate.release.notify_one();
            during
        };
        let (result, during) = tokio::join!(board.move_task(1, TaskStatus::Done), observe);

        result.unwrap();
        assert_eq!(during, TaskStatus::Done);
        assert_eq!(status_of(&board, 1), TaskStatus::Done);
    }

    #[tokio::test]
    async fn failed_move_rolls_back() {
        let api = FakeApi::with_tasks(vec![task(1, TaskStatus::InProgress)]);
        api.fail("update_task_status");
        let board = loaded_board(api).await;

        assert!(board.move_task(1, TaskStatus::Done).await.is_err());

        assert_eq!(status_of(&board, 1), TaskStatus::InProgress);
        assert_eq!(board.snapshot().error.as_deref(), Some(MOVE_FAILED));
        assert!(!board.with_state(|s| s.has_pending_move(1)));
    }

    #[tokio::test]
    async fn two_failed_moves_leave_the_server_status() {
        let gate = Arc::new(Gate::default());
        let api = FakeApi::with_tasks(vec![task(1, TaskStatus::ToDo)])
            .gated("update_task_status", gate.clone());
        api.fail("update_task_status");
        let board = loaded_board(api).await;

        // The first move is parked at the gate while a second move of the
        // same task is issued and fails; then the first one fails too.
        let first = board.move_task(1, TaskStatus::InProgress);
        let second = async {
            gate.entered.notified().await;
            let result = board.move_task(1, TaskStatus::Done).await;
            // The older move is still unanswered, but the card already
            // shows what the server holds.
            assert_eq!(status_of(&board, 1), TaskStatus::ToDo);
            gate.release.notify_one();
            result
        };
        let (first, second) = tokio::join!(first, second);

        assert!(first.is_err());
        assert!(second.is_err());
        assert_eq!(board.api().stored_status(1), TaskStatus::ToDo);
        assert_eq!(status_of(&board, 1), TaskStatus::ToDo);
        assert!(!board.with_state(|s| s.has_pending_move(1)));
    }

    #[tokio::test]
    async fn older_success_after_newer_failure_follows_the_server() {
        let gate = Arc::new(Gate::default());
        let api = FakeApi::with_tasks(vec![task(1, TaskStatus::ToDo)])
            .gated("update_task_status", gate.clone());
        api.fail("update_task_status");
        let board = loaded_board(api).await;

        let first = board.move_task(1, TaskStatus::InProgress);
        let second = async {
            gate.entered.notified().await;
            let result = board.move_task(1, TaskStatus::Done).await;
            board.api().recover("update_task_status");
            gate.release.notify_one();
            result
        };
        let (first, second) = tokio::join!(first, second);

        assert!(first.is_ok());
        assert!(second.is_err());
        assert_eq!(board.api().stored_status(1), TaskStatus::InProgress);
        assert_eq!(status_of(&board, 1), TaskStatus::InProgress);
    }

    #[tokio::test]
    async fn drop_outside_columns_is_ignored() {
        let board = loaded_board(FakeApi::with_tasks(vec![task(1, TaskStatus::ToDo)])).await;
        board.handle_drag_end(1, None).await.unwrap();
        assert_eq!(board.api().call_count("update_task_status"), 0);

        board.handle_drag_end(1, Some(TaskStatus::Done)).await.unwrap();
        assert_eq!(status_of(&board, 1), TaskStatus::Done);
    }

    #[tokio::test]
    async fn drop_on_same_column_sends_nothing() {
        let board = loaded_board(FakeApi::with_tasks(vec![task(1, TaskStatus::Done)])).await;
        board.move_task(1, TaskStatus::Done).await.unwrap();
        assert_eq!(board.api().call_count("update_task_status"), 0);
    }

    #[tokio::test]
    async fn moving_unknown_task_is_an_error() {
        let board = loaded_board(FakeApi::with_tasks(vec![])).await;
        assert_matches!(
            board.move_task(7, TaskStatus::Done).await,
            Err(ClientError::UnknownTask(7))
        );
    }

    // -- delete -------------------------------------------------------------

    #[tokio::test]
    async fn delete_removes_card_before_the_request_resolves() {
        let gate = Arc::new(Gate::default());
        let api = FakeApi::with_tasks(vec![task(1, TaskStatus::ToDo), task(2, TaskStatus::ToDo)])
            .gated("delete_task", gate.clone());
        let board = loaded_board(api).await;

        let observe = async {
            gate.entered.notified().await;
            let present = board.with_state(|s| s.task(1).is_some());
            gate.release.notify_one();
            present
        };
        let (result, present_during) = tokio::join!(board.delete_task(1), observe);

        result.unwrap();
        assert!(!present_during);
        assert!(board.with_state(|s| s.task(1).is_none()));
    }

    #[tokio::test]
    async fn failed_delete_restores_card_in_place() {
        let api = FakeApi::with_tasks(vec![
            task(1, TaskStatus::ToDo),
            task(2, TaskStatus::ToDo),
            task(3, TaskStatus::ToDo),
        ]);
        api.fail("delete_task");
        let board = loaded_board(api).await;

        assert!(board.delete_task(2).await.is_err());

        let state = board.snapshot();
        let ids: Vec<_> = state.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(state.error.as_deref(), Some(DELETE_FAILED));
    }

    #[tokio::test]
    async fn delete_of_task_missing_on_server_counts_as_success() {
        let board = loaded_board(FakeApi::with_tasks(vec![task(1, TaskStatus::ToDo)])).await;
        board.api().tasks.lock().unwrap().clear();

        board.delete_task(1).await.unwrap();

        let state = board.snapshot();
        assert!(state.tasks.is_empty());
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn failed_delete_then_failed_move_restores_server_status() {
        let gate = Arc::new(Gate::default());
        let api = FakeApi::with_tasks(vec![task(1, TaskStatus::ToDo)])
            .gated("update_task_status", gate.clone());
        api.fail("update_task_status");
        api.fail("delete_task");
        let board = loaded_board(api).await;

        let moving = board.move_task(1, TaskStatus::Done);
        let deleting = async {
            gate.entered.notified().await;
            let result = board.delete_task(1).await;
            gate.release.notify_one();
            result
        };
        let (moved, deleted) = tokio::join!(moving, deleting);

        assert!(moved.is_err());
        assert!(deleted.is_err());
        assert_eq!(board.api().stored_status(1), TaskStatus::ToDo);
        assert_eq!(status_of(&board, 1), TaskStatus::ToDo);
        assert!(!board.with_state(|s| s.has_pending_move(1)));
    }

    #[tokio::test]
    async fn move_failing_during_delete_is_rolled_back_on_restore() {
        let move_gate = Arc::new(Gate::default());
        let delete_gate = Arc::new(Gate::default());
        let api = FakeApi::with_tasks(vec![task(1, TaskStatus::ToDo)])
            .gated("update_task_status", move_gate.clone())
            .gated("delete_task", delete_gate.clone());
        api.fail("update_task_status");
        api.fail("delete_task");
        let board = loaded_board(api).await;

        // The move fails while the card is off the board; the delete fails
        // after that.
        let moving = async {
            let result = board.move_task(1, TaskStatus::Done).await;
            delete_gate.release.notify_one();
            result
        };
        let deleting = async {
            move_gate.entered.notified().await;
            let release_move = async {
                delete_gate.entered.notified().await;
                move_gate.release.notify_one();
            };
            let (deleted, ()) = tokio::join!(board.delete_task(1), release_move);
            deleted
        };
        let (moved, deleted) = tokio::join!(moving, deleting);

        assert!(moved.is_err());
        assert!(deleted.is_err());
        assert_eq!(board.api().stored_status(1), TaskStatus::ToDo);
        assert_eq!(status_of(&board, 1), TaskStatus::ToDo);
        assert!(!board.with_state(|s| s.has_pending_move(1)));
    }

    #[tokio::test]
    async fn failed_category_create_sets_error() {
        let api = FakeApi::with_tasks(vec![]);
        api.fail("create_category");
        let board = loaded_board(api).await;

        assert!(board.create_category("Home").await.is_err());

        let state = board.snapshot();
        assert_eq!(state.error.as_deref(), Some(CREATE_CATEGORY_FAILED));
        assert_eq!(state.categories.len(), 1);
    }

    #[tokio::test]
    async fn clear_error_dismisses_banner() {
        let api = FakeApi::with_tasks(vec![]);
        api.fail("list_tasks");
        let board = Board::new(api);
        let _ = board.load().await;

        board.clear_error();

        assert!(board.snapshot().error.is_none());
    }
}
