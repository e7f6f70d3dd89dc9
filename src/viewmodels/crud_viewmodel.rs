// ============================================================================
// CRUD VIEWMODEL - Controlador genérico de un recurso del backend
// ============================================================================
// list / create / read-for-edit / update / delete con el mismo patrón:
// llamar al API -> en éxito recargar la lista y cerrar el diálogo ->
// en fallo mostrar el mensaje (o logout forzado si es un 401).
// ============================================================================

use std::cell::RefCell;

use crate::models::{Resource, ResourceForm};
use crate::services::ApiError;
use crate::state::{Alert, AppContext, InFlight, InFlightGuard, ReactiveState};
use crate::viewmodels::presenters::{present_list, ListView, Presentable};

/// Resultado de una acción del usuario
#[derive(Clone, Debug, PartialEq)]
pub enum ActionOutcome {
    Completed,
    /// El usuario no confirmó
    Cancelled,
    /// Había otra petición en vuelo
    Skipped,
    Failed(ApiError),
}

/// Operación que puede repetirse tras un fallo de conexión
#[derive(Clone, Debug, PartialEq)]
pub enum CrudAction<F> {
    List,
    Create(F),
    ReadForEdit(String),
    Update(String, F),
    Delete(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DialogState<F> {
    pub open: bool,
    pub form: F,
    /// Id que editará el próximo update (solo en el diálogo de edición)
    pub editing_id: Option<String>,
}

impl<F: Default> Default for DialogState<F> {
    fn default() -> Self {
        Self {
            open: false,
            form: F::default(),
            editing_id: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CrudState<R: Resource> {
    pub items: Vec<R>,
    pub loaded: bool,
    pub create_dialog: DialogState<R::Form>,
    pub edit_dialog: DialogState<R::Form>,
    pub alert: Option<Alert>,
    /// Sube con cada alerta mostrada, aunque repita el texto
    pub alert_seq: u64,
    /// Hay una acción en vuelo: los controles que la disparan se desactivan
    pub busy: bool,
}

impl<R: Resource> Default for CrudState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loaded: false,
            create_dialog: DialogState::default(),
            edit_dialog: DialogState::default(),
            alert: None,
            alert_seq: 0,
            busy: false,
        }
    }
}

impl<R: Resource> CrudState<R> {
    fn raise(&mut self, alert: Option<Alert>) {
        if alert.is_some() {
            self.alert_seq += 1;
        }
        self.alert = alert;
    }
}

/// Cerrojo que además publica `busy` en el estado mientras dura
struct BusyGuard<R: Resource> {
    _lock: InFlightGuard,
    state: ReactiveState<CrudState<R>>,
}

impl<R: Resource> Drop for BusyGuard<R> {
    fn drop(&mut self) {
        self.state.update(|s| s.busy = false);
    }
}

pub struct CrudViewModel<R: Resource> {
    ctx: AppContext,
    state: ReactiveState<CrudState<R>>,
    in_flight: InFlight,
    last_failed: RefCell<Option<CrudAction<R::Form>>>,
}

impl<R: Resource> CrudViewModel<R> {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            state: ReactiveState::new(CrudState::default()),
            in_flight: InFlight::new(),
            last_failed: RefCell::new(None),
        }
    }

    pub fn state(&self) -> &ReactiveState<CrudState<R>> {
        &self.state
    }

    pub fn snapshot(&self) -> CrudState<R> {
        self.state.snapshot()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_busy()
    }

    /// Modelo de vista de la lista actual
    pub fn view(&self) -> ListView
    where
        R: Presentable,
    {
        self.state.with(|s| present_list(&s.items))
    }

    fn begin(&self) -> Option<BusyGuard<R>> {
        let lock = self.in_flight.try_begin()?;
        self.state.update(|s| s.busy = true);
        Some(BusyGuard {
            _lock: lock,
            state: self.state.clone(),
        })
    }

    /// GET de la colección. En fallo la lista anterior queda como estaba.
    pub async fn list(&self) -> ActionOutcome {
        let default_error = format!("Failed to load {}", R::PLURAL);
        match self.ctx.api.get::<Vec<R>>(R::COLLECTION_PATH, &default_error).await {
            Ok(items) => {
                log::info!("📋 [CRUD] {} {} cargados", items.len(), R::PLURAL);
                self.state.update(|s| {
                    s.items = items;
                    s.loaded = true;
                });
                ActionOutcome::Completed
            }
            Err(e) => self.fail(CrudAction::List, e, &format!("Error loading {}: ", R::PLURAL)),
        }
    }

    pub fn open_create(&self) {
        self.state.update(|s| {
            s.create_dialog = DialogState {
                open: true,
                ..DialogState::default()
            };
        });
    }

    pub fn close_create(&self) {
        self.state.update(|s| s.create_dialog.open = false);
    }

    pub fn close_edit(&self) {
        self.state.update(|s| s.edit_dialog = DialogState::default());
    }

    pub async fn create(&self, form: R::Form) -> ActionOutcome {
        let Some(_guard) = self.begin() else {
            return ActionOutcome::Skipped;
        };
        let prefix = format!("Error creating {}: ", R::SINGULAR);
        self.state.update(|s| s.create_dialog.form = form.clone());

        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(e) => return self.report_failure(e, &prefix),
        };

        let default_error = format!("Failed to create {}", R::SINGULAR);
        match self.ctx.api.post(R::COLLECTION_PATH, &payload, &default_error).await {
            Ok(_) => {
                log::info!("✅ [CRUD] {} creado", R::SINGULAR);
                let alert = self.ctx.success_alert(format!("{} created successfully", R::TITLE));
                self.state.update(|s| {
                    s.create_dialog = DialogState::default();
                    s.raise(Some(alert));
                });
                self.list().await;
                ActionOutcome::Completed
            }
            Err(e) => self.fail(CrudAction::Create(form), e, &prefix),
        }
    }

    /// GET de un recurso y apertura del diálogo de edición con sus campos
    pub async fn read_for_edit(&self, id: &str) -> ActionOutcome {
        let Some(_guard) = self.begin() else {
            return ActionOutcome::Skipped;
        };
        let default_error = format!("Failed to fetch {} details", R::SINGULAR);
        match self.ctx.api.get::<R>(&R::item_path(id), &default_error).await {
            Ok(record) => {
                let form = record.to_form();
                let editing_id = record.id().to_string();
                self.state.update(|s| {
                    s.edit_dialog = DialogState {
                        open: true,
                        form,
                        editing_id: Some(editing_id),
                    };
                });
                ActionOutcome::Completed
            }
            Err(e) => self.fail(
                CrudAction::ReadForEdit(id.to_string()),
                e,
                &format!("Error fetching {} details: ", R::SINGULAR),
            ),
        }
    }

    /// Update sobre el id recordado por `read_for_edit`
    pub async fn submit_edit(&self, form: R::Form) -> ActionOutcome {
        let editing_id = self.state.with(|s| s.edit_dialog.editing_id.clone());
        match editing_id {
            Some(id) => self.update(&id, form).await,
            None => {
                log::warn!("⚠️ [CRUD] submit_edit sin {} seleccionado", R::SINGULAR);
                ActionOutcome::Skipped
            }
        }
    }

    pub async fn update(&self, id: &str, form: R::Form) -> ActionOutcome {
        let Some(_guard) = self.begin() else {
            return ActionOutcome::Skipped;
        };
        let prefix = format!("Error updating {}: ", R::SINGULAR);
        self.state.update(|s| s.edit_dialog.form = form.clone());

        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(e) => return self.report_failure(e, &prefix),
        };

        let default_error = format!("Failed to update {}", R::SINGULAR);
        match self.ctx.api.put(&R::item_path(id), &payload, &default_error).await {
            Ok(_) => {
                log::info!("✅ [CRUD] {} {} actualizado", R::SINGULAR, id);
                let alert = self.ctx.success_alert(format!("{} updated successfully", R::TITLE));
                self.state.update(|s| {
                    s.edit_dialog = DialogState::default();
                    s.raise(Some(alert));
                });
                self.list().await;
                ActionOutcome::Completed
            }
            Err(e) => self.fail(CrudAction::Update(id.to_string(), form), e, &prefix),
        }
    }

    /// DELETE tras confirmación explícita; sin confirmar no se hace nada
    pub async fn delete(&self, id: &str) -> ActionOutcome {
        let Some(_guard) = self.begin() else {
            return ActionOutcome::Skipped;
        };
        let question = format!("Are you sure you want to delete this {}?", R::SINGULAR);
        if !self.ctx.confirmer.confirm(&question) {
            log::info!("↩️ [CRUD] Borrado de {} {} cancelado", R::SINGULAR, id);
            return ActionOutcome::Cancelled;
        }
        self.send_delete(id).await
    }

    async fn send_delete(&self, id: &str) -> ActionOutcome {
        let default_error = format!("Failed to delete {}", R::SINGULAR);
        match self.ctx.api.delete(&R::item_path(id), &default_error).await {
            Ok(_) => {
                log::info!("🗑️ [CRUD] {} {} eliminado", R::SINGULAR, id);
                let alert = self.ctx.success_alert(format!("{} deleted successfully", R::TITLE));
                self.state.update(|s| s.raise(Some(alert)));
                self.list().await;
                ActionOutcome::Completed
            }
            Err(e) => self.fail(
                CrudAction::Delete(id.to_string()),
                e,
                &format!("Error deleting {}: ", R::SINGULAR),
            ),
        }
    }

    /// Última acción que falló por conexión, si la hay
    pub fn retry_action(&self) -> Option<CrudAction<R::Form>> {
        self.last_failed.borrow().clone()
    }

    /// Repite la acción que falló por conexión. El borrado ya fue confirmado.
    pub async fn retry_last(&self) -> ActionOutcome {
        let Some(action) = self.retry_action() else {
            return ActionOutcome::Skipped;
        };
        log::info!("🔄 [CRUD] Reintentando {:?}", action);
        let outcome = match action {
            CrudAction::List => {
                let Some(_guard) = self.begin() else {
                    return ActionOutcome::Skipped;
                };
                self.list().await
            }
            CrudAction::Create(form) => self.create(form).await,
            CrudAction::ReadForEdit(id) => self.read_for_edit(&id).await,
            CrudAction::Update(id, form) => self.update(&id, form).await,
            CrudAction::Delete(id) => {
                let Some(_guard) = self.begin() else {
                    return ActionOutcome::Skipped;
                };
                self.send_delete(&id).await
            }
        };
        if outcome == ActionOutcome::Completed {
            *self.last_failed.borrow_mut() = None;
        }
        outcome
    }

    /// Alerta producida fuera del controlador (p. ej. al cargar el desplegable)
    pub fn show_alert(&self, alert: Alert) {
        self.state.update(|s| s.raise(Some(alert)));
    }

    /// Cierra la alerta solo si sigue siendo la número `seq`
    pub fn dismiss_alert_if(&self, seq: u64) {
        if self.state.with(|s| s.alert.is_none() || s.alert_seq != seq) {
            return;
        }
        self.state.update(|s| s.alert = None);
    }

    /// Lleva un fallo al sumidero común y refleja la alerta (si la hay) en el estado
    pub fn report_failure(&self, error: ApiError, prefix: &str) -> ActionOutcome {
        *self.last_failed.borrow_mut() = None;
        let alert = self.ctx.surface_error(&error, prefix);
        self.state.update(|s| s.raise(alert));
        ActionOutcome::Failed(error)
    }

    /// Como `report_failure`, recordando la acción si el fallo admite reintento
    fn fail(&self, action: CrudAction<R::Form>, error: ApiError, prefix: &str) -> ActionOutcome {
        let retryable = error.is_retryable();
        let outcome = self.report_failure(error, prefix);
        if retryable {
            *self.last_failed.borrow_mut() = Some(action);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassForm, ClassRecord, UserForm, UserRecord};
    use crate::services::{HttpMethod, TransportError};
    use crate::state::AlertKind;
    use crate::test_support::{admin_session, Reply, TestHarness};
    use crate::viewmodels::presenters::{status_badge, ListView};

    const ALGEBRA: &str = r#"{"_id":"c1","name":"Algebra","code":"MATH101","description":"Linear algebra",
        "capacity":30,"enrolledStudents":0,"facultyId":"f1","facultyName":"Ada","status":"active"}"#;

    fn classes(harness: &TestHarness) -> CrudViewModel<ClassRecord> {
        CrudViewModel::new(harness.ctx.clone())
    }

    fn algebra_form() -> ClassForm {
        ClassForm {
            name: "Algebra".into(),
            code: "MATH101".into(),
            description: "Linear algebra".into(),
            capacity: "30".into(),
            faculty_id: "f1".into(),
            status: "active".into(),
        }
    }

    #[tokio::test]
    async fn list_renders_cards() {
        let harness = TestHarness::signed_in(admin_session());
        harness.transport.reply(Reply::json(200, &format!("[{}]", ALGEBRA)));
        let vm = classes(&harness);

        assert_eq!(vm.list().await, ActionOutcome::Completed);
        let ListView::Cards(cards) = vm.view() else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Algebra");
    }

    #[tokio::test]
    async fn created_class_shows_up_with_capacity_and_badge() {
        let harness = TestHarness::signed_in(admin_session());
        harness.transport.reply(Reply::json(201, ALGEBRA));
        harness.transport.reply(Reply::json(200, &format!("[{}]", ALGEBRA)));
        let vm = classes(&harness);
        vm.open_create();

        assert_eq!(vm.create(algebra_form()).await, ActionOutcome::Completed);

        let requests = harness.transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Post);
        let body: serde_json::Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["capacity"], 30);
        assert_eq!(requests[1].method, HttpMethod::Get);

        let state = vm.snapshot();
        assert!(!state.create_dialog.open);
        assert_eq!(state.alert.as_ref().map(|a| a.message.as_str()), Some("Class created successfully"));

        let ListView::Cards(cards) = vm.view() else {
            panic!("expected cards");
        };
        assert!(cards[0].body_lines.contains(&"Capacity: 0/30".to_string()));
        assert_eq!(cards[0].badge.class, status_badge("active"));
    }

    #[tokio::test]
    async fn failed_create_keeps_dialog_open() {
        let harness = TestHarness::signed_in(admin_session());
        harness.transport.reply(Reply::json(400, r#"{"error":"Code already used"}"#));
        let vm = classes(&harness);
        vm.open_create();

        let outcome = vm.create(algebra_form()).await;
        assert_eq!(outcome, ActionOutcome::Failed(ApiError::RequestFailed("Code already used".into())));

        let state = vm.snapshot();
        assert!(state.create_dialog.open);
        assert_eq!(state.create_dialog.form, algebra_form());
        let alert = state.alert.unwrap();
        assert_eq!(alert.kind, AlertKind::Error);
        assert_eq!(alert.message, "Error creating class: Code already used");
        assert_eq!(alert.dismiss_after_ms, Some(5_000));
        assert_eq!(harness.transport.request_count(), 1);
    }

    #[tokio::test]
    async fn invalid_capacity_never_reaches_the_server() {
        let harness = TestHarness::signed_in(admin_session());
        let vm = classes(&harness);
        vm.open_create();
        let form = ClassForm { capacity: "lots".into(), ..algebra_form() };

        let outcome = vm.create(form).await;
        assert!(matches!(outcome, ActionOutcome::Failed(ApiError::ValidationFailed(_))));
        assert_eq!(harness.transport.request_count(), 0);
        assert!(vm.snapshot().create_dialog.open);
    }

    #[tokio::test]
    async fn failed_list_keeps_previous_items() {
        let harness = TestHarness::signed_in(admin_session());
        harness.transport.reply(Reply::json(200, &format!("[{}]", ALGEBRA)));
        harness.transport.reply(Reply::json(500, ""));
        let vm = classes(&harness);

        vm.list().await;
        let outcome = vm.list().await;
        assert_eq!(outcome, ActionOutcome::Failed(ApiError::RequestFailed("Failed to load classes".into())));
        assert_eq!(vm.snapshot().items.len(), 1);
        assert_eq!(
            vm.snapshot().alert.map(|a| a.message),
            Some("Error loading classes: Failed to load classes".to_string())
        );
    }

    #[tokio::test]
    async fn read_for_edit_fills_form_and_remembers_id() {
        let harness = TestHarness::signed_in(admin_session());
        harness.transport.reply(Reply::json(200, ALGEBRA));
        let vm = classes(&harness);

        assert_eq!(vm.read_for_edit("c1").await, ActionOutcome::Completed);
        assert!(harness.transport.last_request().unwrap().url.ends_with("/classes/c1"));

        let dialog = vm.snapshot().edit_dialog;
        assert!(dialog.open);
        assert_eq!(dialog.editing_id.as_deref(), Some("c1"));
        assert_eq!(dialog.form, algebra_form());
    }

    #[tokio::test]
    async fn submit_edit_puts_to_remembered_id() {
        let harness = TestHarness::signed_in(admin_session());
        harness.transport.reply(Reply::json(200, ALGEBRA));
        harness.transport.reply(Reply::json(200, ALGEBRA));
        harness.transport.reply(Reply::json(200, &format!("[{}]", ALGEBRA)));
        let vm = classes(&harness);

        vm.read_for_edit("c1").await;
        let form = ClassForm { status: "inactive".into(), ..algebra_form() };
        assert_eq!(vm.submit_edit(form).await, ActionOutcome::Completed);

        let put = &harness.transport.requests()[1];
        assert_eq!(put.method, HttpMethod::Put);
        assert!(put.url.ends_with("/classes/c1"));
        let state = vm.snapshot();
        assert!(!state.edit_dialog.open);
        assert_eq!(state.alert.map(|a| a.message), Some("Class updated successfully".to_string()));
    }

    #[tokio::test]
    async fn submit_edit_without_selection_is_skipped() {
        let harness = TestHarness::signed_in(admin_session());
        let vm = classes(&harness);
        assert_eq!(vm.submit_edit(algebra_form()).await, ActionOutcome::Skipped);
        assert_eq!(harness.transport.request_count(), 0);
    }

    #[tokio::test]
    async fn update_401_forces_logout_without_success_message() {
        let harness = TestHarness::signed_in(admin_session());
        harness.transport.reply(Reply::json(401, ""));
        let vm: CrudViewModel<UserRecord> = CrudViewModel::new(harness.ctx.clone());

        let form = UserForm {
            username: "bob".into(),
            email: "b@x".into(),
            user_type: "student".into(),
            password: String::new(),
        };
        let outcome = vm.update("u7", form).await;

        assert_eq!(outcome, ActionOutcome::Failed(ApiError::Unauthenticated));
        assert_eq!(harness.ctx.session.get(), None);
        assert_eq!(harness.navigator.last_visit().as_deref(), Some("../index.html"));
        assert_eq!(vm.snapshot().alert, None);
        assert_eq!(harness.transport.request_count(), 1);
    }

    #[tokio::test]
    async fn every_operation_forces_logout_on_401() {
        let harness = TestHarness::signed_in(admin_session());
        let vm = classes(&harness);

        for step in 0..4 {
            harness.ctx.session.set(&admin_session()).unwrap();
            harness.transport.reply(Reply::json(401, r#"{"error":"expired"}"#));
            let outcome = match step {
                0 => vm.list().await,
                1 => vm.create(algebra_form()).await,
                2 => vm.read_for_edit("c1").await,
                _ => vm.delete("c1").await,
            };
            assert_eq!(outcome, ActionOutcome::Failed(ApiError::Unauthenticated), "step {}", step);
            assert!(!harness.ctx.session.is_authenticated(), "step {}", step);
        }
        assert_eq!(harness.navigator.visits().len(), 4);
    }

    #[tokio::test]
    async fn unconfirmed_delete_sends_nothing() {
        let harness = TestHarness::signed_in(admin_session());
        harness.transport.reply(Reply::json(200, &format!("[{}]", ALGEBRA)));
        let vm = classes(&harness);
        vm.list().await;
        let before = vm.snapshot();

        harness.confirmer.answer_next(false);
        assert_eq!(vm.delete("c1").await, ActionOutcome::Cancelled);

        assert_eq!(harness.confirmer.times_asked(), 1);
        assert_eq!(harness.transport.request_count(), 1);
        assert_eq!(vm.snapshot(), before);
    }

    #[tokio::test]
    async fn confirmed_delete_reloads_list() {
        let harness = TestHarness::signed_in(admin_session());
        harness.transport.reply(Reply::json(200, ""));
        harness.transport.reply(Reply::json(200, "[]"));
        let vm = classes(&harness);

        assert_eq!(vm.delete("c1").await, ActionOutcome::Completed);
        let requests = harness.transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Delete);
        assert!(requests[0].url.ends_with("/classes/c1"));
        assert_eq!(vm.view(), ListView::Empty("No classes found."));
        assert_eq!(vm.snapshot().alert.map(|a| a.message), Some("Class deleted successfully".to_string()));
    }

    #[tokio::test]
    async fn user_errors_use_user_wording() {
        let harness = TestHarness::signed_in(admin_session());
        harness.transport.reply(Reply::Fail(TransportError::Offline));
        let vm: CrudViewModel<UserRecord> = CrudViewModel::new(harness.ctx.clone());

        vm.list().await;
        assert_eq!(
            vm.snapshot().alert.map(|a| a.message),
            Some("Error loading users: No internet connection. Please check your network.".to_string())
        );
    }

    #[tokio::test]
    async fn action_while_busy_is_skipped() {
        let harness = TestHarness::signed_in(admin_session());
        let vm = classes(&harness);
        let _held = vm.begin();

        assert!(vm.is_busy());
        assert!(vm.snapshot().busy);
        assert_eq!(vm.delete("c1").await, ActionOutcome::Skipped);
        assert_eq!(harness.confirmer.times_asked(), 0);
        assert_eq!(harness.transport.request_count(), 0);
    }

    #[tokio::test]
    async fn controls_are_busy_only_while_a_request_runs() {
        let harness = TestHarness::signed_in(admin_session());
        harness.transport.reply(Reply::json(201, ALGEBRA));
        harness.transport.reply(Reply::json(200, &format!("[{}]", ALGEBRA)));
        let vm = classes(&harness);
        let seen = std::rc::Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            let state = vm.state().clone();
            vm.state().subscribe(move || seen.borrow_mut().push(state.with(|s| s.busy)));
        }

        vm.create(algebra_form()).await;

        let seen = seen.borrow();
        assert_eq!(seen.first(), Some(&true));
        assert_eq!(seen.last(), Some(&false));
        assert!(!vm.snapshot().busy);
    }

    #[tokio::test]
    async fn offline_list_offers_retry_that_reissues_the_get() {
        let harness = TestHarness::signed_in(admin_session());
        harness.transport.reply(Reply::Fail(TransportError::Offline));
        harness.transport.reply(Reply::json(200, &format!("[{}]", ALGEBRA)));
        let vm = classes(&harness);

        assert!(matches!(vm.list().await, ActionOutcome::Failed(ApiError::ServerUnreachable(_))));
        let alert = vm.snapshot().alert.unwrap();
        assert!(alert.retryable);
        assert_eq!(vm.retry_action(), Some(CrudAction::List));

        assert_eq!(vm.retry_last().await, ActionOutcome::Completed);
        let requests = harness.transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].method, HttpMethod::Get);
        assert!(requests[1].url.ends_with("/classes"));
        assert_eq!(vm.snapshot().items.len(), 1);
        assert_eq!(vm.retry_action(), None);
    }

    #[tokio::test]
    async fn server_rejection_is_not_retryable() {
        let harness = TestHarness::signed_in(admin_session());
        harness.transport.reply(Reply::json(400, r#"{"error":"Code already used"}"#));
        let vm = classes(&harness);

        vm.create(algebra_form()).await;
        assert!(!vm.snapshot().alert.unwrap().retryable);
        assert_eq!(vm.retry_action(), None);
        assert_eq!(vm.retry_last().await, ActionOutcome::Skipped);
        assert_eq!(harness.transport.request_count(), 1);
    }

    #[tokio::test]
    async fn retried_delete_is_not_confirmed_twice() {
        let harness = TestHarness::signed_in(admin_session());
        harness.transport.reply(Reply::Fail(TransportError::Unreachable("refused".into())));
        harness.transport.reply(Reply::json(200, ""));
        harness.transport.reply(Reply::json(200, "[]"));
        let vm = classes(&harness);

        vm.delete("c1").await;
        assert_eq!(vm.retry_last().await, ActionOutcome::Completed);
        assert_eq!(harness.confirmer.times_asked(), 1);
        assert_eq!(harness.transport.requests()[1].method, HttpMethod::Delete);
    }

    #[tokio::test]
    async fn repeated_alert_gets_a_new_sequence_number() {
        let harness = TestHarness::signed_in(admin_session());
        harness.transport.reply(Reply::json(500, ""));
        harness.transport.reply(Reply::json(500, ""));
        let vm = classes(&harness);

        vm.list().await;
        let first = vm.snapshot();
        vm.list().await;
        let second = vm.snapshot();
        assert_eq!(first.alert, second.alert);
        assert_ne!(first.alert_seq, second.alert_seq);

        // El temporizador de la primera no cierra la segunda
        vm.dismiss_alert_if(first.alert_seq);
        assert!(vm.snapshot().alert.is_some());
        vm.dismiss_alert_if(second.alert_seq);
        assert_eq!(vm.snapshot().alert, None);
    }
}
