//! Synchronization-contract tests for the console flows.
//!
//! These drive the directory, menus, editor and creator against an
//! in-memory gateway double that behaves like the backend: it owns the
//! records, assigns ids, and flips status without touching `dateEdited`.

use rosterr::console::{
    CreateOutcome, DirectoryView, EditOutcome, MenuState, RecordActionMenu, UserCreator,
    UserDirectory, UserForm,
};
use rosterr::domain::UserId;
use rosterr::gateway::{GatewayError, StatusAction, UserGateway};
use rosterr::models::{UserInput, UserRecord, UserStatus};
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MockGateway {
    users: Mutex<Vec<UserRecord>>,
    next_id: AtomicI32,
    fail_list: AtomicBool,
    reject_status_change: AtomicBool,
    fail_mutations: AtomicBool,
    list_calls: AtomicUsize,
    update_calls: AtomicUsize,
}

impl MockGateway {
    fn seeded(users: Vec<UserRecord>) -> Self {
        let next_id = users.iter().map(|u| u.id.value()).max().unwrap_or(0) + 1;
        Self {
            users: Mutex::new(users),
            next_id: AtomicI32::new(next_id),
            ..Self::default()
        }
    }

    fn stored(&self, id: UserId) -> Option<UserRecord> {
        self.users.lock().unwrap().iter().find(|u| u.id == id).cloned()
    }
}

#[async_trait::async_trait]
impl UserGateway for MockGateway {
    async fn list_users(&self) -> Result<Vec<UserRecord>, GatewayError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(GatewayError::Fetch("connection refused".to_string()));
        }
        Ok(self.users.lock().unwrap().clone())
    }

    async fn create_user(&self, new_user: UserInput) -> Result<UserRecord, GatewayError> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(GatewayError::Mutation("rejected".to_string()));
        }

        let id = UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let record = UserRecord {
            id,
            name: new_user.name,
            phone_number: new_user.phone_number,
            email: new_user.email,
            address: new_user.address,
            role_id: new_user.role_id,
            date_created: new_user.date_created.unwrap_or_default(),
            date_edited: new_user.date_edited,
            status: new_user.status.unwrap_or(UserStatus::Inactive),
        };

        self.users.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update_user(&self, update: UserInput) -> Result<UserRecord, GatewayError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(GatewayError::Mutation("rejected".to_string()));
        }

        let id = update
            .id
            .ok_or_else(|| GatewayError::Mutation("missing id".to_string()))?;

        let mut users = self.users.lock().unwrap();
        let record = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| GatewayError::Mutation(format!("user {id} not found")))?;

        // The update payload never carries status or dateCreated; the
        // backend leaves both untouched.
        record.name = update.name;
        record.phone_number = update.phone_number;
        record.email = update.email;
        record.address = update.address;
        record.role_id = update.role_id;
        record.date_edited = update.date_edited;

        Ok(record.clone())
    }

    async fn set_status(
        &self,
        user_ids: &[UserId],
        action: StatusAction,
    ) -> Result<bool, GatewayError> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(GatewayError::Mutation("rejected".to_string()));
        }
        if self.reject_status_change.load(Ordering::SeqCst) {
            return Ok(false);
        }

        let status = match action {
            StatusAction::Activate => UserStatus::Active,
            StatusAction::Deactivate => UserStatus::Inactive,
        };

        let mut users = self.users.lock().unwrap();
        for user in users.iter_mut() {
            if user_ids.contains(&user.id) {
                // Status changes do not touch dateEdited.
                user.status = status;
            }
        }

        Ok(true)
    }
}

fn sample_user(id: i32, status: UserStatus) -> UserRecord {
    UserRecord {
        id: UserId::new(id),
        name: "Jane Doe".to_string(),
        phone_number: "555-0100".to_string(),
        email: "jane.doe@example.com".to_string(),
        address: "221B BakerStreet".to_string(),
        role_id: 2,
        date_created: "2024-01-01T00:00:00+00:00".to_string(),
        date_edited: None,
        status,
    }
}

fn filled_form() -> UserForm {
    UserForm {
        first_name: "John".to_string(),
        last_name: "Smith".to_string(),
        email: "john.smith@example.com".to_string(),
        contact: "555-0199".to_string(),
        address1: "10".to_string(),
        address2: "Downing Street".to_string(),
        role: "ADMIN".to_string(),
    }
}

#[tokio::test]
async fn activate_resyncs_the_directory_and_closes_the_menu() {
    let gateway = Arc::new(MockGateway::seeded(vec![sample_user(
        1,
        UserStatus::Inactive,
    )]));
    let mut directory = UserDirectory::new(gateway.clone());
    directory.resync().await;

    let mut menu = RecordActionMenu::new(UserId::new(1));
    menu.open();
    menu.activate(&mut directory).await;

    assert_eq!(menu.state(), MenuState::Closed);
    let row = directory.record(UserId::new(1)).unwrap();
    assert_eq!(row.status, UserStatus::Active);
    // Flipping status never sets the edit timestamp.
    assert_eq!(row.date_edited, None);
}

#[tokio::test]
async fn deactivate_flips_only_the_status_flag() {
    let gateway = Arc::new(MockGateway::seeded(vec![sample_user(1, UserStatus::Active)]));
    let mut directory = UserDirectory::new(gateway.clone());
    directory.resync().await;

    let mut menu = RecordActionMenu::new(UserId::new(1));
    menu.open();
    menu.deactivate(&mut directory).await;

    let row = directory.record(UserId::new(1)).unwrap();
    assert_eq!(row.status, UserStatus::Inactive);
    assert_eq!(row.date_edited, None);
}

#[tokio::test]
async fn rejected_status_change_leaves_the_menu_open_and_the_list_stale() {
    let gateway = Arc::new(MockGateway::seeded(vec![sample_user(
        1,
        UserStatus::Inactive,
    )]));
    gateway.reject_status_change.store(true, Ordering::SeqCst);

    let mut directory = UserDirectory::new(gateway.clone());
    directory.resync().await;
    let lists_before = gateway.list_calls.load(Ordering::SeqCst);

    let mut menu = RecordActionMenu::new(UserId::new(1));
    menu.open();
    menu.activate(&mut directory).await;

    assert_eq!(menu.state(), MenuState::Open);
    // No resync happened on failure.
    assert_eq!(gateway.list_calls.load(Ordering::SeqCst), lists_before);
    assert_eq!(
        directory.record(UserId::new(1)).unwrap().status,
        UserStatus::Inactive
    );
}

#[tokio::test]
async fn actions_on_a_closed_menu_are_ignored() {
    let gateway = Arc::new(MockGateway::seeded(vec![sample_user(
        1,
        UserStatus::Inactive,
    )]));
    let mut directory = UserDirectory::new(gateway.clone());
    directory.resync().await;

    let mut menu = RecordActionMenu::new(UserId::new(1));
    menu.activate(&mut directory).await;

    assert_eq!(
        gateway.stored(UserId::new(1)).unwrap().status,
        UserStatus::Inactive
    );
    assert!(menu.edit(&directory).is_none());
}

#[tokio::test]
async fn editor_prefills_from_the_snapshot_without_refetching() {
    let gateway = Arc::new(MockGateway::seeded(vec![sample_user(7, UserStatus::Active)]));
    let mut directory = UserDirectory::new(gateway.clone());
    directory.resync().await;
    let lists_before = gateway.list_calls.load(Ordering::SeqCst);

    let mut menu = RecordActionMenu::new(UserId::new(7));
    menu.open();
    let editor = menu.edit(&directory).unwrap();

    assert_eq!(menu.state(), MenuState::Closed);
    assert_eq!(gateway.list_calls.load(Ordering::SeqCst), lists_before);
    assert_eq!(editor.form.first_name, "Jane");
    assert_eq!(editor.form.last_name, "Doe");
    assert_eq!(editor.form.role, "Manager");
}

#[tokio::test]
async fn editing_sets_date_edited_and_preserves_status() {
    let gateway = Arc::new(MockGateway::seeded(vec![sample_user(1, UserStatus::Active)]));
    let mut directory = UserDirectory::new(gateway.clone());
    directory.resync().await;

    let mut menu = RecordActionMenu::new(UserId::new(1));
    menu.open();
    let mut editor = menu.edit(&directory).unwrap();
    editor.form.first_name = "Janet".to_string();

    let outcome = editor.submit(gateway.as_ref()).await.unwrap();
    let EditOutcome::Updated(updated) = outcome else {
        panic!("expected the update to land");
    };
    assert!(!editor.is_open());

    // The caller of a successful edit resyncs the directory.
    directory.resync().await;
    let row = directory.record(UserId::new(1)).unwrap();
    assert_eq!(row.name, "Janet Doe");
    assert_eq!(row.status, UserStatus::Active);
    assert!(row.date_edited.is_some());
    assert_eq!(updated.name, "Janet Doe");
}

#[tokio::test]
async fn malformed_email_never_reaches_the_gateway() {
    let gateway = Arc::new(MockGateway::seeded(vec![sample_user(1, UserStatus::Active)]));
    let mut directory = UserDirectory::new(gateway.clone());
    directory.resync().await;

    let mut menu = RecordActionMenu::new(UserId::new(1));
    menu.open();
    let mut editor = menu.edit(&directory).unwrap();
    editor.form.email = "not-an-email".to_string();

    let err = editor.submit(gateway.as_ref()).await.unwrap_err();
    assert!(err.field("email").is_some());
    assert!(editor.is_open());
    assert_eq!(gateway.update_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn failed_update_is_swallowed_and_the_editor_stays_open() {
    let gateway = Arc::new(MockGateway::seeded(vec![sample_user(1, UserStatus::Active)]));
    let mut directory = UserDirectory::new(gateway.clone());
    directory.resync().await;

    let mut menu = RecordActionMenu::new(UserId::new(1));
    menu.open();
    let mut editor = menu.edit(&directory).unwrap();

    gateway.fail_mutations.store(true, Ordering::SeqCst);
    let outcome = editor.submit(gateway.as_ref()).await.unwrap();

    assert_eq!(outcome, EditOutcome::Failed);
    assert!(editor.is_open());
}

#[tokio::test]
async fn created_users_start_inactive_with_no_edit_timestamp() {
    let gateway = Arc::new(MockGateway::seeded(vec![]));
    let mut creator = UserCreator::new();
    creator.form = filled_form();

    let outcome = creator.submit(gateway.as_ref()).await.unwrap();
    let CreateOutcome::Created(created) = outcome else {
        panic!("expected the create to land");
    };

    assert_eq!(created.status, UserStatus::Inactive);
    assert_eq!(created.date_edited, None);
    assert_eq!(created.name, "John Smith");
    assert_eq!(created.role_id, 1);
    assert!(!created.date_created.is_empty());
}

#[tokio::test]
async fn creating_does_not_resync_the_directory() {
    let gateway = Arc::new(MockGateway::seeded(vec![sample_user(1, UserStatus::Active)]));
    let mut directory = UserDirectory::new(gateway.clone());
    directory.resync().await;
    assert_eq!(directory.rows().len(), 1);

    let mut creator = UserCreator::new();
    creator.form = filled_form();
    creator.submit(gateway.as_ref()).await.unwrap();

    // The create flow leaves the directory stale until something else
    // forces a resync.
    assert_eq!(directory.rows().len(), 1);

    directory.resync().await;
    assert_eq!(directory.rows().len(), 2);
}

#[tokio::test]
async fn invalid_create_form_never_reaches_the_gateway() {
    let gateway = Arc::new(MockGateway::seeded(vec![]));
    let mut creator = UserCreator::new();

    let err = creator.submit(gateway.as_ref()).await.unwrap_err();
    assert!(err.field("firstName").is_some());
    assert!(gateway.users.lock().unwrap().is_empty());
}

#[tokio::test]
async fn fetch_failure_surfaces_the_message_and_drops_all_rows() {
    let gateway = Arc::new(MockGateway::seeded(vec![sample_user(1, UserStatus::Active)]));
    let mut directory = UserDirectory::new(gateway.clone());
    directory.resync().await;
    assert_eq!(directory.rows().len(), 1);

    gateway.fail_list.store(true, Ordering::SeqCst);
    directory.resync().await;

    match directory.view() {
        DirectoryView::Failed(message) => {
            assert!(message.contains("connection refused"), "got: {message}");
        }
        other => panic!("expected a failed view, got {other:?}"),
    }
    assert!(directory.rows().is_empty());
    assert!(directory.record(UserId::new(1)).is_none());
}

#[tokio::test]
async fn edit_of_a_vanished_record_closes_the_menu() {
    let gateway = Arc::new(MockGateway::seeded(vec![sample_user(1, UserStatus::Active)]));
    let mut directory = UserDirectory::new(gateway.clone());
    directory.resync().await;

    // Row 2 was removed by another session; this menu instance is stale.
    let mut menu = RecordActionMenu::new(UserId::new(2));
    menu.open();

    assert!(menu.edit(&directory).is_none());
    assert_eq!(menu.state(), MenuState::Closed);
}
