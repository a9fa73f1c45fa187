use super::{AdminTab, AppState, Screen, StatusKind};
use crate::api::{ApiRequest, ApiResponse, QnaPage};
use crate::model::{ApiError, Note, PaginationMeta, QnaRecord, Role, User};
use crate::state::confirm::DeleteTarget;
use crate::state::qna_form::QnaForm;

fn record(id: u64) -> QnaRecord {
    QnaRecord {
        id,
        question: format!("question {id}"),
        answer: format!("answer {id}"),
        category: "General".to_owned(),
        tags: vec!["tag".to_owned()],
    }
}

fn page(ids: &[u64], page_no: u32, total_pages: u32) -> QnaPage {
    QnaPage {
        items: ids.iter().copied().map(record).collect(),
        pagination: PaginationMeta {
            page: page_no,
            limit: 10,
            total: u64::from(total_pages) * 10,
            total_pages,
        },
    }
}

fn admin() -> User {
    User {
        id: 1,
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        role: Role::Admin,
        created_at: None,
    }
}

fn seq_of(request: &ApiRequest) -> u64 {
    match request {
        ApiRequest::FetchQna { seq, .. } => *seq,
        other => panic!("expected a paged fetch, got {other:?}"),
    }
}

#[test]
fn fetch_request_marks_loading_and_advances_seq() {
    let mut state = AppState::new(10);
    let first = seq_of(&state.fetch_request());
    assert!(state.qna.loading);
    let second = seq_of(&state.fetch_request());
    assert!(second > first);
}

#[test]
fn stale_page_responses_are_discarded() {
    let mut state = AppState::new(10);
    let stale = seq_of(&state.fetch_request());
    let latest = seq_of(&state.fetch_request());

    // The latest response lands first.
    state.apply_response(ApiResponse::QnaPage {
        seq: latest,
        result: Ok(page(&[3, 4], 2, 5)),
    });
    assert_eq!(state.qna.records.len(), 2);
    assert!(!state.qna.loading);

    // The stale one must not overwrite it.
    state.apply_response(ApiResponse::QnaPage {
        seq: stale,
        result: Ok(page(&[1, 2], 1, 5)),
    });
    assert_eq!(state.qna.records[0].id, 3);
}

#[test]
fn failed_fetch_keeps_prior_records_and_surfaces_an_error() {
    let mut state = AppState::new(10);
    let seq = seq_of(&state.fetch_request());
    state.apply_response(ApiResponse::QnaPage {
        seq,
        result: Ok(page(&[1, 2], 1, 1)),
    });

    let seq = seq_of(&state.fetch_request());
    state.apply_response(ApiResponse::QnaPage {
        seq,
        result: Err(ApiError::http(500, "boom".to_owned())),
    });

    assert_eq!(state.qna.records.len(), 2);
    assert!(!state.qna.loading);
    let status = state.status.expect("error surfaced");
    assert_eq!(status.kind, StatusKind::Error);
}

#[test]
fn overshooting_the_last_page_snaps_back_and_refetches() {
    let mut state = AppState::new(10);
    state.pager.goto(4, 4);
    let seq = seq_of(&state.fetch_request());

    // The dataset shrank to 2 pages; page 4 comes back empty.
    let follow_up = state.apply_response(ApiResponse::QnaPage {
        seq,
        result: Ok(page(&[], 4, 2)),
    });

    assert_eq!(state.pager.current_page(), 2);
    let follow_up = follow_up.expect("refetch issued");
    match follow_up {
        ApiRequest::FetchQna { page, .. } => assert_eq!(page, 2),
        other => panic!("unexpected follow-up: {other:?}"),
    }
}

#[test]
fn expansion_is_per_record_and_pruned_on_page_change() {
    let mut state = AppState::new(10);
    let seq = seq_of(&state.fetch_request());
    state.apply_response(ApiResponse::QnaPage {
        seq,
        result: Ok(page(&[1, 2, 3], 1, 2)),
    });

    state.toggle_expand_selected();
    state.select_next();
    state.toggle_expand_selected();
    assert!(state.qna.expanded.contains(&1));
    assert!(state.qna.expanded.contains(&2));

    // Collapsing one leaves the other expanded.
    state.toggle_expand_selected();
    assert!(state.qna.expanded.contains(&1));
    assert!(!state.qna.expanded.contains(&2));

    // Records gone from the new page lose their expansion state.
    let seq = seq_of(&state.fetch_request());
    state.apply_response(ApiResponse::QnaPage {
        seq,
        result: Ok(page(&[4, 5], 2, 2)),
    });
    assert!(state.qna.expanded.is_empty());
}

#[test]
fn successful_save_closes_the_form_and_refetches() {
    let mut state = AppState::new(10);
    state.qna_form = Some(QnaForm::create());

    let follow_up = state.apply_response(ApiResponse::QnaSaved(Ok(())));
    assert!(state.qna_form.is_none());
    assert!(matches!(follow_up, Some(ApiRequest::FetchQna { .. })));
}

#[test]
fn failed_save_reopens_the_form_for_editing() {
    let mut state = AppState::new(10);
    let mut form = QnaForm::create();
    form.submitting = true;
    state.qna_form = Some(form);

    let follow_up =
        state.apply_response(ApiResponse::QnaSaved(Err(ApiError::http(400, "bad".to_owned()))));
    assert!(follow_up.is_none());
    let form = state.qna_form.expect("form stays open");
    assert!(!form.submitting);
}

#[test]
fn admin_tabs_are_refused_without_the_admin_role() {
    let mut state = AppState::new(10);
    assert!(state.set_tab(AdminTab::Notes).is_none());
    assert_eq!(state.tab, AdminTab::Qna);
    assert_eq!(state.status.as_ref().map(|s| s.kind), Some(StatusKind::Error));

    let mut staff = admin();
    staff.role = Role::Staff;
    state.user = Some(staff);
    assert!(state.set_tab(AdminTab::Accounts).is_none());
    assert_eq!(state.tab, AdminTab::Qna);
}

#[test]
fn admin_tab_switch_fetches_lazily_once() {
    let mut state = AppState::new(10);
    state.user = Some(admin());

    let fetch = state.set_tab(AdminTab::Notes);
    assert!(matches!(fetch, Some(ApiRequest::FetchNotes)));
    assert_eq!(state.tab, AdminTab::Notes);

    state.apply_response(ApiResponse::Notes(Ok(vec![Note::local_draft("t".to_owned(), "c".to_owned())])));
    assert!(state.notes_loaded);

    // Revisiting the tab does not refetch.
    state.set_tab(AdminTab::Qna);
    assert!(state.set_tab(AdminTab::Notes).is_none());
}

#[test]
fn login_success_enters_the_dashboard_and_fetches_the_session() {
    let mut state = AppState::new(10);
    state.screen = Screen::Login;
    state.login.email = "ada@example.com".to_owned();
    state.login.password = "pw".to_owned();
    state.login.submission();

    let follow_up = state.apply_response(ApiResponse::LoggedIn(Ok(())));
    assert_eq!(state.screen, Screen::Dashboard);
    assert!(matches!(follow_up, Some(ApiRequest::FetchMe)));
    assert!(!state.login.submitting);

    state.apply_response(ApiResponse::Me(Ok(admin())));
    assert!(state.is_admin());
}

#[test]
fn login_failure_surfaces_the_message_on_the_form() {
    let mut state = AppState::new(10);
    state.screen = Screen::Login;
    state.login.email = "ada@example.com".to_owned();
    state.login.password = "wrong".to_owned();
    state.login.submission();

    state.apply_response(ApiResponse::LoggedIn(Err(ApiError::http(
        401,
        "invalid credentials".to_owned(),
    ))));
    assert_eq!(state.screen, Screen::Login);
    assert!(state.login.error.is_some());
    assert!(!state.login.submitting);
}

#[test]
fn logout_clears_the_session_and_admin_data() {
    let mut state = AppState::new(10);
    state.user = Some(admin());
    state.screen = Screen::Dashboard;
    state.notes = vec![Note::local_draft("t".to_owned(), "c".to_owned())];
    state.notes_loaded = true;
    state.accounts = vec![admin()];
    state.accounts_loaded = true;

    state.apply_response(ApiResponse::LoggedOut(Ok(())));
    assert_eq!(state.screen, Screen::Browse);
    assert!(state.user.is_none());
    assert!(state.notes.is_empty());
    assert!(!state.notes_loaded);
    assert!(state.accounts.is_empty());
    assert!(!state.accounts_loaded);
}

#[test]
fn deleted_note_is_removed_in_place() {
    let mut state = AppState::new(10);
    let keep = Note::local_draft("keep".to_owned(), "c".to_owned());
    let drop = Note::local_draft("drop".to_owned(), "c".to_owned());
    let drop_id = drop.id.clone();
    state.notes = vec![keep, drop];

    state.confirm.open(DeleteTarget::Note {
        id: drop_id.clone(),
        preview: "drop".to_owned(),
    });
    state.confirm.confirm();

    state.apply_response(ApiResponse::NoteDeleted {
        id: drop_id,
        result: Ok(()),
    });
    assert_eq!(state.notes.len(), 1);
    assert_eq!(state.notes[0].title, "keep");
    assert!(!state.confirm.is_open());
}

#[test]
fn deleted_account_triggers_a_list_refetch() {
    let mut state = AppState::new(10);
    state.confirm.open(DeleteTarget::Account {
        id: 3,
        preview: "x@example.com".to_owned(),
    });
    state.confirm.confirm();

    let follow_up = state.apply_response(ApiResponse::AccountDeleted(Ok(())));
    assert!(matches!(follow_up, Some(ApiRequest::FetchAccounts)));
    assert!(!state.confirm.is_open());
}

#[test]
fn search_commit_and_cancel() {
    let mut state = AppState::new(10);
    let seq = seq_of(&state.fetch_request());
    state.apply_response(ApiResponse::QnaPage {
        seq,
        result: Ok(page(&[1, 2], 1, 1)),
    });

    state.start_search();
    if let super::SearchInput::Typing(buffer) = &mut state.search {
        buffer.push_str("question 1");
    }
    state.commit_search();
    assert_eq!(state.criteria.search_term, "question 1");
    assert_eq!(state.visible().len(), 1);

    state.start_search();
    if let super::SearchInput::Typing(buffer) = &mut state.search {
        buffer.push_str(" and more");
    }
    state.cancel_search();
    assert_eq!(state.criteria.search_term, "question 1");

    state.clear_filters();
    assert_eq!(state.visible().len(), 2);
}
