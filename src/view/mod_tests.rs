use super::TuiApp;
use crate::api::{ApiClient, ApiRequest, ApiResponse, ApiWorker, QnaPage};
use crate::model::{PaginationMeta, QnaRecord, Role, User};
use crate::state::{AdminTab, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use std::time::Duration;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

// Points at a closed port; tests that queue requests only assert on the
// state transitions, never on the network outcome.
fn test_app() -> TuiApp<TestBackend> {
    let client = ApiClient::new("http://127.0.0.1:1", Duration::from_millis(100)).unwrap();
    let worker = ApiWorker::spawn(client);
    TuiApp::with_backend(TestBackend::new(100, 30), worker, 10).unwrap()
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

fn load_page(app: &mut TuiApp<TestBackend>, ids: &[u64]) {
    let request = app.state_mut().fetch_request();
    let seq = match request {
        ApiRequest::FetchQna { seq, .. } => seq,
        _ => unreachable!(),
    };
    let items: Vec<QnaRecord> = ids
        .iter()
        .map(|&id| QnaRecord {
            id,
            question: format!("question {id}"),
            answer: "answer".to_owned(),
            category: "General".to_owned(),
            tags: vec!["tag".to_owned()],
        })
        .collect();
    app.state_mut().apply_response(ApiResponse::QnaPage {
        seq,
        result: Ok(QnaPage {
            items,
            pagination: PaginationMeta {
                page: 1,
                limit: 10,
                total: ids.len() as u64,
                total_pages: 1,
            },
        }),
    });
}

#[test]
fn q_quits_and_ctrl_c_always_quits() {
    let mut app = test_app();
    app.handle_key(key(KeyCode::Char('q')));
    assert!(app.state().should_quit);

    let mut app = test_app();
    app.state_mut().help_visible = true;
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.state().should_quit);
}

#[test]
fn help_overlay_swallows_keys_until_dismissed() {
    let mut app = test_app();
    app.handle_key(key(KeyCode::Char('?')));
    assert!(app.state().help_visible);

    // Navigation is blocked while the overlay is up.
    app.handle_key(key(KeyCode::Char('j')));
    assert_eq!(app.state().qna.selected, 0);

    app.handle_key(key(KeyCode::Esc));
    assert!(!app.state().help_visible);
}

#[test]
fn slash_enters_search_and_enter_commits() {
    let mut app = test_app();
    load_page(&mut app, &[1, 2, 3]);

    app.handle_key(key(KeyCode::Char('/')));
    for ch in "question 2".chars() {
        app.handle_key(key(KeyCode::Char(ch)));
    }
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.state().criteria.search_term, "question 2");
    assert_eq!(app.state().visible().len(), 1);
}

#[test]
fn crud_keys_are_inert_on_the_browse_screen() {
    let mut app = test_app();
    load_page(&mut app, &[1]);

    app.handle_key(key(KeyCode::Char('n')));
    app.handle_key(key(KeyCode::Char('e')));
    app.handle_key(key(KeyCode::Char('d')));
    assert!(app.state().qna_form.is_none());
    assert!(!app.state().confirm.is_open());
}

#[test]
fn new_and_edit_open_the_form_on_the_dashboard() {
    let mut app = test_app();
    load_page(&mut app, &[7]);
    app.state_mut().user = Some(admin());
    app.state_mut().screen = Screen::Dashboard;

    app.handle_key(key(KeyCode::Char('e')));
    let form = app.state().qna_form.as_ref().expect("edit form open");
    assert_eq!(form.editing_id, Some(7));
    assert_eq!(form.question, "question 7");

    app.handle_key(key(KeyCode::Esc));
    assert!(app.state().qna_form.is_none());

    app.handle_key(key(KeyCode::Char('n')));
    let form = app.state().qna_form.as_ref().expect("create form open");
    assert_eq!(form.editing_id, None);
}

#[test]
fn form_captures_text_instead_of_actions() {
    let mut app = test_app();
    load_page(&mut app, &[7]);
    app.state_mut().user = Some(admin());
    app.state_mut().screen = Screen::Dashboard;

    app.handle_key(key(KeyCode::Char('n')));
    // 'q' goes into the question field rather than quitting.
    app.handle_key(key(KeyCode::Char('q')));
    assert!(!app.state().should_quit);
    assert_eq!(app.state().qna_form.as_ref().unwrap().question, "q");
}

#[test]
fn delete_opens_the_confirmation_with_the_question_preview() {
    let mut app = test_app();
    load_page(&mut app, &[7]);
    app.state_mut().user = Some(admin());
    app.state_mut().screen = Screen::Dashboard;

    app.handle_key(key(KeyCode::Char('d')));
    let target = app.state().confirm.target().expect("prompt open");
    assert_eq!(target.preview(), "question 7");

    app.handle_key(key(KeyCode::Esc));
    assert!(!app.state().confirm.is_open());
}

#[test]
fn confirming_moves_to_deleting_and_blocks_a_second_confirm() {
    let mut app = test_app();
    load_page(&mut app, &[7]);
    app.state_mut().user = Some(admin());
    app.state_mut().screen = Screen::Dashboard;

    app.handle_key(key(KeyCode::Char('d')));
    app.handle_key(key(KeyCode::Char('y')));
    assert!(app.state().confirm.is_deleting());

    // Both confirm and cancel are refused mid-request.
    app.handle_key(key(KeyCode::Char('y')));
    app.handle_key(key(KeyCode::Esc));
    assert!(app.state().confirm.is_deleting());
}

#[test]
fn own_account_cannot_be_deleted() {
    let mut app = test_app();
    app.state_mut().user = Some(admin());
    app.state_mut().screen = Screen::Dashboard;
    app.state_mut().tab = AdminTab::Accounts;
    app.state_mut().accounts = vec![admin()];
    app.state_mut().accounts_loaded = true;

    app.handle_key(key(KeyCode::Char('d')));
    assert!(!app.state().confirm.is_open());
    assert!(app.state().status.is_some());
}

#[test]
fn page_keys_are_bounded_by_metadata() {
    let mut app = test_app();
    load_page(&mut app, &[1, 2]);
    // Single page: neither direction moves.
    app.handle_key(key(KeyCode::Char(']')));
    app.handle_key(key(KeyCode::Char('[')));
    assert_eq!(app.state().pager.current_page(), 1);
}

#[test]
fn browse_screen_renders_records_and_pagination() {
    let mut app = test_app();
    load_page(&mut app, &[1, 2]);
    app.draw().unwrap();

    let buffer = format!("{:?}", app.backend().buffer());
    assert!(buffer.contains("question 1"), "missing record: {buffer}");
    assert!(buffer.contains("[1]"), "missing page token: {buffer}");
}

#[test]
fn expanded_record_shows_its_answer() {
    let mut app = test_app();
    load_page(&mut app, &[1]);

    app.draw().unwrap();
    let before = format!("{:?}", app.backend().buffer());
    assert!(!before.contains("answer"));

    app.handle_key(key(KeyCode::Enter));
    app.draw().unwrap();
    let after = format!("{:?}", app.backend().buffer());
    assert!(after.contains("answer"), "{after}");
}

#[test]
fn login_screen_renders_and_escapes_back_to_browse() {
    let mut app = test_app();
    app.handle_key(key(KeyCode::Char('a')));
    assert_eq!(app.state().screen, Screen::Login);

    app.draw().unwrap();
    let buffer = format!("{:?}", app.backend().buffer());
    assert!(buffer.contains("Sign in"), "{buffer}");

    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.state().screen, Screen::Browse);
}

#[test]
fn dashboard_renders_tabs_for_an_admin() {
    let mut app = test_app();
    load_page(&mut app, &[1]);
    app.state_mut().user = Some(admin());
    app.state_mut().screen = Screen::Dashboard;

    app.draw().unwrap();
    let buffer = format!("{:?}", app.backend().buffer());
    assert!(buffer.contains("Notes"), "{buffer}");
    assert!(buffer.contains("Accounts"), "{buffer}");
    assert!(buffer.contains("ada@example.com"), "{buffer}");
}
