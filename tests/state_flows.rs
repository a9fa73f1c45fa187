//! Scenario tests stitching form state, the reducer, and request building
//! together the way the event loop does.

use qkb::api::{ApiRequest, ApiResponse, QnaPage};
use qkb::model::{ApiError, PaginationMeta, QnaRecord};
use qkb::state::{AppState, DeleteTarget, QnaForm};

fn record(id: u64, question: &str) -> QnaRecord {
    QnaRecord {
        id,
        question: question.to_owned(),
        answer: "a".to_owned(),
        category: "General".to_owned(),
        tags: Vec::new(),
    }
}

fn page_of(ids: &[u64], page: u32, limit: u32, total_pages: u32) -> QnaPage {
    QnaPage {
        items: ids.iter().map(|&id| record(id, &format!("q{id}"))).collect(),
        pagination: PaginationMeta {
            page,
            limit,
            total: u64::from(total_pages) * u64::from(limit),
            total_pages,
        },
    }
}

fn fetch_parts(request: &ApiRequest) -> (u64, u32, u32) {
    match request {
        ApiRequest::FetchQna { seq, page, limit } => (*seq, *page, *limit),
        other => panic!("expected a paged fetch, got {other:?}"),
    }
}

#[test]
fn create_flow_submits_then_refetches_the_current_page() {
    let mut state = AppState::new(10);
    let (seq, _, _) = fetch_parts(&state.fetch_request());
    state.apply_response(ApiResponse::QnaPage {
        seq,
        result: Ok(page_of(&[1, 2], 1, 10, 3)),
    });

    // User fills the form.
    let mut form = QnaForm::create();
    form.question = "new question".to_owned();
    form.answer = "new answer".to_owned();
    let payload = form.submission().expect("valid draft");
    state.qna_form = Some(form);

    // The shell would send CreateQna(payload); the backend confirms.
    assert_eq!(payload.question, "new question");
    let follow_up = state
        .apply_response(ApiResponse::QnaSaved(Ok(())))
        .expect("refetch after save");

    // The refetch targets the page/limit the user is looking at.
    let (_, page, limit) = fetch_parts(&follow_up);
    assert_eq!(page, 1);
    assert_eq!(limit, 10);
    assert!(state.qna_form.is_none());
}

#[test]
fn limit_change_resets_to_page_one_and_refetches_with_the_new_limit() {
    let mut state = AppState::new(10);
    let (seq, _, _) = fetch_parts(&state.fetch_request());
    state.apply_response(ApiResponse::QnaPage {
        seq,
        result: Ok(page_of(&[1], 3, 10, 5)),
    });
    state.pager.goto(3, 5);

    state.pager.cycle_limit();
    let (_, page, limit) = fetch_parts(&state.fetch_request());
    assert_eq!(page, 1);
    assert_eq!(limit, 15);
}

#[test]
fn rapid_paging_applies_only_the_final_response() {
    let mut state = AppState::new(10);
    let (first, _, _) = fetch_parts(&state.fetch_request());
    state.apply_response(ApiResponse::QnaPage {
        seq: first,
        result: Ok(page_of(&[1, 2], 1, 10, 4)),
    });

    // User mashes next-page twice before any response lands.
    state.pager.next(4);
    let (stale, _, _) = fetch_parts(&state.fetch_request());
    state.pager.next(4);
    let (latest, _, _) = fetch_parts(&state.fetch_request());

    // Responses arrive out of order: the newest first.
    state.apply_response(ApiResponse::QnaPage {
        seq: latest,
        result: Ok(page_of(&[5, 6], 3, 10, 4)),
    });
    state.apply_response(ApiResponse::QnaPage {
        seq: stale,
        result: Ok(page_of(&[3, 4], 2, 10, 4)),
    });

    assert_eq!(
        state.qna.records.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![5, 6]
    );
    assert_eq!(state.pager.current_page(), 3);
    assert!(!state.qna.loading);
}

#[test]
fn fetch_failure_after_success_keeps_the_page_usable() {
    let mut state = AppState::new(10);
    let (seq, _, _) = fetch_parts(&state.fetch_request());
    state.apply_response(ApiResponse::QnaPage {
        seq,
        result: Ok(page_of(&[1, 2, 3], 1, 10, 1)),
    });

    let (seq, _, _) = fetch_parts(&state.fetch_request());
    state.apply_response(ApiResponse::QnaPage {
        seq,
        result: Err(ApiError::http(502, "bad gateway")),
    });

    // Prior data is retained and still filterable.
    assert_eq!(state.qna.records.len(), 3);
    state.criteria.search_term = "q2".to_owned();
    assert_eq!(state.visible().len(), 1);
}

#[test]
fn delete_confirmation_cannot_double_fire_across_the_round_trip() {
    let mut state = AppState::new(10);
    let (seq, _, _) = fetch_parts(&state.fetch_request());
    state.apply_response(ApiResponse::QnaPage {
        seq,
        result: Ok(page_of(&[7], 1, 10, 1)),
    });

    state.confirm.open(DeleteTarget::Qna {
        id: 7,
        preview: "q7".to_owned(),
    });
    assert!(state.confirm.confirm().is_some());
    // Mashing confirm while the request is in flight yields nothing.
    assert!(state.confirm.confirm().is_none());
    assert!(state.confirm.confirm().is_none());

    // Completion closes the flow and triggers the refetch.
    let follow_up = state.apply_response(ApiResponse::QnaDeleted(Ok(())));
    assert!(matches!(follow_up, Some(ApiRequest::FetchQna { .. })));
    assert!(!state.confirm.is_open());
}

#[test]
fn deleting_the_last_record_of_the_last_page_lands_on_the_new_last_page() {
    let mut state = AppState::new(10);
    state.pager.goto(3, 3);
    let (seq, _, _) = fetch_parts(&state.fetch_request());
    state.apply_response(ApiResponse::QnaPage {
        seq,
        result: Ok(page_of(&[31], 3, 10, 3)),
    });

    // Delete succeeds; the refetch of page 3 now comes back empty with a
    // shrunken page count, which must trigger a second fetch of page 2.
    let refetch = state
        .apply_response(ApiResponse::QnaDeleted(Ok(())))
        .expect("refetch after delete");
    let (seq, page, _) = fetch_parts(&refetch);
    assert_eq!(page, 3);

    let snap_back = state
        .apply_response(ApiResponse::QnaPage {
            seq,
            result: Ok(page_of(&[], 3, 10, 2)),
        })
        .expect("snap back to the last real page");
    let (_, page, _) = fetch_parts(&snap_back);
    assert_eq!(page, 2);
    assert_eq!(state.pager.current_page(), 2);
}
