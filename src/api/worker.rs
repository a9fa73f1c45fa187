//! Background API worker thread.
//!
//! The UI thread never blocks on the network. Requests are sent over a
//! channel to a single worker thread which executes them sequentially with
//! the blocking [`ApiClient`]; responses come back over a second channel and
//! are drained on the event-loop tick.
//!
//! Paged fetches carry a monotonic sequence number. Requests can queue up
//! when the user pages faster than the backend answers; the sequence number
//! lets the state layer discard every response except the one matching the
//! latest issued fetch, so a stale page can never overwrite a newer one.

use crate::api::{ApiClient, QnaPage};
use crate::model::note::Note;
use crate::model::qna::QnaPayload;
use crate::model::user::{RegisterPayload, User};
use crate::model::ApiError;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::{debug, warn};

/// A request for the worker thread.
#[derive(Debug)]
pub enum ApiRequest {
    /// Fetch a Q&A page. `seq` associates the eventual response with the
    /// pagination state at the moment the request was issued.
    FetchQna {
        /// Monotonic fetch sequence number.
        seq: u64,
        /// 1-based page to fetch.
        page: u32,
        /// Items per page.
        limit: u32,
    },
    /// Create a Q&A record.
    CreateQna(QnaPayload),
    /// Update a Q&A record.
    UpdateQna {
        /// Record id.
        id: u64,
        /// Replacement fields.
        payload: QnaPayload,
    },
    /// Delete a Q&A record.
    DeleteQna(u64),
    /// Fetch the session user.
    FetchMe,
    /// Authenticate with email and password.
    Login {
        /// Login email.
        email: String,
        /// Password.
        password: String,
    },
    /// End the session.
    Logout,
    /// Create a new account (admin only).
    Register(RegisterPayload),
    /// List all notes.
    FetchNotes,
    /// Persist a locally drafted note.
    CreateNote(Note),
    /// Delete a note by id.
    DeleteNote(String),
    /// List all accounts.
    FetchAccounts,
    /// Delete an account by id.
    DeleteAccount(u64),
}

/// A completed request, delivered back to the UI thread.
#[derive(Debug)]
pub enum ApiResponse {
    /// Result of a paged fetch, tagged with its request sequence number.
    QnaPage {
        /// Sequence number of the originating request.
        seq: u64,
        /// The fetched page, or the failure.
        result: Result<QnaPage, ApiError>,
    },
    /// Result of a create or update; both refetch on success.
    QnaSaved(Result<(), ApiError>),
    /// Result of a Q&A delete.
    QnaDeleted(Result<(), ApiError>),
    /// The session user (or failure when unauthenticated).
    Me(Result<User, ApiError>),
    /// Login outcome.
    LoggedIn(Result<(), ApiError>),
    /// Logout outcome.
    LoggedOut(Result<(), ApiError>),
    /// Account-creation outcome; the list is refetched on success.
    Registered(Result<(), ApiError>),
    /// The full notes list.
    Notes(Result<Vec<Note>, ApiError>),
    /// The persisted note created from a local draft.
    NoteCreated(Result<Note, ApiError>),
    /// Note deletion outcome, with the deleted id for in-place removal.
    NoteDeleted {
        /// Id of the note the request targeted.
        id: String,
        /// Deletion outcome.
        result: Result<(), ApiError>,
    },
    /// The full accounts list.
    Accounts(Result<Vec<User>, ApiError>),
    /// Account deletion outcome.
    AccountDeleted(Result<(), ApiError>),
}

/// Handle to the background API worker.
///
/// Dropping the handle closes the request channel, which ends the worker
/// loop after the in-flight request (if any) completes.
#[derive(Debug)]
pub struct ApiWorker {
    tx: Sender<ApiRequest>,
    rx: Receiver<ApiResponse>,
    _handle: JoinHandle<()>,
}

impl ApiWorker {
    /// Spawn the worker thread around a client.
    pub fn spawn(client: ApiClient) -> Self {
        let (req_tx, req_rx) = mpsc::channel::<ApiRequest>();
        let (resp_tx, resp_rx) = mpsc::channel::<ApiResponse>();

        let handle = std::thread::spawn(move || {
            for request in req_rx {
                debug!(?request, "api worker executing");
                let response = execute(&client, request);
                if resp_tx.send(response).is_err() {
                    // UI side is gone; nothing left to do.
                    break;
                }
            }
        });

        Self {
            tx: req_tx,
            rx: resp_rx,
            _handle: handle,
        }
    }

    /// Queue a request. Silently drops the request if the worker thread has
    /// exited, which only happens during shutdown.
    pub fn send(&self, request: ApiRequest) {
        if self.tx.send(request).is_err() {
            warn!("api worker gone, dropping request");
        }
    }

    /// Drain all responses that have arrived since the last poll.
    pub fn drain(&self) -> Vec<ApiResponse> {
        let mut responses = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        responses
    }

    /// Block for the next response, up to `timeout`. Test helper; the event
    /// loop uses [`ApiWorker::drain`].
    pub fn recv_timeout(&self, timeout: Duration) -> Option<ApiResponse> {
        self.rx.recv_timeout(timeout).ok()
    }
}

/// Execute one request against the backend.
fn execute(client: &ApiClient, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::FetchQna { seq, page, limit } => ApiResponse::QnaPage {
            seq,
            result: client.fetch_qna(page, limit),
        },
        ApiRequest::CreateQna(payload) => {
            ApiResponse::QnaSaved(client.create_qna(&payload).map(|_| ()))
        }
        ApiRequest::UpdateQna { id, payload } => {
            ApiResponse::QnaSaved(client.update_qna(id, &payload).map(|_| ()))
        }
        ApiRequest::DeleteQna(id) => ApiResponse::QnaDeleted(client.delete_qna(id)),
        ApiRequest::FetchMe => ApiResponse::Me(client.me()),
        ApiRequest::Login { email, password } => {
            ApiResponse::LoggedIn(client.login(&email, &password))
        }
        ApiRequest::Logout => ApiResponse::LoggedOut(client.logout()),
        ApiRequest::Register(payload) => {
            ApiResponse::Registered(client.register(&payload).map(|_| ()))
        }
        ApiRequest::FetchNotes => ApiResponse::Notes(client.list_notes()),
        ApiRequest::CreateNote(draft) => ApiResponse::NoteCreated(client.create_note(&draft)),
        ApiRequest::DeleteNote(id) => {
            let result = client.delete_note(&id);
            ApiResponse::NoteDeleted { id, result }
        }
        ApiRequest::FetchAccounts => ApiResponse::Accounts(client.list_accounts()),
        ApiRequest::DeleteAccount(id) => ApiResponse::AccountDeleted(client.delete_account(id)),
    }
}
