//! Controller behind a single "Location Found" room field.
//!
//! [`RoomSelect`] owns the room list for one owner, loads it from a
//! [`RoomService`], and decides on each commit whether the typed value names an
//! existing room or needs a new one. It holds no UI handles: a renderer reads
//! [`RoomSelect::view`] and subscribes to changes, so every render is built
//! fresh from the current state.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized -> Loading -> Ready
//!                          \-> Degraded
//! Ready -> Loading (reload after a room was created)
//! ```
//!
//! `Degraded` is terminal. A new controller is needed to retry the fetch.
//!
//! # Example
//!
//! ```rust
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! use lf_rooms::{CommitOutcome, MemoryRoomService, OwnerId, RoomSelect};
//! use std::rc::Rc;
//!
//! let owner = OwnerId::property("42");
//! let service = MemoryRoomService::new().with_rooms(owner.clone(), ["Kitchen"]);
//! let select = RoomSelect::new(owner, Rc::new(service));
//! select.load().await;
//!
//! let outcome = select.confirm("kitchen").await.unwrap();
//! assert_eq!(outcome, CommitOutcome::Existing("Kitchen".to_string()));
//! assert_eq!(select.value(), "Kitchen");
//! # });
//! ```

use crate::error::Result;
use crate::events::{LogRoomEvents, RoomEvent, RoomLog};
use crate::owner::OwnerId;
use crate::resolve::{find_room, normalize_input};
use crate::room::Room;
use crate::service::RoomService;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Where the field is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Uninitialized,
    Loading,
    /// Rooms loaded; suggestions and lookup-or-create are active.
    Ready,
    /// Loading failed; plain text entry only.
    Degraded,
}

/// What a commit did.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// Blank input; nothing changed.
    Ignored,
    /// Input matched a known room; the field now shows its stored name.
    Existing(String),
    /// A new room was created and the list reloaded.
    Created(Room),
    /// Degraded field recorded the trimmed text as-is.
    Freeform(String),
    /// Another load or create was still pending; nothing changed.
    Busy,
}

/// Everything a renderer needs to draw the field.
///
/// Built by [`RoomSelect::view`]; equal views render identical markup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomSelectView {
    pub phase: Phase,
    /// One entry per known room name, in list order. Empty when degraded.
    pub suggestions: Vec<String>,
    /// Current field text, untrimmed.
    pub value: String,
    /// A create (and its reload) is in flight; the input should be disabled.
    pub pending: bool,
    /// Bumped each time a load settles; zero until the first one does.
    pub generation: u64,
    /// Bumped whenever the field should take focus again.
    pub focus_requests: u64,
}

impl RoomSelectView {
    /// Whether the field has anything to draw yet.
    pub fn is_rendered(&self) -> bool {
        self.generation > 0
    }

    pub fn is_degraded(&self) -> bool {
        self.phase == Phase::Degraded
    }
}

#[derive(Debug, Default)]
struct State {
    phase: Phase,
    rooms: Vec<Room>,
    value: String,
    /// Value left in the field by the last settled commit.
    committed: String,
    pending: bool,
    generation: u64,
    focus_requests: u64,
}

impl State {
    fn view(&self) -> RoomSelectView {
        RoomSelectView {
            phase: self.phase,
            suggestions: match self.phase {
                Phase::Degraded => Vec::new(),
                _ => self.rooms.iter().map(|room| room.name.clone()).collect(),
            },
            value: self.value.clone(),
            pending: self.pending,
            generation: self.generation,
            focus_requests: self.focus_requests,
        }
    }
}

enum CommitPlan {
    Busy,
    Freeform(String),
    Existing(String),
    Create(String),
}

type Listener = Box<dyn Fn(&RoomSelectView)>;

/// Room field controller.
///
/// Cheaply cloneable (via `Rc`); clones share state, which suits handing one
/// copy to event handlers and another to form submission code in a
/// single-threaded WASM page. State is never borrowed across an `.await`.
#[derive(Clone)]
pub struct RoomSelect {
    owner: OwnerId,
    service: Rc<dyn RoomService>,
    log: Rc<dyn RoomLog>,
    state: Rc<RefCell<State>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl RoomSelect {
    /// Create an idle controller for `owner`. Nothing is fetched until
    /// [`load`](Self::load) runs.
    pub fn new(owner: OwnerId, service: Rc<dyn RoomService>) -> Self {
        Self {
            owner,
            service,
            log: Rc::new(LogRoomEvents),
            state: Rc::new(RefCell::new(State::default())),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Replace the event sink.
    pub fn with_log(mut self, log: Rc<dyn RoomLog>) -> Self {
        self.log = log;
        self
    }

    /// Call `listener` with a fresh view after every state change.
    pub fn subscribe(&self, listener: impl Fn(&RoomSelectView) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }

    pub fn is_changeover(&self) -> bool {
        self.owner.is_changeover()
    }

    pub fn phase(&self) -> Phase {
        self.state.borrow().phase
    }

    /// Snapshot of the field for rendering.
    pub fn view(&self) -> RoomSelectView {
        self.state.borrow().view()
    }

    /// Trimmed field value, for form submission. Never triggers lookup or
    /// creation.
    pub fn value(&self) -> String {
        self.state.borrow().value.trim().to_string()
    }

    /// The rooms from the last successful load. No network call.
    pub fn rooms(&self) -> Vec<Room> {
        self.state.borrow().rooms.clone()
    }

    /// Whether the field text is exactly what the last commit settled on.
    ///
    /// False while a create is pending and after any typing that has not
    /// been committed yet. Submission code checks this before reading
    /// [`value`](Self::value).
    pub fn is_committed(&self) -> bool {
        let state = self.state.borrow();
        !state.pending && state.value == state.committed
    }

    /// Track text typed into the field before it is committed.
    pub fn set_input(&self, raw: &str) {
        {
            let mut state = self.state.borrow_mut();
            if state.value == raw {
                return;
            }
            state.value = raw.to_string();
        }
        self.notify();
    }

    /// Fetch the room list and settle in `Ready` or `Degraded`.
    ///
    /// Failures are logged and absorbed: the field degrades to plain text
    /// with an empty room list. Once degraded this is a no-op.
    pub async fn load(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.phase == Phase::Degraded {
                return;
            }
            state.phase = Phase::Loading;
        }
        self.log.record(&RoomEvent::LoadStarted {
            owner: self.owner.clone(),
        });
        self.notify();

        let result = self.service.fetch_rooms(&self.owner).await;

        let event = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            match result {
                Ok(rooms) => {
                    let names = rooms.iter().map(|room| room.name.clone()).collect();
                    let count = rooms.len();
                    state.rooms = rooms;
                    state.phase = Phase::Ready;
                    RoomEvent::Loaded { count, names }
                }
                Err(e) => {
                    state.rooms.clear();
                    state.phase = Phase::Degraded;
                    RoomEvent::LoadFailed {
                        error: e.to_string(),
                    }
                }
            }
        };
        self.log.record(&event);
        self.notify();
    }

    /// Commit `raw` as the field's value.
    ///
    /// Blank input is ignored. Otherwise the trimmed text is looked up among
    /// the loaded rooms ignoring case; a match rewrites the field to the stored
    /// name, and a miss creates the room, reloads the list, then shows the
    /// created name.
    ///
    /// A failed create clears the field, asks for focus, and returns the
    /// error so an enclosing form can stop submitting.
    pub async fn confirm(&self, raw: &str) -> Result<CommitOutcome> {
        let Some(input) = normalize_input(raw) else {
            self.log.record(&RoomEvent::CommitIgnored);
            return Ok(CommitOutcome::Ignored);
        };

        let name = match self.plan_commit(raw, input) {
            CommitPlan::Busy => {
                self.log.record(&RoomEvent::CommitBusy {
                    input: raw.to_string(),
                });
                return Ok(CommitOutcome::Busy);
            }
            CommitPlan::Freeform(value) => {
                self.log.record(&RoomEvent::FreeformCommitted {
                    value: value.clone(),
                });
                self.notify();
                return Ok(CommitOutcome::Freeform(value));
            }
            CommitPlan::Existing(canonical) => {
                self.log.record(&RoomEvent::UsedExisting {
                    input: input.to_string(),
                    name: canonical.clone(),
                });
                self.notify();
                return Ok(CommitOutcome::Existing(canonical));
            }
            CommitPlan::Create(name) => name,
        };
        self.log.record(&RoomEvent::Creating { name: name.clone() });
        self.notify();

        match self.service.create_room(&self.owner, &name).await {
            Ok(room) => {
                self.log.record(&RoomEvent::Created { room: room.clone() });
                self.load().await;
                {
                    let mut state = self.state.borrow_mut();
                    state.value = room.name.clone();
                    state.committed = room.name.clone();
                    state.pending = false;
                }
                self.notify();
                Ok(CommitOutcome::Created(room))
            }
            Err(e) => {
                {
                    let mut state = self.state.borrow_mut();
                    state.value.clear();
                    state.committed.clear();
                    state.pending = false;
                    state.focus_requests += 1;
                }
                self.log.record(&RoomEvent::CreateFailed {
                    name,
                    error: e.to_string(),
                });
                self.notify();
                Err(e)
            }
        }
    }

    /// Apply the synchronous part of a commit and say what is left to do.
    fn plan_commit(&self, raw: &str, input: &str) -> CommitPlan {
        let mut state = self.state.borrow_mut();
        if state.pending || matches!(state.phase, Phase::Uninitialized | Phase::Loading) {
            return CommitPlan::Busy;
        }
        if state.phase == Phase::Degraded {
            state.value = input.to_string();
            state.committed = input.to_string();
            return CommitPlan::Freeform(input.to_string());
        }
        let existing = find_room(&state.rooms, input).map(|room| room.name.clone());
        if let Some(canonical) = existing {
            state.value = canonical.clone();
            state.committed = canonical.clone();
            return CommitPlan::Existing(canonical);
        }
        state.value = raw.to_string();
        state.pending = true;
        CommitPlan::Create(input.to_string())
    }

    fn notify(&self) {
        let view = self.view();
        for listener in self.listeners.borrow().iter() {
            listener(&view);
        }
    }
}

impl PartialEq for RoomSelect {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for RoomSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoomSelect")
            .field("owner", &self.owner)
            .field("state", &self.state.borrow())
            .finish_non_exhaustive()
    }
}
