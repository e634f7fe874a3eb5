use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Orbit, Rocket};
use tokio::sync::{oneshot, Mutex};

/// Connects the liftoff fairing with whoever needs the bound port; the
/// configured port may be 0, in which case the OS picks one.
pub fn create_pair() -> (PortReporter, ListeningPort) {
    let (tx, rx) = oneshot::channel();
    let reporter = PortReporter {
        sender: Mutex::new(Some(tx)),
    };
    let port = ListeningPort {
        state: Mutex::new(PortState::Pending(rx)),
    };
    (reporter, port)
}

enum PortState {
    Pending(oneshot::Receiver<u16>),
    Known(u16),
    Unreported,
}

pub struct ListeningPort {
    state: Mutex<PortState>,
}

impl ListeningPort {
    /// Waits for liftoff. `None` if the server shut down before binding.
    pub async fn get(&self) -> Option<u16> {
        let mut state = self.state.lock().await;
        if let PortState::Pending(rx) = &mut *state {
            let reported = rx.await;
            *state = match reported {
                Ok(port) => PortState::Known(port),
                Err(_) => PortState::Unreported,
            };
        }
        match *state {
            PortState::Known(port) => Some(port),
            _ => None,
        }
    }
}

pub struct PortReporter {
    sender: Mutex<Option<oneshot::Sender<u16>>>,
}

#[rocket::async_trait]
impl Fairing for PortReporter {
    fn info(&self) -> Info {
        Info {
            name: "Port Reporter",
            kind: Kind::Liftoff,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        if let Some(sender) = self.sender.lock().await.take() {
            if sender.send(rocket.config().port).is_err() {
                tracing::debug!("Nobody is waiting for the listening port");
            }
        }
    }
}
