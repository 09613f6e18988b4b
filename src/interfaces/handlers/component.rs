use std::ops::{Deref, DerefMut};

use tokio::sync::{Mutex, MutexGuard};
use tracing::warn;

use crate::errors::AppError;

/// Admin component state plus a write slot.
///
/// Writes claim the slot without waiting and are refused while another
/// write holds it. Reads only wait on the state, so they can delay a write
/// but never cause it to be refused.
pub struct Component<T> {
    name: &'static str,
    state: Mutex<T>,
    write_slot: Mutex<()>,
}

/// Exclusive access for a state-changing action.
pub struct WriteGuard<'a, T> {
    state: MutexGuard<'a, T>,
    _slot: MutexGuard<'a, ()>,
}

impl<T> Deref for WriteGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.state
    }
}

impl<T> DerefMut for WriteGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.state
    }
}

impl<T> Component<T> {
    pub fn new(name: &'static str, state: T) -> Self {
        Component {
            name,
            state: Mutex::new(state),
            write_slot: Mutex::new(()),
        }
    }

    pub async fn read(&self) -> MutexGuard<'_, T> {
        self.state.lock().await
    }

    pub async fn write(&self) -> Result<WriteGuard<'_, T>, AppError> {
        let slot = self.write_slot.try_lock().map_err(|_| {
            warn!("Rejected overlapping {} action", self.name);
            AppError::Busy(self.name)
        })?;
        let state = self.state.lock().await;

        Ok(WriteGuard { state, _slot: slot })
    }
}
