use std::cell::Cell;
use std::rc::Rc;

/// Cerrojo de una sola petición en vuelo por control: mientras dura el guard,
/// cualquier otro intento se ignora.
#[derive(Clone, Default)]
pub struct InFlight {
    busy: Rc<Cell<bool>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_begin(&self) -> Option<InFlightGuard> {
        if self.busy.get() {
            return None;
        }
        self.busy.set(true);
        Some(InFlightGuard {
            busy: self.busy.clone(),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

pub struct InFlightGuard {
    busy: Rc<Cell<bool>>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}
