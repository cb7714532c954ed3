/// Whether a modal is open, with optional data while it is.
///
/// ```rust,ignore
/// help: ModalState<()>,
/// role_details: ModalState<RoleId>,
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalState<T> {
    Closed,
    Open(T),
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        ModalState::Closed
    }
}

impl<T> ModalState<T> {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    /// Get the data if open, None otherwise
    pub fn data(&self) -> Option<&T> {
        match self {
            ModalState::Open(data) => Some(data),
            ModalState::Closed => None,
        }
    }

    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    pub fn open_with(&mut self, data: T) {
        *self = ModalState::Open(data);
    }
}

impl ModalState<()> {
    pub fn open_empty(&mut self) {
        *self = ModalState::Open(());
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open_empty();
        }
    }
}
