use futures_util::lock::{Mutex, MutexGuard};
use services::ContactForm;

/// The one form session the schema serves. Resolvers take the lock for the
/// whole operation, so events are applied one at a time.
pub struct FormSession(Mutex<ContactForm>);

impl FormSession {
    pub fn new(form: ContactForm) -> Self {
        FormSession(Mutex::new(form))
    }

    pub async fn lock(&self) -> MutexGuard<'_, ContactForm> {
        self.0.lock().await
    }
}
