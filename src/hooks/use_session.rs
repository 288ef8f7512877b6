use yew::prelude::*;

use crate::stores::{Session, SessionStore};

/// Hook que refleja el SessionStore en el componente.
/// La suscripción se libera cuando el componente se desmonta.
#[hook]
pub fn use_session() -> Session {
    let session = use_state(SessionStore::snapshot);

    {
        let session = session.clone();
        use_effect_with((), move |_| {
            let id = SessionStore::subscribe(move |snapshot| {
                session.set(snapshot);
            });
            move || SessionStore::unsubscribe(id)
        });
    }

    (*session).clone()
}
