use std::rc::Rc;

use dioxus::prelude::*;
use services::PreferenceService;
use shared_types::Preference;

pub fn use_preferences() -> PreferenceService {
    use_context::<PreferenceService>()
}

/// Reactive view of one preference.
///
/// Reads the stored value at mount, then re-reads whenever any view (or
/// another browser tab) changes the same key. The subscription is dropped
/// together with the calling component. Write through
/// [`PreferenceService::set`]; the returned signal updates itself.
pub fn use_preference<P: Preference>() -> Signal<P::Value> {
    let prefs = use_preferences();
    let value = use_signal({
        let prefs = prefs.clone();
        move || prefs.get::<P>()
    });

    use_hook(move || {
        let reader = prefs.clone();
        Rc::new(prefs.subscribe(move |change| {
            if change.affects(P::KEY) {
                let next = reader.get::<P>();
                let mut value = value;
                if *value.peek() != next {
                    value.set(next);
                }
            }
        }))
    });

    value
}
