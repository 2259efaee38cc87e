//! Flash banner area, replaced wholesale by each action.

use leptos::prelude::*;

use crate::state::flash::{FlashLevel, FlashState};

/// Renders the current flash banner, if any.
#[component]
pub fn FlashMessages() -> impl IntoView {
    let flash = expect_context::<RwSignal<FlashState>>();

    view! {
        <div id="flashMessages" class="flash-messages">
            {move || {
                flash.get().current.map(|f| {
                    let class = match f.level {
                        FlashLevel::Success => "alert alert--success",
                        FlashLevel::Warning => "alert alert--warning",
                        FlashLevel::Error => "alert alert--danger",
                    };
                    view! {
                        <div class=class role="alert">{f.text}</div>
                    }
                })
            }}
        </div>
    }
}
