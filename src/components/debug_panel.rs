//! Debug panel: a checkbox toggling visibility of the raw response dump.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn DebugPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="debug-panel">
            <label class="debug-panel__toggle">
                <input
                    id="debugModeCheckbox"
                    type="checkbox"
                    prop:checked=move || ui.get().debug_visible
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        ui.update(|u| u.debug_visible = checked);
                    }
                />
                "Show debug output"
            </label>
            <Show when=move || ui.get().debug_visible>
                <pre id="debugOutput" class="debug-panel__output">
                    {move || ui.get().debug_output}
                </pre>
            </Show>
        </div>
    }
}
