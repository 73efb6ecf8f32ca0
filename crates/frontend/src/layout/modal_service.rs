use leptos::prelude::*;

/// Вопрос, ожидающий подтверждения пользователя
#[derive(Clone)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub on_confirm: Callback<()>,
}

/// Сервис для централизованного управления модальными окнами
#[derive(Clone, Copy)]
pub struct ModalService {
    pending: RwSignal<Option<ConfirmRequest>>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(None),
        }
    }

    /// Ask before a destructive action; `on_confirm` runs only on "OK"
    pub fn confirm(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        on_confirm: Callback<()>,
    ) {
        self.pending.set(Some(ConfirmRequest {
            title: title.into(),
            message: message.into(),
            confirm_label: "削除する".to_string(),
            on_confirm,
        }));
    }

    /// Скрыть модальное окно
    pub fn hide(&self) {
        self.pending.set(None);
    }

    pub fn is_open(&self) -> bool {
        self.pending.with(Option::is_some)
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal() -> ModalService {
    use_context::<ModalService>().expect("ModalService not provided in context")
}

/// Renders the pending confirmation, if any. Mounted once per page tree.
#[component]
pub fn ModalHost() -> impl IntoView {
    let modal = use_modal();

    view! {
        {move || {
            modal.pending.get().map(|request| {
                let on_confirm = request.on_confirm;
                view! {
                    <div class="modal-overlay" on:click=move |_| modal.hide()>
                        <div class="modal-content" on:click=|e| e.stop_propagation()>
                            <div class="modal-header">
                                <h3>{request.title.clone()}</h3>
                            </div>
                            <div class="modal-body">
                                <p>{request.message.clone()}</p>
                            </div>
                            <div class="modal-footer">
                                <button class="button button--secondary" on:click=move |_| modal.hide()>
                                    "キャンセル"
                                </button>
                                <button
                                    class="button button--danger"
                                    on:click=move |_| {
                                        modal.hide();
                                        on_confirm.run(());
                                    }
                                >
                                    {request.confirm_label.clone()}
                                </button>
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}
